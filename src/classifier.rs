//! Severity classification adapter.
//!
//! The extraction pipeline ends at a fixed-order 6D feature vector; this
//! module defines the boundary that consumes it. [`SeverityClassifier`] is
//! the contract, [`DenseNetwork`] a minimal feed-forward implementation
//! whose weights come from the caller. Training, parameter persistence, and
//! device selection all live outside this crate.

use nalgebra::{DMatrix, DVector};

use crate::error::{FeatureError, Result};
use crate::features::FEATURE_DIM;

/// Number of severity classes.
pub const NUM_CLASSES: usize = 4;

/// Human-readable severity grade, one per output class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Class 0: no impairment detected.
    Normal,
    /// Class 1: mild impairment.
    Mild,
    /// Class 2: moderate impairment.
    Moderate,
    /// Class 3: severe impairment.
    Severe,
}

impl Severity {
    /// Severity for a predicted class index, `None` if out of range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Normal),
            1 => Some(Self::Mild),
            2 => Some(Self::Moderate),
            3 => Some(Self::Severe),
            _ => None,
        }
    }

    /// Label string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

/// Contract between the extraction pipeline and a trained classifier.
pub trait SeverityClassifier {
    /// Predicted class index in `[0, num_classes())`.
    ///
    /// # Errors
    ///
    /// Implementations may fail on internal inconsistencies; the reference
    /// [`DenseNetwork`] is infallible after construction but the boundary
    /// keeps the error channel open for external backends.
    fn classify(&self, features: &[f64; FEATURE_DIM]) -> Result<usize>;

    /// Number of output classes.
    fn num_classes(&self) -> usize;
}

/// One dense layer: `y = W·x + b`.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseLayer {
    weights: DMatrix<f64>,
    biases: DVector<f64>,
}

impl DenseLayer {
    /// Build a layer from a weight matrix and bias vector.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::LayerShapeMismatch`] if the bias length does
    /// not equal the weight row count.
    pub fn new(weights: DMatrix<f64>, biases: DVector<f64>) -> Result<Self> {
        if weights.nrows() != biases.len() {
            return Err(FeatureError::layer_shape_mismatch(
                weights.nrows(),
                biases.len(),
            ));
        }
        Ok(Self { weights, biases })
    }

    /// Number of inputs this layer accepts.
    #[must_use]
    pub fn input_dim(&self) -> usize {
        self.weights.ncols()
    }

    /// Number of outputs this layer produces.
    #[must_use]
    pub fn output_dim(&self) -> usize {
        self.weights.nrows()
    }
}

/// Minimal feed-forward network: ReLU hidden layers, arg-max output.
///
/// The network holds caller-supplied parameters only; it performs inference
/// and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseNetwork {
    layers: Vec<DenseLayer>,
}

impl DenseNetwork {
    /// Build a network from an ordered layer stack.
    ///
    /// The first layer must accept [`FEATURE_DIM`] inputs and each layer's
    /// input width must match its predecessor's output width.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::InvalidConfig`] for an empty stack and
    /// [`FeatureError::LayerShapeMismatch`] for a broken dimension chain.
    pub fn new(layers: Vec<DenseLayer>) -> Result<Self> {
        if layers.is_empty() {
            return Err(FeatureError::invalid_config(
                "network needs at least one layer",
            ));
        }

        let mut expected = FEATURE_DIM;
        for layer in &layers {
            if layer.input_dim() != expected {
                return Err(FeatureError::layer_shape_mismatch(
                    expected,
                    layer.input_dim(),
                ));
            }
            expected = layer.output_dim();
        }

        Ok(Self { layers })
    }

    /// Forward pass: ReLU on hidden layers, raw scores from the last layer.
    #[must_use]
    pub fn forward(&self, features: &[f64; FEATURE_DIM]) -> DVector<f64> {
        let mut activation = DVector::from_row_slice(features);
        let last = self.layers.len() - 1;

        for (i, layer) in self.layers.iter().enumerate() {
            activation = &layer.weights * &activation + &layer.biases;
            if i != last {
                activation.apply(|v| *v = v.max(0.0));
            }
        }

        activation
    }
}

impl SeverityClassifier for DenseNetwork {
    fn classify(&self, features: &[f64; FEATURE_DIM]) -> Result<usize> {
        let scores = self.forward(features);

        // Arg-max; ties resolve to the lowest index for determinism.
        let mut best = 0;
        for (i, &score) in scores.iter().enumerate() {
            if score > scores[best] {
                best = i;
            }
        }
        Ok(best)
    }

    fn num_classes(&self) -> usize {
        self.layers.last().map_or(0, DenseLayer::output_dim)
    }
}
