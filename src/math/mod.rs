//! Mathematical utilities for angle feature extraction.
//!
//! This module provides:
//! - [`geometry`]: planar angle primitives (atan2 tilt, included angle)
//! - [`stats`]: mean and population standard deviation

pub mod geometry;
pub mod stats;

pub use geometry::{head_torso_angle, included_angle, midpoint};
pub use stats::{mean, population_std};
