//! Tabular keypoint ingestion.
//!
//! A [`KeypointTable`] owns the raw rows of one sample. The header is
//! resolved to the 18 required `kpt_*` columns exactly once at ingestion
//! (a missing column is fatal); individual cells that are empty or not
//! numeric are kept as `None` so that the extractor can skip the row later
//! without failing the whole sample.
//!
//! Extra columns in the file are ignored. Row order is preserved.

use std::io::Read;
use std::path::Path;

use crate::error::{FeatureError, Result};
use crate::keypoints::{KEYPOINT_COLUMNS, KEYPOINT_FIELDS};

/// One raw table row: the 18 keypoint cells in `kpt_1`..`kpt_18` order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFrame {
    cells: [Option<f64>; KEYPOINT_FIELDS],
}

impl RawFrame {
    /// Build a raw frame from pre-parsed cells.
    #[must_use]
    pub const fn new(cells: [Option<f64>; KEYPOINT_FIELDS]) -> Self {
        Self { cells }
    }

    /// All 18 values, or the name of the first unusable column.
    ///
    /// A row is usable only when every field parsed as a number.
    pub fn values(&self) -> std::result::Result<[f64; KEYPOINT_FIELDS], &'static str> {
        let mut out = [0.0; KEYPOINT_FIELDS];
        for (i, cell) in self.cells.iter().enumerate() {
            match cell {
                Some(v) => out[i] = *v,
                None => return Err(KEYPOINT_COLUMNS[i]),
            }
        }
        Ok(out)
    }
}

/// The full table of keypoint rows for one sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeypointTable {
    frames: Vec<RawFrame>,
}

impl KeypointTable {
    /// Build a table directly from raw frames.
    #[must_use]
    pub fn from_frames(frames: Vec<RawFrame>) -> Self {
        Self { frames }
    }

    /// Build a table from fully numeric rows.
    #[must_use]
    pub fn from_rows(rows: Vec<[f64; KEYPOINT_FIELDS]>) -> Self {
        let frames = rows
            .into_iter()
            .map(|row| {
                let mut cells = [None; KEYPOINT_FIELDS];
                for (cell, value) in cells.iter_mut().zip(row.iter()) {
                    *cell = Some(*value);
                }
                RawFrame { cells }
            })
            .collect();
        Self { frames }
    }

    /// Read a table from CSV text.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::MissingColumn`] if a required `kpt_*` column
    /// is absent from the header, or [`FeatureError::Csv`] if the reader
    /// fails.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);
        Self::from_csv(rdr)
    }

    /// Read a table from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Same as [`KeypointTable::from_csv_reader`], plus I/O failures opening
    /// the file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path.as_ref())?;
        Self::from_csv(rdr)
    }

    fn from_csv<R: Read>(mut rdr: csv::Reader<R>) -> Result<Self> {
        let headers = rdr.headers()?.clone();

        // Resolve the schema once; per-cell parse failures stay recoverable.
        let mut indices = [0usize; KEYPOINT_FIELDS];
        for (slot, name) in indices.iter_mut().zip(KEYPOINT_COLUMNS.iter()) {
            *slot = headers
                .iter()
                .position(|h| h == *name)
                .ok_or_else(|| FeatureError::missing_column(*name))?;
        }

        let mut frames = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let mut cells = [None; KEYPOINT_FIELDS];
            for (cell, &idx) in cells.iter_mut().zip(indices.iter()) {
                *cell = record.get(idx).and_then(|s| s.trim().parse::<f64>().ok());
            }
            frames.push(RawFrame { cells });
        }

        Ok(Self { frames })
    }

    /// Rows in table order.
    #[must_use]
    pub fn frames(&self) -> &[RawFrame] {
        &self.frames
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
