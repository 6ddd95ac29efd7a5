//! CSV Data Loader Module
//! Reads the rental CSV in bounded chunks into a single Polars DataFrame.

use crate::config::DEFAULT_CHUNK_SIZE;
use crate::error::{PipelineError, Result};
use log::{error, info};
use polars::prelude::*;
use std::path::Path;

/// Handles CSV file loading with Polars.
pub struct DataLoader {
    chunk_size: usize,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl DataLoader {
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Load a CSV file, parsing `chunk_size` rows at a time.
    ///
    /// Chunks are concatenated in file order. A path that does not exist is
    /// logged and reported as [`PipelineError::FileNotFound`]; parse failures
    /// propagate as [`PipelineError::Polars`].
    pub fn load_csv(&self, file_path: &Path) -> Result<DataFrame> {
        info!("Reading CSV file: {}", file_path.display());

        if !file_path.is_file() {
            error!("File not found: {}", file_path.display());
            return Err(PipelineError::FileNotFound(file_path.to_path_buf()));
        }

        // Infer over the whole file so a late "12.5" does not break an Int64 guess
        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_chunk_size(self.chunk_size)
            .with_infer_schema_length(None)
            .finish()?
            .collect()?;

        info!("Successfully read CSV file.");
        Ok(df)
    }
}
