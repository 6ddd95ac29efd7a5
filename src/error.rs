//! Pipeline error taxonomy.

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Required columns for analysis are missing: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("No data to visualize")]
    NoDataToVisualize,
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl PipelineError {
    /// Expected conditions that are logged and skipped instead of aborting the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PipelineError::FileNotFound(_)
                | PipelineError::MissingColumns(_)
                | PipelineError::NoDataToVisualize
        )
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
