//! Pipeline Configuration
//! Input/output locations, chunking and logging settings for one run.

use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Equipment identifier column.
pub const EQUIPMENT_COLUMN: &str = "farm_equipment_name";
/// Numeric measure summed per equipment.
pub const RENTAL_AMOUNT_COLUMN: &str = "rental_amount";

pub const DEFAULT_INPUT_PATH: &str = "rental_data.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "top_10_equipment.png";
pub const DEFAULT_LOG_PATH: &str = "logs/data_processing.log";
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;
pub const DEFAULT_TOP_N: usize = 10;

/// Log file settings.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub path: PathBuf,
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_PATH),
            level: LevelFilter::Info,
        }
    }
}

/// Settings for a single pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub chunk_size: usize,
    pub top_n: usize,
    pub log: LogConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            chunk_size: DEFAULT_CHUNK_SIZE,
            top_n: DEFAULT_TOP_N,
            log: LogConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_input_path(mut self, path: impl AsRef<Path>) -> Self {
        self.input_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }

    /// Rows per parse chunk. Zero is bumped to one.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn with_log_path(mut self, path: impl AsRef<Path>) -> Self {
        self.log.path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log.level = level;
        self
    }
}
