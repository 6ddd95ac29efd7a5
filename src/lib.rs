//! Rental Report - Farm equipment rental analysis
//!
//! Loads rental transactions from CSV, imputes and drops missing values, ranks
//! equipment by total rental amount and renders the top 10 as a bar chart.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod stats;

pub use config::{LogConfig, PipelineConfig};
pub use error::{PipelineError, Result};
pub use pipeline::{Pipeline, RunSummary};
