//! Report Pipeline
//! Sequences load -> clean -> aggregate -> print -> render for one run.

use crate::charts::BarChartRenderer;
use crate::config::PipelineConfig;
use crate::data::{DataCleaner, DataLoader};
use crate::error::Result;
use crate::logging;
use crate::stats::{RentalAggregator, TopEquipment};
use log::info;
use std::path::PathBuf;

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// `None` when the input file was not found.
    pub rows_loaded: Option<usize>,
    pub rows_cleaned: Option<usize>,
    pub top: Option<TopEquipment>,
    pub chart: Option<PathBuf>,
}

pub struct Pipeline {
    config: PipelineConfig,
    loader: DataLoader,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let loader = DataLoader::new(config.chunk_size);
        Self { config, loader }
    }

    /// Create the log directory and install the file logger.
    pub fn setup(&self) -> Result<()> {
        logging::init(&self.config.log)
    }

    /// Run every stage once.
    ///
    /// Missing input, missing columns and absent chart data are logged and
    /// reflected in the summary. Any other failure is returned.
    pub fn run(&self) -> Result<RunSummary> {
        info!("Starting data processing pipeline.");
        let mut summary = RunSummary::default();

        // A missing file skips every later stage, rendering included
        let raw = match self.loader.load_csv(&self.config.input_path) {
            Ok(df) => Some(df),
            Err(e) if e.is_recoverable() => None,
            Err(e) => return Err(e),
        };

        if let Some(raw) = raw {
            summary.rows_loaded = Some(raw.height());

            let cleaned = DataCleaner::clean(&raw)?;
            summary.rows_cleaned = Some(cleaned.height());

            summary.top = match RentalAggregator::top_equipment(&cleaned, self.config.top_n) {
                Ok(top) => Some(top),
                Err(e) if e.is_recoverable() => None,
                Err(e) => return Err(e),
            };

            if let Some(top) = &summary.top {
                println!("{top}");
            }

            summary.chart =
                match BarChartRenderer::render(summary.top.as_ref(), &self.config.output_path) {
                    Ok(path) => Some(path),
                    Err(e) if e.is_recoverable() => None,
                    Err(e) => return Err(e),
                };
        }

        info!("Data processing pipeline finished.");
        Ok(summary)
    }
}
