//! Rental Report - batch entry point
//!
//! Reads `rental_data.csv`, writes `top_10_equipment.png` and logs to
//! `logs/data_processing.log`, all relative to the working directory.

use rental_report::{Pipeline, PipelineConfig};

fn main() -> anyhow::Result<()> {
    let pipeline = Pipeline::new(PipelineConfig::default());
    pipeline.setup()?;
    pipeline.run()?;
    Ok(())
}
