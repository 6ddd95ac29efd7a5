//! Data Cleaner Module
//! Handles missing values: mean imputation for the rental amount, then row drops.

use crate::config::RENTAL_AMOUNT_COLUMN;
use log::info;
use polars::prelude::*;

/// Handles data cleaning operations.
pub struct DataCleaner;

impl DataCleaner {
    /// Return a cleaned copy of `df`.
    ///
    /// Nulls in `rental_amount` are replaced by the mean of its non-null
    /// entries, computed before any fill. Rows still holding a null in any
    /// column are dropped afterwards.
    pub fn clean(df: &DataFrame) -> PolarsResult<DataFrame> {
        info!("Starting data cleaning.");

        let mut cleaned = match Self::rental_amount_mean(df)? {
            Some(mean) => {
                let filled = df
                    .clone()
                    .lazy()
                    .with_column(
                        col(RENTAL_AMOUNT_COLUMN)
                            .cast(DataType::Float64)
                            .fill_null(lit(mean)),
                    )
                    .collect()?;
                info!("Filled missing rental_amount with the mean.");
                filled
            }
            None => df.clone(),
        };

        if Self::has_nulls(&cleaned) {
            cleaned = cleaned.filter(&Self::complete_rows(&cleaned))?;
            info!("Dropped rows with missing values.");
        }

        info!("Data cleaning complete.");
        Ok(cleaned)
    }

    /// Mean used for imputation, or `None` when there is nothing to impute.
    ///
    /// Also `None` when every entry is null: the mean is undefined and the
    /// drop pass removes those rows.
    pub fn rental_amount_mean(df: &DataFrame) -> PolarsResult<Option<f64>> {
        let Ok(amounts) = df.column(RENTAL_AMOUNT_COLUMN) else {
            return Ok(None);
        };
        if amounts.null_count() == 0 {
            return Ok(None);
        }

        let amounts = amounts.cast(&DataType::Float64)?;
        Ok(amounts.as_materialized_series().mean())
    }

    /// Row mask that is true where no column holds a null.
    fn complete_rows(df: &DataFrame) -> BooleanChunked {
        df.get_columns().iter().fold(
            BooleanChunked::full("complete".into(), true, df.height()),
            |mask, column| &mask & &column.is_not_null(),
        )
    }

    /// Whether any cell in the table is null.
    pub fn has_nulls(df: &DataFrame) -> bool {
        df.get_columns().iter().any(|c| c.null_count() > 0)
    }
}
