//! Rental Aggregator Module
//! Groups rentals by equipment, sums the rental amount and keeps the largest totals.

use crate::config::{EQUIPMENT_COLUMN, RENTAL_AMOUNT_COLUMN};
use crate::error::{PipelineError, Result};
use log::{error, info};
use polars::prelude::*;
use std::fmt;

/// Total rental amount for one piece of equipment.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentTotal {
    pub name: String,
    pub total: f64,
}

/// Equipment ordered by descending total rental amount.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TopEquipment {
    pub entries: Vec<EquipmentTotal>,
}

impl TopEquipment {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn totals(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.total).collect()
    }
}

impl fmt::Display for TopEquipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top 10 Rented Farm Equipment:")?;
        writeln!(f, "{EQUIPMENT_COLUMN}")?;

        let totals: Vec<String> = self
            .entries
            .iter()
            .map(|e| format!("{:.1}", e.total))
            .collect();
        let name_width = self
            .entries
            .iter()
            .map(|e| e.name.chars().count())
            .max()
            .unwrap_or(0);
        let total_width = totals.iter().map(String::len).max().unwrap_or(0);
        for (entry, total) in self.entries.iter().zip(&totals) {
            writeln!(f, "{:<name_width$}    {total:>total_width$}", entry.name)?;
        }

        write!(f, "Name: {RENTAL_AMOUNT_COLUMN}, dtype: float64")
    }
}

/// Computes per-equipment aggregates.
pub struct RentalAggregator;

impl RentalAggregator {
    /// Columns the aggregation needs that are absent from `df`.
    pub fn missing_columns(df: &DataFrame) -> Vec<String> {
        [EQUIPMENT_COLUMN, RENTAL_AMOUNT_COLUMN]
            .into_iter()
            .filter(|name| df.get_column_index(name).is_none())
            .map(String::from)
            .collect()
    }

    /// Top `n` equipment by summed rental amount, largest first.
    ///
    /// Rows without an equipment name do not form a group. Equal totals keep
    /// the order in which the equipment first appears.
    pub fn top_equipment(df: &DataFrame, n: usize) -> Result<TopEquipment> {
        info!("Calculating top 10 rental equipment.");

        let missing = Self::missing_columns(df);
        if !missing.is_empty() {
            error!("Required columns for analysis are missing.");
            return Err(PipelineError::MissingColumns(missing));
        }

        let grouped = df
            .clone()
            .lazy()
            .filter(col(EQUIPMENT_COLUMN).is_not_null())
            .group_by_stable([col(EQUIPMENT_COLUMN)])
            .agg([col(RENTAL_AMOUNT_COLUMN).cast(DataType::Float64).sum()])
            .sort(
                [RENTAL_AMOUNT_COLUMN],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_maintain_order(true),
            )
            .limit(n as IdxSize)
            .collect()?;

        let top = Self::collect_totals(&grouped)?;
        info!("Successfully calculated top 10 equipment.");
        Ok(top)
    }

    fn collect_totals(grouped: &DataFrame) -> Result<TopEquipment> {
        let names = grouped.column(EQUIPMENT_COLUMN)?.cast(&DataType::String)?;
        let totals = grouped.column(RENTAL_AMOUNT_COLUMN)?;

        let entries = names
            .str()?
            .into_iter()
            .zip(totals.f64()?)
            .filter_map(|(name, total)| {
                Some(EquipmentTotal {
                    name: name?.to_string(),
                    total: total.unwrap_or(0.0),
                })
            })
            .collect();

        Ok(TopEquipment { entries })
    }
}
