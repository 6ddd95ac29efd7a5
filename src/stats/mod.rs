//! Stats module - per-equipment rental aggregation

mod aggregator;

pub use aggregator::{EquipmentTotal, RentalAggregator, TopEquipment};
