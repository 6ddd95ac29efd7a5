//! Charts module - Static chart rendering

mod renderer;

pub use renderer::{BarChartRenderer, CHART_SIZE, CHART_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL};
