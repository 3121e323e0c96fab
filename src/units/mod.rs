// Numeric rounding, metric rendering and size parsing
pub mod loground;
pub mod metric;
pub mod parse;

pub use loground::{Rounded, loground};
pub use metric::{MetricFormatter, metric_unit};
pub use parse::{SiSuffix, parse_units};
