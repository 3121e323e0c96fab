use crate::error::{OutOfRangeSnafu, Result};
use crate::units::loground::loground;
use snafu::ensure;

pub const DEFAULT_BASE: f64 = 1000.0;
pub const DEFAULT_SIGFIGS: u32 = 1;

/// Largest exponent magnitude with a prefix symbol.
pub const MAX_PREFIX_EXPONENT: i32 = 8;

/// Metric prefixes from `base^-8` to `base^8`; index 8 is the unprefixed slot.
const PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Renders numbers compactly with metric prefixes (k, M, G, ... and m, µ, n, ...).
///
/// The prefix ladder is the same whatever the base: with base 1024 the first
/// power is still written `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricFormatter {
    base: f64,
    sigfigs: u32,
}

impl Default for MetricFormatter {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            sigfigs: DEFAULT_SIGFIGS,
        }
    }
}

impl MetricFormatter {
    pub fn new(base: f64, sigfigs: u32) -> Self {
        Self { base, sigfigs }
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn sigfigs(&self) -> u32 {
        self.sigfigs
    }

    pub fn format(&self, x: f64) -> Result<String> {
        metric_unit(x, self.base, self.sigfigs)
    }
}

/// Convert `x` to a compact string such as `1.5k` or `-20m`.
///
/// Fails with `OutOfRange` when the rounded exponent has no prefix symbol.
pub fn metric_unit(x: f64, base: f64, sigfigs: u32) -> Result<String> {
    let rounded = loground(x, base, sigfigs)?;
    let exponent = rounded.exponent;

    ensure!(
        exponent.abs() <= MAX_PREFIX_EXPONENT,
        OutOfRangeSnafu { base, exponent }
    );

    let prefix = match exponent {
        0 => "",
        e => PREFIXES[(e + MAX_PREFIX_EXPONENT) as usize],
    };
    let decimals = (sigfigs - 1) as usize;
    Ok(format!("{:.*}{prefix}", decimals, rounded.mantissa))
}
