use crate::error::{InvalidArgumentSnafu, Result};
use crate::units::MetricFormatter;
use crate::units::loground::{MAX_SIGFIGS, ZERO_CLAMP_POWER};
use crate::units::metric::{DEFAULT_BASE, DEFAULT_SIGFIGS};
use snafu::{OptionExt, ensure};
use std::env;
use std::str::FromStr;

pub const UNIT_BASE_ENV: &str = "READBENCH_UNIT_BASE";
pub const SIGFIGS_ENV: &str = "READBENCH_SIGFIGS";

/// How benchmark throughput is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportConfig {
    pub base: f64,
    pub sigfigs: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            sigfigs: DEFAULT_SIGFIGS,
        }
    }
}

impl ReportConfig {
    pub fn formatter(&self) -> MetricFormatter {
        MetricFormatter::new(self.base, self.sigfigs)
    }

    fn validate(self) -> Result<Self> {
        ensure!(
            self.base.is_finite() && self.base >= 2.0,
            InvalidArgumentSnafu {
                reason: format!("{UNIT_BASE_ENV} must be a number >= 2, got {}", self.base),
            }
        );
        ensure!(
            (1..=MAX_SIGFIGS).contains(&self.sigfigs),
            InvalidArgumentSnafu {
                reason: format!(
                    "{SIGFIGS_ENV} must be between 1 and {MAX_SIGFIGS}, got {}",
                    self.sigfigs
                ),
            }
        );
        // Rounding scales by up to base^(sigfigs - 1 + ZERO_CLAMP_POWER)
        ensure!(
            self.base
                .powi(self.sigfigs as i32 - 1 + ZERO_CLAMP_POWER)
                .is_finite(),
            InvalidArgumentSnafu {
                reason: format!(
                    "{SIGFIGS_ENV}={} is too many figures for {UNIT_BASE_ENV}={}",
                    self.sigfigs, self.base
                ),
            }
        );
        Ok(self)
    }
}

// Helper function to parse an optional environment variable.
fn parse_env_var<T: FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().ok().map(Some).context(InvalidArgumentSnafu {
            reason: format!("Cannot parse {key}={raw}"),
        }),
        Err(_) => Ok(None),
    }
}

/// Load report configuration from environment variables
pub fn load_report_config() -> Result<ReportConfig> {
    let defaults = ReportConfig::default();
    let base = parse_env_var(UNIT_BASE_ENV)?.unwrap_or(defaults.base);
    let sigfigs = parse_env_var(SIGFIGS_ENV)?.unwrap_or(defaults.sigfigs);

    ReportConfig { base, sigfigs }.validate()
}
