use crate::error::{InvalidArgumentSnafu, Result};
use snafu::OptionExt;

/// SI magnitude suffixes accepted after a size or count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiSuffix {
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
}

impl SiSuffix {
    /// Look up a suffix letter, case-insensitively.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'K' => Some(Self::Kilo),
            'M' => Some(Self::Mega),
            'G' => Some(Self::Giga),
            'T' => Some(Self::Tera),
            'P' => Some(Self::Peta),
            _ => None,
        }
    }

    pub fn multiplier(self) -> u64 {
        match self {
            Self::Kilo => 1_000,
            Self::Mega => 1_000_000,
            Self::Giga => 1_000_000_000,
            Self::Tera => 1_000_000_000_000,
            Self::Peta => 1_000_000_000_000_000,
        }
    }
}

/// Parse a decimal integer with an optional SI suffix, e.g. `10K` or `3m`.
pub fn parse_units(s: &str) -> Result<u64> {
    let trimmed = s.trim();
    let (digits, multiplier) = match trimmed.chars().last().and_then(SiSuffix::from_char) {
        Some(suffix) => (&trimmed[..trimmed.len() - 1], suffix.multiplier()),
        None => (trimmed, 1),
    };

    let value: u64 = Some(digits)
        .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|d| d.parse().ok())
        .context(InvalidArgumentSnafu {
            reason: format!("Cannot parse '{s}' as a number with an optional K/M/G/T/P suffix"),
        })?;

    value.checked_mul(multiplier).context(InvalidArgumentSnafu {
        reason: format!("'{s}' is too large"),
    })
}

/// `clap` value parser adapter for [`parse_units`].
pub fn parse_units_arg(s: &str) -> std::result::Result<u64, String> {
    parse_units(s).map_err(|e| e.to_string())
}
