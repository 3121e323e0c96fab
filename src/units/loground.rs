use crate::error::{InternalSnafu, InvalidArgumentSnafu, Result};
use snafu::ensure;

/// Magnitudes at or below `base^-ZERO_CLAMP_POWER` are treated as zero.
pub const ZERO_CLAMP_POWER: i32 = 8;

/// More figures than an f64 mantissa carries are rejected.
pub const MAX_SIGFIGS: u32 = 17;

/// A number expressed as `mantissa * base^exponent`.
///
/// Produced by [`loground`]. Apart from the zero value `(0, 0)`, the mantissa
/// always satisfies `1 <= |mantissa| < base`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rounded {
    pub mantissa: f64,
    pub exponent: i32,
}

impl Rounded {
    pub const ZERO: Rounded = Rounded {
        mantissa: 0.0,
        exponent: 0,
    };

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0.0
    }

    /// Rebuild the approximated value `mantissa * base^exponent`.
    pub fn value(&self, base: f64) -> f64 {
        scale(self.mantissa, base, self.exponent)
    }
}

/// Round `x` on a logarithmic scale of `base`, keeping `sigfigs` significant figures.
///
/// # Arguments
/// * `x` - Input number, signed and possibly fractional
/// * `base` - Base of the log scale, 1000 gives thousands, millions, billions...
/// * `sigfigs` - Number of significant figures kept in the mantissa
///
/// # Returns
/// * `Result<Rounded>` - The mantissa/exponent pair, or `InvalidArgument`
pub fn loground(x: f64, base: f64, sigfigs: u32) -> Result<Rounded> {
    ensure!(
        sigfigs >= 1,
        InvalidArgumentSnafu {
            reason: "Require strictly positive sigfigs",
        }
    );
    ensure!(
        sigfigs <= MAX_SIGFIGS,
        InvalidArgumentSnafu {
            reason: format!("At most {MAX_SIGFIGS} sigfigs are supported, got {sigfigs}"),
        }
    );
    ensure!(
        base.is_finite() && base >= 2.0,
        InvalidArgumentSnafu {
            reason: format!("Log base must be a finite number >= 2, got {base}"),
        }
    );
    ensure!(
        x.is_finite(),
        InvalidArgumentSnafu {
            reason: format!("Cannot round non-finite value {x}"),
        }
    );

    if x.abs() <= base.powi(-ZERO_CLAMP_POWER) {
        return Ok(Rounded::ZERO);
    }

    let mut exponent = log_base(x.abs(), base).floor() as i32;
    let digits = sigfigs as i32 - 1;
    let scaled = scale(x, base, digits - exponent);
    ensure!(
        scaled.is_finite() && base.powi(digits).is_finite(),
        InvalidArgumentSnafu {
            reason: format!("{sigfigs} sigfigs overflow on log base {base}"),
        }
    );
    let mut mantissa = scale(scaled.round(), base, -digits);

    // floor() on the exponent and round() on the mantissa can disagree, e.g. 999.9
    // at one figure rounds up to a full `base`; carry it into the exponent.
    if mantissa.abs() >= base {
        mantissa = (mantissa / base).trunc();
        exponent += 1;
    }

    ensure!(
        (1.0..base).contains(&mantissa.abs()),
        InternalSnafu {
            message: format!(
                "mantissa {mantissa} out of [1, {base}) after rounding {x} to {sigfigs} figures"
            ),
        }
    );

    Ok(Rounded { mantissa, exponent })
}

/// Logarithm of `x` in `base`, choosing the log function for numeric stability.
fn log_base(x: f64, base: f64) -> f64 {
    if base % 10.0 == 0.0 {
        x.log10() / base.log10()
    } else {
        x.log2() / base.log2()
    }
}

/// Compute `x * base^power`, dividing by the positive power when `power < 0`.
fn scale(x: f64, base: f64, power: i32) -> f64 {
    if power >= 0 {
        x * base.powi(power)
    } else {
        x / base.powi(-power)
    }
}
