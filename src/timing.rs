use crate::error::{InvalidArgumentSnafu, Result};
use snafu::ensure;
use std::future::Future;
use std::time::{Duration, Instant};

/// Wall-clock time spent on a repeated operation, and what its final call returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing<T> {
    pub elapsed: Duration,
    pub value: T,
}

/// Run `operation` `repetitions` times back to back and time the whole loop.
///
/// The clock starts right before the first call and stops right after the last
/// one. Only the value of the final call is kept. The first failing call aborts
/// the loop and its error is returned as is.
///
/// # Arguments
/// * `operation` - Zero-argument operation producing a future
/// * `repetitions` - Number of calls, at least 1
///
/// # Returns
/// * `Result<Timing<T>>` - Total elapsed time and the last returned value
pub async fn measure<F, Fut, T>(mut operation: F, repetitions: usize) -> Result<Timing<T>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    ensure!(
        repetitions >= 1,
        InvalidArgumentSnafu {
            reason: "Require at least one repetition",
        }
    );

    let start = Instant::now();
    let mut value = operation().await?;
    for _ in 1..repetitions {
        value = operation().await?;
    }
    let elapsed = start.elapsed();

    Ok(Timing { elapsed, value })
}
