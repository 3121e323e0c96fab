use crate::error::Result;
use crate::storage::operations::list::{Lister, OpenDalLister};
use crate::storage::operations::read::{BlockReader, OpenDalBlockReader};
use crate::storage::utils::size::{format_rate, throughput};
use crate::timing::measure;
use crate::units::MetricFormatter;
use opendal::Operator;
use serde::{Serialize, Serializer};
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one benchmark run.
///
/// - `total_bytes`: Bytes read by the final repetition
/// - `elapsed`: Wall-clock time of all repetitions together
/// - `throughput`: `total_bytes / elapsed` in bytes per second
/// - `message`: The one-line human summary
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub root: PathBuf,
    pub file_count: usize,
    pub total_bytes: u64,
    pub repetitions: usize,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    pub throughput: f64,
    pub message: String,
}

fn serialize_secs<S: Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Trait for measuring read throughput of a directory.
pub trait Benchmarker {
    /// Time full reads of the selected files.
    ///
    /// # Arguments
    /// * `max_files` - Read only the first `max_files` files in path order, `0` reads all
    /// * `repetitions` - How many times the whole file set is read
    ///
    /// # Returns
    /// * `Result<BenchmarkReport>` - Timing, byte count and rendered summary
    async fn run(&self, max_files: usize, repetitions: usize) -> Result<BenchmarkReport>;
}

/// Implementation of Benchmarker for OpenDAL Operator.
pub struct OpenDalBenchmarker {
    operator: Operator,
    root: PathBuf,
    formatter: MetricFormatter,
}

impl OpenDalBenchmarker {
    /// Create a new benchmarker over `operator`, labelling reports with `root`.
    pub fn new(operator: Operator, root: PathBuf, formatter: MetricFormatter) -> Self {
        Self {
            operator,
            root,
            formatter,
        }
    }
}

impl Benchmarker for OpenDalBenchmarker {
    async fn run(&self, max_files: usize, repetitions: usize) -> Result<BenchmarkReport> {
        let files = OpenDalLister::new(self.operator.clone())
            .list_files(max_files)
            .await?;
        let reader = OpenDalBlockReader::new(self.operator.clone());

        let (reader, selected) = (&reader, files.as_slice());
        let timing = measure(move || reader.read_files(selected), repetitions).await?;

        let total_bytes = timing.value;
        let elapsed_secs = timing.elapsed.as_secs_f64();
        let bytes_per_sec = throughput(total_bytes, elapsed_secs);
        let message = format!(
            "Read {total_bytes} bytes from {} files in {elapsed_secs}s = {}",
            files.len(),
            format_rate(bytes_per_sec, &self.formatter)?
        );

        Ok(BenchmarkReport {
            root: self.root.clone(),
            file_count: files.len(),
            total_bytes,
            repetitions,
            elapsed: timing.elapsed,
            throughput: bytes_per_sec,
            message,
        })
    }
}
