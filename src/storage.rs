use crate::error::{DirectoryNotFoundSnafu, InvalidArgumentSnafu, Result};
use crate::units::MetricFormatter;
use opendal::Operator;
use snafu::ensure;
use std::path::{Path, PathBuf};

pub mod constants;
pub mod operations;
pub mod utils;

use self::operations::bench::OpenDalBenchmarker;
use self::operations::generate::OpenDalGenerator;
use self::operations::list::OpenDalLister;
use self::operations::read::OpenDalBlockReader;
use self::operations::{
    BenchmarkReport, Benchmarker, BlockReader, GenerateSummary, Generator, Lister,
};
use self::utils::progress::ProgressReporter;

/// Local directory client using the OpenDAL `fs` service
#[derive(Clone)]
pub struct StorageClient {
    operator: Operator,
    root: PathBuf,
}

impl StorageClient {
    /// Open a client over a directory that must already exist.
    pub fn open_existing(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        ensure!(
            root.is_dir(),
            DirectoryNotFoundSnafu {
                path: root.to_path_buf()
            }
        );
        Self::new(root)
    }

    /// Open a client over a directory, creating it and its parents if absent.
    pub async fn create(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        tokio::fs::create_dir_all(root).await?;
        Self::new(root)
    }

    fn new(root: &Path) -> Result<Self> {
        let operator = Self::build_operator(root)?;
        Ok(Self {
            operator,
            root: root.to_path_buf(),
        })
    }

    fn build_operator(root: &Path) -> Result<Operator> {
        let builder = opendal::services::Fs::default().root(&root.to_string_lossy());
        Ok(Operator::new(builder)?.finish())
    }

    pub async fn list_files(&self, max_files: usize) -> Result<Vec<String>> {
        log::debug!(
            "list_files root={} max_files={}",
            self.root.display(),
            max_files
        );
        OpenDalLister::new(self.operator.clone())
            .list_files(max_files)
            .await
    }

    pub async fn read_files(&self, files: &[String]) -> Result<u64> {
        log::debug!(
            "read_files root={} files_count={}",
            self.root.display(),
            files.len()
        );
        OpenDalBlockReader::new(self.operator.clone())
            .read_files(files)
            .await
    }

    pub async fn benchmark(
        &self,
        max_files: usize,
        repetitions: usize,
        formatter: MetricFormatter,
    ) -> Result<BenchmarkReport> {
        log::debug!(
            "benchmark root={} max_files={} repetitions={} base={} sigfigs={}",
            self.root.display(),
            max_files,
            repetitions,
            formatter.base(),
            formatter.sigfigs()
        );
        ensure!(
            repetitions >= 1,
            InvalidArgumentSnafu {
                reason: "Require at least one repetition",
            }
        );

        let benchmarker =
            OpenDalBenchmarker::new(self.operator.clone(), self.root.clone(), formatter);
        let report = benchmarker.run(max_files, repetitions).await?;

        log::info!(
            "benchmark root={} files={} bytes={} elapsed={:?}",
            self.root.display(),
            report.file_count,
            report.total_bytes,
            report.elapsed
        );
        Ok(report)
    }

    pub async fn generate(
        &self,
        file_count: u64,
        file_size: u64,
        progress: &dyn ProgressReporter,
    ) -> Result<GenerateSummary> {
        log::debug!(
            "generate root={} file_count={} file_size={}",
            self.root.display(),
            file_count,
            file_size
        );
        let generator = OpenDalGenerator::new(self.operator.clone());
        let summary = generator.generate(file_count, file_size, progress).await?;

        log::info!(
            "generated {} files of {} bytes in {}",
            summary.file_count,
            summary.file_size,
            self.root.display()
        );
        Ok(summary)
    }
}
