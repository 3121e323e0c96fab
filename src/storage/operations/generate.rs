use crate::error::Result;
use crate::storage::constants::{BLOCK_SIZE, TEST_FILE_EXTENSION};
use crate::storage::utils::progress::ProgressReporter;
use opendal::{Buffer, Operator};
use serde::Serialize;

/// What a generator run wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerateSummary {
    pub file_count: u64,
    pub file_size: u64,
    pub total_bytes: u64,
}

/// Trait for writing synthetic test data.
pub trait Generator {
    /// Write `file_count` files of `file_size` zero bytes each.
    ///
    /// Files are named `1.txt`, `2.txt`, ... under the storage root and
    /// existing files with those names are overwritten.
    ///
    /// # Arguments
    /// * `file_count` - Number of files to write
    /// * `file_size` - Size of every file in bytes
    /// * `progress` - Receives the number of files written so far
    ///
    /// # Returns
    /// * `Result<GenerateSummary>` - Counts of what was written
    async fn generate(
        &self,
        file_count: u64,
        file_size: u64,
        progress: &dyn ProgressReporter,
    ) -> Result<GenerateSummary>;
}

/// Implementation of Generator for OpenDAL Operator.
pub struct OpenDalGenerator {
    operator: Operator,
}

impl OpenDalGenerator {
    /// Create a new generator with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }

    /// Write one file as full blocks followed by a final partial block.
    async fn write_zero_file(&self, path: &str, size: u64, block: &Buffer) -> Result<()> {
        let mut writer = self.operator.writer(path).await?;
        for _ in 0..size / BLOCK_SIZE as u64 {
            writer.write(block.clone()).await?;
        }
        let tail = (size % BLOCK_SIZE as u64) as usize;
        if tail > 0 {
            writer.write(vec![0u8; tail]).await?;
        }
        writer.close().await?;
        Ok(())
    }
}

/// Name of the `index`-th generated file, counting from 1.
pub fn test_file_name(index: u64) -> String {
    format!("{index}.{TEST_FILE_EXTENSION}")
}

impl Generator for OpenDalGenerator {
    async fn generate(
        &self,
        file_count: u64,
        file_size: u64,
        progress: &dyn ProgressReporter,
    ) -> Result<GenerateSummary> {
        let block = Buffer::from(vec![0u8; BLOCK_SIZE]);

        for index in 1..=file_count {
            self.write_zero_file(&test_file_name(index), file_size, &block)
                .await?;
            progress.advance(index);
        }
        progress.finish();

        Ok(GenerateSummary {
            file_count,
            file_size,
            total_bytes: file_count.saturating_mul(file_size),
        })
    }
}
