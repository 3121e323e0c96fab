use crate::error::Result;
use crate::storage::constants::BLOCK_SIZE;
use futures::AsyncReadExt;
use opendal::Operator;

/// Trait for reading files sequentially in fixed-size blocks.
pub trait BlockReader {
    /// Read every file in order, start to end.
    ///
    /// # Arguments
    /// * `files` - Paths relative to the storage root
    ///
    /// # Returns
    /// * `Result<u64>` - Total number of bytes read across all files
    async fn read_files(&self, files: &[String]) -> Result<u64>;
}

/// Implementation of BlockReader for OpenDAL Operator.
pub struct OpenDalBlockReader {
    operator: Operator,
}

impl OpenDalBlockReader {
    /// Create a new block reader with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }

    /// Read a single file to the end, one block at a time.
    async fn read_file(&self, path: &str) -> Result<u64> {
        let reader = self.operator.reader_with(path).chunk(BLOCK_SIZE).await?;
        let mut stream = reader.into_futures_async_read(..).await?;
        let mut block = [0u8; BLOCK_SIZE];
        let mut size = 0u64;

        loop {
            let bytes_read = stream.read(&mut block).await?;
            if bytes_read == 0 {
                break;
            }
            size += bytes_read as u64;
        }
        Ok(size)
    }
}

impl BlockReader for OpenDalBlockReader {
    async fn read_files(&self, files: &[String]) -> Result<u64> {
        let mut size = 0u64;
        for path in files {
            size += self.read_file(path).await?;
        }
        Ok(size)
    }
}
