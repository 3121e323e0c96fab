use crate::error::Result;
use opendal::Operator;

/// Trait for selecting the files a benchmark reads.
pub trait Lister {
    /// List regular files directly under the storage root, sorted by path.
    ///
    /// # Arguments
    /// * `max_files` - Keep only the first `max_files` paths, `0` keeps all
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - Paths relative to the root
    async fn list_files(&self, max_files: usize) -> Result<Vec<String>>;
}

/// Implementation of Lister for OpenDAL Operator.
pub struct OpenDalLister {
    operator: Operator,
}

impl OpenDalLister {
    /// Create a new lister with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Lister for OpenDalLister {
    async fn list_files(&self, max_files: usize) -> Result<Vec<String>> {
        let entries = self.operator.list("/").await?;

        let mut files: Vec<String> = entries
            .into_iter()
            .filter(|entry| entry.metadata().mode().is_file())
            .map(|entry| entry.path().to_string())
            .collect();
        files.sort();

        if max_files > 0 {
            files.truncate(max_files);
        }
        Ok(files)
    }
}
