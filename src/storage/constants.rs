// Block size used for both reading and writing test data
pub const BLOCK_SIZE: usize = 1024;

// Generated files are named `<index>.<extension>`
pub const TEST_FILE_EXTENSION: &str = "txt";

// Progress related constants
// Number of generated files between two progress updates
pub const PROGRESS_UPDATE_INTERVAL: u64 = 100;
