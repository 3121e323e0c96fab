// Utilities for storage module
pub mod progress;
pub mod size;

/// Output format for CLI commands that can render machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human friendly single-line summary
    Human,
    /// Single-line JSON output
    Json,
}
