// Storage operation traits and implementations
pub mod bench;
pub mod generate;
pub mod list;
pub mod read;

pub use bench::{BenchmarkReport, Benchmarker};
pub use generate::{GenerateSummary, Generator};
pub use list::Lister;
pub use read::BlockReader;
