pub mod buffer;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod lines;
pub mod loader;
pub mod metrics;
pub mod sniff;
pub mod walk;

pub use buffer::ScratchBuffer;
pub use config::ScanConfig;
pub use engine::scan;
pub use errors::{ScanError, ScanResult};
pub use lines::LineSpan;
pub use loader::{load, FileView, SkipReason};
pub use metrics::{LoadMetrics, LoadStats};
pub use sniff::{classify, Classification};
