pub mod log;
pub mod metrics;

pub use log::ProgressLogger;
pub use metrics::{MetricsSnapshot, SessionMetrics};
