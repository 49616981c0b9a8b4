pub mod config;
pub mod error;
pub mod metrics;
pub mod process;
pub mod scheduler;
pub mod timeline;

// Re-export key types
pub use config::Config;
pub use error::SimulationError;
pub use metrics::MetricsSummary;
pub use process::Process;
pub use scheduler::{simulate, Policy};
pub use timeline::{BlockOwner, ExecutionBlock, ProcessResult, SimulationResult};
