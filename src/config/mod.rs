pub mod scheduler;

pub use scheduler::SchedulerConfig;

use crate::error::SimulationError;
use crate::process::Process;
use crate::scheduler::Policy;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A scenario file: scheduler parameters plus the process set.
///
/// ```toml
/// [scheduler]
/// policy = "rr"
/// quantum = 2
///
/// [[process]]
/// pid = "P1"
/// arrival = 0
/// burst = 5
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub scheduler: SchedulerConfig,
    #[serde(rename = "process", default)]
    pub processes: Vec<Process>,
}

impl Config {
    /// Load a scenario from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve the configured policy name.
    pub fn policy(&self) -> Result<Policy, SimulationError> {
        Policy::from_str(&self.scheduler.policy)
    }

    /// Get a default configuration for testing
    #[cfg(test)]
    pub fn test_default() -> Self {
        Config {
            scheduler: SchedulerConfig {
                policy: "fcfs".to_string(),
                quantum: None,
            },
            processes: vec![
                Process::new("P1", 0, 7),
                Process::new("P2", 2, 4),
                Process::new("P3", 4, 1),
            ],
        }
    }
}
