use serde::{Deserialize, Serialize};

/// A process submitted to the simulation, immutable once validated.
///
/// All times are integer ticks. Fractional arrival or burst values are not
/// supported and fail at the deserialization boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier
    pub pid: String,

    /// Tick at which the process becomes ready
    pub arrival: u64,

    /// Total service time required, in ticks
    pub burst: u64,

    /// Scheduling priority (lower = higher priority)
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Create a process with the default priority (0).
    pub fn new(pid: impl Into<String>, arrival: u64, burst: u64) -> Self {
        Self {
            pid: pid.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Create a process with an explicit priority.
    pub fn with_priority(pid: impl Into<String>, arrival: u64, burst: u64, priority: i32) -> Self {
        Self {
            pid: pid.into(),
            arrival,
            burst,
            priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_creation() {
        let p = Process::new("P1", 3, 5);
        assert_eq!(p.pid, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 5);
        assert_eq!(p.priority, 0);

        let p = Process::with_priority("P2", 0, 4, 2);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_priority_defaults_in_toml() {
        let p: Process = toml::from_str("pid = \"P1\"\narrival = 0\nburst = 5\n").unwrap();
        assert_eq!(p.priority, 0);
    }

    #[test]
    fn test_fractional_times_rejected() {
        let err = toml::from_str::<Process>("pid = \"P1\"\narrival = 0.5\nburst = 5\n");
        assert!(err.is_err());

        let err = toml::from_str::<Process>("pid = \"P1\"\narrival = 0\nburst = 2.5\n");
        assert!(err.is_err());
    }
}
