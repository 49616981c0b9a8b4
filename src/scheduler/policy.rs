use crate::error::SimulationError;

/// Scheduling policy deciding which ready process gets the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// First-Come-First-Served: dispatch in arrival order, run to completion
    Fcfs,
    /// Shortest Job First: smallest burst among arrived, non-preemptive
    Sjf,
    /// Shortest Remaining Time First: preemptive, re-evaluated every tick
    Srtf,
    /// Lowest priority value wins, non-preemptive
    Priority,
    /// Fixed-quantum time slicing over a FIFO ready queue
    RoundRobin,
}

impl Policy {
    pub const ALL: [Policy; 5] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Srtf,
        Policy::Priority,
        Policy::RoundRobin,
    ];

    pub fn from_str(s: &str) -> Result<Self, SimulationError> {
        match s.to_lowercase().as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "srtf" => Ok(Policy::Srtf),
            "priority" => Ok(Policy::Priority),
            "rr" | "round-robin" | "round_robin" => Ok(Policy::RoundRobin),
            _ => Err(SimulationError::InvalidConfiguration(format!(
                "unknown scheduling policy: {}",
                s
            ))),
        }
    }

    /// Whether the policy consumes a time quantum.
    pub fn needs_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "FCFS"),
            Policy::Sjf => write!(f, "SJF"),
            Policy::Srtf => write!(f, "SRTF"),
            Policy::Priority => write!(f, "Priority"),
            Policy::RoundRobin => write!(f, "Round-Robin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_str() {
        assert_eq!(Policy::from_str("fcfs").unwrap(), Policy::Fcfs);
        assert_eq!(Policy::from_str("FCFS").unwrap(), Policy::Fcfs);
        assert_eq!(Policy::from_str("sjf").unwrap(), Policy::Sjf);
        assert_eq!(Policy::from_str("srtf").unwrap(), Policy::Srtf);
        assert_eq!(Policy::from_str("priority").unwrap(), Policy::Priority);
        assert_eq!(Policy::from_str("rr").unwrap(), Policy::RoundRobin);
        assert_eq!(Policy::from_str("round-robin").unwrap(), Policy::RoundRobin);
        assert!(Policy::from_str("unknown").is_err());
    }

    #[test]
    fn test_needs_quantum() {
        assert!(Policy::RoundRobin.needs_quantum());
        assert!(!Policy::Fcfs.needs_quantum());
        assert!(!Policy::Srtf.needs_quantum());
    }
}
