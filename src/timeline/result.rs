use super::block::ExecutionBlock;
use serde::Serialize;
use std::collections::BTreeMap;

/// Final timing record for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessResult {
    /// First dispatch tick
    pub start: u64,

    /// Tick at which the process finished
    pub completion: u64,

    /// `completion - arrival`
    pub turnaround: u64,

    /// `turnaround - burst`
    pub waiting: u64,

    /// `start - arrival`
    pub response: u64,

    /// Times the process lost the CPU before completing (0 under
    /// non-preemptive policies)
    pub preemptions: u32,
}

impl ProcessResult {
    /// Derive a record from the fixed points of a completed process.
    pub fn derive(arrival: u64, burst: u64, start: u64, completion: u64, preemptions: u32) -> Self {
        let turnaround = completion - arrival;
        Self {
            start,
            completion,
            turnaround,
            waiting: turnaround - burst,
            response: start - arrival,
            preemptions,
        }
    }
}

/// Complete output of one simulation run, immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    /// Execution blocks ordered by start time, tiling `[origin, end_time)`
    /// with no gaps and no overlaps
    pub blocks: Vec<ExecutionBlock>,

    /// Per-process records, keyed by pid
    pub results: BTreeMap<String, ProcessResult>,

    /// Tick at which the last process completed
    pub end_time: u64,

    /// Clock origin: the earliest arrival across the input set
    pub origin: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields() {
        let r = ProcessResult::derive(2, 4, 7, 11, 0);
        assert_eq!(r.start, 7);
        assert_eq!(r.completion, 11);
        assert_eq!(r.turnaround, 9);
        assert_eq!(r.waiting, 5);
        assert_eq!(r.response, 5);
    }

    #[test]
    fn test_zero_wait_process() {
        let r = ProcessResult::derive(0, 7, 0, 7, 0);
        assert_eq!(r.turnaround, 7);
        assert_eq!(r.waiting, 0);
        assert_eq!(r.response, 0);
    }
}
