pub mod fcfs;
pub mod policy;
pub mod priority;
pub mod round_robin;
pub mod sjf;
pub mod srtf;

pub use policy::Policy;

use crate::error::SimulationError;
use crate::process::{DispatchState, Process};
use crate::timeline::{ProcessResult, SimulationResult, TimelineBuilder};
use std::collections::BTreeMap;

/// Run one simulation of `processes` under `policy`.
///
/// `quantum` is only consulted for Round-Robin, where it must be positive.
/// Input is validated up front; on success the returned blocks tile
/// `[min(arrival), end_time)` with no gaps and no overlaps, and every input
/// process has exactly one result record.
pub fn simulate(
    policy: Policy,
    processes: &[Process],
    quantum: Option<u64>,
) -> Result<SimulationResult, SimulationError> {
    let procs = validate(processes)?;
    log::debug!("simulating {} processes under {}", procs.len(), policy);

    match policy {
        Policy::Fcfs => Ok(fcfs::run(&procs)),
        Policy::Sjf => Ok(sjf::run(&procs)),
        Policy::Srtf => Ok(srtf::run(&procs)),
        Policy::Priority => Ok(priority::run(&procs)),
        Policy::RoundRobin => {
            let quantum = quantum.ok_or_else(|| {
                SimulationError::InvalidConfiguration(
                    "round-robin requires a quantum".to_string(),
                )
            })?;
            if quantum == 0 {
                return Err(SimulationError::InvalidConfiguration(
                    "quantum must be positive, got 0".to_string(),
                ));
            }
            Ok(round_robin::run(&procs, quantum))
        }
    }
}

/// Validate the input set and canonicalize it by (arrival, pid).
///
/// Sorting here is what makes the engine insensitive to input order.
fn validate(processes: &[Process]) -> Result<Vec<Process>, SimulationError> {
    if processes.is_empty() {
        return Err(SimulationError::InvalidInput(
            "empty process set".to_string(),
        ));
    }

    let mut seen = std::collections::HashSet::new();
    for p in processes {
        if p.pid.is_empty() {
            return Err(SimulationError::InvalidInput(
                "process with empty pid".to_string(),
            ));
        }
        if p.burst == 0 {
            return Err(SimulationError::InvalidInput(format!(
                "process {} has zero burst",
                p.pid
            )));
        }
        if !seen.insert(p.pid.as_str()) {
            return Err(SimulationError::InvalidInput(format!(
                "duplicate pid {}",
                p.pid
            )));
        }
    }

    let mut procs = processes.to_vec();
    procs.sort_by(|a, b| a.arrival.cmp(&b.arrival).then_with(|| a.pid.cmp(&b.pid)));
    Ok(procs)
}

/// Per-process bookkeeping shared by the algorithms.
pub(crate) struct Tracker {
    pub state: DispatchState,
    pub remaining: u64,
    pub preemptions: u32,
}

impl Tracker {
    pub fn new(process: &Process) -> Self {
        Self {
            state: DispatchState::Pending,
            remaining: process.burst,
            preemptions: 0,
        }
    }
}

pub(crate) fn trackers(procs: &[Process]) -> Vec<Tracker> {
    procs.iter().map(Tracker::new).collect()
}

/// Index of the best ready process at `now`: smallest `key`, ties broken by
/// arrival, then pid.
pub(crate) fn select_ready<K: Ord>(
    procs: &[Process],
    now: u64,
    eligible: impl Fn(usize) -> bool,
    key: impl Fn(usize) -> K,
) -> Option<usize> {
    procs
        .iter()
        .enumerate()
        .filter(|&(i, p)| p.arrival <= now && eligible(i))
        .min_by_key(|&(i, p)| (key(i), p.arrival, &p.pid))
        .map(|(i, _)| i)
}

/// Earliest arrival strictly after `now` among eligible processes.
pub(crate) fn next_arrival(
    procs: &[Process],
    now: u64,
    eligible: impl Fn(usize) -> bool,
) -> Option<u64> {
    procs
        .iter()
        .enumerate()
        .filter(|&(i, p)| p.arrival > now && eligible(i))
        .map(|(_, p)| p.arrival)
        .min()
}

/// Assemble the final result from finished trackers and the timeline.
///
/// `procs` is the canonicalized set, so its first entry carries the clock
/// origin.
pub(crate) fn assemble(
    procs: &[Process],
    trackers: &[Tracker],
    timeline: TimelineBuilder,
) -> SimulationResult {
    let origin = procs[0].arrival;
    let blocks = timeline.finish();
    let end_time = blocks.last().map(|b| b.end).unwrap_or(origin);

    let mut results = BTreeMap::new();
    for (p, t) in procs.iter().zip(trackers) {
        if let DispatchState::Completed { start, completion } = t.state {
            results.insert(
                p.pid.clone(),
                ProcessResult::derive(p.arrival, p.burst, start, completion, t.preemptions),
            );
        }
    }

    SimulationResult {
        blocks,
        results,
        end_time,
        origin,
    }
}
