use super::{assemble, next_arrival, select_ready, trackers};
use crate::process::Process;
use crate::timeline::{BlockOwner, SimulationResult, TimelineBuilder};

/// Shortest Job First, non-preemptive.
///
/// At every decision point the arrived process with the smallest burst runs
/// to completion; arrivals during its run wait for the next decision point.
pub(crate) fn run(procs: &[Process]) -> SimulationResult {
    let mut timeline = TimelineBuilder::new();
    let mut trackers = trackers(procs);
    let mut now = procs[0].arrival;
    let mut completed = 0;

    while completed < procs.len() {
        let pending = |i: usize| !trackers[i].state.is_completed();
        match select_ready(procs, now, pending, |i| procs[i].burst) {
            Some(i) => {
                let p = &procs[i];
                trackers[i].state.dispatch(now);
                timeline.push(BlockOwner::Process(p.pid.clone()), now, now + p.burst);
                now += p.burst;
                trackers[i].remaining = 0;
                trackers[i].state.complete(now);
                completed += 1;
            }
            None => match next_arrival(procs, now, pending) {
                Some(next) => {
                    timeline.push(BlockOwner::Idle, now, next);
                    now = next;
                }
                None => break,
            },
        }
    }

    assemble(procs, &trackers, timeline)
}
