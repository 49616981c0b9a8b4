use super::{assemble, trackers};
use crate::process::Process;
use crate::timeline::{BlockOwner, SimulationResult, TimelineBuilder};
use std::collections::VecDeque;

/// Round-Robin over a FIFO ready queue with a fixed quantum.
///
/// After each slice, processes that arrived during the executed interval
/// enter the queue first; only then is the just-run process re-enqueued.
/// Reversing that order changes fairness outcomes, so the admission drain
/// always happens before the `push_back` of the preempted process.
pub(crate) fn run(procs: &[Process], quantum: u64) -> SimulationResult {
    let mut timeline = TimelineBuilder::new();
    let mut trackers = trackers(procs);
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut admitted = vec![false; procs.len()];
    let mut now = procs[0].arrival;
    let mut completed = 0;

    admit_arrived(procs, now, &mut admitted, &mut queue);

    while completed < procs.len() {
        let Some(i) = queue.pop_front() else {
            // Queue drained with work left: idle until the next arrival.
            let next = earliest_unadmitted(procs, &admitted);
            timeline.push(BlockOwner::Idle, now, next);
            now = next;
            admit_arrived(procs, now, &mut admitted, &mut queue);
            continue;
        };

        let slice = quantum.min(trackers[i].remaining);
        trackers[i].state.dispatch(now);
        timeline.push(BlockOwner::Process(procs[i].pid.clone()), now, now + slice);
        now += slice;
        trackers[i].remaining -= slice;

        // Arrivals up to and including the slice end enter ahead of the
        // just-run process.
        admit_arrived(procs, now, &mut admitted, &mut queue);

        if trackers[i].remaining > 0 {
            trackers[i].preemptions += 1;
            log::trace!("{} quantum expired at t={}", procs[i].pid, now);
            queue.push_back(i);
        } else {
            trackers[i].state.complete(now);
            completed += 1;
        }
    }

    assemble(procs, &trackers, timeline)
}

/// Enqueue every not-yet-admitted process with `arrival <= now`, in
/// (arrival, pid) order. `procs` is already canonicalized, so a single
/// in-order scan suffices.
fn admit_arrived(
    procs: &[Process],
    now: u64,
    admitted: &mut [bool],
    queue: &mut VecDeque<usize>,
) {
    for (i, p) in procs.iter().enumerate() {
        if !admitted[i] && p.arrival <= now {
            admitted[i] = true;
            queue.push_back(i);
        }
    }
}

fn earliest_unadmitted(procs: &[Process], admitted: &[bool]) -> u64 {
    procs
        .iter()
        .enumerate()
        .filter(|&(i, _)| !admitted[i])
        .map(|(_, p)| p.arrival)
        .min()
        .unwrap_or(0)
}
