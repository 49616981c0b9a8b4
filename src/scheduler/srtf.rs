use super::{assemble, next_arrival, select_ready, trackers};
use crate::process::Process;
use crate::timeline::{BlockOwner, SimulationResult, TimelineBuilder};

/// Shortest Remaining Time First, preemptive.
///
/// A unit-tick loop: every tick the arrived, incomplete process with the
/// smallest remaining burst runs for one tick. Re-selecting every tick is
/// what lets a new arrival preempt the running process mid-burst. The
/// timeline builder coalesces consecutive ticks of the same process, so the
/// emitted blocks only break where the running identity changes.
pub(crate) fn run(procs: &[Process]) -> SimulationResult {
    let mut timeline = TimelineBuilder::new();
    let mut trackers = trackers(procs);
    let mut now = procs[0].arrival;
    let mut outstanding: u64 = procs.iter().map(|p| p.burst).sum();
    let mut last_run: Option<usize> = None;

    while outstanding > 0 {
        let incomplete = |i: usize| trackers[i].remaining > 0;
        match select_ready(procs, now, incomplete, |i| trackers[i].remaining) {
            Some(i) => {
                if let Some(prev) = last_run {
                    if prev != i && trackers[prev].remaining > 0 {
                        trackers[prev].preemptions += 1;
                        log::trace!("{} preempted by {} at t={}", procs[prev].pid, procs[i].pid, now);
                    }
                }
                trackers[i].state.dispatch(now);
                timeline.push(BlockOwner::Process(procs[i].pid.clone()), now, now + 1);
                now += 1;
                trackers[i].remaining -= 1;
                outstanding -= 1;
                if trackers[i].remaining == 0 {
                    trackers[i].state.complete(now);
                }
                last_run = Some(i);
            }
            None => {
                // Nothing has arrived: a single coalesced idle block covers
                // the whole gap, identical to advancing tick by tick.
                match next_arrival(procs, now, incomplete) {
                    Some(next) => {
                        timeline.push(BlockOwner::Idle, now, next);
                        now = next;
                    }
                    None => break,
                }
            }
        }
    }

    assemble(procs, &trackers, timeline)
}

#[cfg(test)]
mod tests {
    use crate::process::Process;
    use crate::scheduler::{simulate, Policy};
    use crate::timeline::BlockOwner;

    #[test]
    fn test_srtf_scenario() {
        // At t=2, remaining(P1)=5 > remaining(P2)=4: preempt.
        let procs = vec![Process::new("P1", 0, 7), Process::new("P2", 2, 4)];
        let result = simulate(Policy::Srtf, &procs, None).unwrap();

        let expected = [("P1", 0, 2), ("P2", 2, 6), ("P1", 6, 11)];
        assert_eq!(result.blocks.len(), expected.len());
        for (block, (pid, start, end)) in result.blocks.iter().zip(expected) {
            assert_eq!(block.owner, BlockOwner::Process(pid.into()));
            assert_eq!((block.start, block.end), (start, end));
        }

        assert_eq!(result.results["P1"].completion, 11);
        assert_eq!(result.results["P1"].preemptions, 1);
        assert_eq!(result.results["P2"].completion, 6);
        assert_eq!(result.results["P2"].waiting, 0);
    }

    #[test]
    fn test_srtf_response_fixed_at_first_dispatch() {
        let procs = vec![Process::new("P1", 0, 7), Process::new("P2", 2, 4)];
        let result = simulate(Policy::Srtf, &procs, None).unwrap();

        // P1 first ran at t=0 even though it finished last.
        assert_eq!(result.results["P1"].start, 0);
        assert_eq!(result.results["P1"].response, 0);
        assert_eq!(result.results["P2"].response, 0);
    }

    #[test]
    fn test_srtf_equal_remaining_prefers_earlier_arrival() {
        // At t=2: remaining(P1)=2, remaining(P2)=2; P1 arrived first and
        // keeps the CPU.
        let procs = vec![Process::new("P1", 0, 4), Process::new("P2", 2, 2)];
        let result = simulate(Policy::Srtf, &procs, None).unwrap();

        let order: Vec<_> = result.blocks.iter().filter_map(|b| b.owner.pid()).collect();
        assert_eq!(order, ["P1", "P2"]);
        assert_eq!(result.results["P1"].preemptions, 0);
    }

    #[test]
    fn test_srtf_matches_sjf_when_no_overlap() {
        // Arrivals spaced so no process overlaps another's run.
        let procs = vec![Process::new("P1", 0, 2), Process::new("P2", 4, 3)];
        let srtf = simulate(Policy::Srtf, &procs, None).unwrap();
        let sjf = simulate(Policy::Sjf, &procs, None).unwrap();
        assert_eq!(srtf.blocks, sjf.blocks);
    }

    #[test]
    fn test_srtf_repeated_preemption() {
        // Each shorter arrival displaces the current process once.
        let procs = vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 1),
        ];
        let result = simulate(Policy::Srtf, &procs, None).unwrap();

        let expected = [
            ("P1", 0, 1),
            ("P2", 1, 2),
            ("P3", 2, 3),
            ("P2", 3, 6),
            ("P1", 6, 13),
        ];
        assert_eq!(result.blocks.len(), expected.len());
        for (block, (pid, start, end)) in result.blocks.iter().zip(expected) {
            assert_eq!(block.owner, BlockOwner::Process(pid.into()));
            assert_eq!((block.start, block.end), (start, end));
        }
        assert_eq!(result.results["P1"].preemptions, 1);
        assert_eq!(result.results["P2"].preemptions, 1);
    }
}
