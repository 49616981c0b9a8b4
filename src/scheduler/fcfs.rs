use super::{assemble, trackers};
use crate::process::Process;
use crate::timeline::{BlockOwner, SimulationResult, TimelineBuilder};

/// First-Come-First-Served: walk the canonicalized set in arrival order and
/// run each process to completion, idling through any arrival gap.
pub(crate) fn run(procs: &[Process]) -> SimulationResult {
    let mut timeline = TimelineBuilder::new();
    let mut trackers = trackers(procs);
    let mut now = procs[0].arrival;

    for (i, p) in procs.iter().enumerate() {
        if now < p.arrival {
            timeline.push(BlockOwner::Idle, now, p.arrival);
            now = p.arrival;
        }
        trackers[i].state.dispatch(now);
        timeline.push(BlockOwner::Process(p.pid.clone()), now, now + p.burst);
        now += p.burst;
        trackers[i].state.complete(now);
        trackers[i].remaining = 0;
    }

    assemble(procs, &trackers, timeline)
}

#[cfg(test)]
mod tests {
    use crate::process::Process;
    use crate::scheduler::{simulate, Policy};
    use crate::timeline::BlockOwner;

    #[test]
    fn test_fcfs_scenario() {
        let procs = vec![
            Process::new("P1", 0, 7),
            Process::new("P2", 2, 4),
            Process::new("P3", 4, 1),
        ];
        let result = simulate(Policy::Fcfs, &procs, None).unwrap();

        let expected = [("P1", 0, 7), ("P2", 7, 11), ("P3", 11, 12)];
        assert_eq!(result.blocks.len(), expected.len());
        for (block, (pid, start, end)) in result.blocks.iter().zip(expected) {
            assert_eq!(block.owner, BlockOwner::Process(pid.into()));
            assert_eq!((block.start, block.end), (start, end));
        }

        assert_eq!(result.results["P1"].completion, 7);
        assert_eq!(result.results["P1"].waiting, 0);
        assert_eq!(result.results["P2"].completion, 11);
        assert_eq!(result.results["P2"].waiting, 5);
        assert_eq!(result.results["P3"].completion, 12);
        assert_eq!(result.results["P3"].waiting, 7);
        assert_eq!(result.end_time, 12);
    }

    #[test]
    fn test_fcfs_response_equals_waiting() {
        let procs = vec![
            Process::new("P1", 0, 3),
            Process::new("P2", 1, 2),
            Process::new("P3", 1, 4),
        ];
        let result = simulate(Policy::Fcfs, &procs, None).unwrap();
        for record in result.results.values() {
            assert_eq!(record.response, record.waiting);
        }
    }

    #[test]
    fn test_fcfs_equal_arrivals_ordered_by_pid() {
        let procs = vec![Process::new("P2", 0, 2), Process::new("P1", 0, 2)];
        let result = simulate(Policy::Fcfs, &procs, None).unwrap();
        assert_eq!(result.blocks[0].owner.pid(), Some("P1"));
        assert_eq!(result.blocks[1].owner.pid(), Some("P2"));
    }
}
