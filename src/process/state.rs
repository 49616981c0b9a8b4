/// Progress of one process through a simulation run.
///
/// Result records are built in two phases: the first dispatch fixes the
/// response time, completion fixes everything else. Modeling this as a state
/// transition keeps either phase from being patched after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    /// Not yet given any CPU time
    Pending,
    /// First dispatched at `start`, not yet finished
    Dispatched { start: u64 },
    /// Finished at `completion`; `start` is the first dispatch tick
    Completed { start: u64, completion: u64 },
}

impl DispatchState {
    /// Record the first dispatch. Later dispatches of the same process
    /// (after a preemption) are no-ops.
    pub fn dispatch(&mut self, now: u64) {
        if let DispatchState::Pending = self {
            *self = DispatchState::Dispatched { start: now };
        }
    }

    /// Transition a dispatched process to completed.
    pub fn complete(&mut self, now: u64) {
        if let DispatchState::Dispatched { start } = *self {
            *self = DispatchState::Completed {
                start,
                completion: now,
            };
        }
    }

    /// First dispatch tick, if the process has run at all.
    pub fn start(&self) -> Option<u64> {
        match *self {
            DispatchState::Pending => None,
            DispatchState::Dispatched { start } | DispatchState::Completed { start, .. } => {
                Some(start)
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, DispatchState::Completed { .. })
    }
}

impl std::fmt::Display for DispatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchState::Pending => write!(f, "Pending"),
            DispatchState::Dispatched { .. } => write!(f, "Dispatched"),
            DispatchState::Completed { .. } => write!(f, "Completed"),
        }
    }
}
