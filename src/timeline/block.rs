use serde::Serialize;

/// Owner of a span of CPU time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockOwner {
    /// No process was ready during the span
    Idle,
    /// The span was executed by the named process
    Process(String),
}

impl BlockOwner {
    pub fn is_idle(&self) -> bool {
        matches!(self, BlockOwner::Idle)
    }

    /// The owning pid, if any.
    pub fn pid(&self) -> Option<&str> {
        match self {
            BlockOwner::Idle => None,
            BlockOwner::Process(pid) => Some(pid),
        }
    }
}

impl std::fmt::Display for BlockOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockOwner::Idle => write!(f, "IDLE"),
            BlockOwner::Process(pid) => write!(f, "{}", pid),
        }
    }
}

/// One contiguous span of the execution timeline. `end > start` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionBlock {
    pub owner: BlockOwner,
    pub start: u64,
    pub end: u64,
}

impl ExecutionBlock {
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Accumulates execution spans in timeline order.
///
/// Consecutive spans with the same owner are coalesced into one block and
/// zero-length spans are dropped, so per-tick algorithms and
/// run-to-completion algorithms emit identical timelines.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    blocks: Vec<ExecutionBlock>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the span `[start, end)` for `owner`.
    ///
    /// Spans must be pushed in timeline order: `start` equals the previous
    /// span's `end`.
    pub fn push(&mut self, owner: BlockOwner, start: u64, end: u64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.blocks.last_mut() {
            debug_assert_eq!(last.end, start);
            if last.owner == owner {
                last.end = end;
                return;
            }
        }
        self.blocks.push(ExecutionBlock { owner, start, end });
    }

    pub fn finish(self) -> Vec<ExecutionBlock> {
        self.blocks
    }
}
