use serde::Deserialize;

/// Scheduler section of a scenario file.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    /// Policy name, resolved via `Policy::from_str`
    pub policy: String,

    /// Time quantum in ticks; consulted for Round-Robin only
    pub quantum: Option<u64>,
}
