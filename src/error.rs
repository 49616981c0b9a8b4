use thiserror::Error;

/// Errors reported before a simulation produces any output.
///
/// The algorithms themselves are total over valid input; these two cases are
/// the only failure modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Malformed process data: empty set, empty or duplicate pid, zero burst.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Bad scheduler parameters: unknown policy name, or Round-Robin without
    /// a positive quantum.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
