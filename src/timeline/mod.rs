pub mod block;
pub mod result;

pub use block::{BlockOwner, ExecutionBlock, TimelineBuilder};
pub use result::{ProcessResult, SimulationResult};
