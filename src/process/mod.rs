pub mod process;
pub mod state;

pub use process::Process;
pub use state::DispatchState;
