//! Command implementations

pub mod classic;
pub mod simulate;

pub use classic::run_classic;
pub use simulate::{SimulationResult, run_simulation};
