pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod io;
pub mod math;
pub mod operations;
pub mod planner;

pub use config::PlannerConfig;
pub use error::{ClearpathError, Result};
pub use planner::{PlanResult, Planner, Preview};
