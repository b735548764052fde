//! ShearSketch Application
//!
//! Headless shell around the interaction engine: loads a pointer-event
//! script, replays it and reports the resulting state.

mod replay;
mod throttle;

pub use replay::{AppError, Cli, ReplayReport, load_config, load_script, replay, run};
pub use throttle::LogThrottle;
