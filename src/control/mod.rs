pub mod launch;

pub use launch::{LaunchController, LaunchState, LaunchTrigger};
