//! Fixed-step and solver settings, fixed for the lifetime of a run.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Default fixed step duration in seconds (50 Hz).
pub const DEFAULT_FIXED_DT: f64 = 0.02;

/// Default number of position correction passes per step.
pub const DEFAULT_POSITION_ITERATIONS: usize = 6;

/// Default number of velocity passes per step.
pub const DEFAULT_VELOCITY_ITERATIONS: usize = 1;

/// Default cap on fixed steps taken for a single frame.
pub const DEFAULT_MAX_STEPS_PER_FRAME: usize = 8;

/// Stepping and solver configuration passed to the world and the driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Duration of one fixed step in seconds.
    pub fixed_dt: f64,
    /// Constraint position passes per step.
    pub position_iterations: usize,
    /// Constraint velocity passes per step.
    pub velocity_iterations: usize,
    /// Fixed steps one frame may run; backlog beyond it is dropped.
    pub max_steps_per_frame: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_dt: DEFAULT_FIXED_DT,
            position_iterations: DEFAULT_POSITION_ITERATIONS,
            velocity_iterations: DEFAULT_VELOCITY_ITERATIONS,
            max_steps_per_frame: DEFAULT_MAX_STEPS_PER_FRAME,
        }
    }
}

impl SimulationConfig {
    /// Checks that the step is positive and every loop runs at least once.
    pub fn validate(&self) -> Result<()> {
        if !(self.fixed_dt.is_finite() && self.fixed_dt > 0.0) {
            return Err(SimError::invalid_config(format!(
                "fixed_dt must be positive and finite, got {}",
                self.fixed_dt
            )));
        }
        if self.position_iterations == 0 {
            return Err(SimError::invalid_config("position_iterations must be at least 1"));
        }
        if self.velocity_iterations == 0 {
            return Err(SimError::invalid_config("velocity_iterations must be at least 1"));
        }
        if self.max_steps_per_frame == 0 {
            return Err(SimError::invalid_config("max_steps_per_frame must be at least 1"));
        }
        Ok(())
    }
}
