//! Idle to launched transition of the car.

use tracing::info;

use crate::config::SceneConfig;
use crate::math::vec2::Vec2;
use crate::objects::body::PhysicsBody;

/// What asked for the launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchTrigger {
    /// An explicit user signal. Always fires.
    Manual,
    /// The per-frame idle poll; fires only when auto-start is configured.
    Auto,
}

/// Monotone launch bookkeeping: once launched, never idle again within a run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LaunchState {
    pub is_launched: bool,
    pub launch_time: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchController {
    initial_velocity: f64,
    auto_start: bool,
    state: LaunchState,
}

impl LaunchController {
    pub fn new(initial_velocity: f64, auto_start: bool) -> Self {
        Self {
            initial_velocity,
            auto_start,
            state: LaunchState::default(),
        }
    }

    pub fn from_scene(scene: &SceneConfig) -> Self {
        Self::new(scene.initial_velocity, scene.auto_start)
    }

    pub fn state(&self) -> LaunchState {
        self.state
    }

    pub fn is_launched(&self) -> bool {
        self.state.is_launched
    }

    pub fn launch_time(&self) -> Option<f64> {
        self.state.launch_time
    }

    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    pub fn auto_start(&self) -> bool {
        self.auto_start
    }

    /// Launches the car if it is still idle and the trigger holds: the car
    /// gets `initial_velocity` along the forward axis and `now` becomes the
    /// launch time. Returns whether the launch happened; later calls are no-ops.
    pub fn try_launch(&mut self, trigger: LaunchTrigger, now: f64, car: &mut PhysicsBody) -> bool {
        let fires = match trigger {
            LaunchTrigger::Manual => true,
            LaunchTrigger::Auto => self.auto_start,
        };
        if self.state.is_launched || !fires {
            return false;
        }

        car.linear_velocity = Vec2::FORWARD * self.initial_velocity;
        self.state = LaunchState {
            is_launched: true,
            launch_time: Some(now),
        };
        info!(velocity = self.initial_velocity, time = now, ?trigger, "launching the car");
        true
    }

    /// Time since launch, or `None` while idle.
    pub fn elapsed(&self, now: f64) -> Option<f64> {
        self.state.launch_time.map(|t| now - t)
    }

    /// Returns to idle, as at the start of a run.
    pub fn reset(&mut self) {
        self.state = LaunchState::default();
    }
}
