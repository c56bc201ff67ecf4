use serde::{Deserialize, Serialize};

use crate::math::vec2::Vec2;
use crate::objects::body::PhysicsBody;

/// Number of reserved channels carried by every sample.
pub const RESERVED_CHANNELS: usize = 4;

/// Kinematic state of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KinematicSnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f64,
    pub angular_velocity: f64,
    pub mass: f64,
}

impl From<&PhysicsBody> for KinematicSnapshot {
    fn from(body: &PhysicsBody) -> Self {
        Self {
            position: body.position,
            velocity: body.linear_velocity,
            rotation: body.rotation,
            angular_velocity: body.angular_velocity,
            mass: body.mass,
        }
    }
}

/// One row of the recorded trajectory, taken once per fixed step after launch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Seconds since launch; 0 on the launch step.
    pub elapsed: f64,
    pub car: KinematicSnapshot,
    /// Unused channels, always zero. Kept so consumers with a fixed column
    /// layout keep working.
    pub reserved: [f64; RESERVED_CHANNELS],
    pub left_bumper_position: f64,
    pub left_bumper_velocity: f64,
}

impl TrajectorySample {
    pub fn new(elapsed: f64, car: &PhysicsBody, left_bumper: &PhysicsBody) -> Self {
        Self {
            elapsed,
            car: KinematicSnapshot::from(car),
            reserved: [0.0; RESERVED_CHANNELS],
            left_bumper_position: left_bumper.axial_position(),
            left_bumper_velocity: left_bumper.axial_velocity(),
        }
    }
}
