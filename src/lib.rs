//! A car launched along one axis between two bumpers: an inelastic lock-up on
//! the left, an elastic bounce on the right, and a sampled trajectory.

pub mod collision;
pub mod config;
pub mod constraints;
pub mod control;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod recording;
pub mod simulation;
pub mod world;

// Re-export key types for easier use
pub use collision::{CollisionResolver, CouplingState, StepReport};
pub use config::{MotionMode, SceneConfig, SceneFile, SimulationConfig};
pub use constraints::{Constraint, FixedJoint};
pub use control::{LaunchController, LaunchState, LaunchTrigger};
pub use error::{BodyRole, Result, SimError};
pub use math::vec2::Vec2;
pub use objects::{Freedom, PhysicsBody};
pub use recording::{MemoryRecorder, TrajectoryRecorder, TrajectorySample};
pub use simulation::{Signal, Simulation, SimulationBuilder, STATUS_HINT};
pub use world::PhysicsWorld;
