pub mod scene;
pub mod simulation;

pub use scene::{MotionMode, SceneConfig, SceneFile};
pub use simulation::SimulationConfig;
