pub mod recorder;
pub mod sample;

pub use recorder::{MemoryRecorder, TrajectoryRecorder};
pub use sample::{KinematicSnapshot, TrajectorySample};
