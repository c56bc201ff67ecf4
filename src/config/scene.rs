//! Initial layout of the car and bumpers, and the launch settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::simulation::SimulationConfig;
use crate::collision::contact;
use crate::error::{Result, SimError};
use crate::objects::{Freedom, PhysicsBody};

/// How the car is constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionMode {
    /// Translation along the simulation axis only.
    #[default]
    Axial,
    /// Planar translation plus rotation about the plane normal.
    Rotation,
}

impl MotionMode {
    pub fn car_freedom(self) -> Freedom {
        match self {
            Self::Axial => Freedom::AXIAL,
            Self::Rotation => Freedom::PLANAR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Speed given to the car along the forward axis at launch.
    pub initial_velocity: f64,
    pub mode: MotionMode,
    /// Launch on the first idle input poll of a frame, without a launch signal.
    pub auto_start: bool,
    pub car_half_width: f64,
    pub bumper_half_width: f64,
    pub car_mass: f64,
    pub left_bumper_mass: f64,
    pub car_position: f64,
    pub left_bumper_position: f64,
    pub right_bumper_position: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            initial_velocity: 2.0,
            mode: MotionMode::Axial,
            auto_start: false,
            car_half_width: 0.15,
            bumper_half_width: 0.05,
            car_mass: 1.0,
            left_bumper_mass: 1.0,
            car_position: 0.0,
            left_bumper_position: -1.0,
            right_bumper_position: 1.0,
        }
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid_config(format!("{name} must be positive and finite, got {value}")))
    }
}

fn finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::invalid_config(format!("{name} must be finite, got {value}")))
    }
}

impl SceneConfig {
    /// Checks sizes and masses, and that the car starts clear of both bumpers.
    pub fn validate(&self) -> Result<()> {
        finite("initial_velocity", self.initial_velocity)?;
        positive("car_half_width", self.car_half_width)?;
        positive("bumper_half_width", self.bumper_half_width)?;
        positive("car_mass", self.car_mass)?;
        positive("left_bumper_mass", self.left_bumper_mass)?;
        finite("car_position", self.car_position)?;
        finite("left_bumper_position", self.left_bumper_position)?;
        finite("right_bumper_position", self.right_bumper_position)?;

        contact::check_clear_start(&self.car(), &self.left_bumper(), &self.right_bumper())
    }

    pub fn car(&self) -> PhysicsBody {
        PhysicsBody::new(self.car_mass, self.car_half_width, self.mode.car_freedom())
            .at(self.car_position)
    }

    /// The movable bumper: free along the axis only.
    pub fn left_bumper(&self) -> PhysicsBody {
        PhysicsBody::new(self.left_bumper_mass, self.bumper_half_width, Freedom::AXIAL)
            .at(self.left_bumper_position)
    }

    /// The immovable bumper.
    pub fn right_bumper(&self) -> PhysicsBody {
        PhysicsBody::new_static(self.bumper_half_width, self.right_bumper_position)
    }
}

/// A configuration document: `{ "simulation": {..}, "scene": {..} }`.
/// Either section and any field may be omitted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneFile {
    pub simulation: SimulationConfig,
    pub scene: SceneConfig,
}

impl SceneFile {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: SceneFile = serde_json::from_str(json)?;
        file.validate()?;
        Ok(file)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.simulation.validate()?;
        self.scene.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_default_scene_is_valid() {
        let scene = SceneConfig::default();
        assert_eq!(scene.initial_velocity, 2.0);
        assert_eq!(scene.mode, MotionMode::Axial);
        assert!(!scene.auto_start);
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_bodies_follow_layout() {
        let scene = SceneConfig::default();

        let car = scene.car();
        assert_eq!(car.freedom, Freedom::AXIAL);
        assert!((car.half_width - 0.15).abs() < EPSILON);

        let left = scene.left_bumper();
        assert_eq!(left.freedom, Freedom::AXIAL);
        assert!(!left.is_static());
        assert!((left.axial_position() - -1.0).abs() < EPSILON);

        let right = scene.right_bumper();
        assert!(right.is_static());
        assert!((right.axial_position() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotation_mode_frees_the_plane() {
        let scene = SceneConfig { mode: MotionMode::Rotation, ..Default::default() };
        assert_eq!(scene.car().freedom, Freedom::PLANAR);
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let scene = SceneConfig { car_half_width: 0.0, ..Default::default() };
        assert!(scene.validate().is_err());
        let scene = SceneConfig { left_bumper_mass: -1.0, ..Default::default() };
        assert!(scene.validate().is_err());
    }

    #[test]
    fn test_rejects_initial_overlap() {
        let scene = SceneConfig { right_bumper_position: 0.1, ..Default::default() };
        let err = scene.validate().unwrap_err();
        assert!(err.to_string().contains("right bumper"));

        let scene = SceneConfig { left_bumper_position: -0.1, ..Default::default() };
        let err = scene.validate().unwrap_err();
        assert!(err.to_string().contains("left bumper"));
    }

    #[test]
    fn test_scene_file_from_json() {
        let json = r#"{
            "simulation": { "fixed_dt": 0.01 },
            "scene": { "initial_velocity": 3.5, "mode": "rotation", "auto_start": true }
        }"#;
        let file = SceneFile::from_json_str(json).unwrap();
        assert_eq!(file.simulation.fixed_dt, 0.01);
        assert_eq!(file.simulation.position_iterations, 6);
        assert_eq!(file.scene.initial_velocity, 3.5);
        assert_eq!(file.scene.mode, MotionMode::Rotation);
        assert!(file.scene.auto_start);
        assert_eq!(file.scene.car_half_width, 0.15);
    }

    #[test]
    fn test_scene_file_rejects_invalid_values() {
        let err = SceneFile::from_json_str(r#"{ "simulation": { "fixed_dt": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
        let err = SceneFile::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, SimError::ConfigParse(_)));
    }

    #[test]
    fn test_scene_file_missing_path() {
        let err = SceneFile::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}
