//! Deterministic driver: wires the bodies, launch controller, collision
//! resolver and recorder together and runs them at a fixed step.

use tracing::{debug, info, trace, warn};

use super::signal::Signal;
use crate::collision::{contact, CollisionResolver, CouplingState, StepReport};
use crate::config::{SceneConfig, SceneFile, SimulationConfig};
use crate::control::{LaunchController, LaunchTrigger};
use crate::error::{BodyRole, Result, SimError};
use crate::objects::body::PhysicsBody;
use crate::recording::{MemoryRecorder, TrajectoryRecorder};
use crate::world::PhysicsWorld;

const CAR: usize = 0;
const LEFT_BUMPER: usize = 1;
const RIGHT_BUMPER: usize = 2;

/// Accumulated frame time below this is treated as a whole fixed step.
const STEP_TOLERANCE: f64 = 1e-12;

/// Collects the collaborators of a [`Simulation`]. Every body and the
/// recorder are required; `build` refuses to proceed without them.
#[derive(Debug)]
pub struct SimulationBuilder<R> {
    config: SimulationConfig,
    initial_velocity: f64,
    auto_start: bool,
    car: Option<PhysicsBody>,
    left_bumper: Option<PhysicsBody>,
    right_bumper: Option<PhysicsBody>,
    recorder: Option<R>,
}

impl<R: TrajectoryRecorder> SimulationBuilder<R> {
    pub fn new(config: SimulationConfig) -> Self {
        let defaults = SceneConfig::default();
        Self {
            config,
            initial_velocity: defaults.initial_velocity,
            auto_start: defaults.auto_start,
            car: None,
            left_bumper: None,
            right_bumper: None,
            recorder: None,
        }
    }

    /// Starts from a validated scene: bodies and launch settings come from it.
    pub fn from_scene(config: SimulationConfig, scene: &SceneConfig) -> Result<Self> {
        scene.validate()?;
        Ok(Self::new(config)
            .launch(scene.initial_velocity, scene.auto_start)
            .car(scene.car())
            .left_bumper(scene.left_bumper())
            .right_bumper(scene.right_bumper()))
    }

    pub fn from_file(file: &SceneFile) -> Result<Self> {
        Self::from_scene(file.simulation, &file.scene)
    }

    pub fn launch(mut self, initial_velocity: f64, auto_start: bool) -> Self {
        self.initial_velocity = initial_velocity;
        self.auto_start = auto_start;
        self
    }

    pub fn car(mut self, body: PhysicsBody) -> Self {
        self.car = Some(body);
        self
    }

    pub fn left_bumper(mut self, body: PhysicsBody) -> Self {
        self.left_bumper = Some(body);
        self
    }

    pub fn right_bumper(mut self, body: PhysicsBody) -> Self {
        self.right_bumper = Some(body);
        self
    }

    pub fn recorder(mut self, recorder: R) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn build(self) -> Result<Simulation<R>> {
        self.config.validate()?;
        let recorder = self.recorder.ok_or(SimError::MissingRecorder)?;
        let car = self.car.ok_or(SimError::MissingBody(BodyRole::Car))?;
        let left_bumper = self.left_bumper.ok_or(SimError::MissingBody(BodyRole::LeftBumper))?;
        let right_bumper = self.right_bumper.ok_or(SimError::MissingBody(BodyRole::RightBumper))?;

        if car.is_static() {
            return Err(SimError::invalid_config("the car must be movable"));
        }
        if !right_bumper.is_static() {
            return Err(SimError::invalid_config("the right bumper must be immovable"));
        }
        if !self.initial_velocity.is_finite() {
            return Err(SimError::invalid_config("initial_velocity must be finite"));
        }
        car.validate(BodyRole::Car)?;
        left_bumper.validate(BodyRole::LeftBumper)?;
        right_bumper.validate(BodyRole::RightBumper)?;
        contact::check_clear_start(&car, &left_bumper, &right_bumper)?;

        let initial_layout = vec![car, left_bumper, right_bumper];
        let mut world = PhysicsWorld::new(self.config);
        for body in initial_layout.iter().cloned() {
            world.add_body(body);
        }

        info!(
            fixed_dt = self.config.fixed_dt,
            position_iterations = self.config.position_iterations,
            velocity_iterations = self.config.velocity_iterations,
            "simulation initialized"
        );

        Ok(Simulation {
            config: self.config,
            world,
            launch: LaunchController::new(self.initial_velocity, self.auto_start),
            resolver: CollisionResolver::new(CAR, LEFT_BUMPER, RIGHT_BUMPER),
            recorder,
            initial_layout,
            steps: 0,
            accumulator: 0.0,
        })
    }
}

/// A running car-between-bumpers scene.
#[derive(Debug)]
pub struct Simulation<R = MemoryRecorder> {
    config: SimulationConfig,
    world: PhysicsWorld,
    launch: LaunchController,
    resolver: CollisionResolver,
    recorder: R,
    initial_layout: Vec<PhysicsBody>,
    steps: u64,
    accumulator: f64,
}

impl<R: TrajectoryRecorder> Simulation<R> {
    pub fn builder(config: SimulationConfig) -> SimulationBuilder<R> {
        SimulationBuilder::new(config)
    }

    /// Simulation time at the start of the next fixed step.
    pub fn now(&self) -> f64 {
        self.steps as f64 * self.config.fixed_dt
    }

    /// Handles one frame's input. `Launch` fires a manual launch, `Reset`
    /// rebuilds the scene, and `Idle` gives an auto-start launch its chance.
    /// Returns whether the signal changed anything.
    pub fn poll_input(&mut self, signal: Signal) -> bool {
        let now = self.now();
        match signal {
            Signal::Idle => {
                if !self.launch.auto_start() {
                    return false;
                }
                self.launch.try_launch(LaunchTrigger::Auto, now, &mut self.world.bodies[CAR])
            }
            Signal::Launch => {
                let launched =
                    self.launch.try_launch(LaunchTrigger::Manual, now, &mut self.world.bodies[CAR]);
                if !launched {
                    warn!("launch ignored, the car is already launched");
                }
                launched
            }
            Signal::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Runs one fixed step: collision response and sampling, then integration.
    pub fn advance(&mut self) -> StepReport {
        let now = self.now();
        let report = self.resolver.resolve(&mut self.world, &self.launch, now, &mut self.recorder);
        self.world.step(self.config.fixed_dt);
        self.steps += 1;

        trace!(
            step = self.steps,
            car_position = self.world.bodies[CAR].axial_position(),
            car_velocity = self.world.bodies[CAR].axial_velocity(),
            "fixed step"
        );
        report
    }

    /// Polls `signal`, then takes as many fixed steps as `frame_dt` allows,
    /// up to `max_steps_per_frame`. Leftover time under one step carries over
    /// to the next frame; a larger backlog is dropped. Returns the step count.
    pub fn run_frame(&mut self, frame_dt: f64, signal: Signal) -> usize {
        self.poll_input(signal);
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }

        let mut taken = 0;
        while self.accumulator + STEP_TOLERANCE >= self.config.fixed_dt {
            if taken == self.config.max_steps_per_frame {
                debug!(dropped = self.accumulator, "frame step budget exhausted");
                self.accumulator = 0.0;
                break;
            }
            self.advance();
            self.accumulator -= self.config.fixed_dt;
            taken += 1;
        }
        self.accumulator = self.accumulator.max(0.0);
        taken
    }

    /// Restores bodies, launch state and coupling to the initial layout and
    /// restarts the clock.
    pub fn reset(&mut self) {
        self.world.clear();
        for body in self.initial_layout.iter().cloned() {
            self.world.add_body(body);
        }
        self.launch.reset();
        self.resolver.reset();
        self.recorder.reset();
        self.steps = 0;
        self.accumulator = 0.0;
        info!("scene reset");
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn car(&self) -> &PhysicsBody {
        &self.world.bodies[CAR]
    }

    pub fn left_bumper(&self) -> &PhysicsBody {
        &self.world.bodies[LEFT_BUMPER]
    }

    pub fn right_bumper(&self) -> &PhysicsBody {
        &self.world.bodies[RIGHT_BUMPER]
    }

    pub fn launch(&self) -> &LaunchController {
        &self.launch
    }

    pub fn coupling(&self) -> CouplingState {
        self.resolver.coupling()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    pub fn recorder_mut(&mut self) -> &mut R {
        &mut self.recorder
    }

    pub fn into_recorder(self) -> R {
        self.recorder
    }
}
