//! Per-step collision layer between the car and the two bumpers.
//!
//! The left bumper locks the car on first contact (a perfectly inelastic
//! collision, realised as a `FixedJoint` in the world). The right bumper
//! reflects the car's axial velocity and pushes it back out by the
//! penetration depth, every step the overlap holds.

use tracing::{debug, info};

use super::contact::{self, AxialContact};
use crate::control::LaunchController;
use crate::recording::{TrajectoryRecorder, TrajectorySample};
use crate::world::PhysicsWorld;

/// Whether the car has been welded to the left bumper. Never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CouplingState {
    pub joint_fixed: bool,
}

/// What happened during one call to [`CollisionResolver::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    /// The coupling formed during this step.
    pub coupled: Option<AxialContact>,
    /// The car bounced off the right bumper during this step.
    pub bounced: Option<AxialContact>,
    /// The sample handed to the recorder; `None` while idle.
    pub sample: Option<TrajectorySample>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResolver {
    car: usize,
    left_bumper: usize,
    right_bumper: usize,
    coupling: CouplingState,
}

impl CollisionResolver {
    /// `car`, `left_bumper` and `right_bumper` are indices into the world's bodies.
    pub fn new(car: usize, left_bumper: usize, right_bumper: usize) -> Self {
        Self {
            car,
            left_bumper,
            right_bumper,
            coupling: CouplingState::default(),
        }
    }

    pub fn coupling(&self) -> CouplingState {
        self.coupling
    }

    pub fn is_coupled(&self) -> bool {
        self.coupling.joint_fixed
    }

    /// Forgets the coupling. The matching joint must be removed from the world
    /// by the caller.
    pub fn reset(&mut self) {
        self.coupling = CouplingState::default();
    }

    /// Runs one fixed step of collision handling and emits one sample.
    /// Does nothing before launch. The left check runs first so a lock-up is
    /// in place before the right check looks at the car.
    pub fn resolve<R>(
        &mut self,
        world: &mut PhysicsWorld,
        launch: &LaunchController,
        now: f64,
        recorder: &mut R,
    ) -> StepReport
    where
        R: TrajectoryRecorder + ?Sized,
    {
        let Some(elapsed) = launch.elapsed(now) else {
            return StepReport::default();
        };
        let mut report = StepReport::default();

        // Left: inelastic, at most once per run
        if !self.coupling.joint_fixed {
            let car = &world.bodies[self.car];
            let left = &world.bodies[self.left_bumper];
            if let Some(hit) = contact::left_contact(car, left) {
                world.add_fixed_joint(self.car, self.left_bumper);
                self.coupling.joint_fixed = true;
                report.coupled = Some(hit);
                info!(depth = hit.depth, elapsed, "car coupled to left bumper");
            }
        }

        // Right: elastic, every step the overlap holds
        let car = &world.bodies[self.car];
        let right = &world.bodies[self.right_bumper];
        if let Some(hit) = contact::right_contact(car, right) {
            self.bounce(world, hit.depth);
            report.bounced = Some(hit);
            debug!(
                depth = hit.depth,
                velocity = world.bodies[self.car].axial_velocity(),
                elapsed,
                "car bounced off right bumper"
            );
        }

        let sample = TrajectorySample::new(
            elapsed,
            &world.bodies[self.car],
            &world.bodies[self.left_bumper],
        );
        recorder.add_sample(sample);
        report.sample = Some(sample);
        report
    }

    /// Reflects the axial velocity and backs out by `depth`. Once coupled the
    /// whole welded assembly takes the response, so the car never moves
    /// independently of the bumper it is locked to.
    fn bounce(&self, world: &mut PhysicsWorld, depth: f64) {
        let welded = self.coupling.joint_fixed.then_some(self.left_bumper);
        for idx in std::iter::once(self.car).chain(welded) {
            let body = &mut world.bodies[idx];
            body.set_axial_velocity(-body.axial_velocity());
            body.translate_axial(-depth);
        }
    }
}
