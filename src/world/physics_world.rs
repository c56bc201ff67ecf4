use crate::{
    config::SimulationConfig,
    constraints::{Constraint, FixedJoint},
    integration::integrator,
    objects::body::PhysicsBody,
};

/// The integration collaborator: owns the bodies and the constraints acting
/// on them, and advances them by fixed steps. Collision response is not done
/// here; it is layered on top by the resolver.
#[derive(Debug)]
pub struct PhysicsWorld {
    pub bodies: Vec<PhysicsBody>,
    // Store constraints as boxed trait objects
    pub constraints: Vec<Box<dyn Constraint>>,
    pub config: SimulationConfig,
}

impl PhysicsWorld {
    /// Creates an empty world using the given solver settings.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            bodies: Vec::new(),
            constraints: Vec::new(),
            config,
        }
    }

    /// Adds a body to the world and returns its index.
    pub fn add_body(&mut self, body: PhysicsBody) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    pub fn add_constraint(&mut self, constraint: Box<dyn Constraint>) {
        self.constraints.push(constraint);
    }

    /// Welds two bodies in their current relative placement.
    /// Returns `None` without touching the world if either index is invalid.
    pub fn add_fixed_joint(&mut self, body_a_idx: usize, body_b_idx: usize) -> Option<FixedJoint> {
        let joint = FixedJoint::between(&self.bodies, body_a_idx, body_b_idx)?;
        self.add_constraint(Box::new(joint));
        Some(joint)
    }

    /// Whether any constraint acts on the body at `idx`.
    pub fn is_constrained(&self, idx: usize) -> bool {
        self.constraints.iter().any(|c| c.involves(idx))
    }

    /// Removes every body and constraint.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.constraints.clear();
    }

    /// Advances the world by `dt`: velocity passes, integration, then position passes.
    pub fn step(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }

        // 1. Make constrained bodies agree on their velocities
        for _ in 0..self.config.velocity_iterations {
            for constraint in &self.constraints {
                constraint.solve_velocity(&mut self.bodies);
            }
        }

        // 2. Integrate motion
        for body in self.bodies.iter_mut() {
            integrator::integrate(body, dt);
        }

        // 3. Remove positional drift
        for _ in 0..self.config.position_iterations {
            for constraint in &self.constraints {
                constraint.solve_position(&mut self.bodies);
            }
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
