use crate::error::{BodyRole, Result, SimError};
use crate::math::vec2::Vec2;
use crate::objects::freedom::Freedom;

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsBody {
    // Geometry
    pub half_width: f64, // Extent along the simulation axis, constant
    pub freedom: Freedom,

    // Primary state
    pub position: Vec2, // World position of the center of mass
    pub rotation: f64,  // Radians
    pub linear_velocity: Vec2,
    pub angular_velocity: f64,

    // Physical properties
    pub mass: f64,
    pub inv_mass: f64, // 1.0 / mass (0.0 for immovable)
}

impl PhysicsBody {
    /// Creates a body with the given mass, half-width and freedom, resting at the origin.
    /// A mass <= 0.0 or a fully locked freedom mask produces an immovable body.
    pub fn new(mass: f64, half_width: f64, freedom: Freedom) -> Self {
        let (mass, inv_mass) = if mass <= 0.0 || freedom.is_locked() {
            (0.0, 0.0)
        } else {
            (mass, 1.0 / mass)
        };

        Self {
            half_width,
            freedom,
            position: Vec2::ZERO,
            rotation: 0.0,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            mass,
            inv_mass,
        }
    }

    /// Creates an immovable body centered at `x` on the simulation axis.
    pub fn new_static(half_width: f64, x: f64) -> Self {
        Self::new(0.0, half_width, Freedom::LOCKED).at(x)
    }

    /// Moves the body to `x` on the simulation axis, builder style.
    pub fn at(mut self, x: f64) -> Self {
        self.position = Vec2::axial(x);
        self
    }

    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    pub fn axial_position(&self) -> f64 {
        self.position.x
    }

    pub fn axial_velocity(&self) -> f64 {
        self.linear_velocity.x
    }

    /// Overrides the axial velocity, leaving the lateral component untouched.
    pub fn set_axial_velocity(&mut self, v: f64) {
        self.linear_velocity = self.linear_velocity.with_x(v);
    }

    /// Shifts the body along the simulation axis by `dx`.
    pub fn translate_axial(&mut self, dx: f64) {
        self.position.x += dx;
    }

    /// Edge facing the negative end of the axis.
    pub fn left_edge(&self) -> f64 {
        self.position.x - self.half_width
    }

    /// Edge facing the positive end of the axis.
    pub fn right_edge(&self) -> f64 {
        self.position.x + self.half_width
    }

    pub fn momentum(&self) -> Vec2 {
        self.linear_velocity * self.mass
    }

    /// Rejects a body with no extent or a non-finite state.
    pub fn validate(&self, role: BodyRole) -> Result<()> {
        if !(self.half_width.is_finite() && self.half_width > 0.0) {
            return Err(SimError::invalid_config(format!(
                "{role} half_width must be positive and finite, got {}",
                self.half_width
            )));
        }
        if !(self.position.is_finite() && self.rotation.is_finite()) {
            return Err(SimError::invalid_config(format!("{role} placement must be finite")));
        }
        if !(self.linear_velocity.is_finite() && self.angular_velocity.is_finite()) {
            return Err(SimError::invalid_config(format!("{role} velocity must be finite")));
        }
        if !self.mass.is_finite() {
            return Err(SimError::invalid_config(format!("{role} mass must be finite")));
        }
        Ok(())
    }
}
