use crate::math::vec2::Vec2;
use crate::objects::body::PhysicsBody;
use super::Constraint;

/// Welds two bodies together: after formation they share one velocity and keep
/// the relative offset they had when the joint was created.
///
/// The shared velocity is the momentum-weighted mean of both bodies, computed
/// per axis with the inverse masses the bodies' `Freedom` allows, so a
/// perfectly inelastic collision falls out of the first velocity solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJoint {
    /// Index of the first rigid body.
    pub body_a_idx: usize,
    /// Index of the second rigid body.
    pub body_b_idx: usize,
    /// `b.position - a.position` at formation.
    pub offset: Vec2,
}

impl FixedJoint {
    pub fn new(body_a_idx: usize, body_b_idx: usize, offset: Vec2) -> Self {
        Self {
            body_a_idx,
            body_b_idx,
            offset,
        }
    }

    /// Creates a joint that preserves the bodies' current relative placement.
    pub fn between(bodies: &[PhysicsBody], body_a_idx: usize, body_b_idx: usize) -> Option<Self> {
        let a = bodies.get(body_a_idx)?;
        let b = bodies.get(body_b_idx)?;
        if body_a_idx == body_b_idx {
            return None;
        }
        Some(Self::new(body_a_idx, body_b_idx, b.position - a.position))
    }

    fn pair<'a>(&self, bodies: &'a mut [PhysicsBody]) -> Option<(&'a mut PhysicsBody, &'a mut PhysicsBody)> {
        let pair = super::get_mutable_body_pair(bodies, self.body_a_idx, self.body_b_idx);
        if pair.is_none() {
            tracing::warn!(a = self.body_a_idx, b = self.body_b_idx, "invalid body index in FixedJoint");
        }
        pair
    }
}

/// Splits `value` between two bodies in proportion to their per-axis inverse masses.
fn weighted(inv_a: f64, inv_b: f64) -> Option<(f64, f64)> {
    let total = inv_a + inv_b;
    if total == 0.0 {
        return None;
    }
    Some((inv_a / total, inv_b / total))
}

impl Constraint for FixedJoint {
    fn solve_velocity(&self, bodies: &mut [PhysicsBody]) {
        let Some((body_a, body_b)) = self.pair(bodies) else {
            return;
        };

        let inv_a = body_a.freedom.inv_mass_per_axis(body_a.inv_mass);
        let inv_b = body_b.freedom.inv_mass_per_axis(body_b.inv_mass);
        let v_a = body_a.freedom.mask(body_a.linear_velocity);
        let v_b = body_b.freedom.mask(body_b.linear_velocity);

        // Momentum-weighted common velocity: (m_a v_a + m_b v_b) / (m_a + m_b),
        // written with inverse masses so a frozen axis acts as infinite mass.
        let mut common = Vec2::ZERO;
        if let Some((wa, wb)) = weighted(inv_a.x, inv_b.x) {
            common.x = wb * v_a.x + wa * v_b.x;
        }
        if let Some((wa, wb)) = weighted(inv_a.y, inv_b.y) {
            common.y = wb * v_a.y + wa * v_b.y;
        }

        if !body_a.is_static() {
            body_a.linear_velocity = body_a.freedom.mask(common);
        }
        if !body_b.is_static() {
            body_b.linear_velocity = body_b.freedom.mask(common);
        }

        // A welded pair can only spin if both members can.
        if !(body_a.freedom.rotation && body_b.freedom.rotation) {
            body_a.angular_velocity = 0.0;
            body_b.angular_velocity = 0.0;
        }
    }

    fn solve_position(&self, bodies: &mut [PhysicsBody]) {
        let Some((body_a, body_b)) = self.pair(bodies) else {
            return;
        };

        let delta = (body_b.position - body_a.position) - self.offset;
        if delta.magnitude_squared() < 1e-24 {
            return;
        }

        let inv_a = body_a.freedom.inv_mass_per_axis(body_a.inv_mass);
        let inv_b = body_b.freedom.inv_mass_per_axis(body_b.inv_mass);

        if let Some((wa, wb)) = weighted(inv_a.x, inv_b.x) {
            body_a.position.x += delta.x * wa;
            body_b.position.x -= delta.x * wb;
        }
        if let Some((wa, wb)) = weighted(inv_a.y, inv_b.y) {
            body_a.position.y += delta.y * wa;
            body_b.position.y -= delta.y * wb;
        }
    }

    fn involves(&self, idx: usize) -> bool {
        self.body_a_idx == idx || self.body_b_idx == idx
    }
}
