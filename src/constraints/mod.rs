use crate::objects::body::PhysicsBody;

pub mod fixed_joint;

pub use fixed_joint::FixedJoint;

/// A constraint between bodies of the world, solved iteratively each step.
pub trait Constraint: std::fmt::Debug {
    /// Adjusts body velocities so the constrained bodies move consistently.
    fn solve_velocity(&self, bodies: &mut [PhysicsBody]);

    /// Adjusts body positions to remove accumulated drift.
    fn solve_position(&self, bodies: &mut [PhysicsBody]);

    /// Whether the constraint acts on the body at `idx`.
    fn involves(&self, idx: usize) -> bool;
}

/// Borrows two distinct bodies of a slice mutably.
/// Returns `None` if the indices coincide or are out of bounds.
pub(crate) fn get_mutable_body_pair(
    bodies: &mut [PhysicsBody],
    idx_a: usize,
    idx_b: usize,
) -> Option<(&mut PhysicsBody, &mut PhysicsBody)> {
    if idx_a == idx_b || idx_a >= bodies.len() || idx_b >= bodies.len() {
        return None;
    }

    // Ensure a < b for split_at_mut
    if idx_a < idx_b {
        let (slice_a, slice_b) = bodies.split_at_mut(idx_b);
        Some((&mut slice_a[idx_a], &mut slice_b[0]))
    } else {
        let (slice_b, slice_a) = bodies.split_at_mut(idx_a);
        Some((&mut slice_a[0], &mut slice_b[idx_b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::freedom::Freedom;

    fn bodies() -> Vec<PhysicsBody> {
        vec![
            PhysicsBody::new(1.0, 0.1, Freedom::AXIAL).at(0.0),
            PhysicsBody::new(2.0, 0.1, Freedom::AXIAL).at(1.0),
            PhysicsBody::new(3.0, 0.1, Freedom::AXIAL).at(2.0),
        ]
    }

    #[test]
    fn test_pair_in_order() {
        let mut bodies = bodies();
        let (a, b) = get_mutable_body_pair(&mut bodies, 0, 2).unwrap();
        assert_eq!(a.mass, 1.0);
        assert_eq!(b.mass, 3.0);
    }

    #[test]
    fn test_pair_reversed() {
        let mut bodies = bodies();
        let (a, b) = get_mutable_body_pair(&mut bodies, 2, 1).unwrap();
        assert_eq!(a.mass, 3.0);
        assert_eq!(b.mass, 2.0);
    }

    #[test]
    fn test_pair_rejects_same_or_out_of_bounds() {
        let mut bodies = bodies();
        assert!(get_mutable_body_pair(&mut bodies, 1, 1).is_none());
        assert!(get_mutable_body_pair(&mut bodies, 0, 3).is_none());
    }
}
