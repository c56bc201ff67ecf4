use crate::error::{BodyRole, Result, SimError};
use crate::objects::body::PhysicsBody;

/// Which bumper a contact is against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumperSide {
    Left,
    Right,
}

/// An overlap between the car and one bumper along the simulation axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxialContact {
    pub side: BumperSide,
    /// How far the facing edges have passed each other. Always positive.
    pub depth: f64,
}

/// Signed distance between the car's left edge and the left bumper's facing
/// edge. Negative means overlap.
pub fn left_gap(car: &PhysicsBody, left_bumper: &PhysicsBody) -> f64 {
    car.left_edge() - left_bumper.right_edge()
}

/// Signed distance between the right bumper's facing edge and the car's right
/// edge. Negative means overlap.
pub fn right_gap(car: &PhysicsBody, right_bumper: &PhysicsBody) -> f64 {
    right_bumper.left_edge() - car.right_edge()
}

pub fn left_contact(car: &PhysicsBody, left_bumper: &PhysicsBody) -> Option<AxialContact> {
    let gap = left_gap(car, left_bumper);
    (gap < 0.0).then_some(AxialContact { side: BumperSide::Left, depth: -gap })
}

pub fn right_contact(car: &PhysicsBody, right_bumper: &PhysicsBody) -> Option<AxialContact> {
    let gap = right_gap(car, right_bumper);
    (gap < 0.0).then_some(AxialContact { side: BumperSide::Right, depth: -gap })
}

/// Fails when the car starts inside either bumper. Touching edges are fine.
pub fn check_clear_start(
    car: &PhysicsBody,
    left_bumper: &PhysicsBody,
    right_bumper: &PhysicsBody,
) -> Result<()> {
    for (gap, role) in [
        (left_gap(car, left_bumper), BodyRole::LeftBumper),
        (right_gap(car, right_bumper), BodyRole::RightBumper),
    ] {
        if gap < 0.0 {
            return Err(SimError::invalid_config(format!(
                "car starts overlapping the {role} by {}",
                -gap
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::freedom::Freedom;
    const EPSILON: f64 = 1e-10;

    fn car_at(x: f64) -> PhysicsBody {
        PhysicsBody::new(1.0, 0.15, Freedom::AXIAL).at(x)
    }

    #[test]
    fn test_gaps_when_clear() {
        let left = PhysicsBody::new(1.0, 0.05, Freedom::AXIAL).at(-1.0);
        let right = PhysicsBody::new_static(0.05, 1.0);
        let car = car_at(0.0);

        // -0.15 - (-0.95) = 0.8
        assert!((left_gap(&car, &left) - 0.8).abs() < EPSILON);
        // 0.95 - 0.15 = 0.8
        assert!((right_gap(&car, &right) - 0.8).abs() < EPSILON);
        assert!(left_contact(&car, &left).is_none());
        assert!(right_contact(&car, &right).is_none());
    }

    #[test]
    fn test_approaching_right_bumper() {
        let right = PhysicsBody::new_static(0.05, 1.0);
        let car = car_at(0.75); // right edge 0.9, below the face at 0.95
        assert!(right_contact(&car, &right).is_none());
        let car = car_at(0.8); // right edge on the face
        assert!(right_gap(&car, &right).abs() < EPSILON);
    }

    #[test]
    fn test_right_overlap_depth() {
        let right = PhysicsBody::new_static(0.05, 1.0);
        let car = car_at(0.83); // right edge 0.98
        let contact = right_contact(&car, &right).unwrap();
        assert_eq!(contact.side, BumperSide::Right);
        assert!((contact.depth - 0.03).abs() < EPSILON);
    }

    #[test]
    fn test_left_overlap_depth() {
        let left = PhysicsBody::new(1.0, 0.05, Freedom::AXIAL).at(-1.0);
        let car = car_at(-0.79); // left edge -0.94, face at -0.95
        assert!(left_contact(&car, &left).is_none());

        let car = car_at(-0.82); // left edge -0.97
        let contact = left_contact(&car, &left).unwrap();
        assert_eq!(contact.side, BumperSide::Left);
        assert!((contact.depth - 0.02).abs() < EPSILON);
    }

    #[test]
    fn test_check_clear_start() {
        let left = PhysicsBody::new(1.0, 0.05, Freedom::AXIAL).at(-1.0);
        let right = PhysicsBody::new_static(0.05, 1.0);
        assert!(check_clear_start(&car_at(0.0), &left, &right).is_ok());

        let err = check_clear_start(&car_at(0.9), &left, &right).unwrap_err();
        assert!(err.to_string().contains("right bumper"));

        let err = check_clear_start(&car_at(-0.85), &left, &right).unwrap_err();
        assert!(err.to_string().contains("left bumper"));
    }
}
