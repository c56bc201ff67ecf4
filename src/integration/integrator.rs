use crate::objects::body::PhysicsBody;

/// Advances a body's position and rotation by one step of `dt`.
/// Velocities along frozen axes are discarded before the position update, so a
/// body never drifts off the axes its `Freedom` allows.
pub fn integrate(body: &mut PhysicsBody, dt: f64) {
    if body.is_static() {
        // Immovable body, do not integrate
        return;
    }

    // --- Linear Motion --- //
    body.linear_velocity = body.freedom.mask(body.linear_velocity);
    body.position += body.linear_velocity * dt;

    // --- Angular Motion --- //
    if !body.freedom.rotation {
        body.angular_velocity = 0.0;
        return;
    }
    body.rotation = wrap_angle(body.rotation + body.angular_velocity * dt);
}

/// Wraps an angle in radians to the range [-PI, PI].
fn wrap_angle(angle: f64) -> f64 {
    angle.sin().atan2(angle.cos())
}
