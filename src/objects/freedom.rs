//! Degree-of-freedom masks for bodies confined to the simulation axis.

use crate::math::vec2::Vec2;

/// Which motions a body may perform. A frozen axis behaves as if the body had
/// infinite mass along it: the integrator never moves it and constraints never
/// push it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freedom {
    pub axial: bool,
    pub lateral: bool,
    pub rotation: bool,
}

impl Freedom {
    /// Immovable in every respect.
    pub const LOCKED: Freedom = Freedom { axial: false, lateral: false, rotation: false };
    /// Translation along the simulation axis only.
    pub const AXIAL: Freedom = Freedom { axial: true, lateral: false, rotation: false };
    /// Free in the plane, including rotation about the plane normal.
    pub const PLANAR: Freedom = Freedom { axial: true, lateral: true, rotation: true };

    pub fn is_locked(self) -> bool {
        !self.axial && !self.lateral && !self.rotation
    }

    /// Zeroes the components of `v` along frozen axes.
    pub fn mask(self, v: Vec2) -> Vec2 {
        Vec2::new(
            if self.axial { v.x } else { 0.0 },
            if self.lateral { v.y } else { 0.0 },
        )
    }

    /// Per-axis inverse mass: `inv_mass` on free axes, zero on frozen ones.
    pub fn inv_mass_per_axis(self, inv_mass: f64) -> Vec2 {
        self.mask(Vec2::new(inv_mass, inv_mass))
    }
}
