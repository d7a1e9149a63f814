//! Gravitational force between two bodies
//!
//! Newtonian point-mass gravity with no softening. Two bodies at the same
//! position give an infinite (or NaN) force; nothing here guards that.

use crate::simulation::states::{Body, NVec2};

impl Body {
    /// Force (N) this body feels due to `other`
    ///
    /// Points from `self` toward `other` with magnitude `G * m_self * m_other / d²`.
    /// When `other` is the primary, the separation is cached in
    /// `self.distance_to_primary`. Velocity and position are left alone.
    #[allow(non_snake_case)]
    pub fn attraction(&mut self, other: &Body, G: f64) -> NVec2 {
        // r is the displacement vector from self to other
        let r = other.x - self.x;
        let distance = (r.x * r.x + r.y * r.y).sqrt();

        if other.primary {
            self.distance_to_primary = distance;
        }

        let force = G * self.m * other.m / (distance * distance);

        // direction of r as an angle, decomposed back into components
        let theta = r.y.atan2(r.x);
        NVec2::new(theta.cos() * force, theta.sin() * force)
    }

    /// Sum of `attraction` over every body yielded by `others`
    #[allow(non_snake_case)]
    pub fn net_force<'a>(&mut self, others: impl Iterator<Item = &'a Body>, G: f64) -> NVec2 {
        let mut total = NVec2::zeros();
        for other in others {
            total += self.attraction(other, G);
        }
        total
    }
}
