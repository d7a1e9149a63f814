//! Fixed-step time integration for the simulation
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked first and the
//! already-updated velocity drives the position. Bodies are advanced one at a
//! time, in place, so later bodies in the arena see the new positions of
//! earlier ones within the same step.

use super::params::Parameters;
use super::states::{Body, NVec2, System};

impl Body {
    /// Advance velocity and position by `dt` under `force`, then record the trail
    pub fn integrate(&mut self, force: NVec2, dt: f64) {
        // v_n+1 = v_n + (F / m) * dt
        self.v += force / self.m * dt;

        // x_n+1 = x_n + v_n+1 * dt
        self.x += self.v * dt;

        self.trail.push(self.x);
    }
}

impl System {
    /// Advance body `i` by one step against every other body in the system
    pub fn update_position(&mut self, i: usize, params: &Parameters) {
        // Split the arena around i so `current` can be mutated while the
        // rest are read
        let (before, rest) = self.bodies.split_at_mut(i);
        let (current, after) = rest.split_at_mut(1);
        let current = &mut current[0];

        let force = current.net_force(before.iter().chain(after.iter()), params.G);
        current.integrate(force, params.timestep);
    }
}

/// Advance every body by one step, in arena order, and bump `sys.t`
pub fn euler_step(sys: &mut System, params: &Parameters) {
    for i in 0..sys.bodies.len() {
        sys.update_position(i, params);
    }
    sys.t += params.timestep;
}
