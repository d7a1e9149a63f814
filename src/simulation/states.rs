//! Core state types for the simulation.
//!
//! Defines the 2D body/system structs using `NVec2`.
//! The system owns its bodies in a plain `Vec` and addresses them by index;
//! it also tracks the elapsed simulated time `t`.

use nalgebra::Vector2;

use super::trail::Trail;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64, // mass (kg)
    pub radius: f64, // drawing radius (px)
    pub primary: bool, // gravitational centre, exactly one per system
    pub distance_to_primary: f64, // cached by `attraction`, display only
    pub trail: Trail, // past positions, oldest first
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64) -> Self {
        Self {
            x,
            v,
            m,
            radius,
            primary: false,
            distance_to_primary: 0.0,
            trail: Trail::new(),
        }
    }

    /// Mark this body as the gravitational centre
    pub fn as_primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // body arena, addressed by index
    pub t: f64, // elapsed simulated time (s)
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Kinetic plus pairwise potential energy (J)
    #[allow(non_snake_case)]
    pub fn total_energy(&self, G: f64) -> f64 {
        let kinetic: f64 = self.bodies.iter().map(Body::kinetic_energy).sum();

        let mut potential = 0.0;
        for (i, bi) in self.bodies.iter().enumerate() {
            for bj in &self.bodies[i + 1..] {
                potential -= G * bi.m * bj.m / (bj.x - bi.x).norm();
            }
        }

        kinetic + potential
    }

    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(Body::is_finite)
    }
}
