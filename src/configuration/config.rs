//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and the fixed step size
//! - [`DisplayConfig`]    – window size, scaling factor and frame rate
//! - [`BodyConfig`]       – initial state and appearance for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Without a file the compiled-in [`ScenarioConfig::solar_system`] is used.
//!
//! # YAML format
//! A two-body scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 6.67428e-11          # gravitational constant
//!   timestep: 86400.0       # seconds of simulated time per frame
//!
//! display:
//!   width: 1550.0
//!   height: 850.0
//!   scaling_factor: 3.0     # 1 AU = 250 / scaling_factor pixels
//!   fps: 60.0
//!
//! bodies:
//!   - name: Sun
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.98892e30
//!     radius: 13.3
//!     color: [ 255, 255, 0 ]
//!     primary: true
//!   - name: Earth
//!     x: [ -1.495978707e11, 0.0 ]
//!     v: [ 0.0, 29783.0 ]
//!     m: 5.9722e24
//!     radius: 5.3
//!     color: [ 67, 115, 252 ]
//! ```

use anyhow::{ensure, Result};
use serde::Deserialize;

use crate::simulation::params::{AU, G, TIMESTEP};

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default = "default_timestep")]
    pub timestep: f64, // time step size (s)
}

/// Window and projection settings, any field left out takes its default
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: f32, // window width (px)
    pub height: f32, // window height (px)
    pub scaling_factor: f64, // zoom-out factor, 1 AU = 250 / scaling_factor px
    pub fps: f64, // frames (and physics steps) per real second
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub x: Vec<f64>, // initial position (m)
    pub v: Vec<f64>, // initial velocity (m/s)
    pub m: f64, // mass (kg)
    pub radius: f64, // drawing radius (px)
    pub color: [u8; 3], // sRGB
    #[serde(default)]
    pub primary: bool, // gravitational centre, exactly one per scenario
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // physical parameters
    #[serde(default)]
    pub display: DisplayConfig, // presentation settings
    pub bodies: Vec<BodyConfig>, // bodies that define the initial state of the system
}

fn default_g() -> f64 {
    G
}

fn default_timestep() -> f64 {
    TIMESTEP
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G,
            timestep: TIMESTEP,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1550.0,
            height: 850.0,
            scaling_factor: 3.0,
            fps: 60.0,
        }
    }
}

// sRGB palette
const YELLOW: [u8; 3] = [255, 255, 0];
const WHITE: [u8; 3] = [255, 255, 255];
const DARK_GREY: [u8; 3] = [80, 78, 81];
const BLUE: [u8; 3] = [67, 115, 252];
const RED: [u8; 3] = [188, 39, 50];
const ORANGE: [u8; 3] = [252, 186, 3];
const MILKY_COFFEE: [u8; 3] = [218, 184, 122];
const AQUA: [u8; 3] = [196, 234, 237];

impl BodyConfig {
    /// A body starting on the x axis (`x_au` AU out) moving along y at `vy` m/s
    fn on_x_axis(name: &str, x_au: f64, vy: f64, m: f64, radius: f64, color: [u8; 3]) -> Self {
        Self {
            name: name.to_string(),
            x: vec![x_au * AU, 0.0],
            v: vec![0.0, vy],
            m,
            radius,
            color,
            primary: false,
        }
    }
}

impl ScenarioConfig {
    /// The Sun and the eight planets at their literal starting conditions
    pub fn solar_system() -> Self {
        let display = DisplayConfig::default();
        let k = display.scaling_factor;

        let mut sun = BodyConfig::on_x_axis("Sun", 0.0, 0.0, 1.98892e30, 40.0 / k, YELLOW);
        sun.primary = true;

        let bodies = vec![
            sun,
            BodyConfig::on_x_axis("Mercury", 0.387, -47.4e3, 3.30e23, 9.5 / k, DARK_GREY),
            BodyConfig::on_x_axis("Venus", 0.723, -35.02e3, 4.8685e24, 14.0 / k, WHITE),
            BodyConfig::on_x_axis("Earth", -1.0, 29.783e3, 5.9722e24, 16.0 / k, BLUE),
            BodyConfig::on_x_axis("Mars", -1.524, 24.077e3, 6.39e23, 12.0 / k, RED),
            BodyConfig::on_x_axis("Jupiter", 5.2, -13.06e3, 1.89813e27, 24.5 / k, ORANGE),
            BodyConfig::on_x_axis("Saturn", 9.5, -9.68e3, 5.6834e26, 22.5 / k, MILKY_COFFEE),
            BodyConfig::on_x_axis("Uranus", -19.8, 6.8e3, 8.6810e25, 19.5 / k, AQUA),
            BodyConfig::on_x_axis("Neptune", -30.0, 5.43e3, 1.02413e26, 18.5 / k, BLUE),
        ];

        Self {
            parameters: ParametersConfig::default(),
            display,
            bodies,
        }
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.bodies.is_empty(), "scenario has no bodies");

        let primaries = self.bodies.iter().filter(|b| b.primary).count();
        ensure!(primaries == 1, "scenario needs exactly one primary body, found {primaries}");

        for b in &self.bodies {
            ensure!(b.m.is_finite() && b.m > 0.0, "body {:?}: mass must be positive, got {}", b.name, b.m);
            ensure!(b.x.len() == 2, "body {:?}: position must have 2 components, got {}", b.name, b.x.len());
            ensure!(b.radius.is_finite() && b.radius >= 0.0, "body {:?}: radius must be non-negative, got {}", b.name, b.radius);
            ensure!(b.v.len() == 2, "body {:?}: velocity must have 2 components, got {}", b.name, b.v.len());
            ensure!(
                b.x.iter().chain(b.v.iter()).all(|c| c.is_finite()),
                "body {:?}: position and velocity must be finite",
                b.name
            );
        }

        let p = &self.parameters;
        ensure!(p.timestep.is_finite() && p.timestep > 0.0, "timestep must be positive, got {}", p.timestep);
        ensure!(p.G.is_finite() && p.G > 0.0, "G must be positive, got {}", p.G);

        let d = &self.display;
        ensure!(d.scaling_factor > 0.0, "scaling_factor must be positive, got {}", d.scaling_factor);
        ensure!(d.fps > 0.0, "fps must be positive, got {}", d.fps);
        ensure!(d.width > 0.0 && d.height > 0.0, "window size must be positive, got {}x{}", d.width, d.height);

        Ok(())
    }
}
