//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - per-body appearance and display settings for the presentation layer
//!
//! The scenario is inserted into Bevy as a `Resource` and driven one frame
//! at a time by the viewer or the headless runner.

use anyhow::Result;
use bevy::log::warn;
use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, DisplayConfig, ScenarioConfig};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::view::{overlay_text, Appearance, FrameView};

/// Bevy resource representing a fully-initialized simulation scenario
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub display: DisplayConfig,
    pub system: System,
    pub appearance: Vec<Appearance>, // parallel to `system.bodies`
    pub frame: u64, // frames advanced so far
    pub diverged: bool, // state has gone non-finite, warned once
}

impl Scenario {
    /// Validate `cfg` and build the runtime scenario from it
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        cfg.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| {
            let body = Body::new(
                NVec2::new(bc.x[0], bc.x[1]),
                NVec2::new(bc.v[0], bc.v[1]),
                bc.m,
                bc.radius,
            );
            if bc.primary { body.as_primary() } else { body }
        }).collect();

        let appearance = cfg.bodies.iter().map(|bc| Appearance {
            name: bc.name.clone(),
            color: bc.color,
        }).collect();

        let parameters = Parameters {
            G: cfg.parameters.G,
            timestep: cfg.parameters.timestep,
        };

        Ok(Self {
            parameters,
            display: cfg.display,
            system: System::new(bodies),
            appearance,
            frame: 0,
            diverged: false,
        })
    }

    /// Advance every body by one timestep
    pub fn advance(&mut self) {
        euler_step(&mut self.system, &self.parameters);
        self.frame += 1;

        // Coincident bodies are not guarded against; report it and carry on
        if !self.diverged && !self.system.is_finite() {
            self.diverged = true;
            warn!("frame {}: body state is no longer finite (coincident bodies?)", self.frame);
        }
    }

    /// Plain-data snapshot of the current state
    pub fn frame_view(&self) -> FrameView {
        FrameView::capture(
            self.frame,
            &self.system,
            &self.appearance,
            overlay_text(self.display.scaling_factor),
        )
    }
}
