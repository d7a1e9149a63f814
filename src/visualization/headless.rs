//! Windowless runner
//!
//! Drives the same per-frame step as the viewer on `MinimalPlugins`, paced at
//! the scenario's frame rate, and logs snapshots instead of drawing them.
//! Stops after a fixed number of frames.

use std::time::Duration;

use bevy::app::{AppExit, ScheduleRunnerPlugin};
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

use crate::simulation::params::{AU, TIMESTEP};
use crate::simulation::scenario::Scenario;
use crate::simulation::view::{FrameView, Presenter};

/// Logs one line per body every `every` frames
pub struct LogPresenter {
    pub every: u64,
}

impl LogPresenter {
    /// `every == 0` turns logging off
    pub fn should_log(&self, frame: u64) -> bool {
        self.every != 0 && frame % self.every == 0
    }
}

/// Simulated seconds expressed in days (one default timestep each)
pub fn elapsed_days(t: f64) -> f64 {
    t / TIMESTEP
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &FrameView) {
        if !self.should_log(frame.frame) {
            return;
        }

        info!("frame {} ({:.1} days) {}", frame.frame, elapsed_days(frame.t), frame.overlay);
        for b in &frame.bodies {
            info!(
                "  {:<8} x = ({:+.4}, {:+.4}) AU  trail = {:4}  {}",
                b.name,
                b.x.x / AU,
                b.x.y / AU,
                b.trail.len(),
                b.label.as_deref().unwrap_or("primary"),
            );
        }
    }
}

#[derive(Resource)]
struct HeadlessRun {
    frames: u64,
    presenter: LogPresenter,
    initial_energy: f64,
}

/// Steps the `Scenario` resource once per update, logs through `LogPresenter`
/// and sends `AppExit::Success` once `frames` frames have been advanced
pub struct HeadlessPlugin {
    pub frames: u64,
    pub log_every: u64,
}

impl Plugin for HeadlessPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(HeadlessRun {
            frames: self.frames,
            presenter: LogPresenter { every: self.log_every },
            initial_energy: 0.0,
        })
        .add_systems(Startup, announce_system)
        .add_systems(Update, headless_step_system);
    }
}

pub fn run_headless(scenario: Scenario, frames: u64, log_every: u64) {
    let wait = Duration::from_secs_f64(1.0 / scenario.display.fps);

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(wait)))
        .add_plugins(LogPlugin {
            level: Level::INFO,
            ..Default::default()
        })
        .insert_resource(scenario)
        .add_plugins(HeadlessPlugin { frames, log_every })
        .run();
}

fn announce_system(scenario: Res<Scenario>, mut run: ResMut<HeadlessRun>) {
    run.initial_energy = scenario.system.total_energy(scenario.parameters.G);
    info!(
        "run_headless: {} bodies, {} frames of {} s",
        scenario.system.bodies.len(),
        run.frames,
        scenario.parameters.timestep
    );
}

fn headless_step_system(mut scenario: ResMut<Scenario>, mut run: ResMut<HeadlessRun>, mut exit: EventWriter<AppExit>) {
    if scenario.frame < run.frames {
        scenario.advance();
        let frame = scenario.frame_view();
        run.presenter.present(&frame);
    }

    if scenario.frame >= run.frames {
        let energy = scenario.system.total_energy(scenario.parameters.G);
        let drift = (energy - run.initial_energy) / run.initial_energy.abs();
        info!("done after {} frames, relative energy drift {:+.3e}", scenario.frame, drift);
        exit.send(AppExit::Success);
    }
}
