//! Plain-data snapshots handed to the presentation layer
//!
//! The physics core never touches a display. After each step the scenario
//! builds a `FrameView`; anything implementing `Presenter` (the Bevy viewer,
//! the headless logger, a test recorder) consumes it.

use super::states::{Body, NVec2, System};

/// Per-body presentation data that the physics does not need
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub name: String,
    pub color: [u8; 3], // sRGB
}

#[derive(Debug, Clone)]
pub struct BodyView {
    pub name: String,
    pub x: NVec2, // position (m)
    pub color: [u8; 3],
    pub radius: f64, // px
    pub label: Option<String>, // distance to primary, None for the primary itself
    pub trail: Vec<NVec2>, // oldest first
}

#[derive(Debug, Clone, Default)]
pub struct FrameView {
    pub frame: u64,
    pub t: f64, // elapsed simulated seconds
    pub bodies: Vec<BodyView>,
    pub overlay: String,
}

/// Something that can show a frame
pub trait Presenter {
    fn present(&mut self, frame: &FrameView);
}

/// "<km to one decimal> km"
pub fn distance_label(distance_m: f64) -> String {
    format!("{:.1} km", distance_m / 1000.0)
}

/// "Scaling Factor: <k>"
pub fn overlay_text(scaling_factor: f64) -> String {
    format!("Scaling Factor: {scaling_factor}")
}

impl BodyView {
    pub fn from_body(body: &Body, appearance: &Appearance) -> Self {
        Self {
            name: appearance.name.clone(),
            x: body.x,
            color: appearance.color,
            radius: body.radius,
            label: (!body.primary).then(|| distance_label(body.distance_to_primary)),
            trail: body.trail.iter().copied().collect(),
        }
    }
}

impl FrameView {
    /// Snapshot `sys`, pairing bodies with `appearance` by index
    pub fn capture(frame: u64, sys: &System, appearance: &[Appearance], overlay: String) -> Self {
        let bodies = sys
            .bodies
            .iter()
            .zip(appearance.iter())
            .map(|(b, a)| BodyView::from_body(b, a))
            .collect();

        Self {
            frame,
            t: sys.t,
            bodies,
            overlay,
        }
    }
}
