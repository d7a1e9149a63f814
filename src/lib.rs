pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::{Parameters, AU, G, TIMESTEP};
pub use simulation::trail::Trail;
pub use simulation::integrator::euler_step;
pub use simulation::scenario::Scenario;
pub use simulation::view::{Appearance, BodyView, FrameView, Presenter};
pub use configuration::config::{ScenarioConfig, ParametersConfig, DisplayConfig, BodyConfig};
pub use visualization::{orrery_vis2d::{run_2d, FrameStepPlugin}, headless::{run_headless, HeadlessPlugin}, projection::ScreenProjection};
