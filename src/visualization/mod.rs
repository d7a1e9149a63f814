pub mod orrery_vis2d;
pub mod headless;
pub mod projection;
