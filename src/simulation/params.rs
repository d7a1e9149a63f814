//! Physical constants and runtime parameters for the simulation
//!
//! `Parameters` holds the settings the integrator reads every step:
//! - gravitational constant `G`,
//! - fixed step size `timestep` (one simulated day by default)

/// Astronomical unit in meters
pub const AU: f64 = 149_597_870_700.0;

/// Gravitational constant (m³/(kg·s²))
pub const G: f64 = 6.67428e-11;

/// One simulated day in seconds
pub const TIMESTEP: f64 = 3600.0 * 24.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub timestep: f64, // step size, seconds of simulated time per frame
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G,
            timestep: TIMESTEP,
        }
    }
}
