//! Numerical and physical parameters for the simulation.
//!
//! `Parameters` holds the runtime constants:
//! - gravitational constant `G` and fixed step size `timestep`,
//! - `au`, the display length unit used by the viewer,
//! - `min_separation`, the clamp floor for close encounters,
//! - the optional trail length cap.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub timestep: f64, // simulated seconds advanced per step
    pub au: f64, // display length unit, meters (viewer scale and readouts only)
    pub min_separation: f64, // force-law clamp floor, meters
    pub trail_limit: Option<usize>, // max trail points per body, None = unbounded
}
