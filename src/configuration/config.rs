//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (which integrator)
//! - [`ParametersConfig`] – physical constants and numerical parameters
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "euler"     # or "verlet"
//!
//! parameters:
//!   G: 6.67428e-11          # gravitational constant
//!   timestep: 86400.0       # one day per step, seconds
//!   au: 1.496e11            # display length unit, meters
//!   min_separation: 1.0e3   # clamp floor for close encounters, meters
//!   trail_limit: null       # optional trail cap, points per body
//!
//! bodies:
//!   - label: "Sun"
//!     x: [0.0, 0.0]         # meters
//!     v: [0.0, 0.0]         # m/s
//!     mass: 1.98892e30      # kg
//!     radius: 30.0          # drawn size, pixels
//!     color: [255, 255, 0]
//!     anchor: true
//!   - label: "Earth"
//!     x: [-1.496e11, 0.0]
//!     v: [0.0, 29783.0]
//!     mass: 5.9742e24
//!     radius: 16.0
//!     color: [100, 149, 237]
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! representation.

use serde::Deserialize;

/// Which integrator the engine advances the system with.
/// `integrator: "euler"` or `integrator: "verlet"`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Semi-implicit Euler. One force evaluation per step; velocity updates before position
    Euler,

    #[serde(rename = "verlet")] // Velocity-Verlet. Two force evaluations per step, better long-term energy behavior
    Verlet,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        IntegratorConfig::Euler
    }
}

/// High-level engine configuration.
#[derive(Deserialize, Debug, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig, // time integrator used for advancing the system state
}

/// Physical constants and numerical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant
    pub timestep: f64, // simulated seconds advanced per step
    pub au: f64, // display length unit in meters, used by the viewer only
    #[serde(default = "default_min_separation")]
    pub min_separation: f64, // force-law clamp floor, meters
    #[serde(default)]
    pub trail_limit: Option<usize>, // max trail points per body, omit for unbounded
}

fn default_min_separation() -> f64 {
    1.0e3
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub label: String, // display name
    pub x: [f64; 2], // initial position, meters
    #[serde(default)]
    pub v: [f64; 2], // initial velocity, m/s
    pub mass: f64, // mass, kg
    pub radius: f64, // drawn size, pixels
    pub color: [u8; 3], // RGB display color
    #[serde(default)]
    pub anchor: bool, // marks the reference body; at most one per scenario
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // engine-level configuration (integrator)
    pub parameters: ParametersConfig, // physical constants and numerical parameters
    pub bodies: Vec<BodyConfig>, // list of bodies that define the initial state
}
