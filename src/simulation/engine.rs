//! High-level runtime engine settings.
//!
//! Selects the integrator used when building and running a `Scenario`.

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // euler or verlet
}
