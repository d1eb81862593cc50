//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! [`Scenario`] containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0, anchor resolved)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! physics-step and rendering systems.

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, IntegratorConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::errors::ScenarioError;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::{symplectic_euler, velocity_verlet};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Bevy resource representing a fully-initialized simulation scenario.
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// engine settings, parameters, current system state, and the set of active
/// force terms.
#[derive(Resource, Debug)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    /// Assemble the runtime bundle, validating every body on the way.
    ///
    /// Fails when a body carries a non-positive mass or radius, or when the
    /// configuration marks more than one body as the anchor. Nothing runs
    /// with a half-valid body set.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        // Bodies: map `BodyConfig` -> runtime `Body`, resolving the anchor
        // index while we walk the list
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        let mut anchor: Option<usize> = None;

        for (i, bc) in cfg.bodies.iter().enumerate() {
            if bc.anchor {
                if let Some(first) = anchor {
                    return Err(ScenarioError::DuplicateAnchor {
                        first: cfg.bodies[first].label.clone(),
                        second: bc.label.clone(),
                    });
                }
                anchor = Some(i);
            }
            bodies.push(body_from_config(bc)?);
        }

        // Initial system state: bodies at t = 0
        let mut system = System::new(bodies);
        if let Some(i) = anchor {
            system.set_anchor(i);
        }

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            timestep: p_cfg.timestep,
            au: p_cfg.au,
            min_separation: p_cfg.min_separation,
            trail_limit: p_cfg.trail_limit,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            integrator: cfg.engine.integrator,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            min_separation: parameters.min_separation,
        });

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }

    /// Advance the simulation by exactly one fixed time step.
    ///
    /// The single entry point the driver calls once per frame. Never fails
    /// on a scenario that passed [`Scenario::build_scenario`].
    pub fn step(&mut self) {
        let Scenario {
            engine,
            parameters,
            system,
            forces,
        } = self;

        match engine.integrator {
            IntegratorConfig::Euler => symplectic_euler(system, forces, parameters),
            IntegratorConfig::Verlet => velocity_verlet(system, forces, parameters),
        }
    }
}

fn body_from_config(bc: &BodyConfig) -> Result<Body, ScenarioError> {
    let body = Body::new(
        NVec2::new(bc.x[0], bc.x[1]),
        NVec2::new(bc.v[0], bc.v[1]),
        bc.mass,
        bc.radius,
        bc.color,
        bc.label.clone(),
    )?;
    Ok(body)
}
