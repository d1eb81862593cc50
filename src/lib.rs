pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, DrawState, NVec2, System};
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::integrator::{symplectic_euler, velocity_verlet};
pub use simulation::params::Parameters;
pub use simulation::errors::{InvalidParameter, ScenarioError};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BodyConfig, EngineConfig, IntegratorConfig, ParametersConfig, ScenarioConfig,
};

pub use visualization::planetsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_gravity, bench_step_curve};
