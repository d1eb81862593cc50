use planetsim::{bench_gravity, bench_step_curve};
use planetsim::{run_2d, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file name inside the `scenarios/` directory
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Run the benchmark harness instead of the viewer
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    log::info!(
        "loaded scenario {:?} with {} bodies",
        args.file_name,
        scenario_cfg.bodies.len()
    );

    // Bad bodies abort here, before any window opens
    let scenario = Scenario::build_scenario(scenario_cfg).context("building scenario")?;
    run_2d(scenario);

    Ok(())
}
