use sgsim::{run_headless, Scenario, ScenarioConfig};
use sgsim::{bench_grid, bench_resolve};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "billiard.yaml")]
    file_name: String,

    /// Run the grid/resolver benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if args.bench {
        bench_grid();
        bench_resolve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    run_headless(
        &scenario.engine,
        &scenario.parameters,
        &mut scenario.system,
    )?;

    // Final kinematic state, one line per body.
    for (i, body) in scenario.system.bodies.iter().enumerate() {
        println!(
            "body {i:>3}: x = ({:>10.4}, {:>10.4})  v = ({:>8.4}, {:>8.4})",
            body.x.x, body.x.y, body.v.x, body.v.y
        );
    }

    Ok(())
}
