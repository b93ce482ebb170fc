use orbitsim::{load_scenario, run_2d, Scenario, ScenarioConfig};
use orbitsim::simulation::diagnostics::{total_energy, total_momentum};
use orbitsim::simulation::presets::{solar_system, AU, DAY};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

/// Steps taken by a headless run with neither --steps nor t_end
const DEFAULT_HEADLESS_STEPS: u64 = 1000;

#[derive(Parser, Debug)]
#[command(about = "2D sun and planets gravity simulation")]
struct Args {
    /// Scenario file, looked up in scenarios/ unless it is an existing path
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Use the built-in solar system instead of a scenario file
    #[arg(long)]
    builtin: bool,

    /// Run without a window and log conservation diagnostics
    #[arg(long)]
    headless: bool,

    /// Number of steps for a headless run (defaults to t_end / h0)
    #[arg(long)]
    steps: Option<u64>,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    load_scenario(&config_path)
}

fn run_headless(mut scenario: Scenario, steps: Option<u64>) {
    let steps = steps
        .or_else(|| {
            scenario
                .parameters
                .t_end
                .map(|t_end| (t_end / scenario.parameters.h0).ceil() as u64)
        })
        .unwrap_or(DEFAULT_HEADLESS_STEPS);

    let e0 = total_energy(&scenario.system);
    let p0 = total_momentum(&scenario.system);
    info!(steps, energy = e0, momentum = ?(p0.x, p0.y), "headless run starting");

    // one physics tick per iteration regardless of steps_per_frame
    scenario.engine.steps_per_frame = 1;
    for _ in 0..steps {
        scenario.step();
    }

    let e1 = total_energy(&scenario.system);
    let p1 = total_momentum(&scenario.system);
    info!(
        days = scenario.system.time() / DAY,
        energy_drift = (e1 - e0) / e0.abs(),
        momentum_drift = (p1 - p0).norm(),
        "headless run finished"
    );

    for body in scenario.system.bodies() {
        let x = body.position() / AU;
        let v = body.velocity();
        info!(name = %body.name, x_au = x.x, y_au = x.y, vx = v.x, vy = v.y, "final state");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // the viewer gets its subscriber from bevy's LogPlugin
    if args.headless {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    let scenario = if args.builtin {
        Scenario::from_system(solar_system())
    } else {
        let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
        Scenario::build_scenario(scenario_cfg)?
    };

    if args.headless {
        run_headless(scenario, args.steps);
    }
    else {
        run_2d(scenario);
    }

    Ok(())
}
