use orrery::{ScenarioConfig, Scenario};
use orrery::{run_2d, run_headless};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML under `scenarios/`; the built-in solar system when omitted
    #[arg(short, long)]
    file: Option<String>,

    /// Run without a window and log snapshots instead
    #[arg(long)]
    headless: bool,

    /// Frames to run in headless mode
    #[arg(long, default_value_t = 365)]
    frames: u64,

    /// Log every n-th frame in headless mode
    #[arg(long, default_value_t = 30)]
    log_every: u64,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = match &args.file {
        Some(file_name) => load_scenario_from_yaml(file_name)?,
        None => ScenarioConfig::solar_system(),
    };
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    if args.headless {
        run_headless(scenario, args.frames, args.log_every);
    }
    else {
        run_2d(scenario);
    }

    Ok(())
}
