use attractor::{bench_update, run_2d, ConfigError, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};

use std::fs;
use std::path::{Path, PathBuf};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Print usage
    #[value(name = "help")]
    Help,
    /// Particles on a ring around the window center
    #[value(name = "Circle", alias = "circle")]
    Circle,
    /// Particles scattered inside the window
    #[value(name = "Random", alias = "random")]
    Random,
    /// Load a YAML scenario given with `-f`
    #[value(name = "Scenario", alias = "scenario")]
    Scenario,
    /// Time `update` for growing particle counts
    #[value(name = "Bench", alias = "bench")]
    Bench,
}

#[derive(Parser, Debug)]
#[command(name = "attractor", about = "Point masses pulling on each other inside a window")]
struct Args {
    #[arg(value_enum)]
    mode: Mode,

    /// Number of particles (Circle / Random)
    count: Option<usize>,

    /// Step-count knob, dt = 1 / (60 * steps * 0.1) (Circle / Random)
    steps: Option<usize>,

    /// Scenario file, relative paths resolve against `scenarios/`
    #[arg(short, long)]
    file: Option<PathBuf>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &Path) -> Result<Scenario> {
    let config_path = if file_name.is_absolute() || file_name.exists() {
        file_name.to_path_buf()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let text = fs::read_to_string(&config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;
    let cfg = ScenarioConfig::from_yaml(&text)
        .with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(Scenario::from_config(cfg)?)
}

fn run(args: Args) -> Result<()> {
    let scenario = match args.mode {
        Mode::Help => {
            Args::command().print_help()?;
            return Ok(());
        }
        Mode::Bench => {
            bench_update();
            return Ok(());
        }
        Mode::Circle | Mode::Random => {
            let count = args.count.ok_or(ConfigError::MissingArgument("count"))?;
            let steps = args.steps.ok_or(ConfigError::MissingArgument("steps"))?;
            if args.mode == Mode::Circle {
                Scenario::circle(count, steps)?
            } else {
                Scenario::random(count, steps)?
            }
        }
        Mode::Scenario => {
            let file = args.file.as_deref().ok_or(ConfigError::MissingArgument("--file"))?;
            load_scenario_from_yaml(file)?
        }
    };

    run_2d(scenario);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Bad input is reported, never turned into a failing exit code
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if let Err(print_err) = e.print() {
                log::error!("could not print usage: {print_err}");
            }
            return;
        }
    };

    if let Err(e) = run(args) {
        log::error!("{e:#}");
    }
}
