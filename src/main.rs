use moonfft::{load_yaml, FftScenarioConfig, MoonScenarioConfig};
use moonfft::{FftScenario, MoonScenario};
use moonfft::{axis_periods, run_steps, system_period, timed};
use moonfft::{bench_phase_curve, bench_steps};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Task {
    Moons,
    Fft,
    All,
}

#[derive(Parser, Debug)]
struct Args {
    /// Moon scenario under `scenarios/`
    #[arg(short, long, default_value = "moons.yaml")]
    moons: String,

    /// Digit transform scenario under `scenarios/`
    #[arg(short, long, default_value = "fft.yaml")]
    fft: String,

    #[arg(short, long, value_enum, default_value_t = Task::All)]
    task: Task,

    /// Run the scaling benchmarks instead
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn run_moons(file_name: &str) -> Result<()> {
    let cfg: MoonScenarioConfig = load_yaml(&scenario_path(file_name))?;
    let scenario = MoonScenario::build_scenario(cfg)?;
    tracing::info!(bodies = scenario.system.bodies.len(), file = file_name, "loaded moon scenario");

    println!("\nTASK 1:");
    println!("{}", "=".repeat(43));
    println!("Running moon simulations for {} timesteps", scenario.steps);
    let mut sys = scenario.system.clone();
    let (energy, secs) = timed(|| run_steps(&mut sys, scenario.steps));
    println!("Total system energy: {energy}");
    println!("Execution time: {secs:.3} seconds\n");

    println!("TASK 2:");
    println!("{}", "=".repeat(43));
    println!("Finding period of system");
    let ((periods, period), secs) = timed(|| {
        let periods = axis_periods(&scenario.system);
        (periods, system_period(&periods))
    });
    let period = period?;
    println!("Cycle lengths for each position component: {periods:?}");
    println!("Period length of moon system: {period}");
    println!("Execution time: {secs:.3} seconds\n");
    Ok(())
}

fn run_fft(file_name: &str) -> Result<()> {
    let cfg: FftScenarioConfig = load_yaml(&scenario_path(file_name))?;
    let scenario = FftScenario::build_scenario(cfg)?;
    tracing::info!(digits = scenario.digits.len(), file = file_name, "loaded fft scenario");

    let (part_1, secs) = timed(|| scenario.part_1());
    println!("Part 1:");
    println!("{}", part_1?);
    println!("Time to execute: {secs:.2}");

    let (part_2, secs) = timed(|| scenario.part_2());
    println!("Part 2:");
    println!("{}", part_2?);
    println!("Time to execute: {secs:.2}");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();

    if args.bench {
        bench_steps();
        bench_phase_curve();
        return Ok(());
    }

    if matches!(args.task, Task::Moons | Task::All) {
        run_moons(&args.moons)?;
    }
    if matches!(args.task, Task::Fft | Task::All) {
        run_fft(&args.fft)?;
    }

    Ok(())
}
