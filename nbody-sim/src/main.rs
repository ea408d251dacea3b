// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Command-line driver
//!
//! `nbody-sim run` loads the configuration and initial states (falling back
//! to the built-in system when a file is missing), runs the simulation and
//! writes the output files. `nbody-sim stats` summarizes a saved trail file.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{Level, LevelFilter, Log, Metadata, Record};

use nbody_sim::config::{SimConfig, SimLimits};
use nbody_sim::init;
use nbody_sim::io::{self as sim_io, FrameLog, TrajectoryStats};
use nbody_sim::Simulation;

#[derive(Parser, Debug)]
#[command(name = "nbody-sim", version, about = "2D N-body simulator with rocket trajectories")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a simulation and write its output files
    Run(RunArgs),
    /// Print trajectory statistics for a saved trail file
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Configuration file (key=value lines)
    #[arg(long, default_value = "config.txt")]
    config: PathBuf,

    /// Initial bodies (x y vx vy mass per line)
    #[arg(long, default_value = "bodies.txt")]
    bodies: PathBuf,

    /// Initial rockets (x y vx vy per line)
    #[arg(long, default_value = "rockets.txt")]
    rockets: PathBuf,

    /// Directory for output files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Override the configured step count
    #[arg(long)]
    steps: Option<usize>,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Binary trail file written by `run`
    #[arg(default_value = "rocket_trails.bin")]
    file: PathBuf,

    /// Timestep used for average speeds
    #[arg(long, default_value_t = nbody_sim::config::DEFAULT_DT)]
    dt: f64,
}

/// Minimal stderr backend for the `log` facade
///
/// Filtering follows the global max level, so a single static instance
/// serves every verbosity.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Info => eprintln!("{}", record.args()),
            level => eprintln!("[{}] {}", level, record.args()),
        }
    }

    fn flush(&self) {}
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_filter(verbose));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Run(args) => run(args),
        Command::Stats(args) => stats(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let mut config = SimConfig::load(&args.config).unwrap_or_else(|e| {
        log::warn!("Using default configuration ({}: {})", args.config.display(), e);
        SimConfig::default()
    });
    if let Some(steps) = args.steps {
        config.steps = steps;
    }
    let limits = SimLimits::for_config(&config);

    let bodies = sim_io::load_bodies(&args.bodies, limits.max_bodies).unwrap_or_else(|e| {
        log::warn!("Using default bodies ({}: {})", args.bodies.display(), e);
        init::default_bodies(config.g)
    });
    let rockets = sim_io::load_rockets(&args.rockets, limits.max_rockets).unwrap_or_else(|e| {
        log::warn!("Using default rockets ({}: {})", args.rockets.display(), e);
        init::default_rockets(config.g)
    });

    let mut sim = Simulation::with_state(config, limits, &bodies, &rockets)
        .context("failed to set up simulation")?;

    let interval = config.frame_interval();
    log::info!(
        "Bodies: {}, rockets: {}, steps: {}, dt: {:.4}, frame interval: {} steps",
        sim.bodies().len(),
        sim.rockets().len(),
        config.steps,
        config.dt,
        interval
    );

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("failed to create {}", args.output_dir.display()))?;
    let out = |name: &str| args.output_dir.join(name);

    write_with(&out("metadata.txt"), |w| sim_io::write_metadata(w, &sim))?;

    let mut frames = FrameLog::new(create(&out("frames.log"))?)?;
    let initial_energy = sim.total_energy();

    for step in 0..config.steps {
        sim.step();
        if step % interval == 0 {
            frames.record(step / interval, step as u64, sim.rockets())?;
            log::debug!(
                "Step {:5}/{} - frame {}, {} active rockets",
                step,
                config.steps,
                step / interval,
                sim.active_rockets()
            );
        }
    }
    frames.finish()?;

    let final_energy = sim.total_energy();
    if initial_energy != 0.0 {
        log::info!(
            "Simulation complete: relative energy drift {:.3e}",
            (final_energy - initial_energy) / initial_energy.abs()
        );
    } else {
        log::info!("Simulation complete");
    }

    write_with(&out("final_rockets.txt"), |w| sim_io::write_final_state(w, sim.rockets()))?;
    sim_io::save_trails(out("rocket_trails.bin"), sim.rockets().iter().map(|r| r.trail()))?;

    let stats: Vec<TrajectoryStats> = sim
        .rockets()
        .iter()
        .enumerate()
        .map(|(i, rocket)| TrajectoryStats::for_rocket(i, rocket, config.dt))
        .collect();
    write_with(&out("rocket_stats.csv"), |w| sim_io::write_trajectory_stats(w, &stats))?;

    log::info!("Output files written to {}", args.output_dir.display());
    Ok(())
}

fn stats(args: StatsArgs) -> Result<()> {
    let trails = sim_io::load_trails(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let stats: Vec<TrajectoryStats> = trails
        .iter()
        .enumerate()
        .map(|(i, trail)| TrajectoryStats::for_trail(i, trail, args.dt))
        .collect();
    sim_io::write_trajectory_stats(io::stdout().lock(), &stats)?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn write_with<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(BufWriter<File>) -> nbody_sim::Result<()>,
{
    write(create(path)?).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("Saved {}", path.display());
    Ok(())
}
