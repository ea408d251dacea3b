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
//! Default star system example
//!
//! Runs the built-in system (a star, four planets and one rocket on an
//! eccentric orbit) and prints energy, momentum and rocket statistics at
//! regular intervals. Nothing is written to disk.
//!
//! # Running
//!
//! ```bash
//! cargo run --example default_system --release
//! ```

use nbody_sim::init::{default_bodies, default_rockets};
use nbody_sim::io::TrajectoryStats;
use nbody_sim::{SimConfig, SimLimits, Simulation};

fn main() -> nbody_sim::Result<()> {
    println!("N-Body Simulator - Default System");
    println!("=================================\n");

    let config = SimConfig::default();
    let mut sim = Simulation::with_state(
        config,
        SimLimits::for_config(&config),
        &default_bodies(config.g),
        &default_rockets(config.g),
    )?;

    println!("Bodies:  {}", sim.bodies().len());
    println!("Rockets: {}", sim.rockets().len());
    println!("Steps:   {} (dt = {})\n", config.steps, config.dt);

    let initial_energy = sim.total_energy();
    let reports = 10;
    let chunk = config.steps / reports;

    println!("{:>6} {:>8} {:>14} {:>12} {:>10}", "step", "time", "energy drift", "|p|", "rocket r");
    for _ in 0..reports {
        sim.run(chunk);
        let (px, py) = sim.total_momentum();
        let drift = (sim.total_energy() - initial_energy) / initial_energy.abs();
        println!(
            "{:>6} {:>8.2} {:>14.3e} {:>12.3e} {:>10.3}",
            sim.step_count(),
            sim.time(),
            drift,
            (px * px + py * py).sqrt(),
            sim.rockets()[0].distance_from_origin()
        );
    }

    println!("\nRocket trajectories:");
    for (i, rocket) in sim.rockets().iter().enumerate() {
        let stats = TrajectoryStats::for_rocket(i, rocket, config.dt);
        println!(
            "  Rocket {}: {} samples, max distance {:.3}, average speed {:.3}",
            i, stats.trail_length, stats.max_distance, stats.average_speed
        );
    }

    Ok(())
}
