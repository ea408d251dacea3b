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
//! Escape velocity example
//!
//! Launches rockets from r = 2 around a lone star at fractions of the local
//! escape speed and reports which ones cross the escape radius.

use nbody_sim::init::{escape_speed, CENTRAL_MASS};
use nbody_sim::state::{Body, Mass, Position, Velocity};
use nbody_sim::{SimConfig, SimLimits, Simulation};

fn main() -> nbody_sim::Result<()> {
    println!("N-Body Simulator - Escape Velocity");
    println!("==================================\n");

    let r = 2.0;
    let v_esc = escape_speed(1.0, CENTRAL_MASS, r);
    let fractions = [0.8, 0.95, 1.05, 1.1, 1.5];

    let config = SimConfig::default();
    let limits = SimLimits::for_config(&config);
    let star = Body::new(Position::zero(), Velocity::zero(), Mass::new(CENTRAL_MASS));
    let rockets: Vec<_> = fractions
        .iter()
        .map(|f| (Position::new(r, 0.0), Velocity::new(0.0, f * v_esc)))
        .collect();

    let mut sim = Simulation::with_state(config, limits, &[star], &rockets)?;
    println!("Escape speed at r = {}: {:.3}", r, v_esc);
    println!("Escape radius: {}\n", limits.escape_radius);

    for _ in 0..config.steps {
        for event in sim.step().escapes {
            println!(
                "t = {:6.2}: rocket {} ({:.2} v_esc) escaped at distance {:.2}",
                sim.time(),
                event.rocket,
                fractions[event.rocket],
                event.distance
            );
        }
    }

    println!();
    for (i, rocket) in sim.rockets().iter().enumerate() {
        println!(
            "Rocket {} ({:.2} v_esc): {}, {} trail samples, farthest {:.2}",
            i,
            fractions[i],
            if rocket.is_active() { "bound" } else { "escaped" },
            rocket.trail().len(),
            rocket.trail().max_distance_from_origin()
        );
    }

    Ok(())
}
