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
//! Orbital accuracy around a central star
//!
//! A lone star feels no force, so it stays at the origin and the rockets
//! trace Kepler orbits up to softening and integration error. Massive
//! companions pull the star as well, so their orbits are checked by
//! separation.

use approx::assert_relative_eq;
use nbody_sim::init::{circular_speed, default_rockets, orbital_period, CENTRAL_MASS};
use nbody_sim::state::{Body, Mass, Position, Velocity};
use nbody_sim::{SimConfig, SimLimits, Simulation};

fn star_system(dt: f64, steps: usize, rockets: &[(Position, Velocity)]) -> Simulation {
    let config = SimConfig { dt, steps, ..SimConfig::default() };
    let star = Body::new(Position::zero(), Velocity::zero(), Mass::new(CENTRAL_MASS));
    Simulation::with_state(config, SimLimits::for_config(&config), &[star], rockets).unwrap()
}

/// Steps until the rocket next crosses the +x axis moving counter-clockwise
fn steps_per_orbit(sim: &mut Simulation, rocket: usize, max_steps: usize) -> Option<usize> {
    let mut previous_y = sim.rockets()[rocket].position().y();
    for step in 1..=max_steps {
        sim.step();
        let p = sim.rockets()[rocket].position();
        if step > 10 && previous_y < 0.0 && p.y() >= 0.0 && p.x() > 0.0 {
            return Some(step);
        }
        previous_y = p.y();
    }
    None
}

#[test]
fn test_star_stays_fixed() {
    let r = 5.0;
    let v = circular_speed(1.0, CENTRAL_MASS, r);
    let mut sim = star_system(0.01, 100, &[(Position::new(r, 0.0), Velocity::new(0.0, v))]);
    sim.run(100);
    assert_eq!(sim.bodies()[0].position(), Position::zero());
}

#[test]
fn test_circular_orbit_returns_after_one_period() {
    let r = 5.0;
    let v = circular_speed(1.0, CENTRAL_MASS, r);
    let period = orbital_period(1.0, CENTRAL_MASS, r);
    let steps = (period / 0.01).round() as usize;

    let mut sim = star_system(0.01, steps, &[(Position::new(r, 0.0), Velocity::new(0.0, v))]);
    for _ in 0..steps {
        sim.step();
        let distance = sim.rockets()[0].distance_from_origin();
        assert!((distance - r).abs() < 0.1 * r, "radius left band: {}", distance);
    }

    let end = sim.rockets()[0].position();
    assert!(end.distance_to(&Position::new(r, 0.0)) < 0.1 * r, "ended at {:?}", end);
    assert!(sim.rockets()[0].is_active());
}

#[test]
fn test_massive_companion_circular_orbit() {
    let dt = 0.001;
    let r = 2.0;
    let v = circular_speed(1.0, CENTRAL_MASS, r);
    let steps = (orbital_period(1.0, CENTRAL_MASS, r) / dt).round() as usize;
    let bodies = [
        Body::new(Position::zero(), Velocity::zero(), Mass::new(CENTRAL_MASS)),
        Body::new(Position::new(r, 0.0), Velocity::new(0.0, v), Mass::new(1.0)),
    ];
    let config = SimConfig { dt, steps, ..SimConfig::default() };
    let mut sim = Simulation::with_state(config, SimLimits::for_config(&config), &bodies, &[]).unwrap();

    for _ in 0..steps {
        sim.compute_body_forces();
        sim.integrate_bodies();
        let separation = sim.bodies()[1].position().distance_to(&sim.bodies()[0].position());
        assert!((separation - r).abs() < 0.1 * r, "separation left band: {}", separation);
    }

    let final_r = sim.bodies()[1].position().distance_from_origin();
    assert!((final_r - r).abs() < 0.1 * r, "final radius {}", final_r);
}

#[test]
fn test_kepler_third_law() {
    let dt = 0.002;
    let radii = [3.0, 5.0];
    let rockets: Vec<_> = radii
        .iter()
        .map(|&r| (Position::new(r, 0.0), Velocity::new(0.0, circular_speed(1.0, CENTRAL_MASS, r))))
        .collect();

    let mut inner = star_system(dt, 10_000, &rockets);
    let mut outer = inner.clone();
    let t_inner = steps_per_orbit(&mut inner, 0, 10_000).expect("inner orbit did not close") as f64 * dt;
    let t_outer = steps_per_orbit(&mut outer, 1, 10_000).expect("outer orbit did not close") as f64 * dt;

    assert_relative_eq!(t_inner, orbital_period(1.0, CENTRAL_MASS, 3.0), max_relative = 0.02);
    assert_relative_eq!(t_outer, orbital_period(1.0, CENTRAL_MASS, 5.0), max_relative = 0.02);

    let ratio = (t_outer / t_inner).powi(2);
    assert_relative_eq!(ratio, (5.0_f64 / 3.0).powi(3), max_relative = 0.03);
}

#[test]
fn test_default_rocket_reaches_aphelion() {
    let dt = 0.001;
    let period = orbital_period(1.0, CENTRAL_MASS, 5.0);
    let steps = (period / dt).ceil() as usize;
    let mut sim = star_system(dt, steps, &default_rockets(1.0));

    // half an orbit from perihelion at r = 2 lands on aphelion at r = 8
    let half = steps / 2;
    sim.run(half);
    let p = sim.rockets()[0].position();
    assert_relative_eq!(p.distance_from_origin(), 8.0, max_relative = 0.03);
    assert!(p.x() < 0.0);

    sim.run(steps - half);
    let trail = sim.rockets()[0].trail();
    assert_relative_eq!(trail.max_distance_from_origin(), 8.0, max_relative = 0.03);
    assert_relative_eq!(sim.rockets()[0].distance_from_origin(), 2.0, max_relative = 0.1);
}
