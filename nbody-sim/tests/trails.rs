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
//! Trail growth, capacity and escape behavior through the full step loop

use nbody_sim::init::{escape_speed, CENTRAL_MASS};
use nbody_sim::state::{Body, Mass, Position, Velocity};
use nbody_sim::{SimConfig, SimLimits, Simulation};
use proptest::prelude::*;

fn star() -> Body {
    Body::new(Position::zero(), Velocity::zero(), Mass::new(CENTRAL_MASS))
}

#[test]
fn test_trail_grows_one_sample_per_step_until_full() {
    let config = SimConfig { steps: 20, ..SimConfig::default() };
    let limits = SimLimits::for_config(&config).with_trail_capacity(10);
    let rockets = [(Position::new(5.0, 0.0), Velocity::new(0.0, 4.0))];
    let mut sim = Simulation::with_state(config, limits, &[star()], &rockets).unwrap();

    assert_eq!(sim.rockets()[0].trail().len(), 1);
    assert_eq!(sim.rockets()[0].trail().get(0), Some(Position::new(5.0, 0.0)));

    for step in 1..=20 {
        sim.step();
        let trail = sim.rockets()[0].trail();
        assert_eq!(trail.len(), (step + 1).min(10));
        assert!(sim.rockets()[0].is_active());
    }
    // the rocket keeps moving after its trail fills
    let last = sim.rockets()[0].trail().last().unwrap();
    assert_ne!(last, sim.rockets()[0].position());
}

#[test]
fn test_trail_samples_follow_the_rocket() {
    let config = SimConfig { steps: 5, ..SimConfig::default() };
    let rockets = [(Position::new(0.0, 3.0), Velocity::new(-5.0, 0.0))];
    let mut sim = Simulation::with_state(config, SimLimits::for_config(&config), &[star()], &rockets).unwrap();

    let mut expected = vec![sim.rockets()[0].position()];
    for _ in 0..4 {
        sim.step();
        expected.push(sim.rockets()[0].position());
    }
    let recorded: Vec<Position> = sim.rockets()[0].trail().iter().collect();
    assert_eq!(recorded, expected);
}

#[test]
fn test_fast_rocket_escapes_and_is_frozen() {
    let r = 2.0;
    let v = 1.1 * escape_speed(1.0, CENTRAL_MASS, r);
    let config = SimConfig { steps: 3000, ..SimConfig::default() };
    let rockets = [(Position::new(r, 0.0), Velocity::new(0.0, v))];
    let mut sim = Simulation::with_state(config, SimLimits::for_config(&config), &[star()], &rockets).unwrap();

    let mut passed_ten = None;
    let mut escapes = Vec::new();
    for _ in 0..3000 {
        let report = sim.step();
        if passed_ten.is_none() && sim.rockets()[0].distance_from_origin() > 10.0 {
            passed_ten = Some(report.step);
        }
        escapes.extend(report.escapes);
    }

    let passed_ten = passed_ten.expect("rocket never passed r = 10");
    assert!(passed_ten <= 1000, "took {} steps to pass r = 10", passed_ten);

    assert_eq!(escapes.len(), 1, "escape must be reported exactly once");
    let event = escapes[0];
    assert_eq!(event.rocket, 0);
    assert!(event.distance > 50.0);

    let rocket = &sim.rockets()[0];
    assert!(!rocket.is_active());
    assert_eq!(rocket.position(), event.position);
    assert_eq!(rocket.trail().last(), Some(event.position));
    assert_eq!(sim.active_rockets(), 0);

    // further steps leave the inactive rocket alone
    let frozen = rocket.clone();
    sim.run(10);
    assert_eq!(&sim.rockets()[0], &frozen);
}

#[test]
fn test_bound_rocket_never_escapes() {
    let r = 2.0;
    let v = 0.9 * escape_speed(1.0, CENTRAL_MASS, r);
    let config = SimConfig { steps: 2000, ..SimConfig::default() };
    let rockets = [(Position::new(r, 0.0), Velocity::new(0.0, v))];
    let mut sim = Simulation::with_state(config, SimLimits::for_config(&config), &[star()], &rockets).unwrap();

    let escapes = sim.run(2000);
    assert!(escapes.is_empty());
    assert!(sim.rockets()[0].is_active());
    assert!(sim.rockets()[0].trail().max_distance_from_origin() < 50.0);
}

#[test]
fn test_only_the_escaping_rocket_stops() {
    let config = SimConfig { steps: 10, ..SimConfig::default() };
    let limits = SimLimits::for_config(&config).with_escape_radius(5.0);
    let rockets = [
        (Position::new(4.99, 0.0), Velocity::new(10.0, 0.0)),
        (Position::new(1.0, 0.0), Velocity::new(0.0, 1.0)),
    ];
    let mut sim = Simulation::with_state(config, limits, &[], &rockets).unwrap();

    let report = sim.step();
    assert_eq!(report.escapes.len(), 1);
    assert_eq!(report.escapes[0].rocket, 0);
    assert!(!sim.rockets()[0].is_active());
    assert!(sim.rockets()[1].is_active());

    sim.run(5);
    assert_eq!(sim.rockets()[0].trail().len(), 2);
    assert_eq!(sim.rockets()[1].trail().len(), 7);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_trail_length_is_capped(capacity in 0usize..40, steps in 0usize..80) {
        let config = SimConfig { steps, ..SimConfig::default() };
        let limits = SimLimits::for_config(&config).with_trail_capacity(capacity);
        let rockets = [(Position::new(1.0, 1.0), Velocity::zero())];
        let mut sim = Simulation::with_state(config, limits, &[], &rockets).unwrap();

        sim.run(steps);
        let trail = sim.rockets()[0].trail();
        prop_assert_eq!(trail.len(), (steps + 1).min(capacity));
        prop_assert_eq!(trail.capacity(), capacity);
    }
}
