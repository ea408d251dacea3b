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
//! Benchmarks for the simulation step
//!
//! These benchmarks measure:
//! - Full step throughput for growing body counts
//! - The rocket force pass for growing rocket counts
//! - Trail recording cost once trails are full

use std::f64::consts::PI;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nbody_sim::forces::{accumulate_body_accelerations, accumulate_rocket_accelerations, SoftenedGravity};
use nbody_sim::init::circular_speed;
use nbody_sim::state::{Body, Mass, Position, Rocket, Velocity};
use nbody_sim::{SimConfig, SimLimits, Simulation};

// Star plus `count - 1` light bodies on a ring of circular orbits
fn ring_of_bodies(count: usize) -> Vec<Body> {
    let mut bodies = vec![Body::new(Position::zero(), Velocity::zero(), Mass::new(100.0))];
    for i in 1..count {
        let angle = 2.0 * PI * i as f64 / count as f64;
        let r = 2.0 + 0.1 * i as f64;
        let v = circular_speed(1.0, 100.0, r);
        bodies.push(Body::new(
            Position::new(r * angle.cos(), r * angle.sin()),
            Velocity::new(-v * angle.sin(), v * angle.cos()),
            Mass::new(0.01),
        ));
    }
    bodies
}

fn ring_of_rockets(count: usize, trail_capacity: usize) -> Vec<Rocket> {
    (0..count)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / count as f64;
            let r = 5.0;
            let v = circular_speed(1.0, 100.0, r);
            Rocket::new(
                Position::new(r * angle.cos(), r * angle.sin()),
                Velocity::new(-v * angle.sin(), v * angle.cos()),
                trail_capacity,
            )
            .unwrap()
        })
        .collect()
}

fn bench_step_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_throughput");

    for &bodies in &[2, 5, 10, 20] {
        group.throughput(Throughput::Elements(bodies as u64));
        group.bench_with_input(BenchmarkId::new("bodies", bodies), &bodies, |b, &bodies| {
            let config = SimConfig { steps: 1000, ..SimConfig::default() };
            let limits = SimLimits::for_config(&config);
            let mut sim = Simulation::new(config, limits).unwrap();
            for body in ring_of_bodies(bodies) {
                sim.add_body(body).unwrap();
            }
            for rocket in ring_of_rockets(limits.max_rockets, 1000) {
                sim.add_rocket(rocket).unwrap();
            }

            b.iter(|| black_box(sim.step()));
        });
    }

    group.finish();
}

fn bench_force_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_passes");
    let gravity = SoftenedGravity::default();

    for &count in &[5, 20, 100] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("bodies", count), &count, |b, &count| {
            let mut bodies = ring_of_bodies(count);
            b.iter(|| accumulate_body_accelerations(black_box(&mut bodies), &gravity));
        });

        group.bench_with_input(BenchmarkId::new("rockets", count), &count, |b, &count| {
            let bodies = ring_of_bodies(20);
            let mut rockets = ring_of_rockets(count, 1);
            b.iter(|| accumulate_rocket_accelerations(black_box(&mut rockets), &bodies, &gravity));
        });
    }

    group.finish();
}

fn bench_full_trails(c: &mut Criterion) {
    // capacity 1: every recording after the first is a dropped sample
    c.bench_function("step_with_full_trails", |b| {
        let config = SimConfig { steps: 1000, ..SimConfig::default() };
        let limits = SimLimits::for_config(&config).with_trail_capacity(1);
        let mut sim = Simulation::with_state(config, limits, &ring_of_bodies(5), &[]).unwrap();
        for rocket in ring_of_rockets(limits.max_rockets, 1) {
            sim.add_rocket(rocket).unwrap();
        }

        b.iter(|| black_box(sim.step()));
    });
}

criterion_group!(benches, bench_step_throughput, bench_force_passes, bench_full_trails);
criterion_main!(benches);
