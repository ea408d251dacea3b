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
//! Direct-summation force passes for bodies and rockets

use super::SoftenedGravity;
use crate::state::{Acceleration, Body, Rocket};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Overwrite every body's acceleration with the net pull of all others
///
/// Each unordered pair `(i, j)` with `i < j` evaluates the law once. The
/// per-unit-mass field is added to body `i` scaled by `m_j` and subtracted
/// from body `j` scaled by `m_i` (Newton's third law), giving N(N-1)/2
/// evaluations instead of N(N-1).
///
/// Only accelerations are written; positions and velocities are untouched.
pub fn accumulate_body_accelerations(bodies: &mut [Body], gravity: &SoftenedGravity) {
    for body in bodies.iter_mut() {
        body.acceleration = Acceleration::zero();
    }

    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (dx, dy) = bodies[i].position.displacement_to(&bodies[j].position);
            let field = gravity.field(dx, dy);

            let mass_i = bodies[i].mass().value();
            let mass_j = bodies[j].mass().value();

            bodies[i].acceleration.add_scaled(&field, mass_j);
            bodies[j].acceleration.add_scaled(&field, -mass_i);
        }
    }
}

/// Overwrite each active rocket's acceleration with the pull of all bodies
///
/// Rockets are test particles: they are accelerated by bodies but exert
/// nothing back, and their own mass never enters the sum. Inactive rockets
/// are skipped and keep whatever acceleration they had.
///
/// With the `parallel` feature, rockets are processed on the rayon pool.
/// Every rocket sums bodies in the same order either way, so both paths
/// produce identical results.
///
/// # Returns
///
/// Number of rockets whose acceleration was recomputed
pub fn accumulate_rocket_accelerations(
    rockets: &mut [Rocket],
    bodies: &[Body],
    gravity: &SoftenedGravity,
) -> usize {
    #[cfg(feature = "parallel")]
    {
        rockets
            .par_iter_mut()
            .map(|rocket| accumulate_for_rocket(rocket, bodies, gravity) as usize)
            .sum()
    }

    #[cfg(not(feature = "parallel"))]
    {
        rockets
            .iter_mut()
            .map(|rocket| accumulate_for_rocket(rocket, bodies, gravity) as usize)
            .sum()
    }
}

fn accumulate_for_rocket(rocket: &mut Rocket, bodies: &[Body], gravity: &SoftenedGravity) -> bool {
    if !rocket.is_active() {
        return false;
    }

    let mut total = Acceleration::zero();
    for body in bodies {
        let (dx, dy) = rocket.position.displacement_to(&body.position);
        total.add(&gravity.acceleration(dx, dy, body.mass().value()));
    }
    rocket.acceleration = total;
    true
}
