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
//! Fixed-step time integration
//!
//! An [`Integrator`] turns freshly computed accelerations into new
//! velocities and positions. The simulation ships a single scheme,
//! [`SymplecticEuler`], and relies on its exact update order.
//!
//! # Timestep Guidelines
//!
//! - Too small: Numerical precision issues and wasted computation
//! - Too large: Instability and inaccuracy, especially during close passes
//! - The default `dt = 0.01` suits the unit-free systems built by
//!   [`crate::init`] (G = 1, central mass 100, radii of a few units)

use crate::state::{Acceleration, Body, Position, Rocket, Velocity};

mod euler;

pub use euler::SymplecticEuler;

/// Trait for fixed-step integration schemes
///
/// Implementations only move particles; they never compute forces. Callers
/// must run the force passes first so that accelerations are current.
pub trait Integrator: Send + Sync {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Get the timestep used by this integrator
    fn timestep(&self) -> f64;

    /// Validate the timestep for stability
    ///
    /// Returns warnings if the timestep might cause numerical issues.
    /// Extremely small timesteps may lead to precision loss, while large
    /// timesteps may cause instability.
    fn validate_timestep(&self) -> Result<(), String> {
        let dt = self.timestep();

        if dt <= 0.0 || !dt.is_finite() {
            return Err(format!("Invalid timestep: {}. Must be positive and finite.", dt));
        }

        if dt < 1e-9 {
            return Err(format!(
                "Warning: Timestep {} is extremely small and may cause precision loss with f64. \
                Consider using a larger timestep.",
                dt
            ));
        }

        if dt > 1.0 {
            return Err(format!(
                "Warning: Timestep {} is large and may cause instability. \
                Consider using smaller timesteps for better accuracy.",
                dt
            ));
        }

        Ok(())
    }

    /// Advance one particle by one timestep
    fn advance(&self, position: &mut Position, velocity: &mut Velocity, acceleration: &Acceleration);

    /// Advance every body by one timestep
    ///
    /// Returns the number of bodies updated.
    fn integrate_bodies(&self, bodies: &mut [Body]) -> usize {
        for body in bodies.iter_mut() {
            self.advance(&mut body.position, &mut body.velocity, &body.acceleration);
        }
        bodies.len()
    }

    /// Advance every active rocket by one timestep
    ///
    /// Inactive rockets are frozen in place. Returns the number of rockets
    /// updated.
    fn integrate_rockets(&self, rockets: &mut [Rocket]) -> usize {
        let mut updated_count = 0;
        for rocket in rockets.iter_mut().filter(|r| r.is_active()) {
            self.advance(&mut rocket.position, &mut rocket.velocity, &rocket.acceleration);
            updated_count += 1;
        }
        updated_count
    }
}
