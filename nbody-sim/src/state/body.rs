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
//! Gravitating point masses

use super::{Acceleration, Mass, Position, Velocity};

/// A massive body that attracts every other body and every rocket
///
/// Bodies are created once at initialization and live for the whole run.
/// Only the integrator changes position and velocity; only the body force
/// accumulator writes the acceleration.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) position: Position,
    pub(crate) velocity: Velocity,
    pub(crate) acceleration: Acceleration,
    mass: Mass,
}

impl Body {
    /// Create a body with zero acceleration
    pub fn new(position: Position, velocity: Velocity, mass: Mass) -> Self {
        Body {
            position,
            velocity,
            acceleration: Acceleration::zero(),
            mass,
        }
    }

    /// Position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Velocity
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Acceleration from the most recent force pass
    pub fn acceleration(&self) -> Acceleration {
        self.acceleration
    }

    /// Mass
    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Linear momentum `m·v`
    pub fn momentum(&self) -> (f64, f64) {
        let m = self.mass.value();
        (m * self.velocity.dx(), m * self.velocity.dy())
    }

    /// Kinetic energy `½·m·v²`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass.value() * self.velocity.magnitude_squared()
    }
}
