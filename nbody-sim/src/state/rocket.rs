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
//! Massless test particles

use super::{Acceleration, Position, Velocity};
use crate::error::Result;
use crate::trail::Trail;

/// A test particle that feels gravity from bodies but exerts none
///
/// A rocket exclusively owns its [`Trail`]. The trail is allocated when the
/// rocket is created and released when the rocket is dropped. Once a rocket
/// is deactivated it never moves, accelerates or records again.
///
/// # Examples
///
/// ```
/// use nbody_sim::state::{Position, Rocket, Velocity};
///
/// let rocket = Rocket::new(Position::new(2.0, 0.0), Velocity::new(0.0, 7.0), 100)?;
/// assert!(rocket.is_active());
/// assert_eq!(rocket.trail().len(), 1); // initial position
/// # Ok::<(), nbody_sim::SimError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    pub(crate) position: Position,
    pub(crate) velocity: Velocity,
    pub(crate) acceleration: Acceleration,
    pub(crate) active: bool,
    pub(crate) trail: Trail,
}

impl Rocket {
    /// Create an active rocket with a trail holding up to `trail_capacity`
    /// samples
    ///
    /// The initial position is stored as the first trail sample (dropped if
    /// the capacity is zero).
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TrailAllocation`](crate::SimError::TrailAllocation)
    /// if the trail buffer cannot be allocated.
    pub fn new(position: Position, velocity: Velocity, trail_capacity: usize) -> Result<Self> {
        let mut trail = Trail::with_capacity(trail_capacity)?;
        trail.push(position);
        Ok(Rocket {
            position,
            velocity,
            acceleration: Acceleration::zero(),
            active: true,
            trail,
        })
    }

    /// Position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Velocity
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Acceleration from the most recent force pass it took part in
    pub fn acceleration(&self) -> Acceleration {
        self.acceleration
    }

    /// Whether the rocket still takes part in the simulation
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Recorded trajectory
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Distance from the origin
    pub fn distance_from_origin(&self) -> f64 {
        self.position.distance_from_origin()
    }
}
