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
//! Trajectory trails and the escape policy
//!
//! Every rocket owns a [`Trail`]: an append-only history of sampled
//! positions with a capacity fixed when the rocket is created. The
//! [`TrailRecorder`] runs after each rocket position update. It appends the
//! new sample and deactivates rockets that have left the simulated region.
//!
//! # Capacity policy
//!
//! Trails never grow past the capacity chosen at creation. Once full, further
//! samples are dropped silently: no reallocation, no error. The capacity is
//! normally sized to the configured step count so a full run fits.
//!
//! # Escape policy
//!
//! After a rocket moves, its distance from the origin is compared against the
//! escape radius. Beyond it the rocket is permanently deactivated and a
//! single [`EscapeEvent`] is produced. Inactive rockets are skipped by the
//! force pass, the integrator and the recorder.

use crate::error::{Result, SimError};
use crate::state::{Position, Rocket};

/// Escape radius used when none is configured
pub const DEFAULT_ESCAPE_RADIUS: f64 = 50.0;

/// Fixed-capacity history of (x, y) samples
///
/// Samples are stored as two parallel columns, matching the on-disk layout
/// of the binary trail export (all x values followed by all y values).
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    xs: Vec<f64>,
    ys: Vec<f64>,
    capacity: usize,
}

impl Trail {
    /// Allocate an empty trail that can hold `capacity` samples
    ///
    /// Allocation failure is reported as [`SimError::TrailAllocation`]
    /// rather than aborting the process.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        xs.try_reserve_exact(capacity)
            .map_err(|source| SimError::TrailAllocation { capacity, source })?;
        ys.try_reserve_exact(capacity)
            .map_err(|source| SimError::TrailAllocation { capacity, source })?;
        Ok(Trail { xs, ys, capacity })
    }

    /// Build a full trail from recorded columns
    ///
    /// The capacity equals the number of samples.
    ///
    /// # Panics
    ///
    /// Panics if the columns differ in length.
    pub fn from_samples(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        assert_eq!(xs.len(), ys.len(), "Trail columns must have equal length");
        let capacity = xs.len();
        Trail { xs, ys, capacity }
    }

    /// Append a sample, returning `false` if the trail was full and the
    /// sample was dropped
    pub fn push(&mut self, position: Position) -> bool {
        if self.xs.len() >= self.capacity {
            return false;
        }
        self.xs.push(position.x());
        self.ys.push(position.y());
        true
    }

    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether no samples have been recorded
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Maximum number of samples this trail accepts
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether further samples will be dropped
    pub fn is_full(&self) -> bool {
        self.xs.len() >= self.capacity
    }

    /// Recorded x coordinates, oldest first
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Recorded y coordinates, oldest first
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Sample at `index`
    pub fn get(&self, index: usize) -> Option<Position> {
        Some(Position::new(*self.xs.get(index)?, *self.ys.get(index)?))
    }

    /// Most recent sample
    pub fn last(&self) -> Option<Position> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate over samples, oldest first
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| Position::new(x, y))
    }

    /// Total path length along consecutive samples
    pub fn path_length(&self) -> f64 {
        self.iter()
            .zip(self.iter().skip(1))
            .map(|(a, b)| a.distance_to(&b))
            .fold(0.0, |total, d| total + d)
    }

    /// Largest distance from the origin over all samples (0 when empty)
    pub fn max_distance_from_origin(&self) -> f64 {
        self.iter()
            .map(|p| p.distance_from_origin())
            .fold(0.0, f64::max)
    }
}

/// Notification that a rocket crossed the escape radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeEvent {
    /// Index of the rocket in the simulation
    pub rocket: usize,
    /// Distance from the origin after the move that triggered deactivation
    pub distance: f64,
    /// Position after that move
    pub position: Position,
}

/// Appends positions to rocket trails and applies the escape policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailRecorder {
    escape_radius: f64,
}

impl TrailRecorder {
    /// Create a recorder with the given escape radius
    ///
    /// # Panics
    ///
    /// Panics if the radius is not positive and finite.
    pub fn new(escape_radius: f64) -> Self {
        assert!(
            escape_radius > 0.0 && escape_radius.is_finite(),
            "Escape radius must be positive and finite"
        );
        TrailRecorder { escape_radius }
    }

    /// Escape radius
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    /// Record the rocket's current position and evaluate deactivation
    ///
    /// Call once per rocket right after its position update. Inactive
    /// rockets are left untouched. The sample is appended before the escape
    /// check, so the position that crosses the radius is still recorded.
    pub fn record(&self, index: usize, rocket: &mut Rocket) -> Option<EscapeEvent> {
        if !rocket.is_active() {
            return None;
        }

        let position = rocket.position();
        rocket.trail.push(position);

        let distance = position.distance_from_origin();
        if distance > self.escape_radius {
            rocket.active = false;
            log::info!("Rocket {} left simulation area (distance: {:.2})", index, distance);
            return Some(EscapeEvent {
                rocket: index,
                distance,
                position,
            });
        }

        None
    }
}

impl Default for TrailRecorder {
    fn default() -> Self {
        TrailRecorder::new(DEFAULT_ESCAPE_RADIUS)
    }
}
