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
//! Planar kinematic quantities
//!
//! Position, velocity, acceleration and mass in simulation units. All values
//! are double precision; the simulation is deliberately unit-free (G defaults
//! to 1.0) so no SI conversion happens here.

/// 2D position in simulation length units
///
/// # Examples
///
/// ```
/// use nbody_sim::state::Position;
///
/// let pos = Position::new(3.0, 4.0);
/// assert_eq!(pos.distance_from_origin(), 5.0);
/// assert!(pos.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Create a new position with the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// The origin (0, 0)
    pub fn zero() -> Self {
        Position::new(0.0, 0.0)
    }

    /// Get the x coordinate
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Get the y coordinate
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Move by `velocity * dt`
    pub fn advance(&mut self, velocity: &Velocity, dt: f64) {
        self.x += velocity.dx() * dt;
        self.y += velocity.dy() * dt;
    }

    /// Displacement vector pointing from `self` to `other`
    pub fn displacement_to(&self, other: &Position) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        let (dx, dy) = self.displacement_to(other);
        (dx * dx + dy * dy).sqrt()
    }

    /// Euclidean distance from the origin
    pub fn distance_from_origin(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Check if both coordinates are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::zero()
    }
}

/// 2D velocity in length units per time unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    dx: f64,
    dy: f64,
}

impl Velocity {
    /// Create a new velocity with the given components
    pub fn new(dx: f64, dy: f64) -> Self {
        Velocity { dx, dy }
    }

    /// Zero velocity (at rest)
    pub fn zero() -> Self {
        Velocity::new(0.0, 0.0)
    }

    /// Get the x component
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Get the y component
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Change by `acceleration * dt`
    pub fn accelerate(&mut self, acceleration: &Acceleration, dt: f64) {
        self.dx += acceleration.ax() * dt;
        self.dy += acceleration.ay() * dt;
    }

    /// Squared speed, used by the energy diagnostics
    pub fn magnitude_squared(&self) -> f64 {
        self.dx * self.dx + self.dy * self.dy
    }

    /// Speed
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Check if both components are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Velocity::zero()
    }
}

/// 2D acceleration in length units per time unit squared
///
/// Recomputed from scratch by the force accumulators every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Acceleration {
    ax: f64,
    ay: f64,
}

impl Acceleration {
    /// Create a new acceleration with the given components
    pub fn new(ax: f64, ay: f64) -> Self {
        Acceleration { ax, ay }
    }

    /// Zero acceleration
    pub fn zero() -> Self {
        Acceleration::new(0.0, 0.0)
    }

    /// Get the x component
    pub fn ax(&self) -> f64 {
        self.ax
    }

    /// Get the y component
    pub fn ay(&self) -> f64 {
        self.ay
    }

    /// Add another acceleration component-wise
    pub fn add(&mut self, other: &Acceleration) {
        self.ax += other.ax;
        self.ay += other.ay;
    }

    /// Add `other * scale` component-wise
    pub fn add_scaled(&mut self, other: &Acceleration, scale: f64) {
        self.ax += other.ax * scale;
        self.ay += other.ay * scale;
    }

    /// Return the acceleration multiplied by `scale`
    pub fn scaled(&self, scale: f64) -> Acceleration {
        Acceleration::new(self.ax * scale, self.ay * scale)
    }

    /// Magnitude of the acceleration vector
    pub fn magnitude(&self) -> f64 {
        (self.ax * self.ax + self.ay * self.ay).sqrt()
    }

    /// Check if both components are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.ax.is_finite() && self.ay.is_finite()
    }
}

impl Default for Acceleration {
    fn default() -> Self {
        Acceleration::zero()
    }
}

/// Gravitating mass
///
/// Massive bodies always carry a strictly positive, finite mass that stays
/// constant for the whole run.
///
/// # Examples
///
/// ```
/// use nbody_sim::state::Mass;
///
/// let mass = Mass::new(100.0);
/// assert_eq!(mass.value(), 100.0);
/// assert!(Mass::try_new(0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    value: f64,
}

impl Mass {
    /// Create a new mass
    ///
    /// # Panics
    ///
    /// Panics if the mass is not positive and finite. For fallible
    /// construction (e.g. from parsed input), use `try_new`.
    pub fn new(value: f64) -> Self {
        assert!(value > 0.0 && value.is_finite(), "Mass must be positive and finite");
        Mass { value }
    }

    /// Try to create a new mass
    ///
    /// Returns `None` if the value is zero, negative, NaN or infinite.
    pub fn try_new(value: f64) -> Option<Self> {
        if value > 0.0 && value.is_finite() {
            Some(Mass { value })
        } else {
            None
        }
    }

    /// Get the mass value
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Default for Mass {
    fn default() -> Self {
        Mass::new(1.0)
    }
}
