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
//! Softened Newtonian gravity
//!
//! Newton's law of universal gravitation gives the acceleration a point mass
//! `M` induces at separation `r`:
//!
//! **a = G * M / r²**
//!
//! # Softening
//!
//! To keep the acceleration bounded when two masses nearly coincide, a
//! softening length ε is folded into the squared distance:
//!
//! ```text
//! distSq = dx² + dy² + ε²
//! dist   = sqrt(distSq)
//! a      = G * M / distSq
//! a_vec  = a * (dx, dy) / dist
//! ```
//!
//! With ε > 0 the denominator can never be zero, and for a fixed source mass
//! the magnitude strictly decreases with true separation.
//!
//! ## Precondition: ε > 0
//!
//! The law does not guard against a zero softening length. With ε = 0 and two
//! exactly coincident masses, `distSq` is zero and the result is non-finite.
//! Callers that configure ε = 0 are responsible for never evaluating the law
//! at zero separation.
//!
//! # References
//!
//! - Aarseth, S. J. (2003). "Gravitational N-Body Simulations"
//! - Dehnen, W. (2001). "Towards optimal softening in three-dimensional N-body codes"

use crate::state::Acceleration;

/// Gravitational constant in simulation units
pub const DEFAULT_G: f64 = 1.0;

/// Default softening length in simulation length units
pub const DEFAULT_SOFTENING: f64 = 0.1;

/// Softened point-mass gravity
///
/// # Example
///
/// ```rust
/// use nbody_sim::forces::SoftenedGravity;
///
/// let gravity = SoftenedGravity::new(1.0).with_softening(0.1);
/// let acc = gravity.acceleration(2.0, 0.0, 10.0);
/// assert!(acc.ax() > 0.0); // pulled toward the source on +x
/// assert_eq!(acc.ay(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftenedGravity {
    /// Gravitational constant
    g: f64,
    /// Softening length ε
    softening: f64,
}

impl SoftenedGravity {
    /// Create a law with the given gravitational constant and
    /// [`DEFAULT_SOFTENING`]
    ///
    /// # Panics
    ///
    /// Panics if `g` is negative or not finite.
    pub fn new(g: f64) -> Self {
        assert!(
            g >= 0.0 && g.is_finite(),
            "Gravitational constant must be non-negative and finite"
        );
        SoftenedGravity {
            g,
            softening: DEFAULT_SOFTENING,
        }
    }

    /// Replace the softening length
    ///
    /// Zero is accepted; see the module docs for the precondition that
    /// comes with it.
    ///
    /// # Panics
    ///
    /// Panics if `softening` is negative or not finite.
    pub fn with_softening(mut self, softening: f64) -> Self {
        self.set_softening(softening);
        self
    }

    /// Set the softening length
    ///
    /// # Panics
    ///
    /// Panics if `softening` is negative or not finite.
    pub fn set_softening(&mut self, softening: f64) {
        assert!(
            softening >= 0.0 && softening.is_finite(),
            "Softening factor must be non-negative and finite"
        );
        self.softening = softening;
    }

    /// Gravitational constant
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Softening length
    pub fn softening(&self) -> f64 {
        self.softening
    }

    /// Acceleration induced by a source of `source_mass` displaced by
    /// `(dx, dy)` from the point being accelerated
    ///
    /// The displacement points from the accelerated point toward the source,
    /// so the returned vector points the same way.
    pub fn acceleration(&self, dx: f64, dy: f64, source_mass: f64) -> Acceleration {
        let dist_sq = dx * dx + dy * dy + self.softening * self.softening;
        let dist = dist_sq.sqrt();
        let accel = self.g * source_mass / dist_sq;
        Acceleration::new(accel * dx / dist, accel * dy / dist)
    }

    /// Acceleration per unit source mass
    ///
    /// The body force pass evaluates this once per pair and scales it by
    /// each partner's mass.
    pub fn field(&self, dx: f64, dy: f64) -> Acceleration {
        self.acceleration(dx, dy, 1.0)
    }

    /// Scalar `G * M / (r² + ε²)` at separation `distance`
    ///
    /// This is the `a` of the softened law before it is multiplied by the
    /// direction `(dx, dy) / dist`.
    pub fn magnitude(&self, distance: f64, source_mass: f64) -> f64 {
        self.g * source_mass / (distance * distance + self.softening * self.softening)
    }
}

impl Default for SoftenedGravity {
    fn default() -> Self {
        SoftenedGravity::new(DEFAULT_G)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_law() {
        let gravity = SoftenedGravity::default();
        assert_eq!(gravity.g(), 1.0);
        assert_eq!(gravity.softening(), DEFAULT_SOFTENING);
    }

    #[test]
    #[should_panic(expected = "Gravitational constant must be non-negative and finite")]
    fn test_negative_g_panics() {
        SoftenedGravity::new(-1.0);
    }

    #[test]
    #[should_panic(expected = "Softening factor must be non-negative and finite")]
    fn test_negative_softening_panics() {
        SoftenedGravity::new(1.0).with_softening(-0.1);
    }

    #[test]
    fn test_acceleration_points_toward_source() {
        let gravity = SoftenedGravity::new(1.0);
        let acc = gravity.acceleration(-3.0, 4.0, 2.0);
        assert!(acc.ax() < 0.0);
        assert!(acc.ay() > 0.0);
        // direction is the unit displacement
        assert_relative_eq!(acc.ay() / acc.ax(), -4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_softened_magnitude() {
        let gravity = SoftenedGravity::new(1.0).with_softening(0.1);
        let acc = gravity.acceleration(2.0, 0.0, 5.0);
        let expected = 5.0 / (4.0 + 0.01);
        assert_relative_eq!(gravity.magnitude(2.0, 5.0), expected, epsilon = 1e-12);
        // the vector carries the unit direction (dx/dist), which is slightly
        // shorter than 1 once softening is folded into dist
        assert_relative_eq!(acc.ax(), expected * 2.0 / 4.01_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_finite_at_zero_separation() {
        let gravity = SoftenedGravity::new(1.0).with_softening(0.1);
        let acc = gravity.acceleration(0.0, 0.0, 100.0);
        assert!(acc.is_valid());
        assert_eq!(acc.magnitude(), 0.0);
    }

    #[test]
    fn test_unsoftened_coincident_masses_degenerate() {
        let gravity = SoftenedGravity::new(1.0).with_softening(0.0);
        let acc = gravity.acceleration(0.0, 0.0, 1.0);
        assert!(!acc.is_valid());
    }

    #[test]
    fn test_magnitude_decreases_with_distance() {
        let gravity = SoftenedGravity::new(1.0);
        let mut previous = f64::INFINITY;
        for i in 0..50 {
            let r = i as f64 * 0.05;
            let current = gravity.magnitude(r, 1.0);
            if i > 0 {
                assert!(current < previous, "magnitude must fall off at r = {}", r);
            }
            previous = current;
        }
    }

    #[test]
    fn test_converges_to_inverse_square() {
        let newton = 3.0 * 7.0 / (2.5 * 2.5);
        let mut previous_error = f64::INFINITY;
        for softening in [0.5, 0.1, 0.01, 0.001, 0.0] {
            let gravity = SoftenedGravity::new(3.0).with_softening(softening);
            let error = (gravity.acceleration(2.5, 0.0, 7.0).magnitude() - newton).abs();
            assert!(error <= previous_error);
            previous_error = error;
        }
        assert!(previous_error < 1e-12);
    }

    #[test]
    fn test_field_is_unit_mass_acceleration() {
        let gravity = SoftenedGravity::new(2.0);
        let field = gravity.field(1.0, 1.0);
        let acc = gravity.acceleration(1.0, 1.0, 1.0);
        assert_eq!(field, acc);
    }
}
