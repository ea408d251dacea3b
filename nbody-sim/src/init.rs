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
//! Built-in initial conditions
//!
//! Used whenever no initial-state file is available: a central star with four
//! planets on circular orbits, and one rocket on an eccentric ellipse.

use std::f64::consts::PI;

use crate::state::{Body, Mass, Position, Velocity};

/// Mass of the central star in the default system
pub const CENTRAL_MASS: f64 = 100.0;

/// Number of bodies in the default system, star included
pub const DEFAULT_BODY_COUNT: usize = 5;

/// Semi-major axis of the default rocket orbit
pub const ROCKET_SEMI_MAJOR_AXIS: f64 = 5.0;

/// Eccentricity of the default rocket orbit
pub const ROCKET_ECCENTRICITY: f64 = 0.6;

/// Speed of a circular orbit of radius `r` around `central_mass`
pub fn circular_speed(g: f64, central_mass: f64, r: f64) -> f64 {
    (g * central_mass / r).sqrt()
}

/// Escape speed at radius `r` from `central_mass`
pub fn escape_speed(g: f64, central_mass: f64, r: f64) -> f64 {
    (2.0 * g * central_mass / r).sqrt()
}

/// Period of a circular orbit of radius `r` around `central_mass`
pub fn orbital_period(g: f64, central_mass: f64, r: f64) -> f64 {
    2.0 * PI * (r * r * r / (g * central_mass)).sqrt()
}

/// Central star at rest plus four unit-mass planets
///
/// Planet `i` (1..=4) sits at angle `2π·i/4` and radius `2 + 0.5·i`, moving
/// counter-clockwise at the circular speed for the star alone.
pub fn default_bodies(g: f64) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(DEFAULT_BODY_COUNT);
    bodies.push(Body::new(Position::zero(), Velocity::zero(), Mass::new(CENTRAL_MASS)));

    let planets = DEFAULT_BODY_COUNT - 1;
    for i in 1..DEFAULT_BODY_COUNT {
        let angle = 2.0 * PI * i as f64 / planets as f64;
        let radius = 2.0 + i as f64 * 0.5;
        let v = circular_speed(g, CENTRAL_MASS, radius);
        bodies.push(Body::new(
            Position::new(radius * angle.cos(), radius * angle.sin()),
            Velocity::new(-v * angle.sin(), v * angle.cos()),
            Mass::new(1.0),
        ));
    }

    log::info!("Initialized {} default bodies", bodies.len());
    bodies
}

/// One rocket starting at perihelion of an ellipse around the star
///
/// Semi-major axis 5 and eccentricity 0.6 put perihelion at `r = 2` on the
/// +x axis, with the vis-viva perihelion speed `sqrt(G·M(1+e)/(a(1-e)))`
/// along +y.
pub fn default_rockets(g: f64) -> Vec<(Position, Velocity)> {
    let a = ROCKET_SEMI_MAJOR_AXIS;
    let e = ROCKET_ECCENTRICITY;
    let perihelion = a * (1.0 - e);
    let speed = (g * CENTRAL_MASS * (1.0 + e) / perihelion).sqrt();

    log::info!(
        "Initialized 1 default rocket in elliptical orbit (a = {:.2}, e = {:.2}, perihelion = {:.2}, aphelion = {:.2})",
        a,
        e,
        perihelion,
        a * (1.0 + e)
    );
    vec![(Position::new(perihelion, 0.0), Velocity::new(0.0, speed))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_bodies_layout() {
        let bodies = default_bodies(1.0);
        assert_eq!(bodies.len(), 5);
        assert_eq!(bodies[0].mass().value(), 100.0);
        assert_eq!(bodies[0].position(), Position::zero());

        for (i, body) in bodies.iter().enumerate().skip(1) {
            let r = 2.0 + i as f64 * 0.5;
            assert_relative_eq!(body.position().distance_from_origin(), r, epsilon = 1e-12);
            assert_relative_eq!(body.velocity().magnitude(), (100.0 / r).sqrt(), epsilon = 1e-12);
            assert_eq!(body.mass().value(), 1.0);
        }
    }

    #[test]
    fn test_default_planets_move_tangentially() {
        for body in default_bodies(1.0).iter().skip(1) {
            let p = body.position();
            let v = body.velocity();
            let radial = p.x() * v.dx() + p.y() * v.dy();
            assert!(radial.abs() < 1e-9);
        }
    }

    #[test]
    fn test_default_rocket_perihelion() {
        let rockets = default_rockets(1.0);
        assert_eq!(rockets.len(), 1);
        let (pos, vel) = rockets[0];
        assert_relative_eq!(pos.x(), 2.0, epsilon = 1e-12);
        assert_eq!(pos.y(), 0.0);
        assert_eq!(vel.dx(), 0.0);
        assert_relative_eq!(vel.dy(), (100.0_f64 * 1.6 / 2.0).sqrt(), epsilon = 1e-12);
        // bound orbit: below escape speed
        assert!(vel.dy() < escape_speed(1.0, CENTRAL_MASS, 2.0));
    }

    #[test]
    fn test_kepler_third_law() {
        let t1 = orbital_period(1.0, 100.0, 2.0);
        let t2 = orbital_period(1.0, 100.0, 3.0);
        assert_relative_eq!((t2 / t1).powi(2), (3.0_f64 / 2.0).powi(3), epsilon = 1e-9);
    }
}
