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
//! The simulation aggregate and its step loop
//!
//! A [`Simulation`] owns every body and rocket together with the force law,
//! the integrator and the trail recorder. One call to [`Simulation::step`]
//! performs, in this order:
//!
//! 1. body force pass
//! 2. body integration
//! 3. rocket force pass, against the *already advanced* bodies
//! 4. rocket integration
//! 5. trail recording and escape checks
//!
//! The ordering affects the numbers produced and is part of the contract.
//! Each stage is also exposed on its own so a driver or test can run them
//! individually and inspect state in between.
//!
//! The step loop performs no I/O and cannot fail. Errors only arise while
//! populating the simulation (capacity limits, trail allocation).

use crate::config::{SimConfig, SimLimits};
use crate::error::{Result, SimError};
use crate::forces::{accumulate_body_accelerations, accumulate_rocket_accelerations, SoftenedGravity};
use crate::integration::{Integrator, SymplecticEuler};
use crate::state::{Body, Position, Rocket, Velocity};
use crate::trail::{EscapeEvent, TrailRecorder};

/// Outcome of a single step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Step number just completed (1-based)
    pub step: u64,
    /// Rockets deactivated during this step
    pub escapes: Vec<EscapeEvent>,
}

/// Single-threaded N-body simulation with rockets
///
/// # Example
///
/// ```
/// use nbody_sim::{Simulation, SimConfig, SimLimits};
/// use nbody_sim::state::{Body, Mass, Position, Velocity};
///
/// let config = SimConfig::default();
/// let mut sim = Simulation::new(config, SimLimits::for_config(&config))?;
/// sim.add_body(Body::new(Position::zero(), Velocity::zero(), Mass::new(100.0)))?;
/// let rocket = sim.spawn_rocket(Position::new(5.0, 0.0), Velocity::new(0.0, 4.0))?;
///
/// sim.step();
/// assert_eq!(sim.rockets()[rocket].trail().len(), 2);
/// # Ok::<(), nbody_sim::SimError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    limits: SimLimits,
    gravity: SoftenedGravity,
    integrator: SymplecticEuler,
    recorder: TrailRecorder,
    bodies: Vec<Body>,
    rockets: Vec<Rocket>,
    step_count: u64,
}

impl Simulation {
    /// Create an empty simulation
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the configuration or limits
    /// fail validation.
    pub fn new(config: SimConfig, limits: SimLimits) -> Result<Self> {
        config.validate()?;
        limits.validate()?;

        let integrator = SymplecticEuler::new(config.dt);
        if let Err(warning) = integrator.validate_timestep() {
            log::warn!("{}", warning);
        }

        Ok(Simulation {
            config,
            limits,
            gravity: SoftenedGravity::new(config.g).with_softening(limits.softening),
            integrator,
            recorder: TrailRecorder::new(limits.escape_radius),
            bodies: Vec::with_capacity(limits.max_bodies),
            rockets: Vec::with_capacity(limits.max_rockets),
            step_count: 0,
        })
    }

    /// Create a simulation and populate it
    ///
    /// Rockets are given as `(position, velocity)` pairs; each gets a trail of
    /// `limits.trail_capacity` samples.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration, when either list exceeds its limit, or
    /// when a trail cannot be allocated.
    pub fn with_state(
        config: SimConfig,
        limits: SimLimits,
        bodies: &[Body],
        rockets: &[(Position, Velocity)],
    ) -> Result<Self> {
        let mut sim = Simulation::new(config, limits)?;
        for body in bodies {
            sim.add_body(body.clone())?;
        }
        for &(position, velocity) in rockets {
            sim.spawn_rocket(position, velocity)?;
        }
        Ok(sim)
    }

    /// Add a massive body, returning its index
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TooManyBodies`] once `max_bodies` is reached.
    pub fn add_body(&mut self, body: Body) -> Result<usize> {
        if self.bodies.len() >= self.limits.max_bodies {
            return Err(SimError::TooManyBodies {
                limit: self.limits.max_bodies,
            });
        }
        self.bodies.push(body);
        Ok(self.bodies.len() - 1)
    }

    /// Create an active rocket with a trail of `trail_capacity` samples,
    /// returning its index
    ///
    /// On error nothing is added.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TooManyRockets`] once `max_rockets` is reached and
    /// [`SimError::TrailAllocation`] if the trail cannot be allocated.
    pub fn spawn_rocket(&mut self, position: Position, velocity: Velocity) -> Result<usize> {
        let rocket = Rocket::new(position, velocity, self.limits.trail_capacity)?;
        self.add_rocket(rocket)
    }

    /// Add an already constructed rocket, returning its index
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TooManyRockets`] once `max_rockets` is reached.
    pub fn add_rocket(&mut self, rocket: Rocket) -> Result<usize> {
        if self.rockets.len() >= self.limits.max_rockets {
            return Err(SimError::TooManyRockets {
                limit: self.limits.max_rockets,
            });
        }
        self.rockets.push(rocket);
        Ok(self.rockets.len() - 1)
    }

    /// Advance the whole system by one timestep
    pub fn step(&mut self) -> StepReport {
        self.compute_body_forces();
        self.integrate_bodies();
        self.compute_rocket_forces();
        self.integrate_rockets();
        let escapes = self.record_trails();

        self.step_count += 1;
        StepReport {
            step: self.step_count,
            escapes,
        }
    }

    /// Run `steps` steps, returning every escape that happened
    pub fn run(&mut self, steps: usize) -> Vec<EscapeEvent> {
        let mut escapes = Vec::new();
        for _ in 0..steps {
            escapes.extend(self.step().escapes);
        }
        escapes
    }

    /// Recompute body accelerations from current positions
    pub fn compute_body_forces(&mut self) {
        accumulate_body_accelerations(&mut self.bodies, &self.gravity);
    }

    /// Advance bodies using their stored accelerations
    pub fn integrate_bodies(&mut self) -> usize {
        self.integrator.integrate_bodies(&mut self.bodies)
    }

    /// Recompute active rocket accelerations from current body positions
    pub fn compute_rocket_forces(&mut self) -> usize {
        accumulate_rocket_accelerations(&mut self.rockets, &self.bodies, &self.gravity)
    }

    /// Advance active rockets using their stored accelerations
    pub fn integrate_rockets(&mut self) -> usize {
        self.integrator.integrate_rockets(&mut self.rockets)
    }

    /// Append each active rocket's position to its trail and deactivate
    /// rockets beyond the escape radius
    pub fn record_trails(&mut self) -> Vec<EscapeEvent> {
        let recorder = self.recorder;
        self.rockets
            .iter_mut()
            .enumerate()
            .filter_map(|(index, rocket)| recorder.record(index, rocket))
            .collect()
    }

    /// Run configuration
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Capacity limits
    pub fn limits(&self) -> &SimLimits {
        &self.limits
    }

    /// Force law in use
    pub fn gravity(&self) -> &SoftenedGravity {
        &self.gravity
    }

    /// Massive bodies
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Rockets, active or not
    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    /// Number of rockets still active
    pub fn active_rockets(&self) -> usize {
        self.rockets.iter().filter(|r| r.is_active()).count()
    }

    /// Completed steps
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Simulated time elapsed
    pub fn time(&self) -> f64 {
        self.step_count as f64 * self.config.dt
    }

    /// Total linear momentum of the bodies
    pub fn total_momentum(&self) -> (f64, f64) {
        self.bodies.iter().fold((0.0, 0.0), |(px, py), body| {
            let (bx, by) = body.momentum();
            (px + bx, py + by)
        })
    }

    /// Total kinetic energy of the bodies
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Total pairwise potential energy of the bodies, `-G·m1·m2/r`
    ///
    /// Uses the unsoftened potential. Coincident pairs are skipped.
    pub fn potential_energy(&self) -> f64 {
        let g = self.gravity.g();
        let mut total = 0.0;
        for (i, a) in self.bodies.iter().enumerate() {
            for b in &self.bodies[i + 1..] {
                let r = a.position().distance_to(&b.position());
                if r > 0.0 {
                    total -= g * a.mass().value() * b.mass().value() / r;
                }
            }
        }
        total
    }

    /// Kinetic plus potential energy of the bodies
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }
}
