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
//! # N-Body Simulator
//!
//! A 2D gravitational N-body simulator with massless rockets.
//!
//! ## Features
//!
//! - **Softened Newtonian gravity**: `G·M/(r² + ε²)` keeps close encounters finite
//! - **Mutual body forces**: pairwise accumulation using Newton's third law
//! - **Rockets**: massless test particles pulled by every body, never pulling back
//! - **Symplectic Euler integration**: velocity first, then position
//! - **Trails**: fixed-capacity trajectory histories with an escape radius
//! - **Parallelization**: Optional Rayon integration for the rocket force pass
//!
//! ## Example
//!
//! ```rust
//! use nbody_sim::{init, SimConfig, SimLimits, Simulation};
//!
//! let config = SimConfig { steps: 100, ..SimConfig::default() };
//! let mut sim = Simulation::with_state(
//!     config,
//!     SimLimits::for_config(&config),
//!     &init::default_bodies(config.g),
//!     &init::default_rockets(config.g),
//! )?;
//!
//! sim.run(config.steps);
//! assert_eq!(sim.rockets()[0].trail().len(), 100);
//! # Ok::<(), nbody_sim::SimError>(())
//! ```

#![warn(missing_docs)]

/// Run configuration and capacity limits
pub mod config;

/// Error types
pub mod error;

/// Gravitational force law and accumulation passes
pub mod forces;

/// Built-in initial conditions
pub mod init;

/// Numerical integration methods
pub mod integration;

/// Initial-state loading and report writing
pub mod io;

/// The simulation aggregate
pub mod simulation;

/// Bodies, rockets and their kinematic components
pub mod state;

/// Trajectory trails and the escape policy
pub mod trail;

pub use config::{SimConfig, SimLimits};
pub use error::{Result, SimError};
pub use simulation::{Simulation, StepReport};
