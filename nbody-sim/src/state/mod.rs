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
//! Simulation state: kinematic components, bodies and rockets
//!
//! Bodies and rockets are plain owned values. The [`Simulation`] aggregate
//! holds them in two vectors and hands out exclusive access for the duration
//! of a step, so no interior mutability or locking is involved.
//!
//! [`Simulation`]: crate::simulation::Simulation

mod body;
mod components;
mod rocket;

pub use body::Body;
pub use components::{Acceleration, Mass, Position, Velocity};
pub use rocket::Rocket;
