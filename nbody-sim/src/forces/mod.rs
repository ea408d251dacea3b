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
//! Gravitational force computation
//!
//! - [`SoftenedGravity`]: the pairwise softened force law
//! - [`accumulate_body_accelerations`]: body-body pass, O(N²/2) using
//!   Newton's third law
//! - [`accumulate_rocket_accelerations`]: one-way body-rocket pass,
//!   O(rockets × bodies)
//!
//! Both passes overwrite accelerations from scratch; nothing carries over
//! between steps.

mod accumulate;
mod gravity;

pub use accumulate::{accumulate_body_accelerations, accumulate_rocket_accelerations};
pub use gravity::{SoftenedGravity, DEFAULT_G, DEFAULT_SOFTENING};
