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
//! File input and output
//!
//! Everything here sits outside the step loop: initial states are read
//! before the first step and reports are written at frame boundaries or
//! after the last one. Writers are generic over [`std::io::Write`] so
//! tests can target in-memory buffers.

mod loader;
mod report;
mod trails;

pub use loader::{load_bodies, load_rockets, parse_bodies, parse_rockets};
pub use report::{
    write_final_state, write_metadata, write_trajectory_stats, FrameLog, TrajectoryStats,
};
pub use trails::{load_trails, read_trails, save_trails, write_trails};
