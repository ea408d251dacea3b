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
//! Error types shared by the simulation core and its file collaborators

use std::collections::TryReserveError;

/// Everything that can go wrong while building or persisting a simulation
///
/// The step loop itself is infallible; errors only arise when the
/// simulation is populated (capacity and allocation limits) or when state is
/// read from or written to disk.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A rocket's trail buffer could not be allocated
    #[error("failed to allocate trail buffer for {capacity} samples")]
    TrailAllocation {
        /// Requested number of samples
        capacity: usize,
        /// Allocator failure reported by the standard library
        #[source]
        source: TryReserveError,
    },

    /// Adding another body would exceed the configured maximum
    #[error("body limit of {limit} reached")]
    TooManyBodies {
        /// Configured maximum body count
        limit: usize,
    },

    /// Adding another rocket would exceed the configured maximum
    #[error("rocket limit of {limit} reached")]
    TooManyRockets {
        /// Configured maximum rocket count
        limit: usize,
    },

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A binary trail file is truncated or inconsistent
    #[error("malformed trail data: {0}")]
    TrailFormat(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SimError>;
