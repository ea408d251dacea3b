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
//! Run configuration and capacity limits
//!
//! [`SimConfig`] holds the parameters read from a `key=value` text file:
//!
//! ```text
//! # comment
//! dt=0.01
//! steps=5000
//! frames=100
//! save_interval=50
//! g=1.0
//! ```
//!
//! Keys missing from the file keep their defaults; unknown keys and lines
//! that do not parse are skipped. [`SimLimits`] carries the capacity and
//! policy constants handed to the simulation constructor.

use std::fs;
use std::path::Path;

use crate::error::{Result, SimError};
use crate::forces::{DEFAULT_G, DEFAULT_SOFTENING};
use crate::trail::DEFAULT_ESCAPE_RADIUS;

/// Default timestep
pub const DEFAULT_DT: f64 = 0.01;

/// Default number of steps in a run
pub const DEFAULT_STEPS: usize = 5000;

/// Default number of output frames in a run
pub const DEFAULT_FRAMES: usize = 100;

/// Default maximum number of massive bodies
pub const DEFAULT_MAX_BODIES: usize = 20;

/// Default maximum number of rockets
pub const DEFAULT_MAX_ROCKETS: usize = 10;

/// Simulation parameters
///
/// Immutable once the step loop starts: the [`Simulation`] takes a copy at
/// construction.
///
/// [`Simulation`]: crate::simulation::Simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Timestep
    pub dt: f64,
    /// Total number of steps to run
    pub steps: usize,
    /// Number of output frames over the run
    pub frames: usize,
    /// Steps between frames; 0 means derive from `steps / frames`
    pub save_interval: usize,
    /// Gravitational constant
    pub g: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            dt: DEFAULT_DT,
            steps: DEFAULT_STEPS,
            frames: DEFAULT_FRAMES,
            save_interval: DEFAULT_STEPS / DEFAULT_FRAMES,
            g: DEFAULT_G,
        }
    }
}

impl SimConfig {
    /// Parse `key=value` text on top of the defaults
    pub fn parse(text: &str) -> Self {
        let mut config = SimConfig::default();
        config.apply(text);
        config
    }

    /// Read and parse a configuration file
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read. Callers are
    /// expected to fall back to [`SimConfig::default`] in that case.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = SimConfig::parse(&text);
        log::info!(
            "Configuration loaded from {}: dt={:.4}, steps={}, frames={}, save_interval={}, g={:.2}",
            path.display(),
            config.dt,
            config.steps,
            config.frames,
            config.save_interval,
            config.g
        );
        Ok(config)
    }

    /// Apply `key=value` lines to this configuration
    ///
    /// Integer keys take the truncated value of the parsed real, so
    /// `steps=1e4` means 10000 steps. Negative integers clamp to zero.
    pub fn apply(&mut self, text: &str) {
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                log::debug!("Skipping config line without '=': {}", line);
                continue;
            };
            let Ok(value) = value.trim().parse::<f64>() else {
                log::debug!("Skipping config line with non-numeric value: {}", line);
                continue;
            };

            match key.trim() {
                "dt" => self.dt = value,
                "steps" => self.steps = value as usize,
                "frames" => self.frames = value as usize,
                "save_interval" => self.save_interval = value as usize,
                "g" => self.g = value,
                other => log::debug!("Ignoring unknown config key '{}'", other),
            }
        }
    }

    /// Check that the configuration can drive a run
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] for a non-positive or non-finite
    /// `dt`, or a negative or non-finite `g`.
    pub fn validate(&self) -> Result<()> {
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "dt must be positive and finite, got {}",
                self.dt
            )));
        }
        if !(self.g >= 0.0 && self.g.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "g must be non-negative and finite, got {}",
                self.g
            )));
        }
        Ok(())
    }

    /// Steps between output frames
    ///
    /// `save_interval` when set, otherwise `steps / frames`; never zero.
    pub fn frame_interval(&self) -> usize {
        if self.save_interval > 0 {
            return self.save_interval;
        }
        match self.frames {
            0 => self.steps.max(1),
            frames => (self.steps / frames).max(1),
        }
    }
}

/// Capacity limits and policy constants for a simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimLimits {
    /// Hard cap on massive bodies
    pub max_bodies: usize,
    /// Hard cap on rockets
    pub max_rockets: usize,
    /// Samples each new rocket trail can hold
    pub trail_capacity: usize,
    /// Softening length of the force law
    pub softening: f64,
    /// Distance from the origin beyond which rockets are deactivated
    pub escape_radius: f64,
}

impl Default for SimLimits {
    fn default() -> Self {
        SimLimits {
            max_bodies: DEFAULT_MAX_BODIES,
            max_rockets: DEFAULT_MAX_ROCKETS,
            trail_capacity: DEFAULT_STEPS,
            softening: DEFAULT_SOFTENING,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        }
    }
}

impl SimLimits {
    /// Default limits with trails sized to the configured run length
    pub fn for_config(config: &SimConfig) -> Self {
        SimLimits {
            trail_capacity: config.steps,
            ..SimLimits::default()
        }
    }

    /// Set the trail capacity
    pub fn with_trail_capacity(mut self, trail_capacity: usize) -> Self {
        self.trail_capacity = trail_capacity;
        self
    }

    /// Set the body and rocket caps
    pub fn with_max_counts(mut self, max_bodies: usize, max_rockets: usize) -> Self {
        self.max_bodies = max_bodies;
        self.max_rockets = max_rockets;
        self
    }

    /// Set the softening length
    pub fn with_softening(mut self, softening: f64) -> Self {
        self.softening = softening;
        self
    }

    /// Set the escape radius
    pub fn with_escape_radius(mut self, escape_radius: f64) -> Self {
        self.escape_radius = escape_radius;
        self
    }

    /// Check that the policy constants are usable
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] for a negative or non-finite
    /// softening length, or a non-positive or non-finite escape radius.
    pub fn validate(&self) -> Result<()> {
        if !(self.softening >= 0.0 && self.softening.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "softening must be non-negative and finite, got {}",
                self.softening
            )));
        }
        if !(self.escape_radius > 0.0 && self.escape_radius.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "escape radius must be positive and finite, got {}",
                self.escape_radius
            )));
        }
        Ok(())
    }
}
