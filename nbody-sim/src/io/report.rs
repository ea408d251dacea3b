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
//! Text reports written at the end of a run (and the per-frame log)

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Result;
use crate::simulation::Simulation;
use crate::state::{Position, Rocket};
use crate::trail::Trail;

/// Write final rocket states as a whitespace-separated table
///
/// One row per rocket: index, position, velocity (six decimals) and the
/// number of trail samples.
pub fn write_final_state<W: Write>(mut writer: W, rockets: &[Rocket]) -> Result<()> {
    writeln!(
        writer,
        "# Rocket_ID   Final_X   Final_Y   Final_VX   Final_VY   Trail_Length"
    )?;
    for (i, rocket) in rockets.iter().enumerate() {
        let p = rocket.position();
        let v = rocket.velocity();
        writeln!(
            writer,
            "{}   {:.6}   {:.6}   {:.6}   {:.6}   {}",
            i,
            p.x(),
            p.y(),
            v.dx(),
            v.dy(),
            rocket.trail().len()
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Summary statistics for one trajectory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryStats {
    /// Rocket index
    pub rocket: usize,
    /// Number of recorded samples
    pub trail_length: usize,
    /// Distance from the origin at the end of the run
    pub final_distance: f64,
    /// Largest sampled distance from the origin
    pub max_distance: f64,
    /// Path length divided by `trail_length * dt`; 0 for an empty trail
    pub average_speed: f64,
}

impl TrajectoryStats {
    /// Statistics of a trail ending at `final_position`
    pub fn compute(rocket: usize, trail: &Trail, final_position: Position, dt: f64) -> Self {
        let elapsed = trail.len() as f64 * dt;
        let average_speed = if elapsed > 0.0 {
            trail.path_length() / elapsed
        } else {
            0.0
        };
        TrajectoryStats {
            rocket,
            trail_length: trail.len(),
            final_distance: final_position.distance_from_origin(),
            max_distance: trail.max_distance_from_origin(),
            average_speed,
        }
    }

    /// Statistics of a live rocket, measured to its current position
    pub fn for_rocket(index: usize, rocket: &Rocket, dt: f64) -> Self {
        TrajectoryStats::compute(index, rocket.trail(), rocket.position(), dt)
    }

    /// Statistics of a stored trail, measured to its last sample
    pub fn for_trail(index: usize, trail: &Trail, dt: f64) -> Self {
        let last = trail.last().unwrap_or_default();
        TrajectoryStats::compute(index, trail, last, dt)
    }
}

/// Write trajectory statistics as CSV
pub fn write_trajectory_stats<W: Write>(mut writer: W, stats: &[TrajectoryStats]) -> Result<()> {
    writeln!(writer, "RocketID,TrailLength,FinalDistance,MaxDistance,AverageSpeed")?;
    for s in stats {
        writeln!(
            writer,
            "{},{},{:.3},{:.3},{:.6}",
            s.rocket, s.trail_length, s.final_distance, s.max_distance, s.average_speed
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Write run parameters as `key=value` lines
pub fn write_metadata<W: Write>(mut writer: W, sim: &Simulation) -> Result<()> {
    let config = sim.config();
    let limits = sim.limits();
    writeln!(writer, "# Simulation Metadata")?;
    writeln!(writer, "# Generated: {} (seconds since Unix epoch)", unix_time())?;
    writeln!(writer, "Steps={}", config.steps)?;
    writeln!(writer, "StepsCompleted={}", sim.step_count())?;
    writeln!(writer, "DT={:.6}", config.dt)?;
    writeln!(writer, "G={:.6}", config.g)?;
    writeln!(writer, "Softening={:.6}", limits.softening)?;
    writeln!(writer, "EscapeRadius={:.6}", limits.escape_radius)?;
    writeln!(writer, "N_Bodies={}", sim.bodies().len())?;
    writeln!(writer, "N_Rockets={}", sim.rockets().len())?;
    writeln!(writer, "ActiveRockets={}", sim.active_rockets())?;
    writeln!(writer, "TrailCapacity={}", limits.trail_capacity)?;
    writeln!(writer, "Frames={}", config.frames)?;
    writeln!(writer, "Save_Interval={}", config.frame_interval())?;
    writer.flush()?;
    Ok(())
}

/// Per-frame log of rocket positions
///
/// Each [`FrameLog::record`] call writes one line:
///
/// ```text
/// Frame 3: Step 150, Rocket0_Pos (1.23, -4.56), Rocket1_Pos (...)
/// ```
///
/// Rockets that are inactive and have no samples are left out.
#[derive(Debug)]
pub struct FrameLog<W: Write> {
    writer: W,
    frames: usize,
}

impl<W: Write> FrameLog<W> {
    /// Start a log, writing its header
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "# Frame Generation Log")?;
        writeln!(writer, "# Started: {} (seconds since Unix epoch)", unix_time())?;
        Ok(FrameLog { writer, frames: 0 })
    }

    /// Log the rocket positions for one frame
    pub fn record(&mut self, frame: usize, step: u64, rockets: &[Rocket]) -> Result<()> {
        write!(self.writer, "Frame {}: Step {}", frame, step)?;
        for (i, rocket) in rockets.iter().enumerate() {
            if rocket.is_active() || !rocket.trail().is_empty() {
                let p = rocket.position();
                write!(self.writer, ", Rocket{}_Pos ({:.2}, {:.2})", i, p.x(), p.y())?;
            }
        }
        writeln!(self.writer)?;
        self.frames += 1;
        Ok(())
    }

    /// Frames recorded so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Flush and return the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
