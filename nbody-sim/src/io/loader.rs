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
//! Initial-state text files
//!
//! Bodies: `x y vx vy mass` per line. Rockets: `x y vx vy` per line. Fields
//! are whitespace separated; extra trailing fields are ignored. Blank lines
//! and lines starting with `#` are comments. Lines with too few numeric
//! fields (or a non-positive mass) are skipped.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::state::{Body, Mass, Position, Velocity};

/// Parse up to `max` bodies from text
pub fn parse_bodies(text: &str, max: usize) -> Vec<Body> {
    let mut bodies = Vec::new();
    for (line_no, fields) in records(text) {
        if bodies.len() == max {
            log::warn!("Body limit of {} reached, ignoring remaining lines", max);
            break;
        }
        let Some([x, y, vx, vy, mass]) = leading_reals::<5>(fields) else {
            log::debug!("Skipping malformed body on line {}", line_no);
            continue;
        };
        let Some(mass) = Mass::try_new(mass) else {
            log::warn!("Skipping body on line {}: mass {} is not positive", line_no, mass);
            continue;
        };
        log::debug!(
            "Body {}: pos({:.2}, {:.2}) vel({:.2}, {:.2}) mass={:.2}",
            bodies.len(),
            x,
            y,
            vx,
            vy,
            mass.value()
        );
        bodies.push(Body::new(Position::new(x, y), Velocity::new(vx, vy), mass));
    }
    bodies
}

/// Parse up to `max` rocket initial states from text
pub fn parse_rockets(text: &str, max: usize) -> Vec<(Position, Velocity)> {
    let mut rockets = Vec::new();
    for (line_no, fields) in records(text) {
        if rockets.len() == max {
            log::warn!("Rocket limit of {} reached, ignoring remaining lines", max);
            break;
        }
        let Some([x, y, vx, vy]) = leading_reals::<4>(fields) else {
            log::debug!("Skipping malformed rocket on line {}", line_no);
            continue;
        };
        log::debug!(
            "Rocket {}: pos({:.2}, {:.2}) vel({:.4}, {:.4})",
            rockets.len(),
            x,
            y,
            vx,
            vy
        );
        rockets.push((Position::new(x, y), Velocity::new(vx, vy)));
    }
    rockets
}

/// Read up to `max` bodies from a file
///
/// # Errors
///
/// Returns [`SimError::Io`](crate::SimError::Io) if the file cannot be read.
pub fn load_bodies(path: impl AsRef<Path>, max: usize) -> Result<Vec<Body>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let bodies = parse_bodies(&text, max);
    log::info!("Loaded {} bodies from {}", bodies.len(), path.display());
    Ok(bodies)
}

/// Read up to `max` rocket initial states from a file
///
/// # Errors
///
/// Returns [`SimError::Io`](crate::SimError::Io) if the file cannot be read.
pub fn load_rockets(path: impl AsRef<Path>, max: usize) -> Result<Vec<(Position, Velocity)>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let rockets = parse_rockets(&text, max);
    log::info!("Loaded {} rockets from {}", rockets.len(), path.display());
    Ok(rockets)
}

/// Non-comment lines with their 1-based line numbers
fn records(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// First `N` whitespace-separated fields parsed as reals
fn leading_reals<const N: usize>(line: &str) -> Option<[f64; N]> {
    let mut values = [0.0; N];
    let mut fields = line.split_whitespace();
    for value in values.iter_mut() {
        *value = fields.next()?.parse().ok()?;
    }
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bodies() {
        let text = "# x y vx vy mass\n0 0 0 0 100\n\n3.0 0.0 0.0 5.77 1.0\n";
        let bodies = parse_bodies(text, 20);
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0].mass().value(), 100.0);
        assert_eq!(bodies[1].position(), Position::new(3.0, 0.0));
        assert_eq!(bodies[1].velocity(), Velocity::new(0.0, 5.77));
    }

    #[test]
    fn test_parse_bodies_skips_malformed_lines() {
        let text = "1 2 3 4\nfoo bar baz qux quux\n1 2 3 4 -5\n1 2 3 4 5 extra\n";
        let bodies = parse_bodies(text, 20);
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].mass().value(), 5.0);
    }

    #[test]
    fn test_parse_bodies_stops_at_limit() {
        let text = "0 0 0 0 1\n1 0 0 0 1\n2 0 0 0 1\n";
        let bodies = parse_bodies(text, 2);
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[1].position().x(), 1.0);
    }

    #[test]
    fn test_parse_rockets() {
        let text = "  # indented comment\n2.0 0.0 0.0 11.0\n5 5 -1 1e-1\n";
        let rockets = parse_rockets(text, 10);
        assert_eq!(rockets.len(), 2);
        assert_eq!(rockets[0], (Position::new(2.0, 0.0), Velocity::new(0.0, 11.0)));
        assert_eq!(rockets[1].1, Velocity::new(-1.0, 0.1));
    }

    #[test]
    fn test_parse_rockets_zero_limit() {
        assert!(parse_rockets("1 2 3 4\n", 0).is_empty());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(load_bodies("/nonexistent/nbody-sim/bodies.txt", 20).is_err());
        assert!(load_rockets("/nonexistent/nbody-sim/rockets.txt", 10).is_err());
    }
}
