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
//! Binary trail export
//!
//! # Format
//!
//! All values little-endian:
//!
//! ```text
//! i32            number of trails
//! per trail:
//!   i32          number of samples n
//!   f64 * n      x coordinates
//!   f64 * n      y coordinates
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use crate::error::{Result, SimError};
use crate::trail::Trail;

/// Serialize trails in order
///
/// # Errors
///
/// Returns [`SimError::Io`] on write failure and [`SimError::TrailFormat`]
/// if a count does not fit the 32-bit header fields.
pub fn write_trails<'a, W, I>(mut writer: W, trails: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Trail>,
    I::IntoIter: ExactSizeIterator,
{
    let trails = trails.into_iter();
    writer.write_all(&header(trails.len(), "trail count")?.to_le_bytes())?;

    for trail in trails {
        writer.write_all(&header(trail.len(), "sample count")?.to_le_bytes())?;
        for value in trail.xs().iter().chain(trail.ys()) {
            writer.write_all(&value.to_le_bytes())?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Deserialize trails written by [`write_trails`]
///
/// Each returned trail is full: its capacity equals its sample count.
///
/// # Errors
///
/// Returns [`SimError::TrailFormat`] for negative counts or truncated input
/// and [`SimError::Io`] for other read failures.
pub fn read_trails<R: Read>(mut reader: R) -> Result<Vec<Trail>> {
    let count = read_count(&mut reader, "trail count")?;
    let mut trails = Vec::new();

    for index in 0..count {
        let len = read_count(&mut reader, "sample count")?;
        let xs = read_column(&mut reader, len)
            .map_err(|e| truncated(e, format!("x samples of trail {}", index)))?;
        let ys = read_column(&mut reader, len)
            .map_err(|e| truncated(e, format!("y samples of trail {}", index)))?;
        trails.push(Trail::from_samples(xs, ys));
    }

    Ok(trails)
}

/// Write trails to a file
pub fn save_trails<'a, I>(path: impl AsRef<Path>, trails: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Trail>,
    I::IntoIter: ExactSizeIterator,
{
    let path = path.as_ref();
    write_trails(BufWriter::new(File::create(path)?), trails)?;
    log::info!("Trail data saved to {}", path.display());
    Ok(())
}

/// Read trails from a file
pub fn load_trails(path: impl AsRef<Path>) -> Result<Vec<Trail>> {
    let path = path.as_ref();
    let trails = read_trails(BufReader::new(File::open(path)?))?;
    log::info!("Read {} trails from {}", trails.len(), path.display());
    Ok(trails)
}

fn header(count: usize, what: &str) -> Result<i32> {
    i32::try_from(count)
        .map_err(|_| SimError::TrailFormat(format!("{} {} does not fit in 32 bits", what, count)))
}

fn read_count<R: Read>(reader: &mut R, what: &str) -> Result<usize> {
    let mut buf = [0u8; 4];
    reader
        .read_exact(&mut buf)
        .map_err(|e| truncated(e, what.to_string()))?;
    let value = i32::from_le_bytes(buf);
    usize::try_from(value).map_err(|_| SimError::TrailFormat(format!("negative {}: {}", what, value)))
}

fn read_column<R: Read>(reader: &mut R, len: usize) -> std::io::Result<Vec<f64>> {
    // grow as data arrives so a corrupt length cannot force a huge allocation
    let mut column = Vec::new();
    let mut buf = [0u8; 8];
    for _ in 0..len {
        reader.read_exact(&mut buf)?;
        column.push(f64::from_le_bytes(buf));
    }
    Ok(column)
}

fn truncated(error: std::io::Error, what: String) -> SimError {
    if error.kind() == ErrorKind::UnexpectedEof {
        SimError::TrailFormat(format!("unexpected end of data reading {}", what))
    } else {
        SimError::Io(error)
    }
}
