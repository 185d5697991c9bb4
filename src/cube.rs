//! Capability interface for data cubes and their coordinates
//!
//! The resolvers only need four things from a cube: lookup by axis, lookup by
//! name, renaming, and standard-name introspection. Anything implementing
//! [`Cube`] gets the lookups for free from its coordinate slice.

use crate::errors::{Result, TardisError};
use std::fmt;
use std::str::FromStr;

/// Axis classification of a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    T,
    /// Pseudo-axis for coordinates explicitly tagged as altitude
    Altitude,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
            Axis::T => "T",
            Axis::Altitude => "altitude",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = TardisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            "t" => Ok(Axis::T),
            "altitude" => Ok(Axis::Altitude),
            _ => Err(TardisError::InvalidAxis {
                value: s.to_string(),
            }),
        }
    }
}

/// A single coordinate attached to a cube
pub trait Coordinate {
    /// Preferred label of the coordinate.
    fn name(&self) -> &str;

    /// CF standard name, if one is set.
    fn standard_name(&self) -> Option<&str>;

    /// Axis classification, explicit or inferred.
    fn axis(&self) -> Option<Axis>;

    /// Relabel the coordinate in place.
    fn rename(&mut self, name: &str);
}

/// A labelled multi-dimensional array with attached coordinates
pub trait Cube {
    type Coord: Coordinate;

    /// All coordinates, in cube order.
    fn coords(&self) -> &[Self::Coord];

    fn coords_mut(&mut self) -> &mut [Self::Coord];

    /// The single coordinate whose name is `name`.
    fn coord(&self, name: &str) -> Result<&Self::Coord> {
        let mut matches = self.coords().iter().filter(|c| c.name() == name);
        match (matches.next(), matches.count()) {
            (Some(coord), 0) => Ok(coord),
            (first, rest) => Err(TardisError::CoordinateNotFound {
                query: format!("name '{}'", name),
                found: usize::from(first.is_some()) + rest,
            }),
        }
    }

    /// Every coordinate tagged with `axis`, in cube order.
    fn coords_by_axis(&self, axis: Axis) -> Vec<&Self::Coord> {
        self.coords()
            .iter()
            .filter(|c| c.axis() == Some(axis))
            .collect()
    }

    /// The single coordinate tagged with `axis`.
    fn coord_by_axis(&self, axis: Axis) -> Result<&Self::Coord> {
        let index = single_axis_index(self.coords(), axis)?;
        Ok(&self.coords()[index])
    }

    /// Mutable access to the single coordinate tagged with `axis`.
    fn coord_by_axis_mut(&mut self, axis: Axis) -> Result<&mut Self::Coord> {
        let index = single_axis_index(self.coords(), axis)?;
        Ok(&mut self.coords_mut()[index])
    }
}

fn single_axis_index<C: Coordinate>(coords: &[C], axis: Axis) -> Result<usize> {
    let indices: Vec<usize> = coords
        .iter()
        .enumerate()
        .filter(|(_, c)| c.axis() == Some(axis))
        .map(|(i, _)| i)
        .collect();

    match indices.as_slice() {
        [index] => Ok(*index),
        _ => {
            if indices.len() > 1 {
                tracing::debug!(
                    axis = %axis,
                    found = indices.len(),
                    "ambiguous axis lookup"
                );
            }
            Err(TardisError::CoordinateNotFound {
                query: format!("axis {}", axis),
                found: indices.len(),
            })
        }
    }
}
