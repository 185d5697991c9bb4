//! In-memory coordinates and cubes
//!
//! [`DataCube`] holds coordinate metadata only; it is what the NetCDF loader
//! produces and what the resolvers mutate when they rename.

use crate::cube::{Axis, Coordinate, Cube};
use crate::errors::{Result, TardisError};
use crate::standard_names::{guess_axis, is_standard_name};

/// Coordinate metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coord {
    pub standard_name: Option<String>,
    pub long_name: Option<String>,
    pub var_name: Option<String>,
    pub units: Option<String>,
    pub positive: Option<String>,
    /// Explicit axis tag; inferred from the other fields when unset
    pub axis: Option<Axis>,
    pub dimensions: Vec<String>,
}

impl Coord {
    /// Create a coordinate known only by its variable name
    pub fn new(var_name: &str) -> Self {
        Self {
            var_name: Some(var_name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_standard_name(mut self, standard_name: &str) -> Self {
        self.standard_name = Some(standard_name.to_string());
        self
    }

    pub fn with_long_name(mut self, long_name: &str) -> Self {
        self.long_name = Some(long_name.to_string());
        self
    }

    pub fn with_units(mut self, units: &str) -> Self {
        self.units = Some(units.to_string());
        self
    }

    pub fn with_positive(mut self, positive: &str) -> Self {
        self.positive = Some(positive.to_string());
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn with_dimensions(mut self, dimensions: &[&str]) -> Self {
        self.dimensions = dimensions.iter().map(|d| d.to_string()).collect();
        self
    }
}

impl Coordinate for Coord {
    fn name(&self) -> &str {
        self.standard_name
            .as_deref()
            .or(self.long_name.as_deref())
            .or(self.var_name.as_deref())
            .unwrap_or("unknown")
    }

    fn standard_name(&self) -> Option<&str> {
        self.standard_name.as_deref()
    }

    fn axis(&self) -> Option<Axis> {
        self.axis.or_else(|| {
            guess_axis(
                self.standard_name.as_deref(),
                self.units.as_deref(),
                self.positive.as_deref(),
            )
        })
    }

    /// Known standard names replace the standard name; anything else becomes
    /// the long name. The variable name is always dropped.
    fn rename(&mut self, name: &str) {
        if is_standard_name(name) {
            self.standard_name = Some(name.to_string());
            self.long_name = None;
        } else {
            self.standard_name = None;
            self.long_name = Some(name.to_string());
        }
        self.var_name = None;
    }
}

/// A named cube carrying coordinate metadata
#[derive(Debug, Clone, Default)]
pub struct DataCube {
    pub name: String,
    pub units: Option<String>,
    pub dimensions: Vec<String>,
    coords: Vec<Coord>,
}

impl DataCube {
    pub fn new(name: &str, dimensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            units: None,
            dimensions: dimensions.iter().map(|d| d.to_string()).collect(),
            coords: Vec::new(),
        }
    }

    pub fn with_coord(mut self, coord: Coord) -> Self {
        self.coords.push(coord);
        self
    }

    pub fn add_coord(&mut self, coord: Coord) {
        self.coords.push(coord);
    }

    /// Remove the single coordinate named `name` and hand it back.
    pub fn remove_coord(&mut self, name: &str) -> Result<Coord> {
        let indices: Vec<usize> = self
            .coords
            .iter()
            .enumerate()
            .filter(|(_, c)| c.name() == name)
            .map(|(i, _)| i)
            .collect();

        match indices.as_slice() {
            [index] => Ok(self.coords.remove(*index)),
            _ => Err(TardisError::CoordinateNotFound {
                query: format!("name '{}'", name),
                found: indices.len(),
            }),
        }
    }
}

impl Cube for DataCube {
    type Coord = Coord;

    fn coords(&self) -> &[Coord] {
        &self.coords
    }

    fn coords_mut(&mut self) -> &mut [Coord] {
        &mut self.coords
    }
}
