//! Canonical coordinate resolvers
//!
//! `x_coord`, `y_coord` and `t_coord` rename the axis-tagged coordinate to its
//! canonical label and then fetch it by that label. When several coordinates
//! share the axis and none already carries the label, the lookup fails; a lone
//! mis-tagged coordinate may also be renamed wrongly. `z_coord` never renames.

use crate::cube::{Axis, Coordinate, Cube};
use crate::errors::Result;
use crate::standard_names::is_non_dimensional_vertical;
use serde_json::json;

/// Return the longitude coordinate, renaming the X-axis coordinate if needed.
pub fn x_coord<C: Cube>(cube: &mut C) -> Result<&C::Coord> {
    canonical_coord(cube, Axis::X, "longitude")
}

/// Return the latitude coordinate, renaming the Y-axis coordinate if needed.
pub fn y_coord<C: Cube>(cube: &mut C) -> Result<&C::Coord> {
    canonical_coord(cube, Axis::Y, "latitude")
}

/// Return the time coordinate, renaming the T-axis coordinate if needed.
pub fn t_coord<C: Cube>(cube: &mut C) -> Result<&C::Coord> {
    canonical_coord(cube, Axis::T, "time")
}

/// Return the vertical coordinate, or `None` when the cube has none.
///
/// Tries, in order: the single Z coordinate, the single `altitude` coordinate,
/// then the first Z coordinate with a non-dimensional vertical standard name.
pub fn z_coord<C: Cube>(cube: &C) -> Result<Option<&C::Coord>> {
    match cube.coord_by_axis(Axis::Z) {
        Ok(coord) => return Ok(Some(coord)),
        Err(e) if e.is_coordinate_not_found() => {
            tracing::debug!("no single Z coordinate, trying altitude");
        }
        Err(e) => return Err(e),
    }

    match cube.coord_by_axis(Axis::Altitude) {
        Ok(coord) => return Ok(Some(coord)),
        Err(e) if e.is_coordinate_not_found() => {
            tracing::debug!("no altitude coordinate, trying non-dimensional names");
        }
        Err(e) => return Err(e),
    }

    let coord = cube
        .coords_by_axis(Axis::Z)
        .into_iter()
        .find(|c| c.standard_name().is_some_and(is_non_dimensional_vertical));
    if coord.is_none() {
        tracing::debug!("no vertical coordinate found");
    }
    Ok(coord)
}

fn canonical_coord<'a, C: Cube>(
    cube: &'a mut C,
    axis: Axis,
    canonical: &str,
) -> Result<&'a C::Coord> {
    match cube.coord_by_axis_mut(axis) {
        Ok(coord) => {
            tracing::debug!(axis = %axis, from = coord.name(), to = canonical, "renaming coordinate");
            coord.rename(canonical);
        }
        Err(e) if e.is_coordinate_not_found() => {
            tracing::debug!(axis = %axis, "falling back to lookup by name '{}'", canonical);
        }
        Err(e) => return Err(e),
    }

    cube.coord(canonical)
}

/// Names of the canonical coordinates found on a cube
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalCoords {
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub time: Option<String>,
    pub vertical: Option<String>,
}

impl CanonicalCoords {
    pub fn to_json(&self) -> Result<String> {
        let value = json!({
            "longitude": self.longitude,
            "latitude": self.latitude,
            "time": self.time,
            "vertical": self.vertical,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// Run all four resolvers, recording absent coordinates as `None`.
pub fn resolve_all<C: Cube>(cube: &mut C) -> Result<CanonicalCoords> {
    let longitude = found_name(x_coord(cube))?;
    let latitude = found_name(y_coord(cube))?;
    let time = found_name(t_coord(cube))?;
    let vertical = z_coord(cube)?.map(|c| c.name().to_string());

    Ok(CanonicalCoords {
        longitude,
        latitude,
        time,
        vertical,
    })
}

fn found_name<T: Coordinate>(result: Result<&T>) -> Result<Option<String>> {
    match result {
        Ok(coord) => Ok(Some(coord.name().to_string())),
        Err(e) if e.is_coordinate_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
