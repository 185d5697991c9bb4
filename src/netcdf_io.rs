//! NetCDF loading of cube metadata
//!
//! Builds a [`DataCube`] from a variable's header: dimension coordinates are
//! the variables named after its dimensions, auxiliary coordinates come from
//! the CF `coordinates` attribute. Coordinate values are never read.

use crate::coord::{Coord, DataCube};
use crate::cube::Axis;
use crate::errors::{Result, TardisError};
use netcdf::{AttributeValue, File, Variable};
use std::path::Path;

/// Open a NetCDF file and load the cube for `var_name`
pub fn open_cube<P: AsRef<Path>>(path: P, var_name: &str) -> Result<DataCube> {
    let file = netcdf::open(path.as_ref())?;
    tracing::info!(path = %path.as_ref().display(), variable = var_name, "opened NetCDF file");
    load_cube(&file, var_name)
}

/// Load the cube for `var_name` from an open NetCDF file
pub fn load_cube(file: &File, var_name: &str) -> Result<DataCube> {
    let var = file
        .variable(var_name)
        .ok_or_else(|| TardisError::VariableNotFound {
            var: var_name.to_string(),
        })?;

    let dim_names: Vec<String> = var.dimensions().iter().map(|d| d.name()).collect();
    let dim_refs: Vec<&str> = dim_names.iter().map(|s| s.as_str()).collect();

    let mut cube = DataCube::new(var_name, &dim_refs);
    cube.units = string_attribute(&var, "units");

    let mut coord_vars: Vec<String> = Vec::new();
    for dim_name in &dim_names {
        if file.variable(dim_name).is_some() {
            coord_vars.push(dim_name.clone());
        }
    }

    if let Some(aux) = string_attribute(&var, "coordinates") {
        for name in aux.split_whitespace() {
            if coord_vars.iter().any(|c| c == name) {
                continue;
            }
            if file.variable(name).is_some() {
                coord_vars.push(name.to_string());
            } else {
                tracing::warn!(
                    variable = var_name,
                    coordinate = name,
                    "auxiliary coordinate listed but not present in file"
                );
            }
        }
    }

    for name in &coord_vars {
        if let Some(coord_var) = file.variable(name) {
            cube.add_coord(coord_from_variable(&coord_var));
        }
    }

    tracing::debug!(
        variable = var_name,
        coords = coord_vars.len(),
        "loaded cube metadata"
    );

    Ok(cube)
}

fn coord_from_variable(var: &Variable) -> Coord {
    let name = var.name();
    let dimensions: Vec<String> = var.dimensions().iter().map(|d| d.name()).collect();

    let axis = string_attribute(var, "axis").and_then(|value| match value.parse::<Axis>() {
        Ok(axis) => Some(axis),
        Err(e) => {
            tracing::warn!(coordinate = %name, "ignoring axis attribute: {}", e);
            None
        }
    });

    Coord {
        standard_name: string_attribute(var, "standard_name"),
        long_name: string_attribute(var, "long_name"),
        var_name: Some(name),
        units: string_attribute(var, "units"),
        positive: string_attribute(var, "positive"),
        axis,
        dimensions,
    }
}

fn string_attribute(var: &Variable, name: &str) -> Option<String> {
    match var.attribute(name)?.value() {
        Ok(AttributeValue::Str(value)) => Some(value),
        _ => None,
    }
}
