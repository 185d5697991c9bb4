//! Entry point for the tardis binary.
//! Parses the CLI, loads cube metadata from a NetCDF file and prints its canonical coordinates.

use clap::Parser;
use serde_json::json;
use tardis::prelude::*;
use tardis::{logging, netcdf_io, resolve};

mod cli;

use cli::{Args, CoordKind};

fn main() -> Result<()> {
    let args = Args::parse();

    let profile = if args.json {
        logging::Profile::Json
    } else if args.verbose {
        logging::Profile::Verbose
    } else {
        logging::Profile::Quiet
    };
    logging::init(profile);

    let mut cube = netcdf_io::open_cube(&args.file, &args.variable)?;

    if args.list {
        return list_coords(&cube, args.json);
    }

    match args.coord {
        Some(kind) => print_single(&mut cube, kind, args.json),
        None => {
            let canonical = resolve::resolve_all(&mut cube)?;
            if args.json {
                println!("{}", canonical.to_json()?);
            } else {
                println!("Canonical coordinates for '{}':", cube.name);
                println!("   longitude: {}", canonical.longitude.as_deref().unwrap_or("-"));
                println!("   latitude:  {}", canonical.latitude.as_deref().unwrap_or("-"));
                println!("   time:      {}", canonical.time.as_deref().unwrap_or("-"));
                println!("   vertical:  {}", canonical.vertical.as_deref().unwrap_or("-"));
            }
            Ok(())
        }
    }
}

fn print_single(cube: &mut DataCube, kind: CoordKind, as_json: bool) -> Result<()> {
    let name = match kind {
        CoordKind::X => Some(x_coord(cube)?.name().to_string()),
        CoordKind::Y => Some(y_coord(cube)?.name().to_string()),
        CoordKind::T => Some(t_coord(cube)?.name().to_string()),
        CoordKind::Z => z_coord(cube)?.map(|c| c.name().to_string()),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&json!({ "coord": name }))?);
    } else {
        println!("{}", name.as_deref().unwrap_or("(no vertical coordinate)"));
    }
    Ok(())
}

fn list_coords(cube: &DataCube, as_json: bool) -> Result<()> {
    if as_json {
        let coords: Vec<_> = cube
            .coords()
            .iter()
            .map(|c| {
                json!({
                    "name": c.name(),
                    "standard_name": c.standard_name(),
                    "axis": c.axis().map(|a| a.as_str()),
                    "dimensions": c.dimensions,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&coords)?);
        return Ok(());
    }

    println!("\n Coordinates of '{}'", cube.name);
    println!("=================");
    if cube.coords().is_empty() {
        println!("   (No coordinates found)");
    }
    for coord in cube.coords() {
        println!(
            "    {} [axis: {}, standard_name: {}] ({})",
            coord.name(),
            coord.axis().map(|a| a.as_str()).unwrap_or("-"),
            coord.standard_name().unwrap_or("-"),
            coord.dimensions.join(", ")
        );
    }
    Ok(())
}
