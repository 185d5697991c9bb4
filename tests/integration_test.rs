use netcdf::{create, open};
use tardis::{
    errors::{Result, TardisError},
    netcdf_io::{load_cube, open_cube},
    prelude::*,
    resolve::resolve_all,
};
use tempfile::tempdir;

/// Writes a ROMS-like header: temperature on (ocean_time, s_rho, eta_rho, xi_rho)
/// with 2D auxiliary longitude/latitude.
fn write_roms_header(path: &std::path::Path) -> Result<()> {
    let mut file = create(path)?;

    file.add_dimension("ocean_time", 2)?;
    file.add_dimension("s_rho", 3)?;
    file.add_dimension("eta_rho", 2)?;
    file.add_dimension("xi_rho", 4)?;

    let mut time = file.add_variable::<f64>("ocean_time", &["ocean_time"])?;
    time.put_attribute("long_name", "time since initialization")?;
    time.put_attribute("units", "seconds since 1970-01-01 00:00:00")?;

    let mut s_rho = file.add_variable::<f64>("s_rho", &["s_rho"])?;
    s_rho.put_attribute("long_name", "S-coordinate at RHO-points")?;
    s_rho.put_attribute("standard_name", "ocean_s_coordinate_g1")?;
    s_rho.put_attribute("positive", "up")?;

    let mut lon = file.add_variable::<f64>("lon_rho", &["eta_rho", "xi_rho"])?;
    lon.put_attribute("long_name", "longitude of RHO-points")?;
    lon.put_attribute("units", "degree_east")?;
    lon.put_attribute("axis", "X")?;

    let mut lat = file.add_variable::<f64>("lat_rho", &["eta_rho", "xi_rho"])?;
    lat.put_attribute("long_name", "latitude of RHO-points")?;
    lat.put_attribute("standard_name", "latitude")?;

    let mut temp =
        file.add_variable::<f32>("temp", &["ocean_time", "s_rho", "eta_rho", "xi_rho"])?;
    temp.put_attribute("standard_name", "sea_water_potential_temperature")?;
    temp.put_attribute("units", "Celsius")?;
    temp.put_attribute("coordinates", "lon_rho lat_rho s_rho ocean_time missing_var")?;

    let mut h = file.add_variable::<f64>("h", &["eta_rho", "xi_rho"])?;
    h.put_attribute("long_name", "bathymetry at RHO-points")?;
    h.put_attribute("coordinates", "lon_rho lat_rho")?;

    Ok(())
}

#[test]
fn test_load_cube_from_netcdf() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("roms.nc");
    write_roms_header(&file_path)?;

    let file = open(&file_path)?;
    let cube = load_cube(&file, "temp")?;

    assert_eq!(cube.name, "temp");
    assert_eq!(cube.units.as_deref(), Some("Celsius"));
    assert_eq!(cube.dimensions, vec!["ocean_time", "s_rho", "eta_rho", "xi_rho"]);

    // Dimension coordinates first, then auxiliaries not already seen.
    let names: Vec<&str> = cube.coords().iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec!["time since initialization", "ocean_s_coordinate_g1", "longitude of RHO-points", "latitude"]
    );

    let lon = &cube.coords()[2];
    assert_eq!(lon.axis, Some(Axis::X));
    assert_eq!(lon.dimensions, vec!["eta_rho", "xi_rho"]);
    assert_eq!(lon.var_name.as_deref(), Some("lon_rho"));
    Ok(())
}

#[test]
fn test_resolve_netcdf_cube() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("roms.nc");
    write_roms_header(&file_path)?;

    let mut cube = open_cube(&file_path, "temp")?;

    assert_eq!(x_coord(&mut cube)?.var_name, None);
    assert_eq!(cube.coord("longitude")?.long_name, None);
    assert_eq!(y_coord(&mut cube)?.name(), "latitude");
    assert_eq!(t_coord(&mut cube)?.name(), "time");

    let z = z_coord(&cube)?.expect("vertical coordinate");
    assert_eq!(z.name(), "ocean_s_coordinate_g1");
    assert_eq!(z.long_name.as_deref(), Some("S-coordinate at RHO-points"));
    Ok(())
}

#[test]
fn test_resolve_all_without_vertical_or_time() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("roms.nc");
    write_roms_header(&file_path)?;

    let mut cube = open_cube(&file_path, "h")?;
    let canonical = resolve_all(&mut cube)?;

    assert_eq!(canonical.longitude.as_deref(), Some("longitude"));
    assert_eq!(canonical.latitude.as_deref(), Some("latitude"));
    assert!(canonical.time.is_none());
    assert!(canonical.vertical.is_none());
    Ok(())
}

#[test]
fn test_missing_variable() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("roms.nc");
    write_roms_header(&file_path)?;

    match open_cube(&file_path, "salt") {
        Err(TardisError::VariableNotFound { var }) => assert_eq!(var, "salt"),
        other => panic!("Expected VariableNotFound error, got {:?}", other.map(|c| c.name)),
    }
    Ok(())
}

/// Station time series with an altitude-tagged height and a depth carrying
/// an axis tag outside X/Y/Z/T.
fn write_station_header(path: &std::path::Path) -> Result<()> {
    let mut file = create(path)?;

    file.add_dimension("obs", 3)?;

    let mut alt = file.add_variable::<f64>("alt", &["obs"])?;
    alt.put_attribute("long_name", "station altitude")?;
    alt.put_attribute("units", "m")?;
    alt.put_attribute("axis", "altitude")?;

    let mut depth = file.add_variable::<f64>("sensor_depth", &["obs"])?;
    depth.put_attribute("long_name", "sensor depth")?;
    depth.put_attribute("units", "m")?;
    depth.put_attribute("axis", "W")?;

    let mut air = file.add_variable::<f32>("air_temperature", &["obs"])?;
    air.put_attribute("units", "K")?;
    air.put_attribute("coordinates", "alt sensor_depth")?;

    Ok(())
}

#[test]
fn test_altitude_axis_and_unknown_axis_tag() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("station.nc");
    write_station_header(&file_path)?;

    let cube = open_cube(&file_path, "air_temperature")?;
    assert_eq!(cube.coords().len(), 2);

    let alt = cube.coord("station altitude")?;
    assert_eq!(alt.axis, Some(Axis::Altitude));

    // The unrecognised tag is dropped and nothing can be guessed from metres.
    let depth = cube.coord("sensor depth")?;
    assert_eq!(depth.axis, None);
    assert_eq!(depth.axis(), None);

    let z = z_coord(&cube)?.expect("altitude coordinate");
    assert_eq!(z.var_name.as_deref(), Some("alt"));
    Ok(())
}
