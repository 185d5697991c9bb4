//! CF standard-name vocabulary used for coordinate resolution
//!
//! Only the coordinate-related corner of the CF standard-name table is carried
//! here, enough to decide whether a rename sets a standard name or a long name
//! and to infer an axis when none is tagged.

use crate::cube::Axis;

/// Parametric vertical coordinates that need a formula to become heights.
pub const NON_DIMENSIONAL_VERTICAL: [&str; 9] = [
    "atmosphere_hybrid_height_coordinate",
    "atmosphere_hybrid_sigma_pressure_coordinate",
    "atmosphere_sigma_coordinate",
    "atmosphere_sleve_coordinate",
    "ocean_s_coordinate",
    "ocean_s_coordinate_g1",
    "ocean_s_coordinate_g2",
    "ocean_sigma_coordinate",
    "ocean_sigma_z_coordinate",
];

const COORDINATE_STANDARD_NAMES: &[&str] = &[
    "longitude",
    "latitude",
    "time",
    "altitude",
    "height",
    "height_above_reference_ellipsoid",
    "depth",
    "depth_below_geoid",
    "air_pressure",
    "model_level_number",
    "grid_longitude",
    "grid_latitude",
    "projection_x_coordinate",
    "projection_y_coordinate",
    "forecast_period",
    "forecast_reference_time",
];

const X_NAMES: [&str; 3] = ["longitude", "grid_longitude", "projection_x_coordinate"];
const Y_NAMES: [&str; 3] = ["latitude", "grid_latitude", "projection_y_coordinate"];

/// Unit symbols convertible to hPa, matched case-sensitively.
const PRESSURE_SYMBOLS: &[&str] = &[
    "Pa", "hPa", "kPa", "MPa", "daPa", "mbar", "mb", "cbar", "dbar", "bar", "kbar", "atm",
    "Torr", "mmHg", "psi",
];

/// Spelled-out pressure units, matched case-insensitively.
const PRESSURE_NAMES: &[&str] = &[
    "pascal",
    "pascals",
    "hectopascal",
    "hectopascals",
    "kilopascal",
    "kilopascals",
    "millibar",
    "millibars",
    "centibar",
    "centibars",
    "decibar",
    "decibars",
    "bars",
    "atmosphere",
    "atmospheres",
    "torr",
];

pub fn is_non_dimensional_vertical(name: &str) -> bool {
    NON_DIMENSIONAL_VERTICAL.contains(&name)
}

/// Whether `name` is a standard name known to this crate.
pub fn is_standard_name(name: &str) -> bool {
    COORDINATE_STANDARD_NAMES.contains(&name) || is_non_dimensional_vertical(name)
}

/// Infers an axis for a coordinate that carries no explicit tag.
///
/// Horizontal axes come from the standard name, the vertical axis from
/// pressure units or a `positive` attribute, and time from reference units
/// such as `hours since 2000-01-01`.
pub fn guess_axis(
    standard_name: Option<&str>,
    units: Option<&str>,
    positive: Option<&str>,
) -> Option<Axis> {
    let standard_name = standard_name.map(str::to_ascii_lowercase);
    let units = units.map(str::trim);

    if let Some(name) = standard_name.as_deref() {
        if X_NAMES.contains(&name) {
            return Some(Axis::X);
        }
        if Y_NAMES.contains(&name) {
            return Some(Axis::Y);
        }
    }

    let pressure = units.is_some_and(is_pressure_unit);
    let oriented = positive
        .map(|p| p.trim().to_ascii_lowercase())
        .is_some_and(|p| p == "up" || p == "down");
    if pressure || oriented {
        return Some(Axis::Z);
    }

    if units.is_some_and(is_time_reference) {
        return Some(Axis::T);
    }

    None
}

fn is_pressure_unit(units: &str) -> bool {
    PRESSURE_SYMBOLS.contains(&units)
        || PRESSURE_NAMES.contains(&units.to_ascii_lowercase().as_str())
}

/// `<unit> since <epoch>`, in any case and with any spacing.
fn is_time_reference(units: &str) -> bool {
    let lower = units.to_ascii_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    words
        .iter()
        .position(|w| *w == "since")
        .is_some_and(|i| i > 0 && i + 1 < words.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_horizontal_axes() {
        assert_eq!(guess_axis(Some("longitude"), None, None), Some(Axis::X));
        assert_eq!(guess_axis(Some("grid_latitude"), None, None), Some(Axis::Y));
        assert_eq!(guess_axis(Some("sea_water_temperature"), None, None), None);
    }

    #[test]
    fn test_guess_vertical_and_time() {
        assert_eq!(guess_axis(None, Some("hPa"), None), Some(Axis::Z));
        assert_eq!(guess_axis(Some("ocean_s_coordinate_g1"), None, Some("up")), Some(Axis::Z));
        assert_eq!(
            guess_axis(None, Some("hours since 2000-01-01 00:00:00"), None),
            Some(Axis::T)
        );
        assert_eq!(guess_axis(None, Some("m"), None), None);
    }

    #[test]
    fn test_guess_ocean_pressure_units() {
        assert_eq!(guess_axis(None, Some("dbar"), None), Some(Axis::Z));
        assert_eq!(guess_axis(None, Some("decibar"), None), Some(Axis::Z));
        assert_eq!(guess_axis(None, Some("Pascal"), None), Some(Axis::Z));
        assert_eq!(guess_axis(None, Some(" MPa "), None), Some(Axis::Z));
        assert_eq!(guess_axis(None, Some("degC"), None), None);
    }

    #[test]
    fn test_guess_time_reference_any_case() {
        assert_eq!(guess_axis(None, Some("Days Since 2000-01-01"), None), Some(Axis::T));
        assert_eq!(guess_axis(None, Some("hours  SINCE  1970-01-01 00:00"), None), Some(Axis::T));
        assert_eq!(guess_axis(None, Some("since 2000-01-01"), None), None);
        assert_eq!(guess_axis(None, Some("days since"), None), None);
    }

    #[test]
    fn test_vocabulary() {
        assert!(is_standard_name("longitude"));
        assert!(is_standard_name("ocean_sigma_z_coordinate"));
        assert!(!is_standard_name("lon"));
        assert!(is_non_dimensional_vertical("atmosphere_sleve_coordinate"));
        assert!(!is_non_dimensional_vertical("depth"));
    }
}
