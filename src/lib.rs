//! tardis: canonical coordinates for labelled data cubes
//!
//! Ocean and atmosphere model output rarely agrees on what its coordinates are
//! called. tardis finds the longitude, latitude, time and vertical coordinate
//! of a cube, renaming the horizontal and time coordinates to their canonical
//! CF names along the way.
//!
//! ## Module Organization
//!
//! - [`cube`]: the [`Cube`](cube::Cube) and [`Coordinate`](cube::Coordinate) capability traits
//! - [`resolve`]: the `x_coord`, `y_coord`, `t_coord` and `z_coord` resolvers
//! - [`coord`]: in-memory coordinate and cube types
//! - [`netcdf_io`]: loading cube metadata from NetCDF files
//! - [`standard_names`]: the CF vocabulary and axis inference
//! - [`logging`]: `tracing` subscriber setup
//! - [`errors`]: centralized error handling
//!
//! ## Usage
//! ```rust,no_run
//! use tardis::prelude::*;
//!
//! let mut cube = tardis::netcdf_io::open_cube("sabgom.nc", "temp").unwrap();
//!
//! assert_eq!(x_coord(&mut cube).unwrap().name(), "longitude");
//! if let Some(z) = z_coord(&cube).unwrap() {
//!     println!("vertical coordinate: {}", z.name());
//! }
//! ```

pub mod coord;
pub mod cube;
pub mod errors;
pub mod logging;
pub mod netcdf_io;
pub mod resolve;
pub mod standard_names;

pub use coord::{Coord, DataCube};
pub use cube::{Axis, Coordinate, Cube};
pub use errors::{Result, TardisError};
pub use resolve::{resolve_all, t_coord, x_coord, y_coord, z_coord, CanonicalCoords};

pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::coord::{Coord, DataCube};
    pub use crate::cube::{Axis, Coordinate, Cube};
    pub use crate::errors::{Result, TardisError};
    pub use crate::resolve::{t_coord, x_coord, y_coord, z_coord};
}
