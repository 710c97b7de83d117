//! Geocentric (ECEF) ⇄ geodetic coordinate conversion for ellipsoids of
//! revolution, with local east-north-up frames.

pub mod batch;
pub mod error;
pub mod geo;
#[cfg(feature = "python")]
mod py;

pub use error::GeoError;
pub use geo::ellipsoid::Ellipsoid;
pub use geo::geocentric::{Geocentric, WGS84};
pub use geo::local::LocalCartesian;
pub use geo::point::{CartesianPoint, GeodeticPoint};
pub use geo::rotation::OrientationMatrix;
pub use geo::Conversion;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn _geocentric(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
