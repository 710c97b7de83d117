//! PyO3 bindings for array geodetic ⇄ geocentric conversion.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::geo::ellipsoid::Ellipsoid;
use crate::geo::geocentric::Geocentric;
use crate::geo::point::{CartesianPoint, GeodeticPoint};

type Triple<'py> = (
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
);

/// Convert geodetic coordinates to geocentric (ECEF).
///
/// Args:
///     lat: 1D array of latitudes (degrees).
///     lon: 1D array of longitudes (degrees).
///     h: 1D array of heights above the ellipsoid (metres).
///     ellipsoid: Ellipsoid name ("wgs84", "grs80", "international").
///
/// Returns:
///     Tuple of (x, y, z) arrays in metres.
#[pyfunction]
#[pyo3(signature = (lat, lon, h, ellipsoid="wgs84"))]
pub fn to_cartesian<'py>(
    py: Python<'py>,
    lat: PyReadonlyArray1<'py, f64>,
    lon: PyReadonlyArray1<'py, f64>,
    h: PyReadonlyArray1<'py, f64>,
    ellipsoid: &str,
) -> PyResult<Triple<'py>> {
    let frame = frame_for(ellipsoid)?;
    let pts = zip3(&lat, &lon, &h)?;

    let out = py.allow_threads(move || {
        pts.into_iter()
            .map(|[la, lo, hh]| frame.to_cartesian(GeodeticPoint::new(la, lo, hh)).to_array())
            .collect::<Vec<_>>()
    });
    Ok(unzip3(py, out))
}

/// Convert geocentric (ECEF) coordinates to geodetic.
///
/// Args:
///     x, y, z: 1D arrays of ECEF coordinates (metres).
///     ellipsoid: Ellipsoid name ("wgs84", "grs80", "international").
///
/// Returns:
///     Tuple of (lat, lon, h) arrays; lon is in [-180, 180).
#[pyfunction]
#[pyo3(signature = (x, y, z, ellipsoid="wgs84"))]
pub fn to_geodetic<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    y: PyReadonlyArray1<'py, f64>,
    z: PyReadonlyArray1<'py, f64>,
    ellipsoid: &str,
) -> PyResult<Triple<'py>> {
    let frame = frame_for(ellipsoid)?;
    let pts = zip3(&x, &y, &z)?;

    let out = py.allow_threads(move || {
        pts.into_iter()
            .map(|v| frame.to_geodetic(CartesianPoint::from_array(v)).to_array())
            .collect::<Vec<_>>()
    });
    Ok(unzip3(py, out))
}

fn frame_for(name: &str) -> PyResult<Geocentric> {
    Ellipsoid::from_name(name)
        .and_then(|e| Geocentric::from_ellipsoid(&e))
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

fn zip3(
    a: &PyReadonlyArray1<'_, f64>,
    b: &PyReadonlyArray1<'_, f64>,
    c: &PyReadonlyArray1<'_, f64>,
) -> PyResult<Vec<[f64; 3]>> {
    let (a, b, c) = (a.as_array(), b.as_array(), c.as_array());
    if a.len() != b.len() || a.len() != c.len() {
        return Err(PyValueError::new_err(format!(
            "arrays must have same length, got {}, {} and {}",
            a.len(),
            b.len(),
            c.len()
        )));
    }
    Ok(a.iter()
        .zip(b.iter())
        .zip(c.iter())
        .map(|((&a, &b), &c)| [a, b, c])
        .collect())
}

fn unzip3(py: Python<'_>, rows: Vec<[f64; 3]>) -> Triple<'_> {
    let mut cols = [
        Vec::with_capacity(rows.len()),
        Vec::with_capacity(rows.len()),
        Vec::with_capacity(rows.len()),
    ];
    for row in rows {
        for (col, v) in cols.iter_mut().zip(row) {
            col.push(v);
        }
    }
    let [a, b, c] = cols;
    (
        PyArray1::from_owned_array(py, ndarray::Array1::from(a)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(b)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(c)),
    )
}
