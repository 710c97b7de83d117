use pyo3::prelude::*;

mod convert;

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convert::to_cartesian, m)?)?;
    m.add_function(wrap_pyfunction!(convert::to_geodetic, m)?)?;
    Ok(())
}
