//! Python binding: `realsph.sph_harm(l, m, theta, phi) -> float`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

#[pyfunction]
#[pyo3(name = "sph_harm", signature = (l, m, theta, phi))]
fn py_sph_harm(l: u32, m: i32, theta: f64, phi: f64) -> PyResult<f64> {
    sph_core::sph_harm(l, m, theta, phi).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn realsph(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add("__doc__", "Real spherical harmonic function")?;
    module.add_function(wrap_pyfunction!(py_sph_harm, module)?)?;
    Ok(())
}
