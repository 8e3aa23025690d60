use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyFloat;

use weirflow_core::series::Operand;
use weirflow_core::{UnitSystem, WeirError};

/// A numeric argument: a float or a 1-D float64 array.
#[derive(FromPyObject)]
pub enum Numeric<'py> {
    Array(PyReadonlyArray1<'py, f64>),
    Scalar(f64),
}

impl Numeric<'_> {
    /// Borrow as a broadcast operand.
    pub fn operand(&self) -> PyResult<Operand<'_>> {
        match self {
            Numeric::Array(arr) => Ok(Operand::Series(contiguous_slice(arr)?)),
            Numeric::Scalar(x) => Ok(Operand::Scalar(*x)),
        }
    }
}

/// Validate that a numpy array is C-contiguous and return its slice.
pub fn contiguous_slice<'a>(arr: &'a PyReadonlyArray1<'_, f64>) -> PyResult<&'a [f64]> {
    arr.as_slice()
        .map_err(|_| PyValueError::new_err("array must be C-contiguous"))
}

pub fn value_error(err: WeirError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn parse_units(tag: &str) -> PyResult<UnitSystem> {
    tag.parse().map_err(value_error)
}

/// A float when every input was a scalar, else a numpy array.
pub fn numeric_result(py: Python<'_>, values: Vec<f64>, scalar: bool) -> Bound<'_, PyAny> {
    if scalar {
        PyFloat::new(py, values.first().copied().unwrap_or(f64::NAN)).into_any()
    } else {
        PyArray1::from_vec(py, values).into_any()
    }
}
