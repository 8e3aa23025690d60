use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use crate::convert::{contiguous_slice, parse_units, value_error};
use weirflow_core::discharge::ModelKind;

define_series_result! {
    /// Rating table with one numpy array per discharge component.
    pub struct RatingTable from weirflow_core::rating::DischargeComponentsSeries {
        head, vnotch, upper, total,
    }
}

/// Evaluate a named model over `heads`.
///
/// `geometry` holds the model's parameters in the order given by
/// `model_params(model)`. Bergmann and Sam also need `units`.
#[pyfunction]
#[pyo3(signature = (model, heads, geometry, units=None))]
fn rating_table<'py>(
    py: Python<'py>,
    model: &str,
    heads: PyReadonlyArray1<'py, f64>,
    geometry: PyReadonlyArray1<'py, f64>,
    units: Option<&str>,
) -> PyResult<RatingTable> {
    let kind: ModelKind = model.parse().map_err(value_error)?;
    let units = units.map(parse_units).transpose()?;
    let weir = kind
        .build(contiguous_slice(&geometry)?, units)
        .map_err(value_error)?;
    let table = weir.rating(contiguous_slice(&heads)?);
    Ok(RatingTable::from_series(py, table))
}

/// Geometry parameter names of a model, in `rating_table` order.
#[pyfunction]
fn model_params(model: &str) -> PyResult<Vec<&'static str>> {
    let kind: ModelKind = model.parse().map_err(value_error)?;
    Ok(kind.param_names().to_vec())
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "rating")?;
    m.add_function(wrap_pyfunction!(rating_table, &m)?)?;
    m.add_function(wrap_pyfunction!(model_params, &m)?)?;
    m.add_class::<RatingTable>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
