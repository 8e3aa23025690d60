use pyo3::prelude::*;

use crate::convert::{numeric_result, parse_units, value_error, Numeric};
use weirflow_core::series::all_scalar;
use weirflow_core::vectorized;

broadcast_pyfunction! {
    /// Kindsvater-Shen discharge through a partially contracted V-notch.
    fn q_kindsvater_shen(angle_vnotch, h1, p, b) => vectorized::q_kindsvater_shen
}

broadcast_pyfunction! {
    /// Simplified Ce(H) used by the Phil composite.
    fn ce_simplified(h) => vectorized::ce_simplified
}

broadcast_pyfunction! {
    /// Phil composite: V-notch below the rectangular crest, both parts above.
    fn q_phil(p_vnotch, p_rect, cw, l_rect, h) => vectorized::q_phil
}

broadcast_pyfunction! {
    /// Holly composite: Kindsvater-Shen in the notch, HY-8 culvert fit above.
    fn q_holly(hm, p_rect, p_vnotch, b_approach, angle_vnotch) => vectorized::q_holly
}

/// Bergmann combination weir. `units` is 'Imperial' or 'SI'.
#[pyfunction]
fn q_bergmann<'py>(
    py: Python<'py>,
    hm: Numeric<'py>,
    p_rect: Numeric<'py>,
    p_vnotch: Numeric<'py>,
    units: &str,
    b: Numeric<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    let units = parse_units(units)?;
    let ops = [hm.operand()?, p_rect.operand()?, p_vnotch.operand()?, b.operand()?];
    let values = vectorized::q_bergmann(ops[0], ops[1], ops[2], units, ops[3])
        .map_err(value_error)?;
    Ok(numeric_result(py, values, all_scalar(&ops)))
}

/// Sam composite weir. `units` is 'Imperial' or 'SI'.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
fn q_sam<'py>(
    py: Python<'py>,
    hm: Numeric<'py>,
    p_rect: Numeric<'py>,
    p_vnotch: Numeric<'py>,
    b_approach: Numeric<'py>,
    angle_vnotch: Numeric<'py>,
    units: &str,
    b: Numeric<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    let units = parse_units(units)?;
    let ops = [
        hm.operand()?,
        p_rect.operand()?,
        p_vnotch.operand()?,
        b_approach.operand()?,
        angle_vnotch.operand()?,
        b.operand()?,
    ];
    let values = vectorized::q_sam(ops[0], ops[1], ops[2], ops[3], ops[4], units, ops[5])
        .map_err(value_error)?;
    Ok(numeric_result(py, values, all_scalar(&ops)))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "discharge")?;
    m.add_function(wrap_pyfunction!(q_kindsvater_shen, &m)?)?;
    m.add_function(wrap_pyfunction!(ce_simplified, &m)?)?;
    m.add_function(wrap_pyfunction!(q_phil, &m)?)?;
    m.add_function(wrap_pyfunction!(q_bergmann, &m)?)?;
    m.add_function(wrap_pyfunction!(q_sam, &m)?)?;
    m.add_function(wrap_pyfunction!(q_holly, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
