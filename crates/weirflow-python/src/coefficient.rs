use pyo3::prelude::*;

use weirflow_core::vectorized;

broadcast_pyfunction! {
    /// Ce of a partially-contracted V-notch; NaN outside the fitted P/B range.
    fn ce_part_vnotch(h, p, b) => vectorized::ce_part_vnotch
}

broadcast_pyfunction! {
    /// Head correction kh for a notch angle in degrees.
    fn kh_vnotch(angle_vnotch) => vectorized::kh_vnotch
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "coefficient")?;
    m.add_function(wrap_pyfunction!(ce_part_vnotch, &m)?)?;
    m.add_function(wrap_pyfunction!(kh_vnotch, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
