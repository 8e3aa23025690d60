/// Generate a `#[pyfunction]` that broadcasts its numeric arguments
/// through a `weirflow_core::vectorized` function of the same arity.
macro_rules! broadcast_pyfunction {
    (
        $(#[$meta:meta])*
        fn $name:ident($($arg:ident),+ $(,)?) => $call:path
    ) => {
        $(#[$meta])*
        #[pyo3::pyfunction]
        fn $name<'py>(
            py: pyo3::Python<'py>,
            $($arg: $crate::convert::Numeric<'py>),+
        ) -> pyo3::PyResult<pyo3::Bound<'py, pyo3::PyAny>> {
            let ops = [$($arg.operand()?),+];
            let scalar = weirflow_core::series::all_scalar(&ops);
            let [$($arg),+] = ops;
            let values = $call($($arg),+).map_err($crate::convert::value_error)?;
            Ok($crate::convert::numeric_result(py, values, scalar))
        }
    };
}

/// Generate a frozen `#[pyclass]` whose fields are numpy arrays, plus a
/// `from_series()` constructor taking the matching core series struct.
macro_rules! define_series_result {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident from $core_type:ty {
            $($field:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[pyo3::pyclass(frozen)]
        $vis struct $name {
            $(
                #[pyo3(get)]
                pub $field: Py<numpy::PyArray1<f64>>,
            )+
        }

        impl $name {
            pub fn from_series(py: pyo3::Python<'_>, series: $core_type) -> Self {
                Self {
                    $(
                        $field: numpy::PyArray1::from_vec(py, series.$field).unbind(),
                    )+
                }
            }
        }
    };
}
