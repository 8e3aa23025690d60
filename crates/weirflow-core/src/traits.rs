//! Shared interfaces for weir models.
//!
//! `StageDischarge` turns a head into discharge for a weir whose geometry is
//! fixed; `GeometryParams` moves that geometry in and out of flat arrays.
use crate::error::{WeirError, WeirResult};
use crate::rating::{rating_table, DischargeComponents, DischargeComponentsSeries};
use crate::series;
use crate::units::UnitSystem;

pub trait StageDischarge {
    /// Short model name, as accepted by `ModelKind`.
    fn name(&self) -> &'static str;

    /// Discharge and its parts at one head.
    fn components(&self, head: f64) -> DischargeComponents;

    fn discharge(&self, head: f64) -> f64 {
        self.components(head).total
    }

    /// Discharge at every head, in order.
    fn discharge_series(&self, heads: &[f64]) -> Vec<f64> {
        series::map(heads, |h| self.discharge(h))
    }

    /// Rating table over a series of heads.
    fn rating(&self, heads: &[f64]) -> DischargeComponentsSeries {
        rating_table(self, heads)
    }
}

/// Fixed geometry that can be read from and written to a flat `f64` array.
pub trait GeometryParams: Sized {
    const NAME: &'static str;
    const PARAM_NAMES: &'static [&'static str];
    const N_PARAMS: usize = Self::PARAM_NAMES.len();

    /// Build from values in `PARAM_NAMES` order. Models with unit-dependent
    /// constants need `units`; the rest ignore it.
    fn from_array(arr: &[f64], units: Option<UnitSystem>) -> WeirResult<Self>;

    fn to_array(&self) -> Vec<f64>;

    /// Unit system carried by the geometry, if it has one.
    fn units(&self) -> Option<UnitSystem> {
        None
    }

    /// Reject arrays whose length differs from `N_PARAMS`.
    fn check_len(arr: &[f64]) -> WeirResult<()> {
        if arr.len() != Self::N_PARAMS {
            return Err(WeirError::ParamCount {
                name: Self::NAME,
                expected: Self::N_PARAMS,
                found: arr.len(),
            });
        }
        Ok(())
    }

    /// Unit system or a `MissingUnits` error naming this model.
    fn require_units(units: Option<UnitSystem>) -> WeirResult<UnitSystem> {
        units.ok_or(WeirError::MissingUnits { model: Self::NAME })
    }
}
