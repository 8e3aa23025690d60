/// Bergmann (1963) combination V-notch/rectangular weir, as given in the USBR
/// Water Measurement Manual (1997):
///
/// Q = C·ht^1.72 − d + e·b·hr,  ht = p_rect − p_vnotch,  hr = hm − ht
///
/// C, d and e depend on the unit system. The equation is only meaningful with
/// the head above the rectangular crest; below it `hr` is negative.
use super::notch_depth;
use crate::constants::BERGMANN_EXPONENT;
use crate::error::WeirResult;
use crate::rating::DischargeComponents;
use crate::traits::{GeometryParams, StageDischarge};
use crate::units::UnitSystem;

pub fn bergmann_components(
    hm: f64,
    p_rect: f64,
    p_vnotch: f64,
    units: UnitSystem,
    b: f64,
) -> DischargeComponents {
    if hm <= 0.0 {
        return DischargeComponents::dry(hm);
    }
    let k = units.bergmann();
    let ht = notch_depth(p_rect, p_vnotch);
    let hr = hm - ht;
    DischargeComponents::combined(hm, k.c * ht.powf(BERGMANN_EXPONENT) - k.d, k.e * b * hr)
}

/// Total Bergmann discharge at measured head `hm`.
pub fn q_bergmann(hm: f64, p_rect: f64, p_vnotch: f64, units: UnitSystem, b: f64) -> f64 {
    bergmann_components(hm, p_rect, p_vnotch, units, b).total
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bergmann {
    pub p_rect: f64,
    pub p_vnotch: f64,
    pub units: UnitSystem,
    /// Rectangular crest width in the `e·b·hr` term.
    pub b: f64,
}

impl Bergmann {
    pub fn new(p_rect: f64, p_vnotch: f64, units: UnitSystem, b: f64) -> Self {
        Self {
            p_rect,
            p_vnotch,
            units,
            b,
        }
    }
}

impl StageDischarge for Bergmann {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn components(&self, head: f64) -> DischargeComponents {
        bergmann_components(head, self.p_rect, self.p_vnotch, self.units, self.b)
    }
}

impl GeometryParams for Bergmann {
    const NAME: &'static str = "bergmann";
    const PARAM_NAMES: &'static [&'static str] = &["p_rect", "p_vnotch", "b"];

    fn from_array(arr: &[f64], units: Option<UnitSystem>) -> WeirResult<Self> {
        Self::check_len(arr)?;
        let units = Self::require_units(units)?;
        Ok(Self::new(arr[0], arr[1], units, arr[2]))
    }

    fn to_array(&self) -> Vec<f64> {
        vec![self.p_rect, self.p_vnotch, self.b]
    }

    fn units(&self) -> Option<UnitSystem> {
        Some(self.units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WeirError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn imperial_regression() {
        assert_abs_diff_eq!(
            q_bergmann(2.0, 2.5, 1.0, UnitSystem::Imperial, 4.0),
            12.933242518890271,
            epsilon = 1e-9
        );
    }

    #[test]
    fn si_regression() {
        assert_abs_diff_eq!(
            q_bergmann(2.0, 2.5, 1.0, UnitSystem::SI, 4.0),
            12.584323358520363,
            epsilon = 1e-9
        );
    }

    #[test]
    fn dry_weir_is_zero() {
        for units in [UnitSystem::Imperial, UnitSystem::SI] {
            assert_eq!(q_bergmann(0.0, 2.5, 1.0, units, 4.0), 0.0);
            assert_eq!(q_bergmann(-0.5, 2.5, 1.0, units, 4.0), 0.0);
        }
    }

    #[test]
    fn components_split_notch_and_crest_terms() {
        let c = bergmann_components(2.0, 2.5, 1.0, UnitSystem::Imperial, 4.0);
        assert_abs_diff_eq!(c.vnotch, 3.9 * 1.5_f64.powf(1.72) - 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c.upper, 3.3 * 4.0 * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn non_decreasing_for_positive_head() {
        for units in [UnitSystem::Imperial, UnitSystem::SI] {
            let weir = Bergmann::new(2.5, 1.0, units, 4.0);
            let heads: Vec<f64> = (1..=4000).map(|i| i as f64 / 1000.0).collect();
            let q = weir.discharge_series(&heads);
            assert!(q.windows(2).all(|w| w[1] >= w[0]));
        }
    }

    #[test]
    fn from_array_needs_units() {
        assert_eq!(
            Bergmann::from_array(&[2.5, 1.0, 4.0], None),
            Err(WeirError::MissingUnits { model: "bergmann" })
        );
        let weir = Bergmann::from_array(&[2.5, 1.0, 4.0], Some(UnitSystem::SI)).unwrap();
        assert_eq!(weir.units(), Some(UnitSystem::SI));
        assert_eq!(weir.to_array(), vec![2.5, 1.0, 4.0]);
    }
}
