/// Kindsvater-Shen discharge for a partially-contracted V-notch weir,
/// Kulin & Compton (1975), Eq. 4.4:
///
/// Q = 4.28 · Ce · tan(θ/2) · (h1 + kh)^2.5
use crate::coefficient::ce_part_vnotch;
use crate::constants::KS_COEFFICIENT;
use crate::error::WeirResult;
use crate::head_correction::kh_vnotch;
use crate::rating::DischargeComponents;
use crate::traits::{GeometryParams, StageDischarge};
use crate::units::UnitSystem;

/// Discharge through a V-notch at head `h1`.
///
/// `angle_vnotch` feeds both the kh fit (in degrees) and `tan(angle/2)`,
/// which is taken of the same number.
pub fn q_kindsvater_shen(angle_vnotch: f64, h1: f64, p: f64, b: f64) -> f64 {
    let ce = ce_part_vnotch(h1, p, b);
    let kh = kh_vnotch(angle_vnotch);
    let h1e = h1 + kh;
    if h1 <= 0.0 {
        return 0.0;
    }
    KS_COEFFICIENT * ce * (angle_vnotch / 2.0).tan() * h1e.powf(2.5)
}

/// V-notch weir with fixed angle, crest height and approach width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindsvaterShen {
    pub angle_vnotch: f64,
    /// Notch invert above the approach bed.
    pub p: f64,
    /// Approach channel width.
    pub b: f64,
}

impl KindsvaterShen {
    pub fn new(angle_vnotch: f64, p: f64, b: f64) -> Self {
        Self { angle_vnotch, p, b }
    }
}

impl StageDischarge for KindsvaterShen {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn components(&self, head: f64) -> DischargeComponents {
        if head <= 0.0 {
            return DischargeComponents::dry(head);
        }
        DischargeComponents::notch_only(
            head,
            q_kindsvater_shen(self.angle_vnotch, head, self.p, self.b),
        )
    }
}

impl GeometryParams for KindsvaterShen {
    const NAME: &'static str = "kindsvater_shen";
    const PARAM_NAMES: &'static [&'static str] = &["angle_vnotch", "p", "b"];

    fn from_array(arr: &[f64], _units: Option<UnitSystem>) -> WeirResult<Self> {
        Self::check_len(arr)?;
        Ok(Self::new(arr[0], arr[1], arr[2]))
    }

    fn to_array(&self) -> Vec<f64> {
        vec![self.angle_vnotch, self.p, self.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn regression_right_angle_notch() {
        assert_abs_diff_eq!(q_kindsvater_shen(90.0, 0.5, 1.0, 5.0), 0.719367441942087, epsilon = 1e-6);
    }

    #[test]
    fn formula_matches_components() {
        let (angle, h1, p, b) = (90.0, 0.5, 1.0, 5.0);
        let expected = 4.28
            * ce_part_vnotch(h1, p, b)
            * (angle / 2.0_f64).tan()
            * (h1 + kh_vnotch(angle)).powf(2.5);
        assert_eq!(q_kindsvater_shen(angle, h1, p, b), expected);
    }

    #[test]
    fn dry_weir_is_zero() {
        assert_eq!(q_kindsvater_shen(90.0, 0.0, 1.0, 5.0), 0.0);
        assert_eq!(q_kindsvater_shen(90.0, -0.3, 1.0, 5.0), 0.0);
    }

    #[test]
    fn dry_weir_is_zero_even_outside_fitted_geometry() {
        assert_eq!(q_kindsvater_shen(90.0, 0.0, 1.0, 100.0), 0.0);
    }

    #[test]
    fn out_of_range_geometry_is_nan() {
        assert!(q_kindsvater_shen(90.0, 0.5, 1.0, 100.0).is_nan());
    }

    #[test]
    fn discharge_grows_with_head() {
        let weir = KindsvaterShen::new(90.0, 1.0, 4.0);
        let q: Vec<f64> = [0.2, 0.4, 0.8, 1.2].iter().map(|&h| weir.discharge(h)).collect();
        assert!(q.windows(2).all(|w| w[1] > w[0]), "{q:?}");
    }

    #[test]
    fn struct_matches_free_function() {
        let weir = KindsvaterShen::new(60.0, 1.2, 4.0);
        for h in [0.1, 0.6, 1.1] {
            assert_eq!(weir.discharge(h), q_kindsvater_shen(60.0, h, 1.2, 4.0));
        }
    }

    #[test]
    fn geometry_array_roundtrip() {
        let weir = KindsvaterShen::from_array(&[90.0, 1.0, 5.0], None).unwrap();
        assert_eq!(weir, KindsvaterShen::new(90.0, 1.0, 5.0));
        assert_eq!(weir.to_array(), vec![90.0, 1.0, 5.0]);
        assert!(KindsvaterShen::from_array(&[90.0, 1.0], None).is_err());
    }
}
