/// Sam composite: Kindsvater-Shen while only the notch flows; above the
/// rectangular crest, Kindsvater-Shen held at the crest head plus the
/// rectangular `e·b·hr` term of the Bergmann equation. The Bergmann
/// `C·ht^1.72 − d` term is not included.
use super::kindsvater_shen::q_kindsvater_shen;
use super::notch_depth;
use crate::error::WeirResult;
use crate::rating::DischargeComponents;
use crate::traits::{GeometryParams, StageDischarge};
use crate::units::UnitSystem;

#[allow(clippy::too_many_arguments)]
pub fn sam_components(
    hm: f64,
    p_rect: f64,
    p_vnotch: f64,
    b_approach: f64,
    angle_vnotch: f64,
    units: UnitSystem,
    b: f64,
) -> DischargeComponents {
    if hm <= 0.0 {
        return DischargeComponents::dry(hm);
    }
    let ht = notch_depth(p_rect, p_vnotch);
    if hm <= ht {
        return DischargeComponents::notch_only(
            hm,
            q_kindsvater_shen(angle_vnotch, hm, p_vnotch, b_approach),
        );
    }
    let vnotch = q_kindsvater_shen(angle_vnotch, ht, p_vnotch, b_approach);
    let hr = hm - ht;
    DischargeComponents::combined(hm, vnotch, units.bergmann().e * b * hr)
}

/// Total Sam composite discharge at measured head `hm`.
pub fn q_sam(
    hm: f64,
    p_rect: f64,
    p_vnotch: f64,
    b_approach: f64,
    angle_vnotch: f64,
    units: UnitSystem,
    b: f64,
) -> f64 {
    sam_components(hm, p_rect, p_vnotch, b_approach, angle_vnotch, units, b).total
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamComposite {
    pub p_rect: f64,
    pub p_vnotch: f64,
    /// Approach channel width for the notch Ce.
    pub b_approach: f64,
    pub angle_vnotch: f64,
    pub units: UnitSystem,
    /// Rectangular crest width.
    pub b: f64,
}

impl SamComposite {
    pub fn new(
        p_rect: f64,
        p_vnotch: f64,
        b_approach: f64,
        angle_vnotch: f64,
        units: UnitSystem,
        b: f64,
    ) -> Self {
        Self {
            p_rect,
            p_vnotch,
            b_approach,
            angle_vnotch,
            units,
            b,
        }
    }
}

impl StageDischarge for SamComposite {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn components(&self, head: f64) -> DischargeComponents {
        sam_components(
            head,
            self.p_rect,
            self.p_vnotch,
            self.b_approach,
            self.angle_vnotch,
            self.units,
            self.b,
        )
    }
}

impl GeometryParams for SamComposite {
    const NAME: &'static str = "sam";
    const PARAM_NAMES: &'static [&'static str] =
        &["p_rect", "p_vnotch", "b_approach", "angle_vnotch", "b"];

    fn from_array(arr: &[f64], units: Option<UnitSystem>) -> WeirResult<Self> {
        Self::check_len(arr)?;
        let units = Self::require_units(units)?;
        Ok(Self::new(arr[0], arr[1], arr[2], arr[3], units, arr[4]))
    }

    fn to_array(&self) -> Vec<f64> {
        vec![self.p_rect, self.p_vnotch, self.b_approach, self.angle_vnotch, self.b]
    }

    fn units(&self) -> Option<UnitSystem> {
        Some(self.units)
    }
}
