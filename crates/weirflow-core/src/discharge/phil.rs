/// Phil composite: a V-notch with a site-fitted Ce(H), plus a sharp-crested
/// rectangular weir term once the head tops the rectangular crest.
use super::notch_depth;
use crate::constants::{CE_SIMPLIFIED, KS_COEFFICIENT, PHIL_HEAD_CORRECTION};
use crate::error::WeirResult;
use crate::rating::DischargeComponents;
use crate::traits::{GeometryParams, StageDischarge};
use crate::units::UnitSystem;

/// Cubic Ce(H) fitted directly to head, independent of the banded model.
#[inline]
pub fn ce_simplified(h: f64) -> f64 {
    CE_SIMPLIFIED.eval(h)
}

/// Components of the Phil composite at head `h` above the notch invert.
pub fn phil_components(p_vnotch: f64, p_rect: f64, cw: f64, l_rect: f64, h: f64) -> DischargeComponents {
    if h <= 0.0 {
        return DischargeComponents::dry(h);
    }
    let depth = notch_depth(p_rect, p_vnotch);
    let vnotch = KS_COEFFICIENT * ce_simplified(h) * (h + PHIL_HEAD_CORRECTION).powf(2.5);
    if h <= depth {
        return DischargeComponents::notch_only(h, vnotch);
    }
    let h_rect = h - depth;
    DischargeComponents::combined(h, vnotch, cw * l_rect * h_rect.powf(1.5))
}

/// Total Phil composite discharge.
pub fn q_phil(p_vnotch: f64, p_rect: f64, cw: f64, l_rect: f64, h: f64) -> f64 {
    phil_components(p_vnotch, p_rect, cw, l_rect, h).total
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhilComposite {
    pub p_vnotch: f64,
    pub p_rect: f64,
    /// Rectangular weir coefficient.
    pub cw: f64,
    /// Rectangular crest length.
    pub l_rect: f64,
}

impl PhilComposite {
    pub fn new(p_vnotch: f64, p_rect: f64, cw: f64, l_rect: f64) -> Self {
        Self {
            p_vnotch,
            p_rect,
            cw,
            l_rect,
        }
    }
}

impl StageDischarge for PhilComposite {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn components(&self, head: f64) -> DischargeComponents {
        phil_components(self.p_vnotch, self.p_rect, self.cw, self.l_rect, head)
    }
}

impl GeometryParams for PhilComposite {
    const NAME: &'static str = "phil";
    const PARAM_NAMES: &'static [&'static str] = &["p_vnotch", "p_rect", "cw", "l_rect"];

    fn from_array(arr: &[f64], _units: Option<UnitSystem>) -> WeirResult<Self> {
        Self::check_len(arr)?;
        Ok(Self::new(arr[0], arr[1], arr[2], arr[3]))
    }

    fn to_array(&self) -> Vec<f64> {
        vec![self.p_vnotch, self.p_rect, self.cw, self.l_rect]
    }
}
