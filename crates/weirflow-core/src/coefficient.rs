//! Effective discharge coefficient Ce of a partially-contracted V-notch weir.
//!
//! Kulin & Compton (1975) plot Ce against H/P for seven nominal values of
//! P/B. The rounded P/B of a weir selects one of 13 bands: a band centred on a
//! nominal ratio evaluates that curve alone, a band between two nominal ratios
//! averages the neighbouring curves. H/P outside the digitised range of a band
//! is clamped to a constant, and some blended bands bridge the gap between the
//! end of the shorter curve and the clamp with a linear ramp.
//!
//! Band edges are taken as digitised: open on both sides for single-curve
//! bands, closed on both sides for blended ones. Nothing is smoothed across
//! band boundaries, so Ce can step by up to 0.01 between adjacent P/B values.
use crate::constants::{
    CE_LOW_CLAMP, CE_PB_01, CE_PB_02, CE_PB_03, CE_PB_04, CE_PB_06, CE_PB_08, CE_PB_10, HP_MIN,
};
use crate::polynomial::Polynomial;

/// A digitised Ce curve, named by its nominal P/B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FittedCurve {
    Pb01,
    Pb02,
    Pb03,
    Pb04,
    Pb06,
    Pb08,
    Pb10,
}

impl FittedCurve {
    pub fn nominal_ratio(self) -> f64 {
        match self {
            FittedCurve::Pb01 => 0.1,
            FittedCurve::Pb02 => 0.2,
            FittedCurve::Pb03 => 0.3,
            FittedCurve::Pb04 => 0.4,
            FittedCurve::Pb06 => 0.6,
            FittedCurve::Pb08 => 0.8,
            FittedCurve::Pb10 => 1.0,
        }
    }

    pub fn polynomial(self) -> Polynomial {
        match self {
            FittedCurve::Pb01 => CE_PB_01,
            FittedCurve::Pb02 => CE_PB_02,
            FittedCurve::Pb03 => CE_PB_03,
            FittedCurve::Pb04 => CE_PB_04,
            FittedCurve::Pb06 => CE_PB_06,
            FittedCurve::Pb08 => CE_PB_08,
            FittedCurve::Pb10 => CE_PB_10,
        }
    }
}

/// How a band turns H/P into Ce inside its digitised range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fit {
    Single(FittedCurve),
    /// Arithmetic mean of two neighbouring curves.
    Average(FittedCurve, FittedCurve),
}

impl Fit {
    #[inline]
    fn eval(self, hp: f64) -> f64 {
        match self {
            Fit::Single(c) => c.polynomial().eval(hp),
            Fit::Average(a, b) => (a.polynomial().eval(hp) + b.polynomial().eval(hp)) / 2.0,
        }
    }
}

/// Linear extension `base + slope·(hp − start)` for `start < hp <= hp_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    pub start: f64,
    pub base: f64,
    pub slope: f64,
}

/// One P/B band of the coefficient table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Rounded P/B range `(lower, upper)`.
    pub lower: f64,
    pub upper: f64,
    /// Whether the range includes its edges.
    pub closed: bool,
    pub fit: Fit,
    /// Ce above `hp_max`.
    pub hp_max: f64,
    pub high_clamp: f64,
    pub ramp: Option<Ramp>,
}

const fn single(lower: f64, upper: f64, curve: FittedCurve, hp_max: f64, high_clamp: f64) -> Band {
    Band {
        lower,
        upper,
        closed: false,
        fit: Fit::Single(curve),
        hp_max,
        high_clamp,
        ramp: None,
    }
}

const fn blend(
    lower: f64,
    upper: f64,
    a: FittedCurve,
    b: FittedCurve,
    hp_max: f64,
    ramp: Option<Ramp>,
) -> Band {
    Band {
        lower,
        upper,
        closed: true,
        fit: Fit::Average(a, b),
        hp_max,
        high_clamp: 0.59,
        ramp,
    }
}

const fn ramp(start: f64, base: f64, slope: f64) -> Option<Ramp> {
    Some(Ramp { start, base, slope })
}

use FittedCurve::*;

/// All bands in evaluation order.
pub static BANDS: [Band; 13] = [
    single(0.09, 0.11, Pb01, 1.18, 0.58),
    Band {
        high_clamp: 0.58,
        ..blend(0.11, 0.19, Pb01, Pb02, 1.18, None)
    },
    // Digitised with an explicit NaN for H/P outside [0.1, 1.18], but both
    // sides are clamped right after, so the NaN is never observed.
    single(0.19, 0.21, Pb02, 1.18, 0.58),
    blend(0.21, 0.29, Pb02, Pb03, 1.16, None),
    single(0.29, 0.31, Pb03, 1.16, 0.59),
    blend(0.31, 0.39, Pb03, Pb04, 1.1, ramp(1.0, 0.5933056322910634, 0.05)),
    single(0.39, 0.41, Pb04, 1.0, 0.60),
    blend(0.41, 0.59, Pb04, Pb06, 0.8, ramp(0.66, 0.5883652546103659, 0.06)),
    single(0.59, 0.61, Pb06, 0.66, 0.59),
    blend(0.61, 0.79, Pb06, Pb08, 0.58, ramp(0.5, 0.5882051036521176, 0.05)),
    single(0.79, 0.81, Pb08, 0.5, 0.59),
    blend(0.81, 0.99, Pb08, Pb10, 0.45, ramp(0.39, 0.5864044129015097, 0.1)),
    single(0.99, 1.1, Pb10, 0.39, 0.59),
];

impl Band {
    /// Band containing a rounded P/B, if any.
    pub fn select(pb: f64) -> Option<&'static Band> {
        BANDS.iter().find(|band| band.contains(pb))
    }

    #[inline]
    pub fn contains(&self, pb: f64) -> bool {
        if self.closed {
            pb >= self.lower && pb <= self.upper
        } else {
            pb > self.lower && pb < self.upper
        }
    }

    /// Curves this band evaluates.
    pub fn curves(&self) -> Vec<FittedCurve> {
        match self.fit {
            Fit::Single(c) => vec![c],
            Fit::Average(a, b) => vec![a, b],
        }
    }

    /// Ce at head ratio `hp` with the band's clamps and ramp applied.
    pub fn coefficient(&self, hp: f64) -> f64 {
        if hp < HP_MIN {
            return CE_LOW_CLAMP;
        }
        if hp > self.hp_max {
            return self.high_clamp;
        }
        match self.ramp {
            Some(r) if hp > r.start => r.base + r.slope * (hp - r.start),
            _ => self.fit.eval(hp),
        }
    }
}

/// Round a ratio to two decimals, half to even, as the band edges expect.
#[inline]
pub fn round_ratio(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Ce of a partially-contracted V-notch weir.
///
/// - `h`: head above the notch invert
/// - `p`: height of the notch invert above the approach-channel bed
/// - `b`: width of the approach channel
///
/// Any consistent length unit works since only ratios enter. Returns NaN
/// when the rounded P/B lies outside `(0.09, 1.1)`.
pub fn ce_part_vnotch(h: f64, p: f64, b: f64) -> f64 {
    let hp = h / p;
    let pb = round_ratio(p / b);
    match Band::select(pb) {
        Some(band) => band.coefficient(hp),
        None => {
            log::debug!("P/B = {pb} outside fitted range, Ce undefined");
            f64::NAN
        }
    }
}
