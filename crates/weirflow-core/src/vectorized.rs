//! Broadcast forms of every scalar function.
//!
//! Each argument is anything convertible to an [`Operand`]: an `f64`, a
//! slice, a `Vec`, or an array. Output element `i` equals the scalar
//! function applied to element `i` of every series argument.
use crate::coefficient;
use crate::discharge;
use crate::error::WeirResult;
use crate::head_correction;
use crate::series::{broadcast, Operand};
use crate::units::UnitSystem;

pub fn ce_part_vnotch<'a>(
    h: impl Into<Operand<'a>>,
    p: impl Into<Operand<'a>>,
    b: impl Into<Operand<'a>>,
) -> WeirResult<Vec<f64>> {
    broadcast([h.into(), p.into(), b.into()], |[h, p, b]| {
        coefficient::ce_part_vnotch(h, p, b)
    })
}

pub fn kh_vnotch<'a>(angle_vnotch: impl Into<Operand<'a>>) -> WeirResult<Vec<f64>> {
    broadcast([angle_vnotch.into()], |[a]| head_correction::kh_vnotch(a))
}

pub fn q_kindsvater_shen<'a>(
    angle_vnotch: impl Into<Operand<'a>>,
    h1: impl Into<Operand<'a>>,
    p: impl Into<Operand<'a>>,
    b: impl Into<Operand<'a>>,
) -> WeirResult<Vec<f64>> {
    broadcast(
        [angle_vnotch.into(), h1.into(), p.into(), b.into()],
        |[a, h1, p, b]| discharge::q_kindsvater_shen(a, h1, p, b),
    )
}

pub fn ce_simplified<'a>(h: impl Into<Operand<'a>>) -> WeirResult<Vec<f64>> {
    broadcast([h.into()], |[h]| discharge::ce_simplified(h))
}

pub fn q_phil<'a>(
    p_vnotch: impl Into<Operand<'a>>,
    p_rect: impl Into<Operand<'a>>,
    cw: impl Into<Operand<'a>>,
    l_rect: impl Into<Operand<'a>>,
    h: impl Into<Operand<'a>>,
) -> WeirResult<Vec<f64>> {
    broadcast(
        [p_vnotch.into(), p_rect.into(), cw.into(), l_rect.into(), h.into()],
        |[pv, pr, cw, l, h]| discharge::q_phil(pv, pr, cw, l, h),
    )
}

pub fn q_bergmann<'a>(
    hm: impl Into<Operand<'a>>,
    p_rect: impl Into<Operand<'a>>,
    p_vnotch: impl Into<Operand<'a>>,
    units: UnitSystem,
    b: impl Into<Operand<'a>>,
) -> WeirResult<Vec<f64>> {
    broadcast(
        [hm.into(), p_rect.into(), p_vnotch.into(), b.into()],
        |[hm, pr, pv, b]| discharge::q_bergmann(hm, pr, pv, units, b),
    )
}

#[allow(clippy::too_many_arguments)]
pub fn q_sam<'a>(
    hm: impl Into<Operand<'a>>,
    p_rect: impl Into<Operand<'a>>,
    p_vnotch: impl Into<Operand<'a>>,
    b_approach: impl Into<Operand<'a>>,
    angle_vnotch: impl Into<Operand<'a>>,
    units: UnitSystem,
    b: impl Into<Operand<'a>>,
) -> WeirResult<Vec<f64>> {
    broadcast(
        [
            hm.into(),
            p_rect.into(),
            p_vnotch.into(),
            b_approach.into(),
            angle_vnotch.into(),
            b.into(),
        ],
        |[hm, pr, pv, ba, a, b]| discharge::q_sam(hm, pr, pv, ba, a, units, b),
    )
}

pub fn q_holly<'a>(
    hm: impl Into<Operand<'a>>,
    p_rect: impl Into<Operand<'a>>,
    p_vnotch: impl Into<Operand<'a>>,
    b_approach: impl Into<Operand<'a>>,
    angle_vnotch: impl Into<Operand<'a>>,
) -> WeirResult<Vec<f64>> {
    broadcast(
        [
            hm.into(),
            p_rect.into(),
            p_vnotch.into(),
            b_approach.into(),
            angle_vnotch.into(),
        ],
        |[hm, pr, pv, ba, a]| discharge::q_holly(hm, pr, pv, ba, a),
    )
}
