//! Stage-discharge models for V-notch and composite V-notch/rectangular weirs.
//!
//! Each model is a pure function of head and fixed geometry, exposed both
//! as a free function taking every argument and as a struct implementing
//! [`StageDischarge`](crate::traits::StageDischarge). Every model returns
//! zero discharge for a head at or below zero.
//!
//! The composite models share one threshold, the notch depth
//! `p_rect − p_vnotch`: below it only the notch flows, above it a second
//! term is added. They differ only in that second term.
pub mod bergmann;
pub mod holly;
pub mod kind;
pub mod kindsvater_shen;
pub mod phil;
pub mod sam;

pub use bergmann::{q_bergmann, Bergmann};
pub use holly::{q_holly, HollyComposite};
pub use kind::ModelKind;
pub use kindsvater_shen::{q_kindsvater_shen, KindsvaterShen};
pub use phil::{ce_simplified, q_phil, PhilComposite};
pub use sam::{q_sam, SamComposite};

/// Height of the rectangular crest above the notch invert, i.e. the head at
/// which water starts spilling over the rectangular crest.
#[inline]
pub fn notch_depth(p_rect: f64, p_vnotch: f64) -> f64 {
    p_rect - p_vnotch
}
