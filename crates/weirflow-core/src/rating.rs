//! Discharge broken into its V-notch and upper-crest parts, and rating
//! tables built from a series of heads.
use weirflow_macros::Components;

use crate::traits::StageDischarge;

/// Discharge at one head.
///
/// `vnotch` is the flow attributed to the notch, `upper` the flow over the
/// rectangular crest (or whatever term a model adds above the notch), and
/// `total == vnotch + upper`.
#[derive(Debug, Clone, Copy, PartialEq, Components)]
pub struct DischargeComponents {
    pub head: f64,
    pub vnotch: f64,
    pub upper: f64,
    pub total: f64,
}

impl DischargeComponents {
    /// No flow: head at or below the notch invert.
    pub fn dry(head: f64) -> Self {
        Self {
            head,
            vnotch: 0.0,
            upper: 0.0,
            total: 0.0,
        }
    }

    /// Flow through the notch only.
    pub fn notch_only(head: f64, vnotch: f64) -> Self {
        Self {
            head,
            vnotch,
            upper: 0.0,
            total: vnotch,
        }
    }

    pub fn combined(head: f64, vnotch: f64, upper: f64) -> Self {
        Self {
            head,
            vnotch,
            upper,
            total: vnotch + upper,
        }
    }
}

/// Evaluate `model` at every head, keeping the components.
pub fn rating_table<M: StageDischarge + ?Sized>(
    model: &M,
    heads: &[f64],
) -> DischargeComponentsSeries {
    let mut table = DischargeComponentsSeries::with_capacity(heads.len());
    for &h in heads {
        table.push(&model.components(h));
    }
    table
}
