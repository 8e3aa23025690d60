//! weirflow-core: discharge through composite V-notch/rectangular weirs.
//!
//! - [`coefficient`]: Ce of a partially-contracted V-notch from the
//!   Kulin & Compton (1975) curves, banded by P/B
//! - [`head_correction`]: kh for the notch angle
//! - [`discharge`]: Kindsvater-Shen and the composite stage-discharge models
//! - [`vectorized`]: the same functions broadcast over series
//! - [`rating`]: per-component rating tables
pub mod coefficient;
pub mod constants;
pub mod discharge;
pub mod error;
pub mod head_correction;
pub mod polynomial;
pub mod rating;
pub mod series;
pub mod traits;
pub mod units;
pub mod vectorized;

pub use error::{WeirError, WeirResult};
pub use units::UnitSystem;
