//! Error type shared by the weirflow crates.
//!
//! Out-of-domain geometry, clamped head ratios, and dry heads are ordinary
//! numeric results (NaN, a boundary constant, zero). Only malformed inputs
//! that cannot be given a value end up here.
use thiserror::Error;

/// Result alias used throughout `weirflow-core`.
pub type WeirResult<T> = Result<T, WeirError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeirError {
    /// Units tag other than `Imperial` or `SI`.
    #[error("invalid units '{tag}': expected 'Imperial' or 'SI'")]
    InvalidUnits { tag: String },

    /// Series operands that cannot be broadcast together.
    #[error("operand of length {found} cannot be broadcast to length {expected}")]
    ShapeMismatch { expected: usize, found: usize },

    /// Flat geometry array of the wrong length.
    #[error("{name} expects {expected} geometry values, got {found}")]
    ParamCount {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    /// Model name not recognised by `ModelKind`.
    #[error("unknown discharge model '{name}'")]
    UnknownModel { name: String },

    /// Model needs a unit system for its empirical constants.
    #[error("{model} requires a unit system ('Imperial' or 'SI')")]
    MissingUnits { model: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_units_message_names_the_tag() {
        let err = WeirError::InvalidUnits {
            tag: "metric".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid units 'metric': expected 'Imperial' or 'SI'"
        );
    }

    #[test]
    fn param_count_message() {
        let err = WeirError::ParamCount {
            name: "PhilComposite",
            expected: 4,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "PhilComposite expects 4 geometry values, got 3"
        );
    }
}
