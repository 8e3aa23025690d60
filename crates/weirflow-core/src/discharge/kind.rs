/// Name-based selection of a discharge model.
use std::fmt;
use std::str::FromStr;

use super::{Bergmann, HollyComposite, KindsvaterShen, PhilComposite, SamComposite};
use crate::error::{WeirError, WeirResult};
use crate::traits::{GeometryParams, StageDischarge};
use crate::units::UnitSystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    KindsvaterShen,
    Phil,
    Bergmann,
    Sam,
    Holly,
}

impl ModelKind {
    pub const ALL: [ModelKind; 5] = [
        ModelKind::KindsvaterShen,
        ModelKind::Phil,
        ModelKind::Bergmann,
        ModelKind::Sam,
        ModelKind::Holly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::KindsvaterShen => KindsvaterShen::NAME,
            ModelKind::Phil => PhilComposite::NAME,
            ModelKind::Bergmann => Bergmann::NAME,
            ModelKind::Sam => SamComposite::NAME,
            ModelKind::Holly => HollyComposite::NAME,
        }
    }

    /// Geometry names expected by `build`, in order.
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            ModelKind::KindsvaterShen => KindsvaterShen::PARAM_NAMES,
            ModelKind::Phil => PhilComposite::PARAM_NAMES,
            ModelKind::Bergmann => Bergmann::PARAM_NAMES,
            ModelKind::Sam => SamComposite::PARAM_NAMES,
            ModelKind::Holly => HollyComposite::PARAM_NAMES,
        }
    }

    pub fn needs_units(self) -> bool {
        matches!(self, ModelKind::Bergmann | ModelKind::Sam)
    }

    /// Build the model from a flat geometry array.
    pub fn build(
        self,
        geometry: &[f64],
        units: Option<UnitSystem>,
    ) -> WeirResult<Box<dyn StageDischarge>> {
        log::debug!("building {self} model from {geometry:?}");
        Ok(match self {
            ModelKind::KindsvaterShen => Box::new(KindsvaterShen::from_array(geometry, units)?),
            ModelKind::Phil => Box::new(PhilComposite::from_array(geometry, units)?),
            ModelKind::Bergmann => Box::new(Bergmann::from_array(geometry, units)?),
            ModelKind::Sam => Box::new(SamComposite::from_array(geometry, units)?),
            ModelKind::Holly => Box::new(HollyComposite::from_array(geometry, units)?),
        })
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = WeirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| WeirError::UnknownModel {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.to_string().parse::<ModelKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_name_rejected() {
        assert_eq!(
            "cipoletti".parse::<ModelKind>(),
            Err(WeirError::UnknownModel {
                name: "cipoletti".to_string()
            })
        );
    }

    #[test]
    fn built_model_reports_its_name() {
        let model = ModelKind::Holly.build(&[2.5, 1.0, 4.0, 90.0], None).unwrap();
        assert_eq!(model.name(), "holly");
    }

    #[test]
    fn unit_dependent_models_need_units() {
        for kind in ModelKind::ALL {
            let geometry = vec![1.0; kind.param_names().len()];
            let built = kind.build(&geometry, None);
            assert_eq!(built.is_err(), kind.needs_units(), "{kind}");
        }
    }

    #[test]
    fn wrong_geometry_length_rejected() {
        let err = ModelKind::Sam
            .build(&[2.5, 1.0], Some(UnitSystem::Imperial))
            .err();
        assert_eq!(
            err,
            Some(WeirError::ParamCount {
                name: "sam",
                expected: 5,
                found: 2
            })
        );
    }

    #[test]
    fn every_model_is_dry_at_zero_head() {
        for kind in ModelKind::ALL {
            let geometry: Vec<f64> = match kind {
                ModelKind::KindsvaterShen => vec![90.0, 1.0, 4.0],
                ModelKind::Phil => vec![1.0, 2.5, 3.33, 4.0],
                ModelKind::Bergmann => vec![2.5, 1.0, 4.0],
                ModelKind::Sam => vec![2.5, 1.0, 4.0, 90.0, 4.0],
                ModelKind::Holly => vec![2.5, 1.0, 4.0, 90.0],
            };
            let model = kind.build(&geometry, Some(UnitSystem::Imperial)).unwrap();
            for h in [0.0, -0.01, -3.0] {
                assert_eq!(model.discharge(h), 0.0, "{kind} at {h}");
            }
        }
    }
}
