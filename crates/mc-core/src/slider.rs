//! Integer slider positions to parameter events.
//!
//! A slider sits at an integer position in `0..=max` and its control value
//! is `position / max`.

use std::fmt;
use std::str::FromStr;

use mc_config::EngineConfig;

use crate::error::{Error, Result};
use crate::params::{ClassLabel, CostKind, ParameterEvent};

/// Every control on the page, by its element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderId {
    FalsePositiveCost,
    FalseNegativeCost,
    TruePositiveBenefit,
    TrueNegativeBenefit,
    ReviewCost,
    NegClass,
    PosClass,
    ClassImbalance,
    DistShape,
}

impl SliderId {
    pub const ALL: [SliderId; 9] = [
        SliderId::FalsePositiveCost,
        SliderId::FalseNegativeCost,
        SliderId::TruePositiveBenefit,
        SliderId::TrueNegativeBenefit,
        SliderId::ReviewCost,
        SliderId::NegClass,
        SliderId::PosClass,
        SliderId::ClassImbalance,
        SliderId::DistShape,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SliderId::FalsePositiveCost => "slider-FP-cost",
            SliderId::FalseNegativeCost => "slider-FN-cost",
            SliderId::TruePositiveBenefit => "slider-TP-benefit",
            SliderId::TrueNegativeBenefit => "slider-TN-benefit",
            SliderId::ReviewCost => "slider-review-cost",
            SliderId::NegClass => "slider-neg-class",
            SliderId::PosClass => "slider-pos-class",
            SliderId::ClassImbalance => "slider-class-imb",
            SliderId::DistShape => "slider-dist-shape",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SliderId::FalsePositiveCost => "Cost (FP)",
            SliderId::FalseNegativeCost => "Cost (FN)",
            SliderId::TruePositiveBenefit => "Benefit (TP)",
            SliderId::TrueNegativeBenefit => "Benefit (TN)",
            SliderId::ReviewCost => "Review Cost",
            SliderId::NegClass => "Negative Class",
            SliderId::PosClass => "Positive Class",
            SliderId::ClassImbalance => "Balance",
            SliderId::DistShape => "Shape",
        }
    }

    /// The cost weight this slider drives, if any.
    pub fn cost_kind(&self) -> Option<CostKind> {
        match self {
            SliderId::FalsePositiveCost => Some(CostKind::FalsePositive),
            SliderId::FalseNegativeCost => Some(CostKind::FalseNegative),
            SliderId::TruePositiveBenefit => Some(CostKind::TruePositive),
            SliderId::TrueNegativeBenefit => Some(CostKind::TrueNegative),
            SliderId::ReviewCost => Some(CostKind::Review),
            _ => None,
        }
    }

    /// Control value the slider starts at under `config`.
    pub fn default_fraction(&self, config: &EngineConfig) -> f64 {
        let defaults = &config.defaults;
        match self {
            SliderId::NegClass => defaults.k_neg,
            SliderId::PosClass => defaults.k_pos,
            SliderId::ClassImbalance => defaults.imbalance,
            SliderId::DistShape => config.shape_floor_fraction(defaults.shape_floor),
            other => other
                .cost_kind()
                .map(|kind| kind.get(&defaults.weights))
                .unwrap_or_default(),
        }
    }

    /// Starting position, rounded to the nearest step.
    pub fn default_position(&self, config: &EngineConfig) -> u32 {
        let max = config.slider_resolution;
        let position = (self.default_fraction(config) * f64::from(max)).round();
        position.clamp(0.0, f64::from(max)) as u32
    }

    /// Event for the slider at `position` out of `max`.
    pub fn to_event(&self, position: u32, max: u32) -> Result<ParameterEvent> {
        if max == 0 {
            return Err(Error::invalid(self.as_str(), "slider max must be positive"));
        }
        if position > max {
            return Err(Error::invalid(
                self.as_str(),
                format!("position {} exceeds max {}", position, max),
            ));
        }
        let k = f64::from(position) / f64::from(max);
        let event = match self {
            SliderId::NegClass => ParameterEvent::ClassShape {
                class: ClassLabel::Neg,
                k,
            },
            SliderId::PosClass => ParameterEvent::ClassShape {
                class: ClassLabel::Pos,
                k,
            },
            SliderId::ClassImbalance => ParameterEvent::Imbalance { k },
            SliderId::DistShape => ParameterEvent::ShapeFloor { k },
            SliderId::FalsePositiveCost => cost_event(CostKind::FalsePositive, k),
            SliderId::FalseNegativeCost => cost_event(CostKind::FalseNegative, k),
            SliderId::TruePositiveBenefit => cost_event(CostKind::TruePositive, k),
            SliderId::TrueNegativeBenefit => cost_event(CostKind::TrueNegative, k),
            SliderId::ReviewCost => cost_event(CostKind::Review, k),
        };
        Ok(event)
    }
}

fn cost_event(kind: CostKind, k: f64) -> ParameterEvent {
    ParameterEvent::CostWeight { kind, k }
}

impl fmt::Display for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SliderId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SliderId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::invalid("slider", format!("unknown slider id '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for id in SliderId::ALL {
            assert_eq!(id.as_str().parse::<SliderId>().unwrap(), id);
        }
        assert!("slider-unknown".parse::<SliderId>().is_err());
    }

    #[test]
    fn test_position_maps_to_fraction() {
        let event = SliderId::ClassImbalance.to_event(125, 500).unwrap();
        assert_eq!(event, ParameterEvent::Imbalance { k: 0.25 });
        let event = SliderId::FalseNegativeCost.to_event(500, 500).unwrap();
        assert_eq!(
            event,
            ParameterEvent::CostWeight {
                kind: CostKind::FalseNegative,
                k: 1.0
            }
        );
    }

    #[test]
    fn test_out_of_range_positions_rejected() {
        assert!(SliderId::PosClass.to_event(501, 500).is_err());
        let err = SliderId::PosClass.to_event(0, 0).unwrap_err();
        assert_eq!(err.code(), 10);
    }

    #[test]
    fn test_default_positions() {
        let config = EngineConfig::default();
        assert_eq!(SliderId::FalsePositiveCost.default_position(&config), 150);
        assert_eq!(SliderId::FalseNegativeCost.default_position(&config), 100);
        assert_eq!(SliderId::PosClass.default_position(&config), 420);
        assert_eq!(SliderId::NegClass.default_position(&config), 0);
        assert_eq!(SliderId::ClassImbalance.default_position(&config), 250);
        assert_eq!(SliderId::DistShape.default_position(&config), 250);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SliderId::ClassImbalance.label(), "Balance");
        assert_eq!(SliderId::ReviewCost.to_string(), "slider-review-cost");
        assert_eq!(SliderId::NegClass.cost_kind(), None);
    }
}
