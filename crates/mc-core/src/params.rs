//! Slider-controlled inputs and the events that change them.

use mc_config::{CostWeights, EngineConfig, ParameterDefaults};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_unit, Result};
use crate::sampler::ShapeModel;

/// Which class distribution a shape control belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassLabel {
    Pos,
    Neg,
}

/// One of the five cost/benefit weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostKind {
    FalsePositive,
    FalseNegative,
    TruePositive,
    TrueNegative,
    Review,
}

impl CostKind {
    pub const ALL: [CostKind; 5] = [
        CostKind::FalsePositive,
        CostKind::FalseNegative,
        CostKind::TruePositive,
        CostKind::TrueNegative,
        CostKind::Review,
    ];

    /// Short key used in labels and equations (`FP`, `FN`, ...).
    pub fn key(&self) -> &'static str {
        match self {
            CostKind::FalsePositive => "FP",
            CostKind::FalseNegative => "FN",
            CostKind::TruePositive => "TP",
            CostKind::TrueNegative => "TN",
            CostKind::Review => "review",
        }
    }

    /// TP and TN weights are benefits; the rest are costs.
    pub fn is_benefit(&self) -> bool {
        matches!(self, CostKind::TruePositive | CostKind::TrueNegative)
    }

    pub fn get(&self, weights: &CostWeights) -> f64 {
        match self {
            CostKind::FalsePositive => weights.false_positive,
            CostKind::FalseNegative => weights.false_negative,
            CostKind::TruePositive => weights.true_positive,
            CostKind::TrueNegative => weights.true_negative,
            CostKind::Review => weights.review,
        }
    }

    fn slot<'a>(&self, weights: &'a mut CostWeights) -> &'a mut f64 {
        match self {
            CostKind::FalsePositive => &mut weights.false_positive,
            CostKind::FalseNegative => &mut weights.false_negative,
            CostKind::TruePositive => &mut weights.true_positive,
            CostKind::TrueNegative => &mut weights.true_negative,
            CostKind::Review => &mut weights.review,
        }
    }
}

/// A single input change. Every `k` is a control value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ParameterEvent {
    ClassShape { class: ClassLabel, k: f64 },
    Imbalance { k: f64 },
    /// Fraction of the shape-floor range; the floor itself is derived
    /// from the configured bounds.
    ShapeFloor { k: f64 },
    CostWeight { kind: CostKind, k: f64 },
}

impl ParameterEvent {
    pub fn k(&self) -> f64 {
        match *self {
            ParameterEvent::ClassShape { k, .. }
            | ParameterEvent::Imbalance { k }
            | ParameterEvent::ShapeFloor { k }
            | ParameterEvent::CostWeight { k, .. } => k,
        }
    }

    /// Field name used in error messages and logs.
    pub fn target(&self) -> &'static str {
        match self {
            ParameterEvent::ClassShape {
                class: ClassLabel::Pos,
                ..
            } => "k_pos",
            ParameterEvent::ClassShape {
                class: ClassLabel::Neg,
                ..
            } => "k_neg",
            ParameterEvent::Imbalance { .. } => "imbalance",
            ParameterEvent::ShapeFloor { .. } => "shape_floor",
            ParameterEvent::CostWeight { kind, .. } => match kind {
                CostKind::FalsePositive => "weights.false_positive",
                CostKind::FalseNegative => "weights.false_negative",
                CostKind::TruePositive => "weights.true_positive",
                CostKind::TrueNegative => "weights.true_negative",
                CostKind::Review => "weights.review",
            },
        }
    }
}

/// Current value of every input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterState {
    pub k_pos: f64,
    pub k_neg: f64,
    /// Positive-class prior.
    pub imbalance: f64,
    /// Beta shape floor (not the slider fraction).
    pub shape_floor: f64,
    pub weights: CostWeights,
}

impl ParameterState {
    pub fn from_defaults(defaults: &ParameterDefaults) -> Self {
        Self {
            k_pos: defaults.k_pos,
            k_neg: defaults.k_neg,
            imbalance: defaults.imbalance,
            shape_floor: defaults.shape_floor,
            weights: defaults.weights,
        }
    }

    /// Apply one event. On error the state is untouched.
    pub fn apply(&mut self, event: &ParameterEvent, config: &EngineConfig) -> Result<()> {
        let k = event.k();
        ensure_unit(event.target(), k)?;
        match *event {
            ParameterEvent::ClassShape {
                class: ClassLabel::Pos,
                ..
            } => self.k_pos = k,
            ParameterEvent::ClassShape {
                class: ClassLabel::Neg,
                ..
            } => self.k_neg = k,
            ParameterEvent::Imbalance { .. } => self.imbalance = k,
            ParameterEvent::ShapeFloor { .. } => {
                self.shape_floor = config.shape_floor_from_fraction(k)
            }
            ParameterEvent::CostWeight { kind, .. } => *kind.slot(&mut self.weights) = k,
        }
        Ok(())
    }

    /// The current state with `event` applied, leaving `self` as is.
    pub fn with(&self, event: &ParameterEvent, config: &EngineConfig) -> Result<Self> {
        let mut next = *self;
        next.apply(event, config)?;
        Ok(next)
    }

    pub fn shape_model(&self, config: &EngineConfig) -> Result<ShapeModel> {
        ShapeModel::new(self.shape_floor, config.concentration)
    }

    /// The negative class sits to the right of the positive class.
    pub fn anticalibrated(&self) -> bool {
        self.k_neg > self.k_pos
    }
}

impl Default for ParameterState {
    fn default() -> Self {
        Self::from_defaults(&ParameterDefaults::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config() {
        let state = ParameterState::default();
        assert_eq!(state.k_pos, 0.84);
        assert_eq!(state.k_neg, 0.0);
        assert_eq!(state.imbalance, 0.5);
        assert_eq!(state.shape_floor, 2.0);
        assert_eq!(state.weights, CostWeights::default());
        assert!(!state.anticalibrated());
    }

    #[test]
    fn test_apply_each_event() {
        let config = EngineConfig::default();
        let mut state = ParameterState::default();

        state
            .apply(
                &ParameterEvent::ClassShape {
                    class: ClassLabel::Neg,
                    k: 0.9,
                },
                &config,
            )
            .unwrap();
        assert_eq!(state.k_neg, 0.9);
        assert!(state.anticalibrated());

        state
            .apply(&ParameterEvent::Imbalance { k: 0.2 }, &config)
            .unwrap();
        assert_eq!(state.imbalance, 0.2);

        state
            .apply(&ParameterEvent::ShapeFloor { k: 1.0 }, &config)
            .unwrap();
        assert_eq!(state.shape_floor, 3.0);

        state
            .apply(
                &ParameterEvent::CostWeight {
                    kind: CostKind::Review,
                    k: 0.05,
                },
                &config,
            )
            .unwrap();
        assert_eq!(state.weights.review, 0.05);
    }

    #[test]
    fn test_shape_floor_midpoint() {
        let config = EngineConfig::default();
        let state = ParameterState::default()
            .with(&ParameterEvent::ShapeFloor { k: 0.5 }, &config)
            .unwrap();
        assert_eq!(state.shape_floor, 2.0);
    }

    #[test]
    fn test_rejected_event_leaves_state() {
        let config = EngineConfig::default();
        let mut state = ParameterState::default();
        let before = state;
        for k in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = state
                .apply(&ParameterEvent::Imbalance { k }, &config)
                .unwrap_err();
            assert_eq!(err.code(), 10);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let config = EngineConfig::default();
        let event = ParameterEvent::CostWeight {
            kind: CostKind::TrueNegative,
            k: 0.4,
        };
        let once = ParameterState::default().with(&event, &config).unwrap();
        let twice = once.with(&event, &config).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_cost_kind_accessors() {
        let weights = CostWeights::new(0.1, 0.2, 0.3, 0.4, 0.5);
        let values: Vec<f64> = CostKind::ALL.iter().map(|k| k.get(&weights)).collect();
        assert_eq!(values, vec![0.1, 0.2, 0.3, 0.4, 0.5]);
        assert!(CostKind::TruePositive.is_benefit());
        assert!(!CostKind::Review.is_benefit());
    }

    #[test]
    fn test_event_json_shape() {
        let event = ParameterEvent::ClassShape {
            class: ClassLabel::Pos,
            k: 0.25,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"class_shape","class":"pos","k":0.25}"#);
        let back: ParameterEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
