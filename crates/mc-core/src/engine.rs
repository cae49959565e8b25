//! The cost engine: parameter state in, every derived curve and the
//! optimal operating point out.
//!
//! [`derive_all`] is the whole pipeline as a pure function. [`Engine`] owns
//! one parameter state and the output computed from it, and recomputes
//! everything on each accepted event.

use std::path::Path;

use mc_config::{load_config, validate_config, ConfigSource, EngineConfig};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cost::build_cost_curve;
use crate::curve::{Curve, CurveKind};
use crate::error::{Error, Result};
use crate::logging::{event_names, Stage};
use crate::mixture::{build_calibration, build_marginal};
use crate::optimum::{locate_optimum, OptimalPoint};
use crate::params::{ParameterEvent, ParameterState};
use crate::sampler::sample_class_density;
use crate::slider::SliderId;

/// The five curves derived from one parameter state.
///
/// Densities are prior-scaled, so `marginal_density` is their sum.
/// `calibration` has two fewer samples than the others.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedCurves {
    pub neg_class_density: Curve,
    pub pos_class_density: Curve,
    pub marginal_density: Curve,
    pub calibration: Curve,
    pub cost: Curve,
}

impl DerivedCurves {
    pub fn get(&self, kind: CurveKind) -> &Curve {
        match kind {
            CurveKind::NegClassDensity => &self.neg_class_density,
            CurveKind::PosClassDensity => &self.pos_class_density,
            CurveKind::MarginalDensity => &self.marginal_density,
            CurveKind::Calibration => &self.calibration,
            CurveKind::Cost => &self.cost,
        }
    }

    /// Curves in render order, tagged with their kind.
    pub fn iter(&self) -> impl Iterator<Item = (CurveKind, &Curve)> + '_ {
        CurveKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Everything a renderer needs after one recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineOutput {
    pub curves: DerivedCurves,
    /// None when the calibration curve has nothing to search.
    pub optimum: Option<OptimalPoint>,
    /// The negative class sits to the right of the positive class.
    pub anticalibrated: bool,
}

/// Run the full pipeline for `params`.
pub fn derive_all(params: &ParameterState, config: &EngineConfig) -> Result<EngineOutput> {
    let resolution = config.curve_resolution;
    let shape = params.shape_model(config)?;

    let pos_class_density =
        sample_class_density(params.k_pos, params.imbalance, &shape, resolution)?;
    let neg_class_density =
        sample_class_density(params.k_neg, 1.0 - params.imbalance, &shape, resolution)?;
    let marginal_density = build_marginal(&pos_class_density, &neg_class_density)?;
    let calibration =
        build_calibration(&pos_class_density, &marginal_density, config.zero_denominator)?;
    let cost = build_cost_curve(
        params.k_pos,
        params.k_neg,
        params.imbalance,
        &shape,
        &params.weights,
        resolution,
    )?;

    debug!(
        event = event_names::CURVES_DERIVED,
        stage = %Stage::Derive,
        resolution,
        calibration_len = calibration.len(),
        "derived curves"
    );

    let optimum = match locate_optimum(
        &params.weights,
        &cost,
        &calibration,
        config.index_convention,
    ) {
        Ok(point) => {
            debug!(
                event = event_names::OPTIMUM_LOCATED,
                stage = %Stage::Locate,
                threshold = point.threshold_score,
                cost = point.cost_at_threshold,
                probability = point.calibrated_prob_at_threshold,
                convention = %config.index_convention,
                "located optimum"
            );
            Some(point)
        }
        Err(Error::NotAvailable(reason)) => {
            debug!(
                event = event_names::OPTIMUM_UNAVAILABLE,
                stage = %Stage::Locate,
                reason = %reason,
                "optimum not available"
            );
            None
        }
        Err(e) => return Err(e),
    };

    Ok(EngineOutput {
        curves: DerivedCurves {
            neg_class_density,
            pos_class_density,
            marginal_density,
            calibration,
            cost,
        },
        optimum,
        anticalibrated: params.anticalibrated(),
    })
}

/// Resolve and load the engine configuration, logging where it came from.
pub fn load_engine_config(cli_path: Option<&Path>) -> Result<EngineConfig> {
    let (config, resolved) = load_config(cli_path)?;
    match (&resolved.path, resolved.source) {
        (Some(path), source) if source != ConfigSource::BuiltinDefault => info!(
            event = event_names::CONFIG_LOADED,
            stage = %Stage::Init,
            path = %path.display(),
            source = %source,
            "loaded engine config"
        ),
        _ => info!(
            event = event_names::CONFIG_DEFAULT_USED,
            stage = %Stage::Init,
            "no engine config found, using built-in defaults"
        ),
    }
    Ok(config)
}

/// Owns the parameter state and the last computed output.
///
/// `update` takes `&mut self`, so only one writer can change the engine at a
/// time; wrap it in a `Mutex` to share it between event sources.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    params: ParameterState,
    output: EngineOutput,
}

impl Engine {
    /// Validate `config` and compute the output for its default state.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let params = ParameterState::from_defaults(&config.defaults);
        Self::with_params(config, params)
    }

    /// Start from an explicit parameter state instead of the defaults.
    pub fn with_params(config: EngineConfig, params: ParameterState) -> Result<Self> {
        validate_config(&config)?;
        let output = derive_all(&params, &config)?;
        info!(
            event = event_names::ENGINE_CREATED,
            stage = %Stage::Init,
            resolution = config.curve_resolution,
            convention = %config.index_convention,
            "cost engine ready"
        );
        Ok(Self {
            config,
            params,
            output,
        })
    }

    /// Load the configuration from the usual locations and build an engine.
    pub fn from_resolved_config(cli_path: Option<&Path>) -> Result<Self> {
        Self::new(load_engine_config(cli_path)?)
    }

    /// Apply one event and recompute every curve.
    ///
    /// On error nothing changes: params and output stay as they were.
    pub fn update(&mut self, event: ParameterEvent) -> Result<&EngineOutput> {
        let next = self
            .params
            .with(&event, &self.config)
            .and_then(|params| Ok((params, derive_all(&params, &self.config)?)));

        match next {
            Ok((params, output)) => {
                debug!(
                    event = event_names::ENGINE_UPDATE,
                    stage = %Stage::Update,
                    parameter = event.target(),
                    k = event.k(),
                    "applied parameter event"
                );
                self.params = params;
                self.output = output;
                Ok(&self.output)
            }
            Err(e) => {
                warn!(
                    event = event_names::ENGINE_UPDATE_REJECTED,
                    stage = %Stage::Update,
                    parameter = event.target(),
                    code = e.code(),
                    error = %e,
                    "rejected parameter event"
                );
                Err(e)
            }
        }
    }

    /// Apply a slider at `position` out of the configured slider resolution.
    pub fn apply_slider(&mut self, id: SliderId, position: u32) -> Result<&EngineOutput> {
        let event = id.to_event(position, self.config.slider_resolution)?;
        self.update(event)
    }

    pub fn params(&self) -> &ParameterState {
        &self.params
    }

    pub fn output(&self) -> &EngineOutput {
        &self.output
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current slider position for `id`, for restoring a UI.
    pub fn slider_position(&self, id: SliderId) -> u32 {
        let max = f64::from(self.config.slider_resolution);
        let fraction = match id {
            SliderId::NegClass => self.params.k_neg,
            SliderId::PosClass => self.params.k_pos,
            SliderId::ClassImbalance => self.params.imbalance,
            SliderId::DistShape => self.config.shape_floor_fraction(self.params.shape_floor),
            other => other
                .cost_kind()
                .map(|kind| kind.get(&self.params.weights))
                .unwrap_or_default(),
        };
        (fraction * max).round().clamp(0.0, max) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{ClassLabel, CostKind};
    use mc_config::{IndexConvention, ValidationError};

    fn small_config() -> EngineConfig {
        EngineConfig {
            curve_resolution: 101,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_new_computes_initial_output() {
        let engine = Engine::new(small_config()).unwrap();
        let out = engine.output();
        assert_eq!(out.curves.cost.len(), 101);
        assert_eq!(out.curves.calibration.len(), 99);
        assert!(out.optimum.is_some());
        assert!(!out.anticalibrated);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = EngineConfig {
            curve_resolution: 1,
            ..EngineConfig::default()
        };
        let err = Engine::new(config).unwrap_err();
        assert_eq!(err.code(), 40);
        assert!(matches!(
            err,
            Error::Config(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_update_recomputes() {
        let mut engine = Engine::new(small_config()).unwrap();
        let before = engine.output().clone();
        let out = engine
            .update(ParameterEvent::ClassShape {
                class: ClassLabel::Neg,
                k: 0.95,
            })
            .unwrap();
        assert!(out.anticalibrated);
        assert_ne!(out.curves.neg_class_density, before.curves.neg_class_density);
        assert_eq!(out.curves.pos_class_density, before.curves.pos_class_density);
    }

    #[test]
    fn test_rejected_update_keeps_state() {
        let mut engine = Engine::new(small_config()).unwrap();
        let params = *engine.params();
        let output = engine.output().clone();
        let err = engine
            .update(ParameterEvent::CostWeight {
                kind: CostKind::FalsePositive,
                k: 2.0,
            })
            .unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(*engine.params(), params);
        assert_eq!(*engine.output(), output);
    }

    #[test]
    fn test_weight_change_leaves_densities() {
        let mut engine = Engine::new(small_config()).unwrap();
        let before = engine.output().clone();
        let out = engine
            .update(ParameterEvent::CostWeight {
                kind: CostKind::Review,
                k: 0.1,
            })
            .unwrap();
        assert_eq!(out.curves.marginal_density, before.curves.marginal_density);
        assert_ne!(out.curves.cost, before.curves.cost);
    }

    #[test]
    fn test_apply_slider_uses_configured_max() {
        let mut engine = Engine::new(small_config()).unwrap();
        engine.apply_slider(SliderId::ClassImbalance, 100).unwrap();
        assert_eq!(engine.params().imbalance, 0.2);
        assert!(engine.apply_slider(SliderId::ClassImbalance, 501).is_err());
        assert_eq!(engine.params().imbalance, 0.2);
    }

    #[test]
    fn test_slider_positions_follow_state() {
        let mut engine = Engine::new(small_config()).unwrap();
        for id in SliderId::ALL {
            assert_eq!(
                engine.slider_position(id),
                id.default_position(engine.config())
            );
        }
        engine.apply_slider(SliderId::DistShape, 500).unwrap();
        assert_eq!(engine.params().shape_floor, 3.0);
        assert_eq!(engine.slider_position(SliderId::DistShape), 500);
    }

    #[test]
    fn test_minimum_resolution_has_no_optimum() {
        let config = EngineConfig {
            curve_resolution: 2,
            ..EngineConfig::default()
        };
        let engine = Engine::new(config).unwrap();
        let out = engine.output();
        assert!(out.curves.calibration.is_empty());
        assert_eq!(out.curves.cost.len(), 2);
        assert!(out.optimum.is_none());
    }

    #[test]
    fn test_legacy_convention_runs() {
        let config = EngineConfig {
            index_convention: IndexConvention::Legacy,
            ..small_config()
        };
        let engine = Engine::new(config).unwrap();
        let opt = engine.output().optimum.unwrap();
        assert!(opt.probability_score >= opt.threshold_score);
    }

    #[test]
    fn test_curves_iterate_in_render_order() {
        let engine = Engine::new(small_config()).unwrap();
        let kinds: Vec<_> = engine.output().curves.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, CurveKind::ALL.to_vec());
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }
}
