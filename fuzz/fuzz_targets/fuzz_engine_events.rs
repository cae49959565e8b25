//! Fuzz target for sequences of parameter events and slider moves.
//!
//! The engine must never panic, and a rejected input must leave both the
//! parameters and the last output untouched.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mc_core::{
    ClassLabel, CostKind, Engine, EngineConfig, IndexConvention, ParameterEvent, SliderId,
};

#[derive(Debug, Arbitrary)]
enum Input {
    Shape { positive: bool, k: f64 },
    Imbalance { k: f64 },
    ShapeFloor { k: f64 },
    Weight { kind: u8, k: f64 },
    Slider { id: u8, position: u32 },
}

#[derive(Debug, Arbitrary)]
struct Session {
    resolution: u8,
    legacy: bool,
    inputs: Vec<Input>,
}

fuzz_target!(|session: Session| {
    let config = EngineConfig {
        curve_resolution: usize::from(session.resolution).max(2),
        index_convention: if session.legacy {
            IndexConvention::Legacy
        } else {
            IndexConvention::Aligned
        },
        ..EngineConfig::default()
    };
    let Ok(mut engine) = Engine::new(config) else {
        return;
    };

    for input in session.inputs {
        let params = *engine.params();
        let output = engine.output().clone();
        let result = match input {
            Input::Shape { positive, k } => engine.update(ParameterEvent::ClassShape {
                class: if positive { ClassLabel::Pos } else { ClassLabel::Neg },
                k,
            }),
            Input::Imbalance { k } => engine.update(ParameterEvent::Imbalance { k }),
            Input::ShapeFloor { k } => engine.update(ParameterEvent::ShapeFloor { k }),
            Input::Weight { kind, k } => {
                let kind = CostKind::ALL[usize::from(kind) % CostKind::ALL.len()];
                engine.update(ParameterEvent::CostWeight { kind, k })
            }
            Input::Slider { id, position } => {
                let id = SliderId::ALL[usize::from(id) % SliderId::ALL.len()];
                engine.apply_slider(id, position)
            }
        };
        if result.is_err() {
            assert_eq!(*engine.params(), params);
            assert_eq!(engine.output().curves, output.curves);
        }
    }
});
