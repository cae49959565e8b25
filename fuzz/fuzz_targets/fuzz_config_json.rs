//! Fuzz target for engine.json parsing and validation.
//!
//! Any input must either be rejected with an error or produce a config the
//! engine can be built from without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mc_config::{validate_config, EngineConfig};
use mc_core::Engine;

// Keeps each run fast; validation alone allows far larger grids.
const MAX_FUZZ_RESOLUTION: usize = 2_000;

fuzz_target!(|data: &[u8]| {
    let Ok(config) = serde_json::from_slice::<EngineConfig>(data) else {
        return;
    };
    if validate_config(&config).is_err() || config.curve_resolution > MAX_FUZZ_RESOLUTION {
        return;
    }
    let _ = Engine::new(config);
});
