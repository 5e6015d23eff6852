//! Sentence Cards core crate.
//!
//! A week of Korean sentences, each rebuilt in Chinese from shuffled
//! hanzi/pinyin cards against a countdown. Sentences come in difficulty
//! ladders: chunk drills first, then the final dialogue line. The
//! [`controller::GameController`] owns the whole session and talks to the page
//! only through the [`view::View`] and [`platform::Platform`] traits, so the
//! game runs headlessly in tests and against the DOM in the browser
//! ([`web`]).

use wasm_bindgen::prelude::*;

pub mod cards;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod model;
pub mod platform;
pub mod rng;
pub mod telemetry;
#[cfg(any(test, feature = "testing", not(target_arch = "wasm32")))]
#[doc(hidden)]
pub mod testing;
pub mod timer;
pub mod view;
pub mod web;
pub mod weeks;

pub use config::GameConfig;
pub use controller::{GameController, GameEvent, Phase};
pub use dataset::SentenceDataset;
pub use error::{GameError, GameResult};
pub use model::{ChineseTokens, SentenceGroup, SentenceId, SentenceRecord};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Entry points
// -----------------------------------------------------------------------------

/// Start with the built-in weeks and default settings.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    launch(GameConfig::default(), weeks::builtin_dataset().clone())
}

/// Start with a page-supplied `{"week1": [...], ...}` dataset.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_data(data_json: &str) -> Result<(), JsValue> {
    let dataset = SentenceDataset::from_json(data_json)?;
    launch(GameConfig::default(), dataset)
}

/// Start with a (partial) JSON config and an optional JSON dataset; the
/// built-in weeks are used when `data_json` is absent.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(config_json: &str, data_json: Option<String>) -> Result<(), JsValue> {
    let config = GameConfig::from_json(config_json)?;
    let dataset = match data_json {
        Some(json) => SentenceDataset::from_json(&json)?,
        None => weeks::builtin_dataset().clone(),
    };
    launch(config, dataset)
}

fn launch(config: GameConfig, dataset: SentenceDataset) -> Result<(), JsValue> {
    telemetry::init_tracing(config.tracing_level());
    tracing::info!(weeks = config.weeks, "mounting sentence cards");
    web::mount(config, dataset)?;
    Ok(())
}

pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
