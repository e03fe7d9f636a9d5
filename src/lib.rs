//! Silhouette Guess core crate.
//!
//! Each round fetches a random creature from PokeAPI, shows it as a black
//! silhouette and lets the player guess its name. Up to five hints (type,
//! habitat, height, weight, generation) can be bought per round.
//!
//! Round rules live in [`round`] and never touch the browser; [`api`] and the
//! DOM bindings form the I/O boundary around them.

use wasm_bindgen::prelude::*;

pub mod api;
pub mod config;
pub mod error;
mod game;
pub mod locale;
mod logging;
pub mod round;
pub mod subject;
mod ui;

pub use config::GameConfig;
pub use error::{AcquisitionError, ConfigError};
pub use locale::Locale;
pub use round::{HINT_BUDGET, HintCategory, RoundController};
pub use subject::Subject;

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
// JS entrypoints
// -----------------------------------------------------------------------------

/// Starts the game with default settings.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    launch(GameConfig::default())
}

/// Starts the game with a JSON [`GameConfig`], e.g. `{"locale":"pt-BR"}`.
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    launch(config)
}

fn launch(config: GameConfig) -> Result<(), JsValue> {
    logging::init(config.log_level);
    game::start(config)
}

#[wasm_bindgen]
pub fn new_round() {
    game::new_round();
}

#[wasm_bindgen]
pub fn submit_guess(text: &str) {
    game::submit_guess(text);
}

/// Returns whether the hint was revealed. Unknown keys are ignored.
#[wasm_bindgen]
pub fn reveal_hint(category: &str) -> bool {
    match category.parse::<HintCategory>() {
        Ok(category) => game::reveal_hint(category),
        Err(err) => {
            log::warn!("{err}");
            false
        }
    }
}
