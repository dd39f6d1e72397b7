mod board;
mod config;
mod error;
mod event;
mod game_api;
mod log;
mod luck;
mod model;
mod session;

use wasm_bindgen::prelude::*;

pub use board::{cell_bounds, has_cache, initial_coins, scan_neighborhood};
pub use config::GameConfig;
pub use error::{ConfigError, GameError, GameResult};
pub use event::Event;
pub use game_api::{
    collect_coin, create_session, create_session_with_config, deposit_coin, destroy_session,
    get_cache, get_map_view, get_snapshot, reset_session, ActionResult, CacheSnapshot, MapView,
    SessionResult, SessionSnapshot,
};
pub use crate::log::init_logging;
pub use luck::{cell_key, labeled_key, luck, COIN_VALUE_LABEL};
pub use model::{Cache, Cell, CellBounds, LatLng, RejectReason, Transfer, TransferOutcome};
pub use session::GameSession;

/// Deterministic value in `[0, 1)` for `key`; exposed so the page can
/// reproduce board rolls.
#[wasm_bindgen]
pub fn sample_luck(key: &str) -> f64 {
    luck::luck(key)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    init_logging(None);
}
