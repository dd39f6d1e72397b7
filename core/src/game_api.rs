use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::event::Event;
use crate::log::push_event;
use crate::model::{Cell, Transfer};
use crate::session::GameSession;

mod manager;
mod snapshot;

pub use snapshot::{CacheSnapshot, MapView, SessionSnapshot};

#[wasm_bindgen(getter_with_clone)]
pub struct SessionResult {
    pub handle: u32,
    pub events: Vec<String>,
    pub error: String,
}

#[wasm_bindgen(getter_with_clone)]
pub struct ActionResult {
    pub events: Vec<String>,
    pub changed: bool,
    pub cache_coins: u32,
    pub points: u32,
    pub status_text: String,
    pub error: String,
}

impl ActionResult {
    fn failed(error: GameError) -> Self {
        Self {
            events: Vec::new(),
            changed: false,
            cache_coins: 0,
            points: 0,
            status_text: String::new(),
            error: error.to_string(),
        }
    }
}

fn start_session(config: GameConfig) -> SessionResult {
    let mut events = Vec::new();
    let handle = manager::create_session(config, &mut events);
    SessionResult {
        handle,
        events,
        error: String::new(),
    }
}

fn apply_transfer(handle: u32, cell: Cell, direction: Transfer) -> ActionResult {
    let result = manager::with_session_mut(handle, |session| -> GameResult<ActionResult> {
        let mut events = Vec::new();
        let outcome = session.transfer_logged(cell, direction, &mut events)?;
        let cache_coins = session.cache(cell)?.coins;
        Ok(ActionResult {
            events,
            changed: outcome.is_moved(),
            cache_coins,
            points: session.points(),
            status_text: session.status_text(),
            error: String::new(),
        })
    })
    .unwrap_or(Err(GameError::InvalidHandle(handle)));

    result.unwrap_or_else(ActionResult::failed)
}

fn read_session<T>(handle: u32, f: impl FnOnce(&GameSession) -> GameResult<T>) -> GameResult<T> {
    manager::with_session(handle, f).unwrap_or(Err(GameError::InvalidHandle(handle)))
}

/// Creates a session on the default board; `events` holds its spawn lines.
#[wasm_bindgen]
pub fn create_session() -> SessionResult {
    start_session(GameConfig::default())
}

/// Creates a session from partial JSON config overrides.
/// On a bad config, `handle` is 0 and `error` holds the reason.
#[wasm_bindgen]
pub fn create_session_with_config(config_json: &str) -> SessionResult {
    match GameConfig::from_json(config_json) {
        Ok(config) => start_session(config),
        Err(err) => SessionResult {
            handle: 0,
            events: Vec::new(),
            error: GameError::from(err).to_string(),
        },
    }
}

#[wasm_bindgen]
pub fn destroy_session(handle: u32) {
    manager::destroy_session(handle);
}

#[wasm_bindgen]
pub fn reset_session(handle: u32) -> SessionResult {
    manager::with_session_mut(handle, |session| {
        session.reset();
        let mut events = Vec::new();
        push_event(
            &mut events,
            Event::SessionReset {
                cache_count: session.cache_count() as u32,
            },
        );
        SessionResult {
            handle,
            events,
            error: String::new(),
        }
    })
    .unwrap_or_else(|| SessionResult {
        handle: 0,
        events: Vec::new(),
        error: GameError::InvalidHandle(handle).to_string(),
    })
}

#[wasm_bindgen]
pub fn collect_coin(handle: u32, i: i32, j: i32) -> ActionResult {
    apply_transfer(handle, Cell::new(i, j), Transfer::Collect)
}

#[wasm_bindgen]
pub fn deposit_coin(handle: u32, i: i32, j: i32) -> ActionResult {
    apply_transfer(handle, Cell::new(i, j), Transfer::Deposit)
}

#[wasm_bindgen]
pub fn get_snapshot(handle: u32) -> SessionSnapshot {
    read_session(handle, |session| Ok(session.snapshot()))
        .unwrap_or_else(SessionSnapshot::failed)
}

/// Popup contents for the cache at `(i, j)`.
#[wasm_bindgen]
pub fn get_cache(handle: u32, i: i32, j: i32) -> CacheSnapshot {
    read_session(handle, |session| session.cache_snapshot(Cell::new(i, j)))
        .unwrap_or_else(CacheSnapshot::failed)
}

#[wasm_bindgen]
pub fn get_map_view(handle: u32) -> MapView {
    read_session(handle, |session| Ok(session.map_view())).unwrap_or_else(MapView::failed)
}
