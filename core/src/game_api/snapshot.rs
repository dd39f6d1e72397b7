use wasm_bindgen::prelude::*;

use crate::board::cell_bounds;
use crate::error::{GameError, GameResult};
use crate::model::{Cache, Cell};
use crate::session::GameSession;

pub const COLLECT_LABEL: &str = "Collect Coins";
pub const DEPOSIT_LABEL: &str = "Deposit Coins";
pub const PLAYER_TOOLTIP: &str = "That's you!";

/// One cache as the page draws it: rectangle bounds plus popup text.
#[wasm_bindgen(getter_with_clone)]
#[derive(Clone, Debug)]
pub struct CacheSnapshot {
    pub i: i32,
    pub j: i32,
    pub coins: u32,
    pub title: String,
    pub collect_label: String,
    pub deposit_label: String,
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
    pub error: String,
}

impl CacheSnapshot {
    pub(super) fn failed(error: GameError) -> Self {
        Self {
            i: 0,
            j: 0,
            coins: 0,
            title: String::new(),
            collect_label: String::new(),
            deposit_label: String::new(),
            south: 0.0,
            west: 0.0,
            north: 0.0,
            east: 0.0,
            error: error.to_string(),
        }
    }
}

#[wasm_bindgen(getter_with_clone)]
pub struct SessionSnapshot {
    pub points: u32,
    pub status_text: String,
    pub caches: Vec<CacheSnapshot>,
    pub error: String,
}

impl SessionSnapshot {
    pub(super) fn failed(error: GameError) -> Self {
        Self {
            points: 0,
            status_text: String::new(),
            caches: Vec::new(),
            error: error.to_string(),
        }
    }
}

/// Fixed map widget setup: centred on home, zoom locked.
#[wasm_bindgen(getter_with_clone)]
pub struct MapView {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub zoom_control: bool,
    pub scroll_wheel_zoom: bool,
    pub tile_url: String,
    pub attribution: String,
    pub player_tooltip: String,
    pub error: String,
}

impl MapView {
    pub(super) fn failed(error: GameError) -> Self {
        Self {
            center_lat: 0.0,
            center_lng: 0.0,
            zoom: 0,
            min_zoom: 0,
            max_zoom: 0,
            zoom_control: false,
            scroll_wheel_zoom: false,
            tile_url: String::new(),
            attribution: String::new(),
            player_tooltip: String::new(),
            error: error.to_string(),
        }
    }
}

impl GameSession {
    fn to_cache_snapshot(&self, cache: &Cache) -> CacheSnapshot {
        let config = self.config();
        let bounds = cell_bounds(config.home, cache.cell, config.tile_degrees);
        CacheSnapshot {
            i: cache.cell.i,
            j: cache.cell.j,
            coins: cache.coins,
            title: format!("Cache at \"{},{}\"", cache.cell.i, cache.cell.j),
            collect_label: COLLECT_LABEL.to_string(),
            deposit_label: DEPOSIT_LABEL.to_string(),
            south: bounds.south_west.lat,
            west: bounds.south_west.lng,
            north: bounds.north_east.lat,
            east: bounds.north_east.lng,
            error: String::new(),
        }
    }

    pub(crate) fn cache_snapshot(&self, cell: Cell) -> GameResult<CacheSnapshot> {
        let cache = self.cache(cell)?;
        Ok(self.to_cache_snapshot(cache))
    }

    pub(crate) fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            points: self.points(),
            status_text: self.status_text(),
            caches: self.caches().map(|c| self.to_cache_snapshot(c)).collect(),
            error: String::new(),
        }
    }

    pub(crate) fn map_view(&self) -> MapView {
        let config = self.config();
        MapView {
            center_lat: config.home.lat,
            center_lng: config.home.lng,
            zoom: config.zoom,
            min_zoom: config.zoom,
            max_zoom: config.zoom,
            zoom_control: false,
            scroll_wheel_zoom: false,
            tile_url: config.tile_url.clone(),
            attribution: config.attribution.clone(),
            player_tooltip: PLAYER_TOOLTIP.to_string(),
            error: String::new(),
        }
    }
}
