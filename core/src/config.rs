use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::LatLng;

pub const HOME_LAT: f64 = 36.9995;
pub const HOME_LNG: f64 = -122.0533;
pub const GAMEPLAY_ZOOM_LEVEL: u8 = 19;
pub const TILE_DEGREES: f64 = 1e-4;
pub const NEIGHBORHOOD_SIZE: u32 = 8;
pub const CACHE_SPAWN_PROBABILITY: f64 = 0.1;
pub const MAX_INITIAL_COINS: u32 = 100;
pub const NEIGHBORHOOD_SIZE_MAX: u32 = 256;
/// Highest zoom the OpenStreetMap tile server renders.
pub const TILE_ZOOM_MAX: u8 = 19;

pub const TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>";

/// Tuning knobs fixed at session creation.
/// JSON overrides only need the fields they change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub home: LatLng,
    pub tile_degrees: f64,
    pub neighborhood_size: u32,
    pub spawn_probability: f64,
    pub max_initial_coins: u32,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            home: LatLng::new(HOME_LAT, HOME_LNG),
            tile_degrees: TILE_DEGREES,
            neighborhood_size: NEIGHBORHOOD_SIZE,
            spawn_probability: CACHE_SPAWN_PROBABILITY,
            max_initial_coins: MAX_INITIAL_COINS,
            zoom: GAMEPLAY_ZOOM_LEVEL,
            tile_url: TILE_URL_TEMPLATE.to_string(),
            attribution: TILE_ATTRIBUTION.to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.home.lat.is_finite() || !self.home.lng.is_finite() {
            return Err(ConfigError::Home);
        }
        if !self.tile_degrees.is_finite() || self.tile_degrees <= 0.0 {
            return Err(ConfigError::TileDegrees(self.tile_degrees));
        }
        if self.neighborhood_size == 0 || self.neighborhood_size > NEIGHBORHOOD_SIZE_MAX {
            return Err(ConfigError::NeighborhoodSize(self.neighborhood_size));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(ConfigError::SpawnProbability(self.spawn_probability));
        }
        if self.zoom > TILE_ZOOM_MAX {
            return Err(ConfigError::Zoom(self.zoom));
        }
        Ok(())
    }

    /// Half-open cell range scanned on each axis: `-R..R`.
    pub(crate) fn axis_range(&self) -> std::ops::Range<i32> {
        let r = self.neighborhood_size as i32;
        -r..r
    }
}
