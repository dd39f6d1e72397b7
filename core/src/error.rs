use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid_config_json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("home coordinate must be finite")]
    Home,
    #[error("tile_degrees must be positive and finite, got {0}")]
    TileDegrees(f64),
    #[error("neighborhood_size must be in 1..=256, got {0}")]
    NeighborhoodSize(u32),
    #[error("spawn_probability must be in [0, 1], got {0}")]
    SpawnProbability(f64),
    #[error("zoom must be at most 19, got {0}")]
    Zoom(u8),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown_cache:{i},{j}")]
    UnknownCache { i: i32, j: i32 },
    #[error("invalid_handle:{0}")]
    InvalidHandle(u32),
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

pub type GameResult<T> = Result<T, GameError>;
