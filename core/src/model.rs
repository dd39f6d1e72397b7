use serde::{Deserialize, Serialize};

/// Grid cell offset from the home coordinate, in `tile_degrees` steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub i: i32,
    pub j: i32,
}

impl Cell {
    pub fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Rectangle covered by one cell; `south_west` is the corner nearest home.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

/// A coin cache placed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cache {
    pub cell: Cell,
    pub coins: u32,
}

impl Cache {
    pub fn new(cell: Cell, coins: u32) -> Self {
        Self { cell, coins }
    }
}

/// Which way a single coin moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transfer {
    Collect,
    Deposit,
}

impl Transfer {
    pub fn as_str(self) -> &'static str {
        match self {
            Transfer::Collect => "collect",
            Transfer::Deposit => "deposit",
        }
    }
}

/// Why a transfer left state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    CacheEmpty,
    NoPoints,
    Overflow,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::CacheEmpty => "cache_empty",
            RejectReason::NoPoints => "no_points",
            RejectReason::Overflow => "overflow",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferOutcome {
    Moved { cache_coins: u32, points: u32 },
    Rejected(RejectReason),
}

impl TransferOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, TransferOutcome::Moved { .. })
    }
}
