use std::collections::BTreeMap;

use crate::board::scan_neighborhood;
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::event::Event;
use crate::log::push_event;
use crate::model::{Cache, Cell, RejectReason, Transfer, TransferOutcome};

pub const NO_POINTS_TEXT: &str = "No points yet...";

/// One player's game: the placed caches plus the coins the player holds.
///
/// Caches are addressed by cell. Every coin movement is a single unit between
/// one cache and `points`, so `total_coins()` never changes after creation.
pub struct GameSession {
    config: GameConfig,
    caches: BTreeMap<Cell, Cache>,
    points: u32,
    transfers: u32,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let caches = scan_neighborhood(&config);
        Self::from_caches(config, caches)
    }

    pub fn from_caches(config: GameConfig, caches: impl IntoIterator<Item = Cache>) -> Self {
        Self {
            config,
            caches: caches.into_iter().map(|c| (c.cell, c)).collect(),
            points: 0,
            transfers: 0,
        }
    }

    /// Same caches as a fresh page load; points start over.
    pub fn reset(&mut self) {
        self.caches = scan_neighborhood(&self.config)
            .into_iter()
            .map(|c| (c.cell, c))
            .collect();
        self.points = 0;
        self.transfers = 0;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn cache(&self, cell: Cell) -> GameResult<&Cache> {
        self.caches.get(&cell).ok_or(GameError::UnknownCache {
            i: cell.i,
            j: cell.j,
        })
    }

    pub fn caches(&self) -> impl Iterator<Item = &Cache> {
        self.caches.values()
    }

    pub fn cache_count(&self) -> usize {
        self.caches.len()
    }

    pub fn total_coins(&self) -> u64 {
        self.caches
            .values()
            .map(|c| u64::from(c.coins))
            .sum::<u64>()
            + u64::from(self.points)
    }

    pub fn status_text(&self) -> String {
        if self.transfers == 0 {
            NO_POINTS_TEXT.to_string()
        } else {
            format!("{} points accumulated", self.points)
        }
    }

    pub fn collect(&mut self, cell: Cell) -> GameResult<TransferOutcome> {
        self.transfer(cell, Transfer::Collect)
    }

    pub fn deposit(&mut self, cell: Cell) -> GameResult<TransferOutcome> {
        self.transfer(cell, Transfer::Deposit)
    }

    pub fn transfer(&mut self, cell: Cell, direction: Transfer) -> GameResult<TransferOutcome> {
        let cache = self.caches.get_mut(&cell).ok_or(GameError::UnknownCache {
            i: cell.i,
            j: cell.j,
        })?;

        let (from, to) = match direction {
            Transfer::Collect => (&mut cache.coins, &mut self.points),
            Transfer::Deposit => (&mut self.points, &mut cache.coins),
        };

        if *from == 0 {
            return Ok(TransferOutcome::Rejected(match direction {
                Transfer::Collect => RejectReason::CacheEmpty,
                Transfer::Deposit => RejectReason::NoPoints,
            }));
        }
        let Some(next) = to.checked_add(1) else {
            return Ok(TransferOutcome::Rejected(RejectReason::Overflow));
        };

        *from -= 1;
        *to = next;
        self.transfers = self.transfers.saturating_add(1);

        Ok(TransferOutcome::Moved {
            cache_coins: cache.coins,
            points: self.points,
        })
    }

    /// Runs a transfer and records its event line.
    pub(crate) fn transfer_logged(
        &mut self,
        cell: Cell,
        direction: Transfer,
        events: &mut Vec<String>,
    ) -> GameResult<TransferOutcome> {
        let outcome = self.transfer(cell, direction)?;
        let (i, j) = (cell.i, cell.j);
        let event = match (outcome, direction) {
            (TransferOutcome::Moved { cache_coins, points }, Transfer::Collect) => {
                Event::CoinCollected {
                    i,
                    j,
                    cache_coins,
                    points,
                }
            }
            (TransferOutcome::Moved { cache_coins, points }, Transfer::Deposit) => {
                Event::CoinDeposited {
                    i,
                    j,
                    cache_coins,
                    points,
                }
            }
            (TransferOutcome::Rejected(reason), _) => Event::TransferRejected {
                i,
                j,
                action: direction.as_str(),
                reason: reason.as_str(),
            },
        };
        push_event(events, event);
        Ok(outcome)
    }

    pub(crate) fn announce(&self, events: &mut Vec<String>) {
        push_event(
            events,
            Event::SessionStart {
                home_lat: self.config.home.lat,
                home_lng: self.config.home.lng,
                neighborhood_size: self.config.neighborhood_size,
                spawn_probability: self.config.spawn_probability,
            },
        );
        for cache in self.caches.values() {
            push_event(
                events,
                Event::CacheSpawned {
                    i: cache.cell.i,
                    j: cache.cell.j,
                    coins: cache.coins,
                },
            );
        }
    }
}
