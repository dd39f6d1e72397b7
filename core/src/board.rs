use crate::config::GameConfig;
use crate::luck::{cell_key, labeled_key, luck, COIN_VALUE_LABEL};
use crate::model::{Cache, Cell, CellBounds, LatLng};

/// True when the cell's placement roll lands below `spawn_probability`.
pub fn has_cache(cell: Cell, spawn_probability: f64) -> bool {
    luck(&cell_key(cell)) < spawn_probability
}

/// Starting coins for a cache, rolled from a key independent of placement.
pub fn initial_coins(cell: Cell, max_initial_coins: u32) -> u32 {
    let roll = luck(&labeled_key(cell, COIN_VALUE_LABEL));
    (roll * f64::from(max_initial_coins)).floor() as u32
}

/// Scans the `(2R)x(2R)` neighbourhood around home and places caches.
/// Rows are visited by `i`, then `j`, so output is sorted by cell.
pub fn scan_neighborhood(config: &GameConfig) -> Vec<Cache> {
    let mut caches = Vec::new();
    for i in config.axis_range() {
        for j in config.axis_range() {
            let cell = Cell::new(i, j);
            if has_cache(cell, config.spawn_probability) {
                caches.push(Cache::new(
                    cell,
                    initial_coins(cell, config.max_initial_coins),
                ));
            }
        }
    }
    ::log::debug!(
        "scanned {} cells, placed {} caches",
        (config.neighborhood_size as usize * 2).pow(2),
        caches.len()
    );
    caches
}

pub fn cell_bounds(home: LatLng, cell: Cell, tile_degrees: f64) -> CellBounds {
    // f64 offsets: `i + 1` must not overflow at the edge of the i32 range.
    let (i, j) = (f64::from(cell.i), f64::from(cell.j));
    let corner =
        |i: f64, j: f64| LatLng::new(home.lat + i * tile_degrees, home.lng + j * tile_degrees);
    CellBounds {
        south_west: corner(i, j),
        north_east: corner(i + 1.0, j + 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::{cell_bounds, has_cache, initial_coins, scan_neighborhood};
    use crate::config::GameConfig;
    use crate::model::{Cell, LatLng};

    fn config_with(spawn_probability: f64, neighborhood_size: u32) -> GameConfig {
        GameConfig {
            spawn_probability,
            neighborhood_size,
            ..GameConfig::default()
        }
    }

    #[test]
    fn zero_probability_places_nothing() {
        for radius in [1, 4, 8, 32] {
            assert!(scan_neighborhood(&config_with(0.0, radius)).is_empty());
        }
    }

    #[test]
    fn full_probability_fills_every_cell() {
        let caches = scan_neighborhood(&config_with(1.0, 8));
        assert_eq!(caches.len(), 256);
        assert_eq!(caches.first().map(|c| c.cell), Some(Cell::new(-8, -8)));
        assert_eq!(caches.last().map(|c| c.cell), Some(Cell::new(7, 7)));
    }

    #[test]
    fn scan_is_reproducible() {
        let config = GameConfig::default();
        let first = scan_neighborhood(&config);
        let second = scan_neighborhood(&config);
        assert_eq!(first, second);
        for cache in &first {
            assert!(has_cache(cache.cell, config.spawn_probability));
            assert!(cache.coins < config.max_initial_coins);
            assert_eq!(cache.coins, initial_coins(cache.cell, config.max_initial_coins));
        }
    }

    #[test]
    fn placement_is_monotonic_in_probability() {
        let sparse = scan_neighborhood(&config_with(0.1, 8));
        let dense = scan_neighborhood(&config_with(0.5, 8));
        assert!(sparse.len() <= dense.len());
        for cache in &sparse {
            assert!(dense.iter().any(|c| c.cell == cache.cell));
        }
    }

    #[test]
    fn zero_max_coins_gives_empty_caches() {
        let config = GameConfig {
            spawn_probability: 1.0,
            max_initial_coins: 0,
            neighborhood_size: 2,
            ..GameConfig::default()
        };
        assert!(scan_neighborhood(&config).iter().all(|c| c.coins == 0));
    }

    #[test]
    fn bounds_span_one_tile_from_home() {
        let home = LatLng::new(10.0, 20.0);
        let bounds = cell_bounds(home, Cell::new(-2, 3), 0.5);
        assert_eq!(bounds.south_west, LatLng::new(9.0, 21.5));
        assert_eq!(bounds.north_east, LatLng::new(9.5, 22.0));
    }

    #[test]
    fn bounds_at_i32_edge_do_not_overflow() {
        let home = LatLng::new(0.0, 0.0);
        let bounds = cell_bounds(home, Cell::new(i32::MAX, i32::MIN), 1.0);
        assert_eq!(bounds.south_west, LatLng::new(f64::from(i32::MAX), f64::from(i32::MIN)));
        assert_eq!(
            bounds.north_east,
            LatLng::new(f64::from(i32::MAX) + 1.0, f64::from(i32::MIN) + 1.0)
        );
    }
}
