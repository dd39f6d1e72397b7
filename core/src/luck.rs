use crate::model::Cell;

/// Label mixed into the key that sizes a cache's starting coins.
pub const COIN_VALUE_LABEL: &str = "coinValue";

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// Maps a key to a stable value in `[0, 1)`.
/// Same key, same value: no hidden state, safe to call in any order.
pub fn luck(key: &str) -> f64 {
    f64::from(murmur3_32(key.as_bytes(), 0)) / 4_294_967_296.0
}

/// Placement key for a cell, e.g. `"-3,7"`.
pub fn cell_key(cell: Cell) -> String {
    format!("{},{}", cell.i, cell.j)
}

/// Key for a cell plus a label, e.g. `"-3,7,coinValue"`.
pub fn labeled_key(cell: Cell, label: &str) -> String {
    format!("{},{},{label}", cell.i, cell.j)
}

/// MurmurHash3, x86 32-bit variant.
pub(crate) fn murmur3_32(bytes: &[u8], seed: u32) -> u32 {
    let mut h = seed;
    let mut blocks = bytes.chunks_exact(4);

    for block in &mut blocks {
        let k = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        h ^= scramble(k);
        h = h.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let mut k = 0_u32;
        for (shift, byte) in tail.iter().enumerate() {
            k |= u32::from(*byte) << (8 * shift);
        }
        h ^= scramble(k);
    }

    h ^= bytes.len() as u32;
    fmix32(h)
}

fn scramble(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::{cell_key, labeled_key, luck, murmur3_32, COIN_VALUE_LABEL};
    use crate::model::Cell;

    #[test]
    fn murmur_matches_reference_vectors() {
        assert_eq!(murmur3_32(b"", 0), 0);
        assert_eq!(murmur3_32(b"hello", 0), 0x248b_fa47);
    }

    #[test]
    fn luck_is_deterministic_and_in_unit_interval() {
        for i in -20..20 {
            for j in -20..20 {
                let key = cell_key(Cell::new(i, j));
                let first = luck(&key);
                assert_eq!(first, luck(&key));
                assert!((0.0..1.0).contains(&first), "{key} -> {first}");
            }
        }
        assert_eq!(luck(""), 0.0);
    }

    #[test]
    fn keys_use_comma_joined_form() {
        let cell = Cell::new(-3, 7);
        assert_eq!(cell_key(cell), "-3,7");
        assert_eq!(labeled_key(cell, COIN_VALUE_LABEL), "-3,7,coinValue");
    }

    #[test]
    fn labeled_key_decorrelates_from_placement_key() {
        let cell = Cell::new(0, 0);
        assert_ne!(
            luck(&cell_key(cell)),
            luck(&labeled_key(cell, COIN_VALUE_LABEL))
        );
    }
}
