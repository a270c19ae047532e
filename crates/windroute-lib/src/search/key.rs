use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Combine two hash values, boost's `hash_combine` recipe.
pub(crate) fn hash_combine(h1: u64, h2: u64) -> u64 {
    h1 ^ (h2
        .wrapping_mul(0x9e37_79b9)
        .wrapping_add(h1 << 6)
        .wrapping_add(h1 >> 2))
}

/// Quantization cell of a search state: floor-divided time plus the three
/// floor-divided components of the position scaled to meters.
///
/// Two states share a key iff they fall in the same 4-cell; the key is the
/// identity used for duplicate detection in the open and close lists. The
/// goal test uses only the spatial components, see
/// [`DiscreteKey::same_cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteKey {
    pub time: u64,
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl DiscreteKey {
    pub fn new(time: u64, x: i64, y: i64, z: i64) -> Self {
        Self { time, x, y, z }
    }

    /// Spatial match only, the time component is ignored.
    pub fn same_cell(&self, other: &DiscreteKey) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    fn mix(&self) -> u64 {
        let h = hash_combine(self.time, self.x as u64);
        let h = hash_combine(h, self.y as u64);
        hash_combine(h, self.z as u64)
    }
}

impl Hash for DiscreteKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.mix());
    }
}
