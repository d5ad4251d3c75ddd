//! # Block Position Module
//!
//! Integer block and column coordinates, together with the packed 64-bit key
//! and hasher used by the world's hash maps.
//!
//! Each axis is packed into 21 bits, so positions within `[-2^20, 2^20)` on
//! every axis map to distinct keys. Equality always compares the full
//! coordinates, so positions outside that range are still stored correctly,
//! they only share hash buckets.

use std::hash::{BuildHasherDefault, Hash, Hasher};

const AXIS_BITS: u32 = 21;
const AXIS_MASK: u64 = (1 << AXIS_BITS) - 1;
const AXIS_OFFSET: i64 = 1 << (AXIS_BITS - 1);

fn pack_axis(value: i32) -> u64 {
    ((value as i64 + AXIS_OFFSET) as u64) & AXIS_MASK
}

/// Integer coordinates of a single block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BlockPosition {
    /// X coordinate
    pub x: i32,
    /// Y coordinate (up)
    pub y: i32,
    /// Z coordinate
    pub z: i32,
}

impl BlockPosition {
    /// Creates a block position from its three coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Packs the position into a single 64-bit key.
    pub fn packed_key(&self) -> u64 {
        pack_axis(self.x) << (2 * AXIS_BITS) | pack_axis(self.y) << AXIS_BITS | pack_axis(self.z)
    }

    /// The block position as an array, in `[x, y, z]` order.
    pub fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Hash for BlockPosition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.packed_key());
    }
}

/// Integer coordinates of a terrain column on the horizontal plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ColumnPosition {
    /// X coordinate
    pub x: i32,
    /// Z coordinate
    pub z: i32,
}

impl ColumnPosition {
    /// Creates a column position.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Finds the column containing the world-space point `(x, z)`.
    ///
    /// Coordinates are rounded to the nearest integer with half-way values
    /// rounding towards positive infinity, so `-2.5` lands in column `-2`.
    pub fn containing(x: f32, z: f32) -> Self {
        Self::new(round_half_up(x), round_half_up(z))
    }

    /// Packs the column into a single 64-bit key.
    pub fn packed_key(&self) -> u64 {
        pack_axis(self.x) << AXIS_BITS | pack_axis(self.z)
    }
}

impl Hash for ColumnPosition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.packed_key());
    }
}

fn round_half_up(value: f32) -> i32 {
    // `value + 0.5` would round up in f32 just below one half
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i32
}

/// Hasher for packed position keys.
///
/// Position keys are already well distributed in their low bits, so a single
/// multiplicative mix is enough to spread them across buckets.
#[derive(Default, Clone, Copy)]
pub struct PackedKeyHasher {
    hash: u64,
}

const MIX_CONSTANT: u64 = 0x9E37_79B9_7F4A_7C15;

impl Hasher for PackedKeyHasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_u64(byte as u64);
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.hash = (self.hash.rotate_left(5) ^ value).wrapping_mul(MIX_CONSTANT);
    }
}

/// `BuildHasher` for maps keyed by `BlockPosition` or `ColumnPosition`.
pub type PackedKeyBuildHasher = BuildHasherDefault<PackedKeyHasher>;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn neighbouring_positions_have_distinct_keys() {
        let mut keys = HashSet::new();
        for x in -2..=2 {
            for y in -2..=2 {
                for z in -2..=2 {
                    assert!(keys.insert(BlockPosition::new(x, y, z).packed_key()));
                }
            }
        }
    }

    #[test]
    fn column_rounding_matches_half_up() {
        assert_eq!(ColumnPosition::containing(3.6, -2.4), ColumnPosition::new(4, -2));
        assert_eq!(ColumnPosition::containing(-2.5, 0.5), ColumnPosition::new(-2, 1));
        assert_eq!(ColumnPosition::containing(-0.2, 0.49), ColumnPosition::new(0, 0));
        assert_eq!(ColumnPosition::containing(0.49999997, 0.0), ColumnPosition::new(0, 0));
        assert_eq!(ColumnPosition::containing(-0.50000006, 0.0), ColumnPosition::new(-1, 0));
        assert_eq!(ColumnPosition::containing(-0.5, 1.5), ColumnPosition::new(0, 2));
    }
}
