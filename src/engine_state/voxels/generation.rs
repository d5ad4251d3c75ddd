//! # World Generation
//!
//! One-shot terrain generation for the sandbox. The generator walks every
//! column of a square region and places exactly one block per column at the
//! height given by a fixed trigonometric height function. The result is a
//! single-layer heightmap, not a filled volume.

use log::info;

use super::{block::block_type::BlockType, world::VoxelStore};

/// Populates a `VoxelStore` with heightmap terrain.
///
/// The region covered is `[min, max)` on both the X and Z axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldGenerator {
    min: i32,
    max: i32,
}

impl Default for WorldGenerator {
    fn default() -> Self {
        Self::new(-10, 10)
    }
}

impl WorldGenerator {
    /// Creates a generator covering columns `[min, max)` on both horizontal axes.
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Computes the block height and block type of the column at `(x, z)`.
    ///
    /// This is a pure function of the column coordinates.
    pub fn column(x: i32, z: i32) -> (i32, BlockType) {
        let y = ((x as f64 / 5.0).sin() * (z as f64 / 5.0).cos() * 3.0).floor() as i32;
        let block_type = if y < 0 {
            BlockType::WATER
        } else {
            BlockType::GRASS
        };
        (y, block_type)
    }

    /// Places one block per column into `store` and records each column height.
    pub fn generate(&self, store: &mut VoxelStore) {
        for x in self.min..self.max {
            for z in self.min..self.max {
                let (y, block_type) = Self::column(x, z);
                store.add_block(x, y, z, block_type);
                store.set_terrain_height(x, z, y);
            }
        }

        info!(
            "Generated {} columns in [{}, {}), store now holds {} blocks",
            self.column_count(),
            self.min,
            self.max,
            store.len()
        );
    }

    /// Number of columns this generator places.
    pub fn column_count(&self) -> usize {
        let side = (self.max - self.min).max(0) as usize;
        side * side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_function_is_deterministic() {
        for x in -10..10 {
            for z in -10..10 {
                assert_eq!(WorldGenerator::column(x, z), WorldGenerator::column(x, z));
            }
        }
    }

    #[test]
    fn known_columns() {
        assert_eq!(WorldGenerator::column(0, 0), (0, BlockType::GRASS));
        // sin(1) * cos(0) * 3 = 2.52...
        assert_eq!(WorldGenerator::column(5, 0), (2, BlockType::GRASS));
        // sin(-1) * cos(0) * 3 = -2.52...
        assert_eq!(WorldGenerator::column(-5, 0), (-3, BlockType::WATER));
    }

    #[test]
    fn places_one_block_per_column() {
        let mut store = VoxelStore::new();
        let generator = WorldGenerator::default();
        generator.generate(&mut store);

        assert_eq!(generator.column_count(), 400);
        assert_eq!(store.len(), 400);
        assert_eq!(store.column_count(), 400);
    }

    #[test]
    fn columns_have_nothing_above_or_below() {
        let mut store = VoxelStore::new();
        WorldGenerator::new(-3, 3).generate(&mut store);

        for x in -3..3 {
            for z in -3..3 {
                let (y, _) = WorldGenerator::column(x, z);
                assert!(store.get_block(x, y + 1, z).is_none());
                assert!(store.get_block(x, y - 1, z).is_none());
            }
        }
    }

    #[test]
    fn empty_region_generates_nothing() {
        let mut store = VoxelStore::new();
        let generator = WorldGenerator::new(4, 4);
        generator.generate(&mut store);
        assert!(store.is_empty());
        assert_eq!(generator.column_count(), 0);
    }
}
