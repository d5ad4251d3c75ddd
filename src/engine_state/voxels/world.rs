//! # World Module
//!
//! This module provides the `VoxelStore`, which owns every block placed in the
//! sandbox together with the terrain height cache written during generation.
//!
//! ## Terrain Height Cache
//!
//! Column heights are recorded once, when the generator places a column. They
//! are never updated afterwards: removing a block leaves its column height in
//! place, so a removed ground block keeps supporting the player. Height
//! queries therefore answer "where was the ground generated", not "what is
//! the topmost block right now".
//!
//! ## Performance Considerations
//!
//! - Blocks and heights are stored in hash maps keyed by packed positions
//! - Lookups are O(1); iteration order is unspecified

use std::collections::HashMap;

use super::block::{
    block_position::{BlockPosition, ColumnPosition, PackedKeyBuildHasher},
    block_type::BlockType,
    Block, BlockInstance,
};

/// Owns all placed blocks and the generation-time terrain height cache.
///
/// # Examples
///
/// ```
/// use voxel_sandbox::engine_state::voxels::{block::block_type::BlockType, world::VoxelStore};
///
/// let mut store = VoxelStore::new();
/// store.add_block(0, 2, 0, BlockType::GRASS);
/// assert!(store.get_block(0, 2, 0).is_some());
///
/// store.remove_block(0, 2, 0);
/// assert!(store.get_block(0, 2, 0).is_none());
/// ```
#[derive(Debug, Default, Clone)]
pub struct VoxelStore {
    blocks: HashMap<BlockPosition, Block, PackedKeyBuildHasher>,
    terrain_heights: HashMap<ColumnPosition, i32, PackedKeyBuildHasher>,
}

impl VoxelStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a fully opaque block of `block_type` at `(x, y, z)`.
    ///
    /// An existing block at the same position is replaced.
    pub fn add_block(&mut self, x: i32, y: i32, z: i32, block_type: BlockType) {
        self.blocks
            .insert(BlockPosition::new(x, y, z), Block::new(block_type));
    }

    /// Returns the block at exactly `(x, y, z)`, if any.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Option<Block> {
        self.block_at(BlockPosition::new(x, y, z))
    }

    /// Returns the block at `position`, if any.
    pub fn block_at(&self, position: BlockPosition) -> Option<Block> {
        self.blocks.get(&position).copied()
    }

    /// Removes the block at `(x, y, z)`. Does nothing if there is none.
    ///
    /// The terrain height cache is left untouched.
    pub fn remove_block(&mut self, x: i32, y: i32, z: i32) -> Option<Block> {
        self.remove_block_at(BlockPosition::new(x, y, z))
    }

    /// Removes the block at `position`, returning it if one was present.
    pub fn remove_block_at(&mut self, position: BlockPosition) -> Option<Block> {
        self.blocks.remove(&position)
    }

    /// Sets the opacity of the block at `position`, clamped to `[0, 1]`.
    ///
    /// # Returns
    /// `false` if no block exists at `position`.
    pub fn set_opacity(&mut self, position: BlockPosition, opacity: f32) -> bool {
        match self.blocks.get_mut(&position) {
            Some(block) => {
                block.opacity = opacity.clamp(0.0, 1.0);
                true
            }
            None => false,
        }
    }

    /// Records the generated height of the column at `(x, z)`.
    pub fn set_terrain_height(&mut self, x: i32, z: i32, height: i32) {
        self.terrain_heights
            .insert(ColumnPosition::new(x, z), height);
    }

    /// Looks up the generated terrain height below the world-space point `(x, z)`.
    ///
    /// `x` and `z` are rounded to the nearest column. Columns that were never
    /// generated report a height of `0`.
    pub fn get_terrain_height(&self, x: f32, z: f32) -> i32 {
        self.terrain_heights
            .get(&ColumnPosition::containing(x, z))
            .copied()
            .unwrap_or(0)
    }

    /// Iterates over every stored block and its position.
    pub fn blocks(&self) -> impl Iterator<Item = (BlockPosition, &Block)> + '_ {
        self.blocks.iter().map(|(position, block)| (*position, block))
    }

    /// Number of stored blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the store holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of columns with a cached terrain height.
    pub fn column_count(&self) -> usize {
        self.terrain_heights.len()
    }

    /// Builds render records for every stored block.
    pub fn instances(&self) -> Vec<BlockInstance> {
        self.blocks
            .iter()
            .map(|(position, block)| BlockInstance::new(position.to_array(), block))
            .collect()
    }
}
