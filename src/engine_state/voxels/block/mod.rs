//! # Block Module
//!
//! This module provides the core block-related functionality for the sandbox.
//! It includes block type definitions, integer block positions with their
//! packed hash key, and the block data stored in the world.

use block_type::BlockType;

pub mod block_position;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
/// This is used for the compact encoding handed to the render collaborator.
pub type BlockTypeSize = u8;

/// Represents a single voxel block in the world.
///
/// A block only stores its type and its visual opacity. Opacity doubles as
/// the visible proxy for remaining health while the block is being broken;
/// every block that is not being broken has an opacity of `1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Block {
    /// The type of this block.
    pub block_type: BlockType,
    /// Visual opacity in `[0, 1]`.
    pub opacity: f32,
}

impl Block {
    /// Creates a new, fully opaque block of the specified type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type,
            opacity: 1.0,
        }
    }

    /// Whether this block can be broken by the player.
    pub fn is_breakable(&self) -> bool {
        self.block_type.is_breakable()
    }
}

/// Per-block record handed to the render collaborator.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute ensures a consistent memory layout for GPU
/// interoperability; the record is 32 bytes with no padding.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct BlockInstance {
    /// Centre of the block in world space.
    pub position: [f32; 3],
    /// The block type, encoded as a `BlockTypeSize` widened to 32 bits.
    pub block_type: u32,
    /// RGB colour of the block type, with the block opacity in alpha.
    pub color: [f32; 4],
}

impl BlockInstance {
    /// Builds the render record for `block` placed at `position`.
    pub fn new(position: [i32; 3], block: &Block) -> Self {
        let [r, g, b] = block.block_type.color();
        Self {
            position: [position[0] as f32, position[1] as f32, position[2] as f32],
            block_type: block.block_type.to_int() as u32,
            color: [r, g, b, block.opacity],
        }
    }

    /// Decodes the block type stored in this record.
    pub fn block_type(&self) -> Option<BlockType> {
        BlockType::get_block_type_from_int(self.block_type as BlockTypeSize)
    }
}
