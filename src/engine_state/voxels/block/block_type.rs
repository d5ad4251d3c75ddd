//! # Block Type Module
//!
//! This module defines the different types of blocks in the sandbox world.
//! It provides block type identification, integer conversion for compact
//! storage, and the per-type properties (breakability, display colour).

use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};

use super::BlockTypeSize;

/// Enumerates all possible block types in the sandbox world.
///
/// The `FromPrimitive`/`ToPrimitive` derives allow conversion to and from
/// the compact `BlockTypeSize` representation used by render instances.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum BlockType {
    /// A grass block. The only block the player can break.
    GRASS,

    /// A water block, placed wherever the terrain dips below zero.
    WATER,
}

/// Display colour of each block type as linear RGB.
///
/// Indexed by `BlockType` as a `usize`.
pub static BLOCK_TYPE_TO_COLOR: [[f32; 3]; 2] = [
    [0.0, 1.0, 0.0], // GRASS
    [0.0, 0.0, 1.0], // WATER
];

impl BlockType {
    /// Converts a `BlockTypeSize` to a `BlockType`.
    ///
    /// # Returns
    /// The corresponding `BlockType`, or `None` if the value does not name one.
    pub fn get_block_type_from_int(btype: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(btype)
    }

    /// Converts this block type to its compact integer form.
    pub fn to_int(self) -> BlockTypeSize {
        num::ToPrimitive::to_u8(&self).unwrap_or_default()
    }

    /// Whether the player is able to break blocks of this type.
    pub fn is_breakable(self) -> bool {
        matches!(self, BlockType::GRASS)
    }

    /// The display colour of this block type.
    pub fn color(self) -> [f32; 3] {
        BLOCK_TYPE_TO_COLOR[self as usize]
    }

    /// Lowercase name used in logs and inventory listings.
    pub fn name(self) -> &'static str {
        match self {
            BlockType::GRASS => "grass",
            BlockType::WATER => "water",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
