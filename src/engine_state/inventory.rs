//! # Inventory
//!
//! A counted multiset of collected block types, and the `BlockCollector`
//! trait through which the break state machine hands over broken blocks.

use std::collections::HashMap;

use log::info;

use super::voxels::block::block_type::BlockType;

/// Receives the type of every block the player breaks.
pub trait BlockCollector {
    /// Called once for each broken block.
    fn collect(&mut self, block_type: BlockType);
}

/// Counts collected blocks by type.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: HashMap<BlockType, u32>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one block of `block_type`.
    pub fn add_item(&mut self, block_type: BlockType) {
        let count = self.items.entry(block_type).or_insert(0);
        *count += 1;
        info!("Added {} to inventory. Total: {}", block_type, count);
    }

    /// Removes one block of `block_type`.
    ///
    /// # Returns
    /// `false` if the inventory held none.
    pub fn remove_item(&mut self, block_type: BlockType) -> bool {
        match self.items.get_mut(&block_type) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.items.remove(&block_type);
                true
            }
            None => false,
        }
    }

    /// Number of blocks of `block_type` held.
    pub fn count(&self, block_type: BlockType) -> u32 {
        self.items.get(&block_type).copied().unwrap_or(0)
    }

    /// Number of blocks held across all types.
    pub fn total(&self) -> u32 {
        self.items.values().sum()
    }

    /// Held block types and their counts, in no particular order.
    pub fn items(&self) -> impl Iterator<Item = (BlockType, u32)> + '_ {
        self.items.iter().map(|(block_type, count)| (*block_type, *count))
    }
}

impl BlockCollector for Inventory {
    fn collect(&mut self, block_type: BlockType) {
        self.add_item(block_type);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_type() {
        let mut inventory = Inventory::new();
        inventory.add_item(BlockType::GRASS);
        inventory.add_item(BlockType::GRASS);
        inventory.collect(BlockType::WATER);

        assert_eq!(inventory.count(BlockType::GRASS), 2);
        assert_eq!(inventory.count(BlockType::WATER), 1);
        assert_eq!(inventory.total(), 3);
    }

    #[test]
    fn removing_down_to_zero_drops_the_entry() {
        let mut inventory = Inventory::new();
        inventory.add_item(BlockType::GRASS);

        assert!(inventory.remove_item(BlockType::GRASS));
        assert!(!inventory.remove_item(BlockType::GRASS));
        assert_eq!(inventory.count(BlockType::GRASS), 0);
        assert_eq!(inventory.items().count(), 0);
    }
}
