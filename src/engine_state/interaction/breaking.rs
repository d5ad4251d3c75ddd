//! # Block Breaking
//!
//! Breaking a block takes several break-action events while the block stays
//! under the crosshair. Progress is shown by fading the block out; moving the
//! aim elsewhere restores it. Only one block is ever in progress.

use log::debug;

use crate::engine_state::{
    inventory::BlockCollector,
    voxels::{
        block::{block_position::BlockPosition, block_type::BlockType},
        world::VoxelStore,
    },
};

use super::aim::AimHit;

/// Break-action events needed to break a block.
pub const HITS_TO_BREAK: u32 = 5;

/// State of the breaking process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakState {
    /// No block is being broken.
    #[default]
    Idle,
    /// A block has taken `hit_count` hits and is still standing.
    Targeting {
        /// The block being broken
        position: BlockPosition,
        /// Hits taken so far
        hit_count: u32,
    },
}

/// What a single break-action event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BreakOutcome {
    /// The aim did not land on any block.
    NoTarget,
    /// The aimed block cannot be broken.
    Unbreakable {
        /// The aimed block
        position: BlockPosition,
        /// Its type
        block_type: BlockType,
    },
    /// The aimed block took a hit and is still standing.
    Damaged {
        /// The aimed block
        position: BlockPosition,
        /// Hits taken so far, below `HITS_TO_BREAK`
        hit_count: u32,
        /// Breaking progress in percent
        progress: f32,
    },
    /// The aimed block was removed from the world.
    Broken {
        /// Where the block was
        position: BlockPosition,
        /// Its type, as handed to the collector
        block_type: BlockType,
    },
}

/// Tracks damage dealt to at most one block at a time.
#[derive(Debug, Clone, Default)]
pub struct BreakStateMachine {
    state: BreakState,
}

impl BreakStateMachine {
    /// Creates an idle state machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> BreakState {
        self.state
    }

    /// Breaking progress of the current target in percent, if there is one.
    pub fn progress(&self) -> Option<f32> {
        match self.state {
            BreakState::Idle => None,
            BreakState::Targeting { hit_count, .. } => Some(progress_for(hit_count)),
        }
    }

    /// Handles one break-action event given what the player is aiming at.
    ///
    /// Aiming at nothing or at an unbreakable block abandons the current
    /// target. Aiming at a different breakable block abandons the current
    /// target and starts on the new one. A block that reaches
    /// `HITS_TO_BREAK` hits is removed from `store` and its type is handed to
    /// `collector`.
    pub fn advance(
        &mut self,
        aim: Option<AimHit>,
        store: &mut VoxelStore,
        collector: &mut dyn BlockCollector,
    ) -> BreakOutcome {
        let hit = match aim {
            None => {
                self.reset(store);
                return BreakOutcome::NoTarget;
            }
            Some(hit) if !hit.block.is_breakable() => {
                self.reset(store);
                return BreakOutcome::Unbreakable {
                    position: hit.position,
                    block_type: hit.block.block_type,
                };
            }
            Some(hit) => hit,
        };

        let previous_hits = match self.state {
            BreakState::Targeting {
                position,
                hit_count,
            } if position == hit.position => hit_count,
            _ => {
                self.reset(store);
                0
            }
        };

        let hit_count = previous_hits + 1;
        let progress = progress_for(hit_count);

        if hit_count >= HITS_TO_BREAK {
            store.remove_block_at(hit.position);
            collector.collect(hit.block.block_type);
            self.state = BreakState::Idle;
            debug!("Broke {} block at {:?}", hit.block.block_type, hit.position);
            return BreakOutcome::Broken {
                position: hit.position,
                block_type: hit.block.block_type,
            };
        }

        store.set_opacity(hit.position, 1.0 - progress / 100.0);
        self.state = BreakState::Targeting {
            position: hit.position,
            hit_count,
        };
        debug!("Block at {:?} is {progress}% broken", hit.position);

        BreakOutcome::Damaged {
            position: hit.position,
            hit_count,
            progress,
        }
    }

    /// Abandons the current target, restoring its opacity.
    ///
    /// A target that has disappeared from the store in the meantime is simply
    /// forgotten.
    pub fn reset(&mut self, store: &mut VoxelStore) {
        if let BreakState::Targeting { position, .. } = self.state {
            if !store.set_opacity(position, 1.0) {
                debug!("Abandoned target at {:?} no longer exists", position);
            }
        }
        self.state = BreakState::Idle;
    }
}

fn progress_for(hit_count: u32) -> f32 {
    hit_count as f32 / HITS_TO_BREAK as f32 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::{inventory::Inventory, voxels::block::Block};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn aim_at(store: &VoxelStore, x: i32, y: i32, z: i32) -> Option<AimHit> {
        let position = BlockPosition::new(x, y, z);
        store.block_at(position).map(|block| AimHit {
            position,
            block,
            distance: 1.0,
        })
    }

    fn opacity(store: &VoxelStore, x: i32, y: i32, z: i32) -> Option<f32> {
        store.get_block(x, y, z).map(|block: Block| block.opacity)
    }

    fn store_with_grass() -> VoxelStore {
        let mut store = VoxelStore::new();
        store.add_block(0, 0, 0, BlockType::GRASS);
        store.add_block(1, 0, 0, BlockType::GRASS);
        store.add_block(2, -1, 0, BlockType::WATER);
        store
    }

    #[test]
    fn five_hits_break_a_block() {
        let mut store = store_with_grass();
        let mut inventory = Inventory::new();
        let mut machine = BreakStateMachine::new();

        for hits in 1..HITS_TO_BREAK {
            let aim = aim_at(&store, 0, 0, 0);
            let outcome = machine.advance(aim, &mut store, &mut inventory);
            assert!(matches!(outcome, BreakOutcome::Damaged { hit_count, .. } if hit_count == hits));
        }
        assert!(approx(opacity(&store, 0, 0, 0).unwrap_or(1.0), 0.2));
        assert!(approx(machine.progress().unwrap_or(0.0), 80.0));
        assert_eq!(inventory.count(BlockType::GRASS), 0);

        let aim = aim_at(&store, 0, 0, 0);
        let outcome = machine.advance(aim, &mut store, &mut inventory);
        assert_eq!(
            outcome,
            BreakOutcome::Broken {
                position: BlockPosition::new(0, 0, 0),
                block_type: BlockType::GRASS,
            }
        );
        assert!(store.get_block(0, 0, 0).is_none());
        assert_eq!(machine.state(), BreakState::Idle);
        assert_eq!(inventory.count(BlockType::GRASS), 1);
    }

    #[test]
    fn switching_target_restarts_progress() {
        let mut store = store_with_grass();
        let mut inventory = Inventory::new();
        let mut machine = BreakStateMachine::new();

        for _ in 0..3 {
            let aim = aim_at(&store, 0, 0, 0);
            machine.advance(aim, &mut store, &mut inventory);
        }
        let aim = aim_at(&store, 1, 0, 0);
        let outcome = machine.advance(aim, &mut store, &mut inventory);

        assert!(matches!(outcome, BreakOutcome::Damaged { hit_count: 1, .. }));
        assert_eq!(opacity(&store, 0, 0, 0), Some(1.0));
        assert!(approx(opacity(&store, 1, 0, 0).unwrap_or(1.0), 0.8));
    }

    #[test]
    fn losing_aim_restores_opacity() {
        let mut store = store_with_grass();
        let mut inventory = Inventory::new();
        let mut machine = BreakStateMachine::new();

        let aim = aim_at(&store, 0, 0, 0);
        machine.advance(aim, &mut store, &mut inventory);
        assert_eq!(machine.advance(None, &mut store, &mut inventory), BreakOutcome::NoTarget);

        assert_eq!(machine.state(), BreakState::Idle);
        assert_eq!(opacity(&store, 0, 0, 0), Some(1.0));
    }

    #[test]
    fn unbreakable_blocks_reset_and_stay() {
        let mut store = store_with_grass();
        let mut inventory = Inventory::new();
        let mut machine = BreakStateMachine::new();

        let aim = aim_at(&store, 0, 0, 0);
        machine.advance(aim, &mut store, &mut inventory);
        for _ in 0..10 {
            let aim = aim_at(&store, 2, -1, 0);
            let outcome = machine.advance(aim, &mut store, &mut inventory);
            assert!(matches!(outcome, BreakOutcome::Unbreakable { block_type: BlockType::WATER, .. }));
        }

        assert_eq!(opacity(&store, 2, -1, 0), Some(1.0));
        assert_eq!(opacity(&store, 0, 0, 0), Some(1.0));
        assert_eq!(inventory.total(), 0);
    }

    #[test]
    fn externally_removed_target_is_forgotten() {
        let mut store = store_with_grass();
        let mut inventory = Inventory::new();
        let mut machine = BreakStateMachine::new();

        let aim = aim_at(&store, 0, 0, 0);
        machine.advance(aim, &mut store, &mut inventory);
        store.remove_block(0, 0, 0);
        machine.reset(&mut store);

        assert_eq!(machine.state(), BreakState::Idle);
        assert!(store.get_block(0, 0, 0).is_none());
    }

    #[test]
    fn at_most_one_block_is_faded() {
        let mut store = store_with_grass();
        let mut inventory = Inventory::new();
        let mut machine = BreakStateMachine::new();

        for target in [0, 1, 0, 1, 1] {
            let aim = aim_at(&store, target, 0, 0);
            machine.advance(aim, &mut store, &mut inventory);
            let faded = store.blocks().filter(|(_, block)| block.opacity < 1.0).count();
            assert!(faded <= 1);
        }
    }
}
