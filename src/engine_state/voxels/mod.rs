//! # Voxel World
//!
//! This module contains the sandbox's voxel data model: the block types, the
//! `VoxelStore` that owns every placed block together with the terrain height
//! cache, and the `WorldGenerator` that fills a store with terrain.
//!
//! ## Data Flow
//!
//! 1. The generator places one block per column and records the column height
//! 2. The player controller queries column heights every tick
//! 3. The aim resolver walks the stored blocks when the player breaks
//! 4. The break state machine updates opacities and removes finished blocks
//!
//! ## Thread Safety
//!
//! The store has a single writer: the simulation tick. It carries no interior
//! synchronization.

pub mod block;
pub mod generation;
pub mod world;
