//! # Interaction
//!
//! Targeting and breaking blocks. The aim resolver finds the block under the
//! crosshair; the break state machine turns repeated break actions on that
//! block into its removal.

pub mod aim;
pub mod breaking;

pub use aim::{AimHit, AimResolver};
pub use breaking::{BreakOutcome, BreakState, BreakStateMachine, HITS_TO_BREAK};
