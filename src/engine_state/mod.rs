//! # Engine State Module
//!
//! The core of the sandbox: the voxel world, the player and block breaking.
//!
//! ## Key Components
//!
//! * `Simulation` - owns every piece of core state and advances it one tick at a time
//! * `voxels` - the block store, block types and terrain generation
//! * `player_state` - the player's kinematic state and controller
//! * `interaction` - aiming at blocks and breaking them
//! * `inventory` - collected blocks
//! * `environment` - cosmetic day/night and weather collaborators, driven by the outer loop
//! * `geometry` - vector helpers, rays and boxes
//!
//! ## Architecture
//!
//! There is no global state. The `Simulation` owns the world, the player
//! controller, the break state machine and the inventory, and lends them to
//! each other for the duration of a call. The world has a single writer: the
//! tick.

use log::{debug, info};
use web_time::Duration;

use crate::{
    application_state::input_state::{Action, InputSnapshot},
    config::{PlayerConfig, SandboxConfig},
};

use interaction::{AimResolver, BreakOutcome, BreakStateMachine};
use inventory::Inventory;
use player_state::{PlayerController, PlayerState};
use voxels::{generation::WorldGenerator, world::VoxelStore};

pub mod environment;
pub mod geometry;
pub mod interaction;
pub mod inventory;
pub mod player_state;
pub mod voxels;

/// Nominal duration of one tick. Frame time is never measured.
pub const FIXED_TIMESTEP: Duration = Duration::from_nanos(16_666_667);

/// The world, the player and everything the player does to the world.
///
/// # Examples
///
/// ```
/// use voxel_sandbox::{
///     application_state::input_state::InputSnapshot,
///     config::SandboxConfig,
///     engine_state::{Simulation, FIXED_TIMESTEP},
/// };
///
/// let mut simulation = Simulation::new(&SandboxConfig::default());
/// let player = simulation.tick(&InputSnapshot::default(), FIXED_TIMESTEP);
/// assert!(player.position.y < 10.0);
/// ```
pub struct Simulation {
    /// Every block in the world
    pub world: VoxelStore,
    /// The player
    pub player: PlayerController,
    /// Damage dealt to the block being broken
    pub breaker: BreakStateMachine,
    /// Finds the block under the crosshair
    pub aim: AimResolver,
    /// Blocks collected by the player
    pub inventory: Inventory,
    /// Actions derived from the latest input snapshot
    pub player_actions: PlayerAction,
}

impl Simulation {
    /// Generates the world described by `config` and spawns the player in it.
    pub fn new(config: &SandboxConfig) -> Self {
        let mut world = VoxelStore::new();
        WorldGenerator::new(config.world.min, config.world.max).generate(&mut world);
        Self::with_world(world, &config.player)
    }

    /// Spawns a player into an existing world.
    pub fn with_world(world: VoxelStore, config: &PlayerConfig) -> Self {
        info!(
            "Spawning player at {:?} into a world of {} blocks",
            config.spawn,
            world.len()
        );
        Self {
            world,
            player: PlayerController::new(config),
            breaker: BreakStateMachine::new(),
            aim: AimResolver::new(config.reach),
            inventory: Inventory::new(),
            player_actions: PlayerAction::default(),
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Movement, jumping and view rotation are applied first, then gravity and
    /// ground collision, then friction. A break action pressed this tick is
    /// handled last, against the updated view.
    ///
    /// # Returns
    /// The player state at the end of the tick.
    pub fn tick(&mut self, input: &InputSnapshot, delta: Duration) -> PlayerState {
        self.set_input_commands(input);

        self.player.intake_actions(&self.player_actions);
        self.player.update(delta, &self.world);

        if self.player_actions.break_block {
            self.break_action();
        }

        *self.player.state()
    }

    /// Handles one break-action event against the current view.
    pub fn break_action(&mut self) -> BreakOutcome {
        let aim = self.aim.resolve(self.player.state(), &self.world);
        if let Some(hit) = &aim {
            let point = AimResolver::hit_point(self.player.state(), hit);
            debug!(
                "Break action on {:?} at ({:.2}, {:.2}, {:.2}), {:.2} away",
                hit.position, point.x, point.y, point.z, hit.distance
            );
        }
        self.breaker
            .advance(aim, &mut self.world, &mut self.inventory)
    }

    /// Sets the player actions for the next tick from an input snapshot.
    pub fn set_input_commands(&mut self, input: &InputSnapshot) {
        self.player_actions = Self::translate_input(input);
    }

    /// Translates an input snapshot into player actions.
    ///
    /// Movement and jumping follow held state. Breaking only triggers on the
    /// frame the break action is pressed, so holding it down counts once.
    fn translate_input(input: &InputSnapshot) -> PlayerAction {
        PlayerAction {
            move_forward: input.get_action_state(Action::Forward).is_active(),
            move_backward: input.get_action_state(Action::Back).is_active(),
            move_left: input.get_action_state(Action::Left).is_active(),
            move_right: input.get_action_state(Action::Right).is_active(),
            jump: input.get_action_state(Action::Jump).is_active(),
            break_block: input
                .get_action_state(Action::BreakAction)
                .is_just_pressed(),
            rotate_view: input.get_pointer_delta(),
        }
    }
}

/// Represents player actions derived from input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerAction {
    /// Movement actions - true while the key is pressed or held
    pub move_forward: bool,
    #[allow(missing_docs)]
    pub move_backward: bool,
    #[allow(missing_docs)]
    pub move_left: bool,
    #[allow(missing_docs)]
    pub move_right: bool,

    /// Jump while held, whenever the player is on the ground
    pub jump: bool,

    /// Hit the aimed block - only on the frame the action is pressed
    pub break_block: bool,

    /// View rotation from pointer movement
    pub rotate_view: Option<(f64, f64)>,
}
