//! # Player Controller
//!
//! Moves the player through the world. Input is collected with
//! `intake_actions` and applied by `update`, which then integrates velocity,
//! resolves standing collision and applies friction.
//!
//! Collision is deliberately minimal: the only obstacle is the generated
//! terrain surface of the column under the player. There are no walls and no
//! ceilings.

use std::f32::consts::FRAC_PI_2;

use cgmath::{Rad, Vector3};
use log::trace;
use web_time::Duration;

use crate::{
    config::PlayerConfig,
    engine_state::{geometry, voxels::world::VoxelStore, PlayerAction},
};

use super::PlayerState;

/// Fraction of horizontal velocity kept after each tick.
pub const FRICTION: f32 = 0.9;

/// Height of the eye above the top of the column the player stands on.
pub const STANDING_HEIGHT: f32 = 1.0;

/// Owns the `PlayerState` and advances it each tick.
#[derive(Debug, Clone)]
pub struct PlayerController {
    state: PlayerState,

    // Movement requested for the next update
    amount_left: f32,
    amount_right: f32,
    amount_forward: f32,
    amount_backward: f32,
    jump_requested: bool,

    // Rotation requested for the next update, in pointer units
    rotate_horizontal: f32,
    rotate_vertical: f32,

    sensitivity: f32,
}

impl PlayerController {
    /// Creates a controller for a player spawned as described by `config`.
    pub fn new(config: &PlayerConfig) -> Self {
        Self::with_state(PlayerState::new(config), config.sensitivity)
    }

    /// Creates a controller around an existing state.
    pub fn with_state(state: PlayerState, sensitivity: f32) -> Self {
        Self {
            state,
            amount_left: 0.0,
            amount_right: 0.0,
            amount_forward: 0.0,
            amount_backward: 0.0,
            jump_requested: false,
            rotate_horizontal: 0.0,
            rotate_vertical: 0.0,
            sensitivity,
        }
    }

    /// Current player state.
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Mutable access to the player state, for teleporting and tests.
    pub fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    /// Records the actions to apply on the next `update`.
    pub fn intake_actions(&mut self, actions: &PlayerAction) {
        self.amount_forward = if actions.move_forward { 1.0 } else { 0.0 };
        self.amount_backward = if actions.move_backward { 1.0 } else { 0.0 };
        self.amount_left = if actions.move_left { 1.0 } else { 0.0 };
        self.amount_right = if actions.move_right { 1.0 } else { 0.0 };
        self.jump_requested = actions.jump;
        if let Some((delta_x, delta_y)) = actions.rotate_view {
            self.rotate_horizontal += delta_x as f32;
            self.rotate_vertical += delta_y as f32;
        }
    }

    /// Applies the recorded actions and advances the player by `dt`.
    ///
    /// Order within a tick: rotation, movement impulse, jump, integration and
    /// ground collision, friction.
    pub fn update(&mut self, dt: Duration, store: &VoxelStore) {
        if self.rotate_horizontal != 0.0 || self.rotate_vertical != 0.0 {
            self.rotate(self.rotate_horizontal, self.rotate_vertical);
        }

        let direction = Vector3::new(
            self.amount_right - self.amount_left,
            0.0,
            self.amount_backward - self.amount_forward,
        );
        self.move_direction(direction);

        if self.jump_requested {
            self.jump();
        }

        self.integrate(dt, store);
        self.apply_friction();

        // Reset controller state
        self.rotate_horizontal = 0.0;
        self.rotate_vertical = 0.0;
        self.amount_left = 0.0;
        self.amount_right = 0.0;
        self.amount_forward = 0.0;
        self.amount_backward = 0.0;
        self.jump_requested = false;

        trace!(
            "player at ({:.3}, {:.3}, {:.3}) velocity ({:.3}, {:.3}, {:.3}) grounded {}",
            self.state.position.x,
            self.state.position.y,
            self.state.position.z,
            self.state.velocity.x,
            self.state.velocity.y,
            self.state.velocity.z,
            self.state.grounded
        );
    }

    /// Applies gravity, moves the player and resolves ground collision.
    pub fn integrate(&mut self, dt: Duration, store: &VoxelStore) {
        let dt = dt.as_secs_f32();
        let state = &mut self.state;

        if !state.grounded {
            state.velocity.y += state.gravity * dt;
        }

        state.position += state.velocity * dt;

        let ground_y = store.get_terrain_height(state.position.x, state.position.z) as f32;
        if state.position.y < ground_y + STANDING_HEIGHT {
            state.position.y = ground_y + STANDING_HEIGHT;
            state.velocity.y = 0.0;
            state.grounded = true;
        } else {
            state.grounded = false;
        }
    }

    /// Adds a horizontal impulse of magnitude `speed` in `direction`.
    ///
    /// `direction` is given in view space (negative Z is forward) and is
    /// rotated by yaw only, so looking up or down never slows walking. A zero
    /// direction, such as forward and backward held together, adds nothing.
    pub fn move_direction(&mut self, direction: Vector3<f32>) {
        let mut world_direction = geometry::rotate_about_y(direction, self.state.yaw);
        world_direction.y = 0.0;
        if let Some(unit) = geometry::try_normalize(world_direction) {
            self.state.velocity += unit * self.state.speed;
        }
    }

    /// Scales horizontal velocity by `FRICTION`. Vertical velocity is untouched.
    pub fn apply_friction(&mut self) {
        self.state.velocity.x *= FRICTION;
        self.state.velocity.z *= FRICTION;
    }

    /// Launches the player upwards if they are standing on the ground.
    ///
    /// # Returns
    /// Whether the jump took effect.
    pub fn jump(&mut self) -> bool {
        if !self.state.grounded {
            return false;
        }
        self.state.velocity.y = self.state.jump_force;
        self.state.grounded = false;
        true
    }

    /// Turns the view by a pointer delta.
    ///
    /// Yaw is left unbounded; pitch is clamped so the player can look at most
    /// straight up or straight down.
    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.state.yaw -= Rad(delta_x * self.sensitivity);
        self.state.pitch -= Rad(delta_y * self.sensitivity);
        self.state.pitch = Rad(self.state.pitch.0.clamp(-FRAC_PI_2, FRAC_PI_2));
    }
}
