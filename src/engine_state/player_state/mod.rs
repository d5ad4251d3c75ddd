//! # Player State Management
//!
//! This module handles the first-person player:
//! - Position, velocity and orientation tracking
//! - Input-driven acceleration, jumping and mouse look
//! - Gravity and standing collision against the terrain height cache
//!
//! ## Core Components
//! - `PlayerState`: the kinematic state, returned by every simulation tick
//! - `PlayerController`: owns the state and advances it each tick

use cgmath::{Point3, Rad, Vector3};

use crate::config::PlayerConfig;

use super::geometry;

pub mod controller;

pub use controller::PlayerController;

/// Kinematic state of the player.
///
/// The eye sits at `position`; the player stands on a column when
/// `position.y` equals the column height plus one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// Eye position in world space
    pub position: Point3<f32>,
    /// Velocity in units per second
    pub velocity: Vector3<f32>,
    /// Horizontal rotation (around Y axis) in radians, unbounded
    pub yaw: Rad<f32>,
    /// Vertical rotation (around X axis) in radians, within `[-PI/2, PI/2]`
    pub pitch: Rad<f32>,
    /// Whether the last collision check snapped the player onto the ground
    pub grounded: bool,
    /// Horizontal impulse added per tick of movement input
    pub speed: f32,
    /// Vertical acceleration while airborne
    pub gravity: f32,
    /// Upward velocity set by a jump
    pub jump_force: f32,
}

impl PlayerState {
    /// Creates an airborne, motionless player at the configured spawn point.
    pub fn new(config: &PlayerConfig) -> Self {
        let [x, y, z] = config.spawn;
        Self {
            position: Point3::new(x, y, z),
            velocity: Vector3::new(0.0, 0.0, 0.0),
            yaw: Rad(0.0),
            pitch: Rad(0.0),
            grounded: false,
            speed: config.speed,
            gravity: config.gravity,
            jump_force: config.jump_force,
        }
    }

    /// The direction the player's eye looks at.
    pub fn forward(&self) -> Vector3<f32> {
        geometry::forward_vector(self.yaw, self.pitch)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(&PlayerConfig::default())
    }
}
