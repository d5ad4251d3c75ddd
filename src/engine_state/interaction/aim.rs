//! Finding the block under the crosshair.

use cgmath::Point3;

use crate::engine_state::{
    geometry::{self, Aabb, Ray},
    player_state::PlayerState,
    voxels::{
        block::{block_position::BlockPosition, Block},
        world::VoxelStore,
    },
};

/// The block the player is aiming at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimHit {
    /// Position of the block
    pub position: BlockPosition,
    /// The block as stored when the ray was cast
    pub block: Block,
    /// Distance from the eye to the point where the ray enters the block
    pub distance: f32,
}

/// Casts the view ray against every stored block.
#[derive(Debug, Clone, Copy)]
pub struct AimResolver {
    reach: f32,
}

impl Default for AimResolver {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AimResolver {
    /// Creates a resolver that ignores blocks further than `reach`, or none if unbounded.
    pub fn new(reach: Option<f32>) -> Self {
        Self {
            reach: reach.unwrap_or(f32::INFINITY),
        }
    }

    /// The ray from the player's eye along the view direction.
    pub fn view_ray(player: &PlayerState) -> Ray {
        Ray::new(player.position, player.forward())
    }

    /// Returns the nearest block hit by the player's view ray.
    ///
    /// A block that contains the eye is not hit. When two blocks are entered at
    /// exactly the same distance either may be returned.
    pub fn resolve(&self, player: &PlayerState, store: &VoxelStore) -> Option<AimHit> {
        let ray = Self::view_ray(player);
        let mut nearest: Option<AimHit> = None;

        for (position, block) in store.blocks() {
            let aabb = Aabb::unit_block(position.x, position.y, position.z);
            let Some(distance) = geometry::ray_aabb_intersection(&ray, &aabb) else {
                continue;
            };
            if distance > self.reach {
                continue;
            }
            if nearest.map_or(true, |hit| distance < hit.distance) {
                nearest = Some(AimHit {
                    position,
                    block: *block,
                    distance,
                });
            }
        }

        nearest
    }

    /// World-space point where the view ray enters the aimed block.
    pub fn hit_point(player: &PlayerState, hit: &AimHit) -> Point3<f32> {
        Self::view_ray(player).at(hit.distance)
    }
}
