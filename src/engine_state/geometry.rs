//! # Geometry
//!
//! Small geometry helpers shared by the player controller and the aim
//! resolver: orientation vectors, rays, axis-aligned boxes and the slab test
//! between them. Everything here is expressed with `cgmath` types; the rest of
//! the engine only sees these functions.

use cgmath::{InnerSpace, Point3, Rad, Vector3};

/// Anything shorter than this is treated as a zero vector.
const EPSILON: f32 = 1e-6;

/// The direction a camera with the given orientation looks at.
///
/// With zero yaw and pitch the camera looks down negative Z. Yaw turns it
/// around the Y axis and pitch tilts it up or down.
pub fn forward_vector(yaw: Rad<f32>, pitch: Rad<f32>) -> Vector3<f32> {
    let (yaw_sin, yaw_cos) = yaw.0.sin_cos();
    let (pitch_sin, pitch_cos) = pitch.0.sin_cos();
    Vector3::new(-yaw_sin * pitch_cos, pitch_sin, -yaw_cos * pitch_cos)
}

/// Rotates `vector` around the Y axis by `yaw`.
pub fn rotate_about_y(vector: Vector3<f32>, yaw: Rad<f32>) -> Vector3<f32> {
    let (yaw_sin, yaw_cos) = yaw.0.sin_cos();
    Vector3::new(
        vector.x * yaw_cos + vector.z * yaw_sin,
        vector.y,
        -vector.x * yaw_sin + vector.z * yaw_cos,
    )
}

/// Normalizes `vector`, or returns `None` if it has no meaningful length.
pub fn try_normalize(vector: Vector3<f32>) -> Option<Vector3<f32>> {
    let magnitude = vector.magnitude();
    if magnitude < EPSILON {
        None
    } else {
        Some(vector / magnitude)
    }
}

/// A half-line starting at `origin`.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Start of the ray
    pub origin: Point3<f32>,
    /// Unit direction
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// The point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Point3<f32>,
    /// Maximum corner
    pub max: Point3<f32>,
}

impl Aabb {
    /// Creates a box from its corners.
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    /// The unit cube occupied by the block at integer position `(x, y, z)`.
    ///
    /// Blocks are centred on their integer coordinates.
    pub fn unit_block(x: i32, y: i32, z: i32) -> Self {
        let center = Point3::new(x as f32, y as f32, z as f32);
        let half = Vector3::new(0.5, 0.5, 0.5);
        Self::new(center - half, center + half)
    }

    /// Whether `point` lies inside the box or on its boundary.
    pub fn contains_point(&self, point: Point3<f32>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

/// Distance along `ray` at which it enters `aabb`, using the slab method.
///
/// Returns `None` when the ray misses the box, when the box lies behind the
/// origin, or when the origin is already inside the box or on its surface
/// (only faces seen from outside count as hits).
pub fn ray_aabb_intersection(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    if aabb.contains_point(ray.origin) {
        return None;
    }

    let origin = [ray.origin.x, ray.origin.y, ray.origin.z];
    let direction = [ray.direction.x, ray.direction.y, ray.direction.z];
    let box_min = [aabb.min.x, aabb.min.y, aabb.min.z];
    let box_max = [aabb.max.x, aabb.max.y, aabb.max.z];

    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        if direction[axis].abs() < EPSILON {
            // Parallel to this slab
            if origin[axis] < box_min[axis] || origin[axis] > box_max[axis] {
                return None;
            }
        } else {
            let t1 = (box_min[axis] - origin[axis]) / direction[axis];
            let t2 = (box_max[axis] - origin[axis]) / direction[axis];

            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));

            if t_min > t_max {
                return None;
            }
        }
    }

    if t_min >= 0.0 {
        Some(t_min)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let forward = forward_vector(Rad(0.0), Rad(0.0));
        assert!(approx(forward.x, 0.0) && approx(forward.y, 0.0) && approx(forward.z, -1.0));
    }

    #[test]
    fn pitch_down_looks_at_the_ground() {
        let forward = forward_vector(Rad(1.3), Rad(-FRAC_PI_2));
        assert!(approx(forward.y, -1.0));
        assert!(approx(forward.magnitude(), 1.0));
    }

    #[test]
    fn yaw_rotation_matches_forward_vector() {
        let yaw = Rad(0.7);
        let rotated = rotate_about_y(Vector3::new(0.0, 0.0, -1.0), yaw);
        let forward = forward_vector(yaw, Rad(0.0));
        assert!(approx(rotated.x, forward.x) && approx(rotated.z, forward.z));
    }

    #[test]
    fn zero_vector_does_not_normalize() {
        assert!(try_normalize(Vector3::new(0.0, 0.0, 0.0)).is_none());
        let unit = try_normalize(Vector3::new(3.0, 0.0, 4.0));
        assert!(unit.map(|v| approx(v.magnitude(), 1.0)).unwrap_or(false));
    }

    #[test]
    fn ray_hits_box_in_front() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        let hit = ray_aabb_intersection(&ray, &Aabb::unit_block(0, 0, 0));
        assert!(hit.map(|t| approx(t, 4.5)).unwrap_or(false));
    }

    #[test]
    fn ray_misses_box_behind_or_beside() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(ray_aabb_intersection(&ray, &Aabb::unit_block(0, 0, 0)).is_none());

        let ray = Ray::new(Point3::new(2.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(ray_aabb_intersection(&ray, &Aabb::unit_block(0, 0, 0)).is_none());
    }

    #[test]
    fn origin_inside_box_is_not_a_hit() {
        let ray = Ray::new(Point3::new(0.1, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let aabb = Aabb::unit_block(0, 0, 0);
        assert!(aabb.contains_point(ray.origin));
        assert!(ray_aabb_intersection(&ray, &aabb).is_none());
    }

    #[test]
    fn origin_on_a_face_is_not_a_hit() {
        let ray = Ray::new(Point3::new(0.0, 0.5, 0.0), Vector3::new(0.0, -1.0, 0.0));
        assert!(ray_aabb_intersection(&ray, &Aabb::unit_block(0, 0, 0)).is_none());
        assert!(ray_aabb_intersection(&ray, &Aabb::unit_block(0, -1, 0))
            .map(|t| approx(t, 1.0))
            .unwrap_or(false));
    }

    #[test]
    fn diagonal_ray_enters_at_expected_point() {
        let ray = Ray::new(Point3::new(-2.0, 2.0, 0.0), Vector3::new(1.0, -1.0, 0.0));
        let t = ray_aabb_intersection(&ray, &Aabb::unit_block(0, 0, 0));
        let entry = t.map(|t| ray.at(t));
        assert!(entry
            .map(|p| approx(p.x, -0.5) && approx(p.y, 0.5))
            .unwrap_or(false));
    }
}
