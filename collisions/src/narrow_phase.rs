use crate::types::TestMethod;
use common::shapes::{Obb, Shape};
use nalgebra::{Isometry2, Vector2};
use parry2d::query;
use parry2d::shape::Cuboid;

/// Exact overlap test between two oriented boxes.
///
/// `PerPixel` has no pixel data at this level and falls back to the box test;
/// objects carrying masks override [`crate::Collidable::collide`].
pub fn test(method: TestMethod, a: &Obb, b: &Obb) -> bool {
    match method {
        TestMethod::BoundingBox | TestMethod::PerPixel => obb_obb(a, b),
        TestMethod::BoundingSphere => a.bounding_circle().intersects(&b.bounding_circle()),
    }
}

pub fn obb_obb(a: &Obb, b: &Obb) -> bool {
    let aabb_a = a.bounding_box();
    let aabb_b = b.bounding_box();
    if !aabb_a.intersects(&aabb_b) {
        return false;
    }
    if a.rotation == 0.0 && b.rotation == 0.0 {
        return true;
    }

    let cuboid_a = Cuboid::new(Vector2::new(a.half_width, a.half_height));
    let cuboid_b = Cuboid::new(Vector2::new(b.half_width, b.half_height));
    query::intersection_test(&isometry(a), &cuboid_a, &isometry(b), &cuboid_b)
        .unwrap_or(true)
}

fn isometry(obb: &Obb) -> Isometry2<f32> {
    Isometry2::new(Vector2::new(obb.x, obb.y), obb.rotation)
}
