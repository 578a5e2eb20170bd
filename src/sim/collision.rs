//! Collision detection between centered axis-aligned boxes
//!
//! Boxes are separated only when one lies strictly above, below, left of, or
//! right of the other. Exact edge contact counts as a collision.

use super::entity::Aabb;

/// Check whether two boxes overlap (touching edges count as overlap)
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());

    let separated = a_max.y < b_min.y
        || a_min.y > b_max.y
        || a_max.x < b_min.x
        || a_min.x > b_max.x;

    !separated
}
