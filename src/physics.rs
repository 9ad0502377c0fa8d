//! Simple physics for rectangles: overlap detection, collision response and damping.
//!
//! There's no world or solver object here. Games keep their own bodies
//! and call these functions on the pairs they care about once per tick.

pub mod aabb;
pub use aabb::Aabb;

pub mod body;
pub use body::Body;

pub mod collision;
pub use collision::{
    overlap_data, resolve, solve_rect_overlap, ContactParams, Overlap, Resolution,
};

pub mod damping;
pub use damping::{damping, DEFAULT_DAMPING};
