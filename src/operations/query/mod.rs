mod bounding_box;
mod is_closed;
mod ray_cast;

pub use bounding_box::{Aabb, BoundingBox};
pub use is_closed::IsClosed;
pub use ray_cast::{RayCast, RayHit};
