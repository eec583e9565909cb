//! CPU ray picking against the gallery scene.
//!
//! Casts a ray from the camera through the pointer and finds the nearest
//! clickable object, or failing that, the point on the floor.

mod hit;
mod ray;

pub use hit::{intersect_object, test_floor, test_panels, Hit};
pub use ray::Ray;
