pub mod intersect;
pub mod transform;
