pub mod aabb;
pub mod camera;
pub mod point;
pub mod svg;
pub mod tree;

pub use crate::aabb::Aabb;
pub use crate::point::Coord;
pub use crate::point::Point;
pub use crate::tree::Direction;
pub use crate::tree::LocationVisitor;
pub use crate::tree::SpaceFillingTree;
pub use crate::tree::TreeError;
