mod object_transform;

pub use object_transform::{Axis, ObjectTransform};
