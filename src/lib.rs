pub mod error;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod scene;
pub mod shapes;
pub mod viewer;

pub use error::{Result, ShapesceneError};
