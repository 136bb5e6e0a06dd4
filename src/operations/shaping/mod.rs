mod extrude;

pub use extrude::{extrude_flat, Extrude};
