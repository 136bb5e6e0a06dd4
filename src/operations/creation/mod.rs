mod make_box;
mod make_cone;
mod make_sphere;
mod triangulate_outline;

pub use make_box::MakeBox;
pub use make_cone::MakeCone;
pub use make_sphere::MakeSphere;
pub use triangulate_outline::TriangulateOutline;
