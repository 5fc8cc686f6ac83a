pub mod polygon;
pub mod rect;
pub mod vertex;
