pub mod convert;
pub mod face;
pub mod triangulate;

pub use convert::convert;
pub use face::{classify, ObjLine, Quad, Triangle, FACE_MARKER};
pub use triangulate::{triangulate_str, ConversionStats};
