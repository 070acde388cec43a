pub mod error;

pub use error::{ObjTriError, Result};
