pub mod deep;
pub mod error;
pub mod json;
pub mod merge;
pub mod path;
pub mod sort;
pub mod strings;
pub mod value;

pub use deep::{deep_copy, deep_equal, deep_equal_all};
pub use error::{Error, Result};
pub use value::{Opaque, OpaqueKind, Value};
