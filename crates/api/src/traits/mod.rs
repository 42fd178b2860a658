//! Traits implemented by the public types of the library

pub mod serialize;

pub use serialize::{Serialize, SerializeSecret};
