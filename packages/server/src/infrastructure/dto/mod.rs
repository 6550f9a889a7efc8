//! Data Transfer Objects exchanged at the HTTP boundary.

pub mod decode;
pub mod http;

pub use decode::{DecodeError, WireShape, decode};
