//! Custom formatting patterns.

pub(crate) mod custom;

pub use self::custom::{DateFormat, FormatError};
