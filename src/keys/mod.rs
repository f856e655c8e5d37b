//! Key names and their platform identifiers

pub mod resolver;
pub mod table;

pub use crate::backend::KeyId;
pub use resolver::KeyResolver;
