//! Template-driven schema mapping
//!
//! A [`Template`] describes the shape of a destination record. Each entry
//! is resolved against a raw source record (and an optional context record)
//! by [`map_schema`].

pub mod resolver;
mod value;


pub use resolver::*;
pub use value::*;
