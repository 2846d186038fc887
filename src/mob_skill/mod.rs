//! Monster skill conversion
//!
//! Turns the skill list of a source monster record into rows of the
//! emulator's monster skill database.

mod mapper;
pub mod rules;
pub mod tables;


pub use mapper::*;
