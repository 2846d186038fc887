//! rAthena Schema Core - game-database record to rAthena entry mapping
//!
//! This crate maps loosely typed monster, item and skill records from an
//! external game database onto the entry layouts of the rAthena emulator.
//! The engine is template driven: a [`template::Template`] describes the
//! destination record and [`template::map_schema`] resolves it against a
//! source record. Python bindings are available with the `python` feature.

pub mod config;
pub mod error;
pub mod item;
pub mod mob;
pub mod mob_skill;
pub mod record;
pub mod skill;
pub mod source;
pub mod template;

#[cfg(feature = "python")]
mod python;

pub use config::{ConvertOptions, Schema};
pub use error::{MapperError, Result};
pub use item::map_item;
pub use mob::map_mob;
pub use mob_skill::map_mob_skill;
pub use record::RawRecord;
pub use source::{convert_batch, convert_schema_batch, parse_ids, parse_record_id, RecordSource};
pub use template::{map_schema, Template, TemplateValue};
