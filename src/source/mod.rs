//! Record suppliers and batch conversion

mod batch;

pub use batch::*;

use crate::error::{MapperError, Result};
use ahash::AHashMap;
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Supplies raw records by numeric id.
///
/// A supplier may hand back an error-shaped record (`{"Error": ...}`)
/// instead of failing; converters pass those through untouched.
pub trait RecordSource {
    fn fetch(&self, id: u32) -> Result<Value>;
}

/// Records held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: AHashMap<u32, Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u32, record: Value) {
        self.records.insert(id, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(u32, Value)> for MemorySource {
    fn from_iter<I: IntoIterator<Item = (u32, Value)>>(iter: I) -> Self {
        MemorySource {
            records: iter.into_iter().collect(),
        }
    }
}

impl RecordSource for MemorySource {
    fn fetch(&self, id: u32) -> Result<Value> {
        self.records
            .get(&id)
            .cloned()
            .ok_or(MapperError::RecordNotFound(id))
    }
}

/// Records saved as `<dir>/<prefix>_<id>.json`
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
    prefix: String,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        JsonDirSource {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn path_for(&self, id: u32) -> PathBuf {
        self.dir.join(format!("{}_{}.json", self.prefix, id))
    }
}

impl RecordSource for JsonDirSource {
    fn fetch(&self, id: u32) -> Result<Value> {
        let path = self.path_for(id);
        debug!("reading record {} from {}", id, path.display());
        let text = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_source() {
        let source: MemorySource = vec![(501, json!({"id": 501}))].into_iter().collect();
        assert_eq!(source.len(), 1);
        assert_eq!(source.fetch(501).unwrap(), json!({"id": 501}));
        assert!(matches!(source.fetch(502), Err(MapperError::RecordNotFound(502))));
    }

    #[test]
    fn test_json_dir_source() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
        let source = JsonDirSource::new(dir.clone(), "mob");
        assert_eq!(source.path_for(1002), dir.join("mob_1002.json"));

        let poring = source.fetch(1002).unwrap();
        assert_eq!(poring["name"], json!("Poring"));
        assert!(matches!(source.fetch(1), Err(MapperError::Io(_))));
    }
}
