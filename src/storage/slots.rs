//! String-keyed durable slots
//!
//! A slot holds one serialized value under a fixed key. Reads hand back raw
//! bytes; callers decide what to do with data that isn't valid text. The file backend
//! maps each key to `<data_dir>/<key>.json`; the memory backend keeps values
//! in a map and is used by tests and embedders that don't want a disk.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;

use super::file_io::{read_bytes_if_exists, write_text_atomic};

/// Key-value storage for serialized snapshots
pub trait SlotStorage {
    /// Read the raw value stored under `key`, if any
    fn read(&self, key: &str) -> TrackerResult<Option<Vec<u8>>>;

    /// Replace the value stored under `key`
    fn write(&self, key: &str, value: &str) -> TrackerResult<()>;
}

/// Slots backed by JSON files in the data directory
#[derive(Debug, Clone)]
pub struct FileSlots {
    paths: TrackerPaths,
}

impl FileSlots {
    pub fn new(paths: TrackerPaths) -> Self {
        Self { paths }
    }

    /// File that backs `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.paths.slot_file(key)
    }
}

impl SlotStorage for FileSlots {
    fn read(&self, key: &str) -> TrackerResult<Option<Vec<u8>>> {
        read_bytes_if_exists(self.path_for(key))
    }

    fn write(&self, key: &str, value: &str) -> TrackerResult<()> {
        write_text_atomic(self.path_for(key), value)
    }
}

/// In-memory slots
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// a store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    values: Rc<RefCell<HashMap<String, Vec<u8>>>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot
    pub fn with_value(key: &str, value: impl Into<Vec<u8>>) -> Self {
        let slots = Self::new();
        slots.values.borrow_mut().insert(key.to_string(), value.into());
        slots
    }

    /// Current value of a slot as text
    pub fn get(&self, key: &str) -> Option<String> {
        self.get_bytes(key)
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    /// Current raw value of a slot
    pub fn get_bytes(&self, key: &str) -> Option<Vec<u8>> {
        self.values.borrow().get(key).cloned()
    }
}

impl SlotStorage for MemorySlots {
    fn read(&self, key: &str) -> TrackerResult<Option<Vec<u8>>> {
        Ok(self.get_bytes(key))
    }

    fn write(&self, key: &str, value: &str) -> TrackerResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.as_bytes().to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_slots_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let slots = FileSlots::new(TrackerPaths::with_base_dir(temp_dir.path().to_path_buf()));

        assert_eq!(slots.read("budget").unwrap(), None);

        slots.write("budget", "{}").unwrap();
        assert_eq!(slots.read("budget").unwrap(), Some(b"{}".to_vec()));
        assert_eq!(
            slots.path_for("budget"),
            temp_dir.path().join("data").join("budget.json")
        );
    }

    #[test]
    fn test_memory_slots_share_state() {
        let slots = MemorySlots::new();
        let handle = slots.clone();

        slots.write("key", "value").unwrap();
        assert_eq!(handle.get("key").as_deref(), Some("value"));
        assert_eq!(MemorySlots::with_value("a", "b").read("a").unwrap(), Some(b"b".to_vec()));

        let binary = MemorySlots::with_value("bin", vec![0xffu8, 0xfe]);
        assert_eq!(binary.get("bin"), None);
        assert_eq!(binary.get_bytes("bin"), Some(vec![0xff, 0xfe]));
    }
}
