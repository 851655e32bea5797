//! Storage layer for the expense tracker
//!
//! Provides string-keyed durable slots with atomic file writes and
//! automatic directory creation.

pub mod file_io;
pub mod slots;

pub use file_io::{read_bytes_if_exists, write_text_atomic};
pub use slots::{FileSlots, MemorySlots, SlotStorage};
