//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - platform path resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::{TrackerPaths, STORAGE_KEY};
pub use settings::Settings;
