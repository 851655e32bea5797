//! Expense Tracker - terminal income and expense tracking
//!
//! This library provides the core of a small personal budgeting tool: one
//! income figure, a list of expenses that are either personal (paid in full)
//! or shared (paid half), and the derived totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, ids, expenses, budget)
//! - `storage`: Durable key-value slots
//! - `services`: Budget store and totals
//! - `commands`: User actions and their dispatch
//! - `display`: Presentation shared by the CLI and the TUI
//! - `cli`: Command-line handlers
//! - `tui`: Interactive terminal interface
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use tracker::services::BudgetStore;
//! use tracker::storage::MemorySlots;
//!
//! let mut store = BudgetStore::new(MemorySlots::new());
//! store.set_income("2000".parse()?)?;
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
