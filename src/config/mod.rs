//! Configuration for suncoast sessions
//!
//! Values come from command-line flags or their `SUNCOAST_*` environment
//! variables and resolve into [`Settings`].

pub mod settings;

pub use settings::{ClockMode, DEFAULT_DATA_FILE, Settings};
