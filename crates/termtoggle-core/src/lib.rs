//! # termtoggle-core
//!
//! Core types for termtoggle.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other termtoggle crates. It provides:
//!
//! - Opaque host handle types (WindowId, BufferId, ProcessId)
//! - The buffer naming wire format for session identity
//! - Configuration types
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - all other crates depend on this one,
//! but this crate has no dependencies on other termtoggle crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export all modules
pub mod config;
pub mod error;
pub mod handle;
pub mod name;

// Re-export commonly used types
pub use config::{KeymapSettings, ShadingSettings, TerminalConfig, TerminalSettings};
pub use error::{Error, Result};
pub use handle::{BufferId, ProcessId, WindowId};
pub use name::{
    is_session_buffer_name, parse_session_number, session_buffer_name, TERMINAL_BUFFER_TYPE,
};

/// Default height, in rows, for a newly created terminal window.
pub const DEFAULT_WINDOW_SIZE: u16 = 12;
