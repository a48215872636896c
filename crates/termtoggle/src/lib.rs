//! # termtoggle
//!
//! Numbered, toggleable terminal sessions for an embedding host.
//!
//! This crate provides:
//! - The session registry: the authoritative number-to-session mapping
//! - The toggle controller and its smart open/close heuristic
//! - Session lifecycle management (open, close, exec, delete)
//! - Window placement policy for new terminal splits
//! - Reconciliation, rebuilding registry state from live windows
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends on termtoggle-core and
//! drives the host exclusively through the [`WindowManager`] capability
//! trait. The host delivers its side of the conversation as typed
//! [`HostEvent`] values into [`TerminalManager::handle_event`].
//!
//! All state lives in a [`TerminalManager`] owned by the embedding
//! application; operations run synchronously inside host callbacks, so the
//! core needs no locking.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod host;
pub mod locator;
pub mod manager;
pub mod placement;
pub mod reconcile;
pub mod registry;
pub mod testing;
pub mod toggle;

// Re-export commonly used types
pub use host::{HostEvent, SpawnedTerminal, SplitDirection, WindowManager};
pub use manager::{SessionSnapshot, TerminalManager};
pub use registry::{Session, SessionRegistry};
pub use termtoggle_core::{
    BufferId, Error, ProcessId, Result, TerminalConfig, WindowId, DEFAULT_WINDOW_SIZE,
};
