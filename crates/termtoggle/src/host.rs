//! Host capability interface.
//!
//! The core never calls host primitives directly: window splitting, focus,
//! buffer plumbing and process spawning all go through the [`WindowManager`]
//! trait, injected into the [`TerminalManager`](crate::TerminalManager) by
//! the embedding application. Events flow the other way as typed
//! [`HostEvent`] values.

use std::path::{Path, PathBuf};

use termtoggle_core::{BufferId, ProcessId, Result, WindowId};

/// Direction of a window split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDirection {
    /// Side-by-side split next to the focused window
    Vertical,
    /// Stacked split of a given height
    Horizontal,
}

/// Handles returned by the host for a freshly spawned terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedTerminal {
    /// Window the terminal was bound into
    pub window: WindowId,
    /// Fresh buffer holding the terminal content
    pub buffer: BufferId,
    /// The spawned shell process
    pub process: ProcessId,
}

/// Typed events delivered by the host.
///
/// The embedder subscribes to its host's notifications once at
/// initialization and forwards them here; payloads are handles, never
/// free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Focus entered a window
    WindowEntered {
        /// The window that gained focus
        window: WindowId,
    },
    /// A shell process started inside a buffer
    ProcessStarted {
        /// Buffer the process is attached to
        buffer: BufferId,
        /// The new process
        process: ProcessId,
    },
    /// A shell process exited
    ProcessExited {
        /// Buffer the process was attached to
        buffer: BufferId,
    },
    /// The given window is the last one left in the layout
    LastWindowRemaining {
        /// The sole remaining window
        window: WindowId,
    },
}

/// Abstract window-management capabilities required from the host.
///
/// Implementations are expected to be cheap, synchronous wrappers over host
/// primitives. `create_split` and `spawn_terminal` leave the new window
/// focused; `send_input` is fire-and-forget and must never block on process
/// output.
pub trait WindowManager {
    /// Create a new split next to the focused window and focus it.
    ///
    /// `size` is the height in rows for horizontal splits and the width
    /// hint for vertical ones.
    fn create_split(&mut self, direction: SplitDirection, size: u16) -> Result<WindowId>;

    /// Move focus to the given window.
    fn focus_window(&mut self, window: WindowId) -> Result<()>;

    /// Resize a window to the given height.
    fn resize_window(&mut self, window: WindowId, size: u16) -> Result<()>;

    /// Relocate a window to the bottom edge of the layout.
    fn pin_to_bottom(&mut self, window: WindowId) -> Result<()>;

    /// Mark a window fixed-height so later layout changes do not resize it.
    fn fix_height(&mut self, window: WindowId) -> Result<()>;

    /// Hide a window without touching its buffer or process.
    fn hide_window(&mut self, window: WindowId) -> Result<()>;

    /// All currently visible windows, in host enumeration order.
    ///
    /// The order is stable within a single call; later windows were opened
    /// more recently.
    fn list_windows(&self) -> Vec<WindowId>;

    /// Whether the host can still resolve this handle to a live window.
    ///
    /// This is the only trustworthy liveness check; callers must not cache
    /// the result.
    fn window_exists(&self, window: WindowId) -> bool;

    /// The currently focused window, if any.
    fn focused_window(&self) -> Option<WindowId>;

    /// The buffer displayed in a window.
    fn window_buffer(&self, window: WindowId) -> Result<BufferId>;

    /// The declared content-type of a buffer.
    fn buffer_content_type(&self, buffer: BufferId) -> Result<String>;

    /// The displayed name of a buffer.
    fn buffer_name(&self, buffer: BufferId) -> Result<String>;

    /// The process the host associates with a buffer, if any.
    fn buffer_process(&self, buffer: BufferId) -> Option<ProcessId>;

    /// Display an existing buffer in a window.
    fn set_window_buffer(&mut self, window: WindowId, buffer: BufferId) -> Result<()>;

    /// Create an empty, non-terminal buffer.
    fn scratch_buffer(&mut self) -> Result<BufferId>;

    /// Spawn a shell process under the given identity, bound to a fresh
    /// buffer in the focused window, with the buffer's working directory
    /// set to `cwd`.
    fn spawn_terminal(&mut self, command: &str, cwd: &Path) -> Result<SpawnedTerminal>;

    /// Write bytes to a process's input stream. Fire-and-forget.
    fn send_input(&mut self, process: ProcessId, bytes: &[u8]) -> Result<()>;

    /// Move a window's view cursor to the end of its content.
    fn scroll_to_end(&mut self, window: WindowId) -> Result<()>;

    /// Install buffer-local key bindings that re-invoke toggle.
    fn apply_terminal_keymaps(&mut self, buffer: BufferId, mapping: &str) -> Result<()>;

    /// The host's current working directory.
    fn current_dir(&self) -> PathBuf;
}
