//! Terminal lifecycle management.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use termtoggle_core::{name, BufferId, Error, ProcessId, Result, TerminalConfig, WindowId};

use crate::host::{HostEvent, WindowManager};
use crate::locator;
use crate::placement;
use crate::registry::{Session, SessionRegistry};

/// Serializable view of a session for diagnostics surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Session number
    pub number: u32,
    /// Window handle, if bound
    pub window: Option<WindowId>,
    /// Buffer handle, if bound
    pub buffer: Option<BufferId>,
    /// Process handle, if bound
    pub process: Option<ProcessId>,
    /// Directory captured at session creation
    pub working_directory: PathBuf,
}

/// Owner of the session registry and the toggle/open/close state machine.
///
/// The embedding application constructs one of these around its host's
/// [`WindowManager`] implementation and passes every user command and host
/// event through it. All operations are synchronous; see the crate docs for
/// the concurrency model.
pub struct TerminalManager {
    pub(crate) wm: Box<dyn WindowManager>,
    pub(crate) registry: SessionRegistry,
    pub(crate) config: TerminalConfig,
}

impl TerminalManager {
    /// Create a manager with default configuration.
    pub fn new(wm: Box<dyn WindowManager>) -> Self {
        Self::with_config(wm, TerminalConfig::default())
    }

    /// Create a manager with custom configuration.
    pub fn with_config(wm: Box<dyn WindowManager>, config: TerminalConfig) -> Self {
        Self {
            wm,
            registry: SessionRegistry::new(),
            config,
        }
    }

    /// Reset to a clean state with no registered sessions.
    pub fn init(&mut self) {
        info!("Initializing terminal manager");
        self.registry.clear();
    }

    /// Hide every live session window and drop all registry entries.
    pub fn teardown(&mut self) {
        info!("Tearing down {} terminal session(s)", self.registry.len());
        let windows: Vec<WindowId> = self.registry.windows().collect();
        for window in windows {
            if self.wm.window_exists(window) {
                if let Err(err) = self.wm.hide_window(window) {
                    warn!("Failed to hide window {} during teardown: {}", window, err);
                }
            }
        }
        self.registry.clear();
    }

    /// The active configuration.
    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// Number of registered sessions.
    pub fn session_count(&self) -> usize {
        self.registry.len()
    }

    /// Snapshots of all registered sessions, in ascending number order.
    pub fn sessions(&self) -> Vec<SessionSnapshot> {
        self.registry
            .all()
            .map(|session| SessionSnapshot {
                number: session.number(),
                window: session.window(),
                buffer: session.buffer(),
                process: session.process(),
                working_directory: session.working_directory().to_path_buf(),
            })
            .collect()
    }

    /// Show the numbered session, creating it if needed.
    ///
    /// A session with no bound buffer gets a fresh shell spawned under the
    /// session naming convention; a session whose buffer survived a `close`
    /// is re-shown by rebinding that buffer into a newly placed window, with
    /// no new process or buffer.
    pub fn open(&mut self, number: u32, size: Option<u16>) -> Result<()> {
        if number == 0 {
            return Err(Error::InvalidSessionNumber(number));
        }
        let size = self.effective_size(size);
        let cwd = self.wm.current_dir();

        // Register before any host call: a failed spawn then leaves an
        // unbound session that a later open retries cleanly.
        self.registry.get_or_create(number, cwd.clone());
        let buffer = self.registry.get(number).and_then(Session::buffer);

        match buffer {
            None => {
                info!("Opening terminal session {} with a new shell", number);
                placement::place(self.wm.as_mut(), size)?;
                let command = name::session_buffer_name(&self.config.terminal.shell, number);
                let spawned = self.wm.spawn_terminal(&command, &cwd)?;
                self.wm
                    .apply_terminal_keymaps(spawned.buffer, &self.config.keymap.toggle)?;
                if let Some(session) = self.registry.get_mut(number) {
                    session.bind(spawned.window, spawned.buffer, Some(spawned.process));
                }
            }
            Some(buffer) => {
                info!("Re-showing terminal session {}", number);
                let window = placement::place(self.wm.as_mut(), size)?;
                self.wm.resize_window(window, size)?;
                self.wm.set_window_buffer(window, buffer)?;
                self.wm.fix_height(window)?;
                if let Some(session) = self.registry.get_mut(number) {
                    session.set_window(window);
                }
            }
        }
        Ok(())
    }

    /// Run a command in the numbered session, opening it first if its
    /// window is not currently alive.
    ///
    /// The process input receives `"clear\n" + cmd + "\n"` exactly once;
    /// the view scrolls to the end and focus returns to the window that was
    /// focused before the call.
    pub fn exec(&mut self, cmd: &str, number: u32, size: Option<u16>) -> Result<()> {
        if cmd.trim().is_empty() {
            return Err(Error::EmptyCommand);
        }
        let number = number.max(1);
        let previous = self.wm.focused_window();

        if !self.window_is_alive(number) {
            self.open(number, size)?;
        }

        // Re-resolve: open may have just (re)bound the handles.
        let (window, process) = match self.registry.get(number) {
            Some(session) => (session.window(), session.process()),
            None => (None, None),
        };
        let process = process
            .ok_or_else(|| Error::Spawn(format!("no process for terminal session {number}")))?;

        debug!("Executing command in terminal session {}: {:?}", number, cmd);
        let input = format!("clear\n{cmd}\n");
        self.wm.send_input(process, input.as_bytes())?;

        if let Some(window) = window {
            if self.wm.window_exists(window) {
                self.wm.scroll_to_end(window)?;
            }
        }
        if let Some(previous) = previous {
            if self.wm.window_exists(previous) {
                self.wm.focus_window(previous)?;
            }
        }
        Ok(())
    }

    /// Hide the numbered session's window, leaving buffer and process
    /// untouched.
    ///
    /// A session with no live window yields a recoverable
    /// [`Error::WindowNotOpen`] and no state mutation.
    pub fn close(&mut self, number: u32) -> Result<()> {
        if number == 0 {
            return Err(Error::InvalidSessionNumber(number));
        }
        let window = self.registry.get(number).and_then(Session::window);
        match window {
            Some(window) if locator::is_window_alive(self.wm.as_ref(), window) => {
                info!("Hiding terminal session {}", number);
                self.wm.hide_window(window)?;
                if let Some(session) = self.registry.get_mut(number) {
                    session.clear_window();
                }
                Ok(())
            }
            _ => {
                warn!("No open window for terminal session {}", number);
                Err(Error::WindowNotOpen(number))
            }
        }
    }

    /// Remove the registry entry for `number` unconditionally.
    ///
    /// Driven by [`HostEvent::ProcessExited`]; also callable directly for
    /// cleanup.
    pub fn delete(&mut self, number: u32) {
        self.registry.delete(number);
    }

    /// Feed a typed host event into the state machine.
    ///
    /// Events are best-effort: a payload that no longer resolves is
    /// ignored, never an error.
    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::WindowEntered { window } => {
                // Idempotent re-binding: the host may have moved a tracked
                // buffer into a window we have not seen.
                if let Ok(buffer) = self.wm.window_buffer(window) {
                    if let Some(session) = self.registry.find_by_buffer(buffer) {
                        session.set_window(window);
                    }
                }
            }
            HostEvent::ProcessStarted { buffer, process } => {
                if let Some(session) = self.registry.find_by_buffer(buffer) {
                    debug!(
                        "Process {} started for terminal session {}",
                        process,
                        session.number()
                    );
                    session.set_process(process);
                }
            }
            HostEvent::ProcessExited { buffer } => {
                let number = self.registry.find_by_buffer(buffer).map(|s| s.number());
                if let Some(number) = number {
                    info!("Shell exited, deleting terminal session {}", number);
                    self.registry.delete(number);
                }
            }
            HostEvent::LastWindowRemaining { window } => {
                if !locator::is_terminal_window(self.wm.as_ref(), window) {
                    return;
                }
                let buffer = match self.wm.window_buffer(window) {
                    Ok(buffer) => buffer,
                    Err(_) => return,
                };
                if let Some(session) = self.registry.find_by_buffer(buffer) {
                    debug!(
                        "Last remaining window shows terminal session {}; vacating",
                        session.number()
                    );
                    session.clear_window();
                }
                // Switch the sole window off the terminal buffer so no
                // dangling terminal-only layout remains.
                if let Ok(scratch) = self.wm.scratch_buffer() {
                    let _ = self.wm.set_window_buffer(window, scratch);
                }
            }
        }
    }

    pub(crate) fn window_is_alive(&self, number: u32) -> bool {
        self.registry
            .get(number)
            .and_then(Session::window)
            .map(|window| locator::is_window_alive(self.wm.as_ref(), window))
            .unwrap_or(false)
    }

    pub(crate) fn effective_size(&self, size: Option<u16>) -> u16 {
        match size {
            Some(size) if size > 0 => size,
            _ => self.config.terminal.default_size,
        }
    }
}
