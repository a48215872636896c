//! Session registry: the authoritative number-to-session mapping.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use termtoggle_core::{BufferId, ProcessId, WindowId};

/// A logical, numbered terminal session tracked across hide/show cycles.
///
/// Handles are `None` when unbound. A bound window handle is a claim, not a
/// fact: liveness must be re-verified through the window locator before
/// acting on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    number: u32,
    window: Option<WindowId>,
    buffer: Option<BufferId>,
    process: Option<ProcessId>,
    working_directory: PathBuf,
}

impl Session {
    fn new(number: u32, working_directory: PathBuf) -> Self {
        Self {
            number,
            window: None,
            buffer: None,
            process: None,
            working_directory,
        }
    }

    /// The session number, unique in the registry.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Window currently claimed to display this session.
    pub fn window(&self) -> Option<WindowId> {
        self.window
    }

    /// Buffer holding the session content, surviving hide/show cycles.
    pub fn buffer(&self) -> Option<BufferId> {
        self.buffer
    }

    /// The spawned shell process.
    pub fn process(&self) -> Option<ProcessId> {
        self.process
    }

    /// Directory captured when the session was created. Immutable.
    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// Bind all handles after a spawn or a reconciliation recovery.
    pub(crate) fn bind(
        &mut self,
        window: WindowId,
        buffer: BufferId,
        process: Option<ProcessId>,
    ) {
        self.window = Some(window);
        self.buffer = Some(buffer);
        self.process = process;
    }

    /// Re-bind the window handle after a visibility restore.
    pub(crate) fn set_window(&mut self, window: WindowId) {
        self.window = Some(window);
    }

    pub(crate) fn set_process(&mut self, process: ProcessId) {
        self.process = Some(process);
    }

    /// Unbind the window handle only; buffer and process stay bound.
    pub(crate) fn clear_window(&mut self) {
        self.window = None;
    }
}

/// Sparse mapping from session number to [`Session`].
///
/// Keys are unique by construction; gaps are permitted (sessions 1 and 3
/// may exist with no session 2).
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: BTreeMap<u32, Session>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the session for `number`, inserting a fresh one with all
    /// handles unbound and `working_directory` set to `cwd` if absent.
    pub fn get_or_create(&mut self, number: u32, cwd: PathBuf) -> &mut Session {
        self.sessions.entry(number).or_insert_with(|| {
            debug!("Registering terminal session {}", number);
            Session::new(number, cwd)
        })
    }

    /// Look up a session.
    pub fn get(&self, number: u32) -> Option<&Session> {
        self.sessions.get(&number)
    }

    /// Look up a session mutably.
    pub fn get_mut(&mut self, number: u32) -> Option<&mut Session> {
        self.sessions.get_mut(&number)
    }

    /// Remove the entry for `number` if present; no-op otherwise.
    pub fn delete(&mut self, number: u32) {
        if self.sessions.remove(&number).is_some() {
            debug!("Deleted terminal session {}", number);
        }
    }

    /// All sessions in ascending number order; reversible for the
    /// descending scans the toggle heuristic does.
    pub fn all(&self) -> impl DoubleEndedIterator<Item = &Session> {
        self.sessions.values()
    }

    /// The session whose buffer handle matches, if any.
    pub fn find_by_buffer(&mut self, buffer: BufferId) -> Option<&mut Session> {
        self.sessions.values_mut().find(|s| s.buffer == Some(buffer))
    }

    /// All bound window handles across the registry.
    pub fn windows(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.sessions.values().filter_map(|s| s.window)
    }

    /// Number of registered sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop every session.
    pub fn clear(&mut self) {
        self.sessions.clear();
    }
}
