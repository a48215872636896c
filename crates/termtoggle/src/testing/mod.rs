//! Test support: a scripted in-memory window manager.
//!
//! [`MockWindowManager`] models just enough of a host - visible windows in
//! creation order, buffers with names and content-types, spawned processes
//! and their input streams - to drive the session layer end to end. State
//! is behind an `Arc<Mutex<_>>` so tests can keep a clone for inspection
//! while the manager owns another.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use termtoggle_core::{BufferId, Error, ProcessId, Result, WindowId, TERMINAL_BUFFER_TYPE};

use crate::host::{SpawnedTerminal, SplitDirection, WindowManager};

#[derive(Debug, Clone)]
struct MockBuffer {
    name: String,
    content_type: String,
    process: Option<ProcessId>,
}

#[derive(Debug, Default)]
struct MockState {
    next_raw: u64,
    /// Visible windows with their buffers, in creation order.
    windows: Vec<(WindowId, BufferId)>,
    buffers: HashMap<BufferId, MockBuffer>,
    processes: HashSet<ProcessId>,
    focused: Option<WindowId>,
    heights: HashMap<WindowId, u16>,
    fixed_height: HashSet<WindowId>,
    bottom_pinned: HashSet<WindowId>,
    splits: Vec<(SplitDirection, u16)>,
    focus_history: Vec<WindowId>,
    sent_input: Vec<(ProcessId, Vec<u8>)>,
    keymaps: Vec<(BufferId, String)>,
    scrolled: Vec<WindowId>,
    spawn_count: usize,
    fail_spawn: bool,
    cwd: PathBuf,
}

impl MockState {
    fn next_raw(&mut self) -> u64 {
        self.next_raw += 1;
        self.next_raw
    }

    fn window_entry(&self, window: WindowId) -> Option<&(WindowId, BufferId)> {
        self.windows.iter().find(|(w, _)| *w == window)
    }
}

/// A scripted window manager for tests. Cloning shares the same state.
#[derive(Debug, Clone)]
pub struct MockWindowManager {
    state: Arc<Mutex<MockState>>,
}

impl Default for MockWindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWindowManager {
    /// Create an empty mock host with a fixed working directory.
    pub fn new() -> Self {
        let state = MockState {
            cwd: PathBuf::from("/mock/cwd"),
            ..MockState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Open a visible window showing a buffer with the given name and
    /// content-type, focusing it. Terminal-typed buffers get a host
    /// process attached, as a real host would.
    pub fn add_window_with_buffer(&mut self, name: &str, content_type: &str) -> WindowId {
        let mut state = self.state.lock().unwrap();
        let buffer = BufferId::new(state.next_raw());
        let process = if content_type == TERMINAL_BUFFER_TYPE {
            let process = ProcessId::new(state.next_raw());
            state.processes.insert(process);
            Some(process)
        } else {
            None
        };
        state.buffers.insert(
            buffer,
            MockBuffer {
                name: name.to_string(),
                content_type: content_type.to_string(),
                process,
            },
        );
        let window = WindowId::new(state.next_raw());
        state.windows.push((window, buffer));
        state.focused = Some(window);
        window
    }

    /// Make future `spawn_terminal` calls fail.
    pub fn set_fail_spawn(&mut self, fail: bool) {
        self.state.lock().unwrap().fail_spawn = fail;
    }

    /// Change the host working directory reported to the core.
    pub fn set_cwd<P: AsRef<Path>>(&mut self, cwd: P) {
        self.state.lock().unwrap().cwd = cwd.as_ref().to_path_buf();
    }

    /// Splits created so far, in order.
    pub fn splits(&self) -> Vec<(SplitDirection, u16)> {
        self.state.lock().unwrap().splits.clone()
    }

    /// Windows explicitly focused via `focus_window`, in order.
    pub fn focus_history(&self) -> Vec<WindowId> {
        self.state.lock().unwrap().focus_history.clone()
    }

    /// Everything written to process input streams, in order.
    pub fn sent_input(&self) -> Vec<(ProcessId, Vec<u8>)> {
        self.state.lock().unwrap().sent_input.clone()
    }

    /// Buffer-local keymap applications, in order.
    pub fn keymaps(&self) -> Vec<(BufferId, String)> {
        self.state.lock().unwrap().keymaps.clone()
    }

    /// Number of successful spawns.
    pub fn spawn_count(&self) -> usize {
        self.state.lock().unwrap().spawn_count
    }

    /// Number of currently visible windows.
    pub fn window_count(&self) -> usize {
        self.state.lock().unwrap().windows.len()
    }

    /// Whether the window was relocated to the bottom edge.
    pub fn is_pinned_to_bottom(&self, window: WindowId) -> bool {
        self.state.lock().unwrap().bottom_pinned.contains(&window)
    }

    /// Whether the window was marked fixed-height.
    pub fn is_fixed_height(&self, window: WindowId) -> bool {
        self.state.lock().unwrap().fixed_height.contains(&window)
    }

    /// Last height a window was given.
    pub fn height_of(&self, window: WindowId) -> Option<u16> {
        self.state.lock().unwrap().heights.get(&window).copied()
    }

    /// The visible window currently showing a buffer, if any.
    pub fn window_showing(&self, buffer: BufferId) -> Option<WindowId> {
        self.state
            .lock()
            .unwrap()
            .windows
            .iter()
            .find(|(_, b)| *b == buffer)
            .map(|(w, _)| *w)
    }

    /// Windows whose view was scrolled to the end, in order.
    pub fn scrolled_windows(&self) -> Vec<WindowId> {
        self.state.lock().unwrap().scrolled.clone()
    }
}

impl WindowManager for MockWindowManager {
    fn create_split(&mut self, direction: SplitDirection, size: u16) -> Result<WindowId> {
        let mut state = self.state.lock().unwrap();
        let buffer = BufferId::new(state.next_raw());
        state.buffers.insert(
            buffer,
            MockBuffer {
                name: String::new(),
                content_type: String::new(),
                process: None,
            },
        );
        let window = WindowId::new(state.next_raw());
        state.windows.push((window, buffer));
        state.heights.insert(window, size);
        state.splits.push((direction, size));
        state.focused = Some(window);
        Ok(window)
    }

    fn focus_window(&mut self, window: WindowId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.window_entry(window).is_none() {
            return Err(Error::WindowManager(format!("no such window: {window}")));
        }
        state.focused = Some(window);
        state.focus_history.push(window);
        Ok(())
    }

    fn resize_window(&mut self, window: WindowId, size: u16) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.window_entry(window).is_none() {
            return Err(Error::WindowManager(format!("no such window: {window}")));
        }
        state.heights.insert(window, size);
        Ok(())
    }

    fn pin_to_bottom(&mut self, window: WindowId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.window_entry(window).is_none() {
            return Err(Error::WindowManager(format!("no such window: {window}")));
        }
        state.bottom_pinned.insert(window);
        Ok(())
    }

    fn fix_height(&mut self, window: WindowId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.window_entry(window).is_none() {
            return Err(Error::WindowManager(format!("no such window: {window}")));
        }
        state.fixed_height.insert(window);
        Ok(())
    }

    fn hide_window(&mut self, window: WindowId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.window_entry(window).is_none() {
            return Err(Error::WindowManager(format!("no such window: {window}")));
        }
        state.windows.retain(|(w, _)| *w != window);
        if state.focused == Some(window) {
            state.focused = state.windows.last().map(|(w, _)| *w);
        }
        Ok(())
    }

    fn list_windows(&self) -> Vec<WindowId> {
        self.state
            .lock()
            .unwrap()
            .windows
            .iter()
            .map(|(w, _)| *w)
            .collect()
    }

    fn window_exists(&self, window: WindowId) -> bool {
        self.state.lock().unwrap().window_entry(window).is_some()
    }

    fn focused_window(&self) -> Option<WindowId> {
        self.state.lock().unwrap().focused
    }

    fn window_buffer(&self, window: WindowId) -> Result<BufferId> {
        self.state
            .lock()
            .unwrap()
            .window_entry(window)
            .map(|(_, b)| *b)
            .ok_or_else(|| Error::WindowManager(format!("no such window: {window}")))
    }

    fn buffer_content_type(&self, buffer: BufferId) -> Result<String> {
        self.state
            .lock()
            .unwrap()
            .buffers
            .get(&buffer)
            .map(|b| b.content_type.clone())
            .ok_or_else(|| Error::WindowManager(format!("no such buffer: {buffer}")))
    }

    fn buffer_name(&self, buffer: BufferId) -> Result<String> {
        self.state
            .lock()
            .unwrap()
            .buffers
            .get(&buffer)
            .map(|b| b.name.clone())
            .ok_or_else(|| Error::WindowManager(format!("no such buffer: {buffer}")))
    }

    fn buffer_process(&self, buffer: BufferId) -> Option<ProcessId> {
        self.state
            .lock()
            .unwrap()
            .buffers
            .get(&buffer)
            .and_then(|b| b.process)
    }

    fn set_window_buffer(&mut self, window: WindowId, buffer: BufferId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if !state.buffers.contains_key(&buffer) {
            return Err(Error::WindowManager(format!("no such buffer: {buffer}")));
        }
        match state.windows.iter_mut().find(|(w, _)| *w == window) {
            Some(entry) => {
                entry.1 = buffer;
                Ok(())
            }
            None => Err(Error::WindowManager(format!("no such window: {window}"))),
        }
    }

    fn scratch_buffer(&mut self) -> Result<BufferId> {
        let mut state = self.state.lock().unwrap();
        let buffer = BufferId::new(state.next_raw());
        state.buffers.insert(
            buffer,
            MockBuffer {
                name: "[scratch]".to_string(),
                content_type: String::new(),
                process: None,
            },
        );
        Ok(buffer)
    }

    fn spawn_terminal(&mut self, command: &str, _cwd: &Path) -> Result<SpawnedTerminal> {
        let mut state = self.state.lock().unwrap();
        if state.fail_spawn {
            return Err(Error::Spawn("scripted spawn failure".to_string()));
        }
        let window = match state.focused {
            Some(window) => window,
            None => return Err(Error::WindowManager("no focused window".to_string())),
        };
        let process = ProcessId::new(state.next_raw());
        state.processes.insert(process);
        let buffer = BufferId::new(state.next_raw());
        state.buffers.insert(
            buffer,
            MockBuffer {
                // The host displays the spawn identity as the buffer name
                name: command.to_string(),
                content_type: TERMINAL_BUFFER_TYPE.to_string(),
                process: Some(process),
            },
        );
        if let Some(entry) = state.windows.iter_mut().find(|(w, _)| *w == window) {
            entry.1 = buffer;
        }
        state.spawn_count += 1;
        Ok(SpawnedTerminal {
            window,
            buffer,
            process,
        })
    }

    fn send_input(&mut self, process: ProcessId, bytes: &[u8]) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if !state.processes.contains(&process) {
            return Err(Error::WindowManager(format!("no such process: {process}")));
        }
        state.sent_input.push((process, bytes.to_vec()));
        Ok(())
    }

    fn scroll_to_end(&mut self, window: WindowId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.window_entry(window).is_none() {
            return Err(Error::WindowManager(format!("no such window: {window}")));
        }
        state.scrolled.push(window);
        Ok(())
    }

    fn apply_terminal_keymaps(&mut self, buffer: BufferId, mapping: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if !state.buffers.contains_key(&buffer) {
            return Err(Error::WindowManager(format!("no such buffer: {buffer}")));
        }
        state.keymaps.push((buffer, mapping.to_string()));
        Ok(())
    }

    fn current_dir(&self) -> PathBuf {
        self.state.lock().unwrap().cwd.clone()
    }
}
