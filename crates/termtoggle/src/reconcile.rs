//! Reconciliation: rebuild registry entries from live windows.
//!
//! When the registry has been reset while windows and shell processes
//! survived (a host state reload, an embedder restart), the buffer naming
//! convention is the only remaining record of session identity. This pass
//! matches visible windows by name, since the content-type metadata may not
//! have been reapplied after the reset.

use std::collections::HashSet;

use tracing::{debug, info};

use termtoggle_core::{is_session_buffer_name, parse_session_number, WindowId};

use crate::locator;
use crate::manager::TerminalManager;

impl TerminalManager {
    /// Recover sessions from visible windows whose buffer name follows the
    /// session naming convention. Returns the number of sessions recovered.
    ///
    /// Never fails: unparseable names and unrelated terminals are skipped,
    /// and a session whose tracked window is still alive is never
    /// overwritten. Re-running with no intervening window changes mutates
    /// nothing.
    pub fn reconcile(&mut self) -> usize {
        let matches = locator::find_windows_where(self.wm.as_ref(), |wm, window| {
            wm.window_buffer(window)
                .and_then(|buffer| wm.buffer_name(buffer))
                .map(|name| is_session_buffer_name(&name))
                .unwrap_or(false)
        });
        if matches.is_empty() {
            return 0;
        }

        let tracked: HashSet<WindowId> = self.registry.windows().collect();
        let mut recovered = 0;

        for window in matches {
            if tracked.contains(&window) {
                continue;
            }
            let buffer = match self.wm.window_buffer(window) {
                Ok(buffer) => buffer,
                Err(_) => continue,
            };
            let buffer_name = match self.wm.buffer_name(buffer) {
                Ok(name) => name,
                Err(_) => continue,
            };
            let number = match parse_session_number(&buffer_name) {
                Ok(number) => number,
                Err(err) => {
                    debug!("Skipping window {}: {}", window, err);
                    continue;
                }
            };
            // A placeholder entry may be overwritten; a live tracked window
            // never is.
            if let Some(existing) = self.registry.get(number) {
                let live = existing
                    .window()
                    .map(|w| self.wm.window_exists(w))
                    .unwrap_or(false);
                if live {
                    continue;
                }
            }

            let process = self.wm.buffer_process(buffer);
            let cwd = self.wm.current_dir();
            info!(
                "Recovered terminal session {} from window {}",
                number, window
            );
            self.registry
                .get_or_create(number, cwd)
                .bind(window, buffer, process);
            recovered += 1;
        }
        recovered
    }
}
