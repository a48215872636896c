//! Toggle controller: the decision layer exposed to the user.

use std::collections::HashSet;

use tracing::{debug, warn};

use termtoggle_core::{BufferId, Error, Result};

use crate::locator;
use crate::manager::TerminalManager;

impl TerminalManager {
    /// Toggle terminal visibility.
    ///
    /// `count > 1` operates on exactly that session number via
    /// [`toggle_nth`](Self::toggle_nth). A count of 0 or 1 (the default,
    /// no-count case) applies the smart heuristic: open session 1 if no
    /// terminal window is visible, otherwise close the highest-numbered
    /// session that still has a live window.
    pub fn toggle(&mut self, count: u32, size: Option<u16>) -> Result<()> {
        if count > 1 {
            return self.toggle_nth(count, size);
        }

        let visible = locator::find_terminal_windows(self.wm.as_ref());
        if visible.is_empty() {
            debug!("No terminal visible, opening session 1");
            return self.open(1, size);
        }

        match self.smart_close_target() {
            Some(target) => {
                debug!("Smart toggle closing session {}", target);
                self.close(target)
            }
            None => {
                // A terminal window is visible but nothing is registered;
                // reconcile is the repair path for that state.
                warn!("Terminal windows visible but no sessions registered");
                Ok(())
            }
        }
    }

    /// Toggle exactly the numbered session: close it when its window is
    /// alive, open it otherwise.
    pub fn toggle_nth(&mut self, number: u32, size: Option<u16>) -> Result<()> {
        if number == 0 {
            return Err(Error::InvalidSessionNumber(number));
        }
        if self.window_is_alive(number) {
            self.close(number)
        } else {
            self.open(number, size)
        }
    }

    /// Pick the close target for the smart heuristic.
    ///
    /// Scans registered sessions in descending number order and returns the
    /// first whose buffer is displayed in some live window. When none
    /// qualifies, falls back to the highest registered number even if that
    /// session has no live window; the resulting `close` then reports its
    /// recoverable error. That fallback is a deliberate, pinned behavior.
    fn smart_close_target(&self) -> Option<u32> {
        let visible_buffers: HashSet<BufferId> = self
            .wm
            .list_windows()
            .into_iter()
            .filter_map(|window| self.wm.window_buffer(window).ok())
            .collect();

        let mut highest = None;
        for session in self.registry.all().rev() {
            if highest.is_none() {
                highest = Some(session.number());
            }
            if let Some(buffer) = session.buffer() {
                if visible_buffers.contains(&buffer) {
                    return Some(session.number());
                }
            }
        }
        highest
    }
}
