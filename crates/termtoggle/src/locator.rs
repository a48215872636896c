//! Window locator: queries the host for visible windows.
//!
//! The locator is the single authority on window liveness. Registry records
//! claim window handles; only [`is_window_alive`] decides whether such a
//! claim still holds.

use termtoggle_core::{WindowId, TERMINAL_BUFFER_TYPE};

use crate::host::WindowManager;

/// Visible windows satisfying `predicate`, in host enumeration order.
///
/// The order is stable within one call; an empty result means no match.
pub fn find_windows_where<F>(wm: &dyn WindowManager, predicate: F) -> Vec<WindowId>
where
    F: Fn(&dyn WindowManager, WindowId) -> bool,
{
    wm.list_windows()
        .into_iter()
        .filter(|&window| predicate(wm, window))
        .collect()
}

/// Visible windows whose buffer declares the terminal content-type.
///
/// Capability failures classify the window as non-terminal rather than
/// propagating.
pub fn find_terminal_windows(wm: &dyn WindowManager) -> Vec<WindowId> {
    find_windows_where(wm, is_terminal_window)
}

/// Default classifier: the window's buffer declares the terminal marker
/// content-type.
pub fn is_terminal_window(wm: &dyn WindowManager, window: WindowId) -> bool {
    wm.window_buffer(window)
        .and_then(|buffer| wm.buffer_content_type(buffer))
        .map(|kind| kind == TERMINAL_BUFFER_TYPE)
        .unwrap_or(false)
}

/// Whether the host can still resolve `window` to a live window.
///
/// Never cache this: a handle becomes invalid the moment its window is
/// closed by any means.
pub fn is_window_alive(wm: &dyn WindowManager, window: WindowId) -> bool {
    wm.window_exists(window)
}
