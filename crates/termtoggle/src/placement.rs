//! Window placement policy for new terminal splits.

use tracing::debug;

use termtoggle_core::{Result, WindowId};

use crate::host::{SplitDirection, WindowManager};
use crate::locator;

/// Place a window for a terminal view and return it focused.
///
/// If any terminal-classified window is open, focus the most recently
/// opened one (last in locator order) and split vertically beside it, so
/// terminal windows cluster together instead of fragmenting the layout.
/// Otherwise create a horizontal split of height `size` pinned to the
/// bottom edge.
pub fn place(wm: &mut dyn WindowManager, size: u16) -> Result<WindowId> {
    let terminals = locator::find_terminal_windows(wm);
    match terminals.last() {
        Some(&most_recent) => {
            debug!("Placing terminal beside window {}", most_recent);
            wm.focus_window(most_recent)?;
            wm.create_split(SplitDirection::Vertical, size)
        }
        None => {
            debug!("Placing terminal at bottom edge, height {}", size);
            let window = wm.create_split(SplitDirection::Horizontal, size)?;
            wm.pin_to_bottom(window)?;
            Ok(window)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockWindowManager;
    use termtoggle_core::TERMINAL_BUFFER_TYPE;

    #[test]
    fn test_place_with_no_terminal_uses_bottom_split() {
        let mut mock = MockWindowManager::new();
        mock.add_window_with_buffer("main.rs", "rust");

        let window = place(&mut mock, 12).unwrap();

        assert_eq!(mock.splits(), vec![(SplitDirection::Horizontal, 12)]);
        assert!(mock.is_pinned_to_bottom(window));
        assert_eq!(mock.focused_window(), Some(window));
    }

    #[test]
    fn test_place_beside_most_recent_terminal() {
        let mut mock = MockWindowManager::new();
        mock.add_window_with_buffer("a;#terminal#1", TERMINAL_BUFFER_TYPE);
        let newer = mock.add_window_with_buffer("b;#terminal#2", TERMINAL_BUFFER_TYPE);

        let window = place(&mut mock, 15).unwrap();

        assert_eq!(mock.splits(), vec![(SplitDirection::Vertical, 15)]);
        assert!(!mock.is_pinned_to_bottom(window));
        // The split happened beside the newer terminal
        assert_eq!(mock.focus_history().first(), Some(&newer));
    }

    #[test]
    fn test_place_ignores_non_terminal_windows() {
        let mut mock = MockWindowManager::new();
        mock.add_window_with_buffer("notes.md", "markdown");
        mock.add_window_with_buffer("main.rs", "rust");

        place(&mut mock, 10).unwrap();
        assert_eq!(mock.splits(), vec![(SplitDirection::Horizontal, 10)]);
    }
}
