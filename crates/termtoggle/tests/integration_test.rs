//! Integration tests for the termtoggle session layer.

use termtoggle::testing::MockWindowManager;
use termtoggle::{
    Error, HostEvent, SplitDirection, TerminalConfig, TerminalManager, WindowManager,
};

fn manager() -> (MockWindowManager, TerminalManager) {
    let mock = MockWindowManager::new();
    let manager = TerminalManager::new(Box::new(mock.clone()));
    (mock, manager)
}

#[test]
fn test_identity_preserved_across_hide_show() {
    let (mock, mut manager) = manager();

    manager.open(7, Some(10)).unwrap();
    let before = manager.sessions()[0].clone();
    assert_eq!(mock.spawn_count(), 1);

    manager.close(7).unwrap();
    manager.open(7, Some(14)).unwrap();
    let after = manager.sessions()[0].clone();

    // Same buffer and process; no second spawn
    assert_eq!(after.buffer, before.buffer);
    assert_eq!(after.process, before.process);
    assert_eq!(mock.spawn_count(), 1);
}

#[test]
fn test_sparse_numbering() {
    let (_, mut manager) = manager();
    manager.open(3, Some(10)).unwrap();

    let numbers: Vec<u32> = manager.sessions().iter().map(|s| s.number).collect();
    assert_eq!(numbers, vec![3]);
}

#[test]
fn test_smart_toggle_from_empty_layout() {
    let (mock, mut manager) = manager();

    manager.toggle(1, Some(12)).unwrap();

    assert_eq!(manager.session_count(), 1);
    let session = &manager.sessions()[0];
    assert_eq!(session.number, 1);
    let window = session.window.unwrap();
    assert_eq!(mock.splits(), vec![(SplitDirection::Horizontal, 12)]);
    assert!(mock.is_pinned_to_bottom(window));
    assert_eq!(mock.height_of(window), Some(12));
}

#[test]
fn test_smart_toggle_collapses_highest_visible() {
    let (_, mut manager) = manager();
    manager.open(1, None).unwrap();
    manager.open(2, None).unwrap();

    manager.toggle(1, None).unwrap();

    let sessions = manager.sessions();
    assert!(sessions[0].window.is_some(), "session 1 still visible");
    assert!(sessions[1].window.is_none(), "session 2 closed");
}

#[test]
fn test_reconciliation_is_idempotent() {
    let (mut mock, mut manager) = manager();
    mock.add_window_with_buffer("/bin/bash;#terminal#1", "");
    mock.add_window_with_buffer("/bin/bash;#terminal#4", "");

    let first_pass = manager.reconcile();
    assert_eq!(first_pass, 2);
    let state_after_first = manager.sessions();

    let second_pass = manager.reconcile();
    assert_eq!(second_pass, 0);
    assert_eq!(manager.sessions(), state_after_first);
}

#[test]
fn test_close_is_non_destructive() {
    let (_, mut manager) = manager();
    manager.open(2, None).unwrap();

    manager.close(2).unwrap();

    let session = &manager.sessions()[0];
    assert_eq!(session.window, None);
    assert!(session.buffer.is_some());
    assert!(session.process.is_some());
}

#[test]
fn test_unknown_close_reports_error_without_mutation() {
    let (_, mut manager) = manager();

    let result = manager.close(99);

    assert!(matches!(result, Err(Error::WindowNotOpen(99))));
    assert_eq!(manager.session_count(), 0);
}

#[test]
fn test_exec_auto_opens() {
    let (mock, mut manager) = manager();

    manager.exec("ls", 5, Some(20)).unwrap();

    assert_eq!(manager.session_count(), 1);
    let session = &manager.sessions()[0];
    assert_eq!(session.number, 5);
    assert!(session.window.is_some());

    let sent = mock.sent_input();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].1, b"clear\nls\n".to_vec());
}

#[test]
fn test_exec_on_visible_session_does_not_reopen() {
    let (mock, mut manager) = manager();
    manager.open(1, None).unwrap();
    assert_eq!(mock.spawn_count(), 1);

    manager.exec("cargo check", 1, None).unwrap();

    assert_eq!(mock.spawn_count(), 1);
    assert_eq!(mock.sent_input().len(), 1);
}

#[test]
fn test_registry_loss_then_reconcile_then_toggle() {
    // A host state reset: windows and processes survive, registry does not.
    let mock = {
        let (mock, mut manager) = manager();
        manager.open(1, None).unwrap();
        manager.open(2, None).unwrap();
        mock
    };

    let mut manager = TerminalManager::new(Box::new(mock.clone()));
    assert_eq!(manager.session_count(), 0);

    assert_eq!(manager.reconcile(), 2);
    assert_eq!(manager.session_count(), 2);

    // The recovered state drives the smart heuristic as if never lost
    manager.toggle(1, None).unwrap();
    let sessions = manager.sessions();
    assert!(sessions[0].window.is_some());
    assert!(sessions[1].window.is_none());
}

#[test]
fn test_process_exit_event_then_open_spawns_fresh_shell() {
    let (mut mock, mut manager) = manager();
    manager.open(1, None).unwrap();
    let buffer = manager.sessions()[0].buffer.unwrap();
    let window = manager.sessions()[0].window.unwrap();

    // Shell exits; host tears the window down and reports the exit
    mock.hide_window(window).unwrap();
    manager.handle_event(HostEvent::ProcessExited { buffer });
    assert_eq!(manager.session_count(), 0);

    manager.open(1, None).unwrap();
    assert_eq!(mock.spawn_count(), 2);
}

#[test]
fn test_second_terminal_splits_beside_first() {
    let (mock, mut manager) = manager();
    manager.open(1, None).unwrap();
    manager.open(2, None).unwrap();

    assert_eq!(
        mock.splits(),
        vec![
            (SplitDirection::Horizontal, 12),
            (SplitDirection::Vertical, 12),
        ]
    );
}

#[test]
fn test_custom_config_size_and_shell() {
    let config = TerminalConfig::from_yaml(
        r#"
terminal:
  shell: /usr/bin/fish
  default_size: 8
"#,
    )
    .unwrap();
    let mock = MockWindowManager::new();
    let mut manager = TerminalManager::with_config(Box::new(mock.clone()), config);

    manager.open(1, None).unwrap();

    assert_eq!(mock.splits(), vec![(SplitDirection::Horizontal, 8)]);
    let buffer = manager.sessions()[0].buffer.unwrap();
    assert_eq!(
        mock.buffer_name(buffer).unwrap(),
        "/usr/bin/fish;#terminal#1"
    );
}
