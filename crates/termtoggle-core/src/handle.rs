//! Opaque handle types for host-owned resources.
//!
//! The host assigns the raw values; the core never interprets them beyond
//! equality. A handle says nothing about liveness - a window handle must be
//! re-verified through the host before acting on it.

use serde::{Deserialize, Serialize};

/// Opaque reference to a currently displayed viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(u64);

impl WindowId {
    /// Wrap a host-assigned window identifier.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw host identifier.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "win:{}", self.0)
    }
}

/// Opaque reference to persistent session content, independent of visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BufferId(u64);

impl BufferId {
    /// Wrap a host-assigned buffer identifier.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw host identifier.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BufferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "buf:{}", self.0)
    }
}

/// Opaque reference to a spawned shell process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(u64);

impl ProcessId {
    /// Wrap a host-assigned process identifier.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw host identifier.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProcessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "proc:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_equality() {
        assert_eq!(WindowId::new(1), WindowId::new(1));
        assert_ne!(WindowId::new(1), WindowId::new(2));
        assert_eq!(BufferId::new(7).as_u64(), 7);
        assert_eq!(ProcessId::new(9).as_u64(), 9);
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(WindowId::new(3).to_string(), "win:3");
        assert_eq!(BufferId::new(3).to_string(), "buf:3");
        assert_eq!(ProcessId::new(3).to_string(), "proc:3");
    }

    #[test]
    fn test_handle_serialization_is_transparent() {
        let json = serde_json::to_string(&WindowId::new(42)).unwrap();
        assert_eq!(json, "42");

        let back: WindowId = serde_json::from_str("42").unwrap();
        assert_eq!(back, WindowId::new(42));
    }
}
