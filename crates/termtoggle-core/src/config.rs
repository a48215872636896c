//! Configuration types for termtoggle.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::DEFAULT_WINDOW_SIZE;

/// Terminal configuration loaded from YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TerminalConfig {
    /// Terminal settings
    pub terminal: TerminalSettings,
    /// Cosmetic shading settings (consumed by the colorization collaborator)
    pub shading: ShadingSettings,
    /// Key binding settings
    pub keymap: KeymapSettings,
}

impl TerminalConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: TerminalConfig = serde_yaml::from_str(yaml)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.terminal.default_size == 0 {
            return Err(crate::Error::Config(
                "terminal.default_size must be > 0".to_string(),
            ));
        }

        if self.terminal.shell.trim().is_empty() {
            return Err(crate::Error::Config(
                "terminal.shell cannot be empty".to_string(),
            ));
        }

        if self.keymap.toggle.trim().is_empty() {
            return Err(crate::Error::Config(
                "keymap.toggle cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Terminal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalSettings {
    /// Shell command spawned in new sessions
    pub shell: String,
    /// Default window height, in rows, when no size is given
    pub default_size: u16,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            shell: if cfg!(windows) {
                "powershell.exe".to_string()
            } else {
                "/bin/bash".to_string()
            },
            default_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

/// Cosmetic shading settings.
///
/// These are passed through to the host's colorization collaborator and are
/// opaque to the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingSettings {
    /// Whether terminal buffers get a shaded background
    pub enabled: bool,
    /// Content-types eligible for shading
    pub content_types: Vec<String>,
}

impl Default for ShadingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            content_types: vec![crate::TERMINAL_BUFFER_TYPE.to_string()],
        }
    }
}

/// Key binding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeymapSettings {
    /// Binding that re-invokes toggle from inside a terminal buffer
    pub toggle: String,
}

impl Default for KeymapSettings {
    fn default() -> Self {
        Self {
            toggle: "ctrl-\\".to_string(),
        }
    }
}
