//! Render configuration shared by the adapters.
//!
//! With the `serde` feature a [`RenderConfig`] can be loaded from RON:
//!
//! ```ignore
//! use buttonkit_core::config::load_config;
//!
//! let config = load_config("(collapse_empty_sections: false)")?;
//! ```

use std::io;
use std::path::Path;

use crate::SymbolName;

/// What the overlay adapter does with a presentation request while another
/// presentation is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReentrantPresentation {
    /// The new request is dropped; the active menu stays.
    #[default]
    Ignore,
    /// The active menu is dismissed without selection and the new one shown.
    Replace,
}

/// Options shared by every render adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    /// Glyph shown on submenu affordances that have no icon of their own.
    pub submenu_symbol: Option<SymbolName>,
    /// Whether a section without visible items is skipped, together with its
    /// separator.
    pub collapse_empty_sections: bool,
    /// Whether native menus group sections inline instead of emitting a flat
    /// list with separators.
    pub native_inline_sections: bool,
    /// Overlay policy for a presentation request during an active one.
    pub reentrant_presentation: ReentrantPresentation,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            submenu_symbol: Some(SymbolName::new("chevron.right")),
            collapse_empty_sections: true,
            native_inline_sections: true,
            reentrant_presentation: ReentrantPresentation::Ignore,
        }
    }
}

/// Error type for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("config file not found: {0}")]
    NotFound(String),
    /// Failed to read file.
    #[error("failed to read config: {0}")]
    ReadError(String),
    /// Failed to parse config.
    #[error("failed to parse config: {0}")]
    ParseError(String),
    /// Unsupported format.
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Parses a [`RenderConfig`] from RON text. Missing fields keep their defaults.
#[cfg(feature = "serde")]
pub fn load_config(text: &str) -> Result<RenderConfig, ConfigError> {
    ron::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Parses a [`RenderConfig`] from RON text.
#[cfg(not(feature = "serde"))]
pub fn load_config(_text: &str) -> Result<RenderConfig, ConfigError> {
    Err(ConfigError::UnsupportedFormat(
        "RON loading requires 'serde' feature".to_string(),
    ))
}

/// Loads a [`RenderConfig`] from a `.ron` file.
pub fn load_config_from_file(path: impl AsRef<Path>) -> Result<RenderConfig, ConfigError> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    if extension != "ron" {
        return Err(ConfigError::UnsupportedFormat(extension.to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.display().to_string()),
        _ => ConfigError::ReadError(e.to_string()),
    })?;

    load_config(&content)
}
