//! User settings: global key bindings and the screen colors.
//!
//! Read from `$TUITREE_SETTINGS`, else `~/.tuitree/settings.json`. A missing or broken file
//! falls back to defaults.

use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::core::Command;
use crate::ui::core::style::{Color, Palette};
use crate::ui::{Screen, Ui, UiError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const SETTINGS_ENV: &str = "TUITREE_SETTINGS";
const SETTINGS_DIR: &str = ".tuitree";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub theme: ThemeSettings,
}

/// `command` is one of `quit`, `focusNext`, `focusPrev`; an empty command removes the binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    #[serde(default)]
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            highlight_fg: Some("magenta".to_string()),
            border_fg: None,
            title_fg: None,
        }
    }
}

impl ThemeSettings {
    /// Overlays the configured colors on the default palette. Unparsable colors are skipped.
    pub fn palette(&self) -> Palette {
        let mut palette = Palette::default();
        if let Some(c) = parse_color("highlight_fg", self.highlight_fg.as_deref()) {
            palette.highlight = palette.highlight.fg(c);
        }
        if let Some(c) = parse_color("border_fg", self.border_fg.as_deref()) {
            palette.border = palette.border.fg(c);
        }
        if let Some(c) = parse_color("title_fg", self.title_fg.as_deref()) {
            palette.title = palette.title.fg(c);
        }
        palette
    }
}

fn parse_color(field: &'static str, value: Option<&str>) -> Option<Color> {
    let value = value?;
    let color = Color::parse(value);
    if color.is_none() {
        tracing::warn!(field, value, "invalid color in settings");
    }
    color
}

#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "read settings {}: {source}", path.display())
            }
            SettingsError::Parse { path, source } => {
                write!(f, "parse settings {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(SETTINGS_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    home_dir().map(|home| home.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    let home = std::env::var_os("USERPROFILE");
    #[cfg(not(windows))]
    let home = std::env::var_os("HOME");
    home.filter(|h| !h.is_empty()).map(PathBuf::from)
}

impl Settings {
    /// Loads from the default location, logging and ignoring any failure.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(error = %err, "using default settings");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let data = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Installs the key bindings and colors. Call after [`Ui::start`], which installs the
    /// defaults these override.
    pub fn apply(&self, ui: &mut Ui<Screen>) -> Result<(), UiError> {
        for rule in &self.keybindings {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "invalid key in settings");
                continue;
            };
            if rule.command.trim().is_empty() {
                ui.unbind_global(key);
                continue;
            }
            match Command::from_name(&rule.command) {
                Some(command) => ui.bind_global(key, command)?,
                None => tracing::warn!(command = %rule.command, "unknown command in settings"),
            }
        }
        ui.engine_mut().set_palette(self.theme.palette());
        Ok(())
    }
}

/// Parses `ctrl+c`, `alt+tab`, `shift+F5`, `space` and friends. An uppercase letter implies
/// shift.
pub fn parse_keybinding(value: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part: Option<&str> = None;
    for part in value.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "super" | "meta" | "cmd" => modifiers |= KeyModifiers::SUPER,
            _ if key_part.is_some() => return None,
            _ => key_part = Some(part),
        }
    }
    let code = parse_key_code(key_part?)?;
    Some(Key::new(code, modifiers))
}

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let lower = value.to_ascii_lowercase();
    let code = match lower.as_str() {
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ if lower.len() > 1 && lower.starts_with('f') => KeyCode::F(lower[1..].parse().ok()?),
        _ => {
            let mut chars = value.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };
    Some(code)
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
