use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a virtual window (and of the menu item that opens it).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for WindowId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a window record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowSource {
    /// Present from session start.
    #[default]
    Main,
    /// Instantiated on demand from a sidebar menu click.
    Menu,
}

/// Title-bar buttons a renderer can report for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowAction {
    Minimize,
    Maximize,
    Close,
}

impl WindowAction {
    pub fn label(&self) -> &'static str {
        match self {
            WindowAction::Minimize => "minimize",
            WindowAction::Maximize => "maximize",
            WindowAction::Close => "close",
        }
    }
}

impl fmt::Display for WindowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WindowAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimize" | "min" => Ok(WindowAction::Minimize),
            "maximize" | "max" => Ok(WindowAction::Maximize),
            "close" => Ok(WindowAction::Close),
            other => Err(format!("unknown window action: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_id_display_and_as_str() {
        let id = WindowId::from("code-preview");
        assert_eq!(id.as_str(), "code-preview");
        assert_eq!(id.to_string(), "code-preview");
    }

    #[test]
    fn window_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&WindowId::from("users")).unwrap();
        assert_eq!(json, "\"users\"");
    }

    #[test]
    fn window_source_serialization() {
        assert_eq!(serde_json::to_string(&WindowSource::Menu).unwrap(), "\"menu\"");
        let src: WindowSource = serde_json::from_str("\"main\"").unwrap();
        assert_eq!(src, WindowSource::Main);
    }

    #[test]
    fn window_action_parse() {
        assert_eq!("minimize".parse::<WindowAction>(), Ok(WindowAction::Minimize));
        assert_eq!("MAX".parse::<WindowAction>(), Ok(WindowAction::Maximize));
        assert_eq!("close".parse::<WindowAction>(), Ok(WindowAction::Close));
        assert!("shrink".parse::<WindowAction>().is_err());
    }

    #[test]
    fn window_action_labels() {
        assert_eq!(WindowAction::Minimize.to_string(), "minimize");
        assert_eq!(WindowAction::Close.label(), "close");
    }
}
