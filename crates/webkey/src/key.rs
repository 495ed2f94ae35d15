use std::fmt;

use serde::{Deserialize, Serialize};

/// A single key token as reported by a browser keydown event.
///
/// Printable keys carry their character, case-sensitive: `Char('A')` is a
/// shifted press and is distinct from `Char('a')`. Named keys use the
/// `KeyboardEvent.key` vocabulary. Bare modifier presses are represented so
/// callers can recognize and skip them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable character key, including space (`Char(' ')`).
    Char(char),
    /// The Enter key.
    Enter,
    /// The Tab key.
    Tab,
    /// The Backspace key.
    Backspace,
    /// The Delete key.
    Delete,
    /// The Escape key.
    Escape,
    /// The left arrow key.
    ArrowLeft,
    /// The right arrow key.
    ArrowRight,
    /// The up arrow key.
    ArrowUp,
    /// The down arrow key.
    ArrowDown,
    /// The Home key.
    Home,
    /// The End key.
    End,
    /// The PageUp key.
    PageUp,
    /// The PageDown key.
    PageDown,
    /// A bare Shift press.
    Shift,
    /// A bare Control press.
    Control,
    /// A bare Alt/Option press.
    Alt,
    /// A bare Meta/Command press.
    Meta,
}

impl Key {
    /// Parses a key specification.
    ///
    /// - A single character (including a literal space) parses as
    ///   [`Key::Char`], preserving case.
    /// - Anything longer must be one of the named `KeyboardEvent.key` values
    ///   (`Escape`, `ArrowLeft`, `Enter`, ...), matched exactly.
    pub fn from_spec(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Self::Char(c));
        }
        match s {
            "Enter" => Some(Self::Enter),
            "Tab" => Some(Self::Tab),
            "Backspace" => Some(Self::Backspace),
            "Delete" => Some(Self::Delete),
            "Escape" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "PageUp" => Some(Self::PageUp),
            "PageDown" => Some(Self::PageDown),
            "Shift" => Some(Self::Shift),
            "Control" => Some(Self::Control),
            "Alt" => Some(Self::Alt),
            "Meta" => Some(Self::Meta),
            _ => None,
        }
    }

    /// Returns the canonical spec string for this key. Round-trips through
    /// [`Key::from_spec`].
    pub fn to_spec(self) -> String {
        match self {
            Self::Char(c) => c.to_string(),
            Self::Enter => "Enter".to_string(),
            Self::Tab => "Tab".to_string(),
            Self::Backspace => "Backspace".to_string(),
            Self::Delete => "Delete".to_string(),
            Self::Escape => "Escape".to_string(),
            Self::ArrowLeft => "ArrowLeft".to_string(),
            Self::ArrowRight => "ArrowRight".to_string(),
            Self::ArrowUp => "ArrowUp".to_string(),
            Self::ArrowDown => "ArrowDown".to_string(),
            Self::Home => "Home".to_string(),
            Self::End => "End".to_string(),
            Self::PageUp => "PageUp".to_string(),
            Self::PageDown => "PageDown".to_string(),
            Self::Shift => "Shift".to_string(),
            Self::Control => "Control".to_string(),
            Self::Alt => "Alt".to_string(),
            Self::Meta => "Meta".to_string(),
        }
    }

    /// True for bare modifier presses, which never contribute a sequence
    /// token.
    pub fn is_modifier(self) -> bool {
        matches!(self, Self::Shift | Self::Control | Self::Alt | Self::Meta)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_spec())
    }
}

/// A single keydown event: the key token plus whether this event was
/// generated by OS auto-repeat of a held key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KeyPress {
    /// The key token for this press.
    pub key: Key,
    /// True when this event is an auto-repeat of a held key.
    #[serde(default)]
    pub repeat: bool,
}

impl KeyPress {
    /// A non-repeat press of `key`.
    pub fn new(key: Key) -> Self {
        Self { key, repeat: false }
    }
}
