use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Modifier key, left/right variants already folded together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Meta,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Ctrl => "ctrl",
            Modifier::Alt => "alt",
            Modifier::Shift => "shift",
            Modifier::Meta => "meta",
        }
    }
}

/// Non-modifier key of a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// ASCII letter or digit, stored lowercase.
    Char(char),
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// Build a character key. Only ASCII alphanumerics are accepted.
    pub fn char(c: char) -> Option<Self> {
        c.is_ascii_alphanumeric()
            .then(|| Key::Char(c.to_ascii_lowercase()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{c}"),
            Key::Left => f.write_str("left"),
            Key::Right => f.write_str("right"),
            Key::Up => f.write_str("up"),
            Key::Down => f.write_str("down"),
        }
    }
}

/// A key combination: a set of modifiers plus exactly one regular key.
///
/// 组合键：若干修饰键加一个普通键。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCombo {
    modifiers: BTreeSet<Modifier>,
    key: Key,
}

impl KeyCombo {
    pub fn new(modifiers: impl IntoIterator<Item = Modifier>, key: Key) -> Self {
        Self {
            modifiers: modifiers.into_iter().collect(),
            key,
        }
    }

    /// Interpret a set of currently pressed keys as a combination.
    ///
    /// Returns `None` unless exactly one regular key is held.
    pub fn from_pressed(
        modifiers: impl IntoIterator<Item = Modifier>,
        keys: &[Key],
    ) -> Option<Self> {
        match keys {
            [key] => Some(Self::new(modifiers, *key)),
            _ => None,
        }
    }

    pub fn modifiers(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.modifiers.iter().copied()
    }

    pub fn key(&self) -> Key {
        self.key
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier.as_str())?;
        }
        write!(f, "{}", self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComboParseError {
    #[error("empty key combination")]
    Empty,

    #[error("unknown key: {0}")]
    UnknownKey(String),

    #[error("combination must contain exactly one regular key: {0}")]
    KeyCount(String),
}

impl FromStr for KeyCombo {
    type Err = ComboParseError;

    /// Parse `ctrl+alt+v` style strings. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ComboParseError::Empty);
        }

        let mut modifiers = BTreeSet::new();
        let mut keys = Vec::new();

        for part in trimmed.split('+').map(|p| p.trim().to_ascii_lowercase()) {
            match part.as_str() {
                "ctrl" | "control" => {
                    modifiers.insert(Modifier::Ctrl);
                }
                "alt" | "option" => {
                    modifiers.insert(Modifier::Alt);
                }
                "shift" => {
                    modifiers.insert(Modifier::Shift);
                }
                "meta" | "cmd" | "super" | "win" => {
                    modifiers.insert(Modifier::Meta);
                }
                "left" => keys.push(Key::Left),
                "right" => keys.push(Key::Right),
                "up" => keys.push(Key::Up),
                "down" => keys.push(Key::Down),
                other => {
                    let mut chars = other.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => {
                            keys.push(Key::char(c).ok_or_else(|| {
                                ComboParseError::UnknownKey(other.to_string())
                            })?)
                        }
                        _ => return Err(ComboParseError::UnknownKey(other.to_string())),
                    }
                }
            }
        }

        KeyCombo::from_pressed(modifiers, &keys)
            .ok_or_else(|| ComboParseError::KeyCount(trimmed.to_string()))
    }
}
