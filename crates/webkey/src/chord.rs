use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Key;

/// A key chord: an ordered sequence of one or more key tokens.
///
/// Equality is token-sequence equality, so `"g u"` and `"g b"` are distinct
/// and `"A"` is distinct from `"a"`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct KeyChord(Vec<Key>);

impl KeyChord {
    /// Parses a chord specification of the form `"g u"`.
    ///
    /// - Tokens are separated by whitespace; each token is parsed with
    ///   [`Key::from_spec`].
    /// - At least one token is required.
    /// - Bare modifier tokens are rejected: a modifier press never
    ///   contributes to a sequence, so a chord containing one could never
    ///   match.
    pub fn parse(s: &str) -> Option<Self> {
        let mut keys = Vec::new();
        for tok in s.split_whitespace() {
            let key = Key::from_spec(tok)?;
            if key.is_modifier() {
                return None;
            }
            keys.push(key);
        }
        if keys.is_empty() {
            return None;
        }
        Some(Self(keys))
    }

    /// The chord's tokens in press order.
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    /// Number of tokens in the chord.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed chord; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when `typed` is a strict proper prefix of this chord.
    pub fn has_strict_prefix(&self, typed: &[Key]) -> bool {
        typed.len() < self.0.len() && self.0.starts_with(typed)
    }
}

impl From<Vec<Key>> for KeyChord {
    fn from(keys: Vec<Key>) -> Self {
        Self(keys)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let specs: Vec<String> = self.0.iter().map(|k| k.to_spec()).collect();
        write!(f, "{}", specs.join(" "))
    }
}
