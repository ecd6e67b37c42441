//! Key comparison strategies.
//!
//! A lexicon delegates every key lookup to a [`KeyComparer`]. A comparer maps
//! each key onto a normalized form; two keys are equal iff their normalized
//! forms are equal, and the key hash is the hash of the normalized form. Equal
//! keys therefore always hash equal, whichever strategy is active.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Value;
use crate::hash;

/// Key-equality policy of a lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComparisonMode {
    /// Text keys are compared exactly.
    CaseSensitive,
    /// Text keys are compared on their lowercase form.
    #[default]
    CaseInsensitive,
}

impl ComparisonMode {
    /// Returns `true` for [`CaseSensitive`](Self::CaseSensitive).
    #[must_use]
    pub const fn is_case_sensitive(self) -> bool {
        matches!(self, Self::CaseSensitive)
    }

    /// Returns the strategy object implementing this mode.
    #[must_use]
    pub const fn comparer(self) -> &'static dyn KeyComparer {
        match self {
            Self::CaseSensitive => &CaseSensitiveComparer,
            Self::CaseInsensitive => &CaseInsensitiveComparer,
        }
    }
}

impl From<bool> for ComparisonMode {
    fn from(case_sensitive: bool) -> Self {
        if case_sensitive {
            Self::CaseSensitive
        } else {
            Self::CaseInsensitive
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CaseSensitive => "case-sensitive",
            Self::CaseInsensitive => "case-insensitive",
        })
    }
}

/// Key equality and hashing strategy.
///
/// Implementors only define [`normalize`](Self::normalize); equality and
/// hashing are derived from it and should not be overridden independently.
///
/// A [`Lexicon`](crate::Lexicon) calls only `normalize`: it indexes entries
/// by the normalized key and hashes that with [`Value`]'s own `Hash`.
/// [`equals`](Self::equals) and [`hash_key`](Self::hash_key) expose the same
/// relation to callers outside the map, and `hash_key` is that same `Hash`
/// run through [`hash_one`](crate::hash::hash_one). A comparer that
/// overrides either one without changing `normalize` does not change which
/// keys a lexicon treats as equal.
pub trait KeyComparer: fmt::Debug + Send + Sync {
    /// The mode this comparer implements.
    fn mode(&self) -> ComparisonMode;

    /// Maps a key onto the form used for equality and hashing.
    fn normalize<'a>(&self, key: &'a Value) -> Cow<'a, Value>;

    /// Returns `true` if the two keys address the same entry.
    fn equals(&self, a: &Value, b: &Value) -> bool {
        self.normalize(a) == self.normalize(b)
    }

    /// Returns the hash of a key under this comparer.
    fn hash_key(&self, key: &Value) -> u64 {
        hash::hash_one(&*self.normalize(key))
    }
}

/// Exact comparison: variant match plus structural equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseSensitiveComparer;

impl KeyComparer for CaseSensitiveComparer {
    fn mode(&self) -> ComparisonMode {
        ComparisonMode::CaseSensitive
    }

    fn normalize<'a>(&self, key: &'a Value) -> Cow<'a, Value> {
        Cow::Borrowed(key)
    }
}

/// Case-folding comparison for top-level text keys.
///
/// Non-text keys, including text nested inside a list, are compared exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitiveComparer;

impl KeyComparer for CaseInsensitiveComparer {
    fn mode(&self) -> ComparisonMode {
        ComparisonMode::CaseInsensitive
    }

    fn normalize<'a>(&self, key: &'a Value) -> Cow<'a, Value> {
        match key {
            Value::Text(s) => {
                let folded = s.to_lowercase();
                if folded == *s {
                    Cow::Borrowed(key)
                } else {
                    Cow::Owned(Value::Text(folded))
                }
            }
            _ => Cow::Borrowed(key),
        }
    }
}
