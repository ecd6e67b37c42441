//! Polymorphic values stored as lexicon keys and values.
//!
//! [`Value`] is a closed tagged variant. Equality and hashing are defined per
//! variant, and values of different variants never compare equal: `Int(1)`
//! and `Float(1.0)` are distinct keys, as are `Text("1")` and `Int(1)`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use serde::{Deserialize, Serialize};

use crate::Lexicon;
use crate::dump;

/// A value that can be used as a lexicon key or value.
///
/// ```
/// # use lexicon::Value;
/// assert_eq!(Value::from("alpha"), Value::Text("alpha".to_string()));
/// assert_ne!(Value::Int(1), Value::Float(1.0));
/// assert_eq!(Value::Float(0.0), Value::Float(-0.0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value; NaN and the infinities encode as the strings
    /// `"NaN"`, `"inf"` and `"-inf"`
    Float(#[serde(with = "float_repr")] f64),
    /// Text string value
    Text(String),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Nested lexicon
    Lexicon(Lexicon),
}

/// Bit pattern used for float equality and hashing.
///
/// Folds `-0.0` onto `0.0` and every NaN onto a single quiet NaN so that
/// `Eq` and `Hash` stay consistent.
const fn canonical_bits(f: f64) -> u64 {
    if f == 0.0 {
        0
    } else if f.is_nan() {
        f64::NAN.to_bits()
    } else {
        f.to_bits()
    }
}

impl Value {
    /// Returns the variant name as a string.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Lexicon(_) => "lexicon",
        }
    }

    /// Returns true for variants that hold text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Attempts to convert to a boolean
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to convert to a string slice
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a slice of list items
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to a nested lexicon
    #[must_use]
    pub const fn as_lexicon(&self) -> Option<&Lexicon> {
        match self {
            Self::Lexicon(lex) => Some(lex),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Equality & hashing — per variant, never across variants
// ---------------------------------------------------------------------------

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Lexicon(a), Self::Lexicon(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(f) => canonical_bits(*f).hash(state),
            Self::Text(s) => s.hash(state),
            Self::List(items) => items.hash(state),
            Self::Lexicon(lex) => lex.hash(state),
        }
    }
}

// ---------------------------------------------------------------------------
// Float encoding — total over f64, non-finite values travel as strings
// ---------------------------------------------------------------------------

pub(crate) mod float_repr {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    const NAN: &str = "NaN";
    const INF: &str = "inf";
    const NEG_INF: &str = "-inf";

    /// Label of a non-finite float. Only meaningful when `!x.is_finite()`.
    pub const fn non_finite_label(x: f64) -> &'static str {
        if x.is_nan() {
            NAN
        } else if x.is_sign_positive() {
            INF
        } else {
            NEG_INF
        }
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(x: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if x.is_finite() {
            serializer.serialize_f64(*x)
        } else {
            serializer.serialize_str(non_finite_label(*x))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(FloatVisitor)
    }

    struct FloatVisitor;

    impl Visitor<'_> for FloatVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or one of \"NaN\", \"inf\", \"-inf\"")
        }

        fn visit_f64<E: de::Error>(self, x: f64) -> Result<f64, E> {
            Ok(x)
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_i64<E: de::Error>(self, n: i64) -> Result<f64, E> {
            Ok(n as f64)
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_u64<E: de::Error>(self, n: u64) -> Result<f64, E> {
            Ok(n as f64)
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<f64, E> {
            match s {
                NAN => Ok(f64::NAN),
                INF => Ok(f64::INFINITY),
                NEG_INF => Ok(f64::NEG_INFINITY),
                _ => Err(E::invalid_value(de::Unexpected::Str(s), &self)),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Textual representation
// ---------------------------------------------------------------------------

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Text(s) => f.write_str(s),
            Self::List(_) | Self::Lexicon(_) => dump::write_value(f, self, 0),
        }
    }
}

// ---------------------------------------------------------------------------
// Literal conversions
// ---------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl From<Lexicon> for Value {
    fn from(lex: Lexicon) -> Self {
        Self::Lexicon(lex)
    }
}
