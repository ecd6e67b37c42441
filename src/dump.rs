//! Dump/load codec.
//!
//! A lexicon is persisted as a [`DumpRecord`]: a human-readable header plus a
//! flat sequence alternating key, value, key, value in insertion order. Each
//! element is the generic serde encoding of a [`Value`], so entries of any
//! variant (nested lexicons included) round-trip through the same sequence.

use std::fmt::{self, Write};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::comparer::ComparisonMode;
use crate::error::{LexiconError, Result};
use crate::lexicon::Lexicon;
use crate::value::{Value, float_repr};

/// Spaces per nesting level in the textual dump.
const INDENT: usize = 2;

/// Serialized form of a lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpRecord {
    /// Human-readable header embedding the entry count, e.g.
    /// `"LEXICON of 2 items:"`.
    pub header: String,
    /// Encoded keys and values, alternating; always of even length when
    /// produced by [`Lexicon::dump`].
    pub entries: Vec<serde_json::Value>,
    /// Mode of the dumped lexicon.
    ///
    /// Only consulted when a nested lexicon value is reconstructed;
    /// [`Lexicon::load_dump`] keeps the receiver's own mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

impl DumpRecord {
    /// Number of key/value pairs in the record.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.entries.len() / 2
    }

    /// The record as a JSON object, with the same fields as its serde derive.
    fn into_json(self) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        object.insert("header".to_string(), self.header.into());
        object.insert("entries".to_string(), serde_json::Value::Array(self.entries));
        if let Some(case_sensitive) = self.case_sensitive {
            object.insert("case_sensitive".to_string(), case_sensitive.into());
        }
        serde_json::Value::Object(object)
    }

    /// Serializes the record to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::MalformedDump`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| LexiconError::MalformedDump {
            reason: e.to_string(),
        })
    }

    /// Parses a record from a JSON string.
    ///
    /// Only the envelope is checked here; the entries are decoded by
    /// [`Lexicon::load_dump`].
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::MalformedDump`] if the string is not a record.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LexiconError::MalformedDump {
            reason: e.to_string(),
        })
    }
}

/// Duplicate-key policy applied while loading a dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// A later pair with an equal key overwrites the earlier value and keeps
    /// the earlier position.
    #[default]
    Overwrite,
    /// A repeated key fails the load with [`LexiconError::DuplicateKey`].
    Strict,
}

/// Header line for a lexicon of `count` entries.
#[must_use]
pub fn header(count: usize) -> String {
    format!("LEXICON of {count} items:")
}

// ---------------------------------------------------------------------------
// Dump & load
// ---------------------------------------------------------------------------

impl Lexicon {
    /// Produces the serialized form of this lexicon.
    #[must_use]
    pub fn dump(&self) -> DumpRecord {
        let mut entries = Vec::with_capacity(self.len() * 2);
        for (key, value) in self {
            entries.push(encode(key));
            entries.push(encode(value));
        }
        DumpRecord {
            header: header(self.len()),
            entries,
            case_sensitive: Some(self.is_case_sensitive()),
        }
    }

    /// Replaces the contents with the entries of `record`.
    ///
    /// The comparison mode is kept. Pairs are inserted without duplicate
    /// checking; see [`LoadPolicy::Overwrite`].
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::MalformedDump`] if the sequence has odd length
    /// or an element fails to decode. The lexicon is restored to its state
    /// before the call.
    pub fn load_dump(&mut self, record: &DumpRecord) -> Result<()> {
        self.load_dump_with(record, LoadPolicy::default())
    }

    /// Replaces the contents with the entries of `record`, applying `policy`
    /// to repeated keys.
    ///
    /// # Errors
    ///
    /// As [`load_dump`](Self::load_dump); under [`LoadPolicy::Strict`] also
    /// [`LexiconError::DuplicateKey`]. The lexicon is restored on failure.
    pub fn load_dump_with(&mut self, record: &DumpRecord, policy: LoadPolicy) -> Result<()> {
        let saved = self.checkpoint();
        self.clear();
        if let Err(err) = self.fill_from(record, policy) {
            tracing::warn!(error = %err, "Rejected lexicon dump");
            self.rollback(saved);
            return Err(err);
        }
        tracing::debug!(
            count = self.len(),
            pairs = record.pair_count(),
            mode = %self.mode(),
            "Loaded lexicon dump"
        );
        Ok(())
    }

    /// Builds a new lexicon with the given mode from `record`.
    ///
    /// # Errors
    ///
    /// As [`load_dump`](Self::load_dump).
    pub fn from_dump(record: &DumpRecord, mode: ComparisonMode) -> Result<Self> {
        let mut lex = Self::with_mode(mode);
        lex.load_dump(record)?;
        Ok(lex)
    }

    /// Returns the textual dump: the header followed by one line per entry.
    #[must_use]
    pub fn dump_string(&self) -> String {
        self.to_string()
    }

    fn fill_from(&mut self, record: &DumpRecord, policy: LoadPolicy) -> Result<()> {
        let len = record.entries.len();
        if len % 2 != 0 {
            return Err(LexiconError::MalformedDump {
                reason: format!("expected an even number of elements, got {len}"),
            });
        }
        for (i, pair) in record.entries.chunks_exact(2).enumerate() {
            let key = decode(&pair[0], 2 * i)?;
            let value = decode(&pair[1], 2 * i + 1)?;
            match policy {
                LoadPolicy::Overwrite => self.set(key, value),
                LoadPolicy::Strict => self.add(key, value)?,
            }
        }
        Ok(())
    }
}

/// Builds the externally tagged encoding of `value`, matching its serde
/// derive, without going through a fallible serializer.
fn encode(value: &Value) -> serde_json::Value {
    let (tag, inner) = match value {
        Value::Bool(b) => ("Bool", serde_json::Value::Bool(*b)),
        Value::Int(n) => ("Int", serde_json::Value::from(*n)),
        Value::Float(x) => (
            "Float",
            serde_json::Number::from_f64(*x).map_or_else(
                || serde_json::Value::from(float_repr::non_finite_label(*x)),
                serde_json::Value::Number,
            ),
        ),
        Value::Text(s) => ("Text", serde_json::Value::from(s.as_str())),
        Value::List(items) => ("List", items.iter().map(encode).collect()),
        Value::Lexicon(lex) => ("Lexicon", lex.dump().into_json()),
    };
    let mut tagged = serde_json::Map::new();
    tagged.insert(tag.to_string(), inner);
    serde_json::Value::Object(tagged)
}

fn decode(element: &serde_json::Value, index: usize) -> Result<Value> {
    Value::deserialize(element).map_err(|e| LexiconError::MalformedDump {
        reason: format!("element {index}: {e}"),
    })
}

// ---------------------------------------------------------------------------
// Serde — nested lexicons travel as their dump record
// ---------------------------------------------------------------------------

impl Serialize for Lexicon {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.dump().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Lexicon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = DumpRecord::deserialize(deserializer)?;
        let mode = record
            .case_sensitive
            .map_or_else(ComparisonMode::default, ComparisonMode::from);
        Self::from_dump(&record, mode).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Textual dump
// ---------------------------------------------------------------------------

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lexicon(f, self, 0)
    }
}

/// Writes `value` as it appears inside a textual dump at nesting `depth`.
///
/// Text is quoted; lists and lexicons expand to a header plus one indented
/// line per element.
pub(crate) fn write_value(out: &mut impl Write, value: &Value, depth: usize) -> fmt::Result {
    match value {
        Value::Text(s) => write!(out, "{s:?}"),
        Value::List(items) => {
            write!(out, "LIST of {} items:", items.len())?;
            for (i, item) in items.iter().enumerate() {
                write_line_prefix(out, depth + 1)?;
                write!(out, "[{i}] = ")?;
                write_value(out, item, depth + 1)?;
            }
            Ok(())
        }
        Value::Lexicon(lex) => write_lexicon(out, lex, depth),
        scalar => write!(out, "{scalar}"),
    }
}

fn write_lexicon(out: &mut impl Write, lex: &Lexicon, depth: usize) -> fmt::Result {
    out.write_str(&header(lex.len()))?;
    for (key, value) in lex {
        write_line_prefix(out, depth + 1)?;
        out.write_char('[')?;
        write_value(out, key, depth + 1)?;
        out.write_str("] = ")?;
        write_value(out, value, depth + 1)?;
    }
    Ok(())
}

fn write_line_prefix(out: &mut impl Write, depth: usize) -> fmt::Result {
    write!(out, "\n{:width$}", "", width = depth * INDENT)
}
