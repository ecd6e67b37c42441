//! Suffix table exposed to the scripting host.
//!
//! Each suffix is a thin pass-through to a [`Lexicon`] operation. Names are
//! matched case-insensitively, and `CASE` is an alias of `CASESENSITIVE`.

use std::str::FromStr;

use crate::comparer::ComparisonMode;
use crate::error::{LexiconError, Result};
use crate::lexicon::Lexicon;
use crate::value::Value;

/// Built-in lexicon suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suffix {
    /// `CLEAR()`: removes all entries
    Clear,
    /// `KEYS`: list of keys in insertion order
    Keys,
    /// `VALUES`: list of values in insertion order
    Values,
    /// `HASKEY(key)`
    HasKey,
    /// `HASVALUE(value)`
    HasValue,
    /// `LENGTH`: entry count
    Length,
    /// `COPY`: independent copy
    Copy,
    /// `ADD(key, value)`: strict insert
    Add,
    /// `REMOVE(key)`
    Remove,
    /// `DUMP`: textual dump
    Dump,
    /// `CASESENSITIVE` / `CASE`: comparison mode, settable
    CaseSensitive,
}

impl Suffix {
    /// Every built-in suffix.
    pub const ALL: [Self; 11] = [
        Self::Clear,
        Self::Keys,
        Self::Values,
        Self::HasKey,
        Self::HasValue,
        Self::Length,
        Self::Copy,
        Self::Add,
        Self::Remove,
        Self::Dump,
        Self::CaseSensitive,
    ];

    /// Looks up a suffix by name, ignoring ASCII case.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("CASE") {
            return Some(Self::CaseSensitive);
        }
        Self::ALL
            .into_iter()
            .find(|suffix| suffix.name().eq_ignore_ascii_case(name))
    }

    /// Canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clear => "CLEAR",
            Self::Keys => "KEYS",
            Self::Values => "VALUES",
            Self::HasKey => "HASKEY",
            Self::HasValue => "HASVALUE",
            Self::Length => "LENGTH",
            Self::Copy => "COPY",
            Self::Add => "ADD",
            Self::Remove => "REMOVE",
            Self::Dump => "DUMP",
            Self::CaseSensitive => "CASESENSITIVE",
        }
    }

    /// Number of arguments taken when called.
    ///
    /// `CASESENSITIVE` reports 1, its setter arity; it may also be called
    /// with no arguments to read the mode.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Clear
            | Self::Keys
            | Self::Values
            | Self::Length
            | Self::Copy
            | Self::Dump => 0,
            Self::HasKey | Self::HasValue | Self::Remove | Self::CaseSensitive => 1,
            Self::Add => 2,
        }
    }

    /// Returns `true` if the suffix can be read without calling it.
    #[must_use]
    pub const fn is_property(self) -> bool {
        matches!(
            self,
            Self::Keys
                | Self::Values
                | Self::Length
                | Self::Copy
                | Self::Dump
                | Self::CaseSensitive
        )
    }
}

impl FromStr for Suffix {
    type Err = LexiconError;

    fn from_str(name: &str) -> Result<Self> {
        Self::lookup(name).ok_or_else(|| LexiconError::UnknownSuffix {
            name: name.to_string(),
        })
    }
}

/// Checks the argument count and destructures the arguments.
fn take<const N: usize>(suffix: Suffix, args: Vec<Value>) -> Result<[Value; N]> {
    <[Value; N]>::try_from(args).map_err(|args| LexiconError::ArgumentCount {
        name: suffix.name(),
        expected: N,
        actual: args.len(),
    })
}

fn len_value(len: usize) -> Value {
    Value::Int(i64::try_from(len).unwrap_or(i64::MAX))
}

impl Lexicon {
    /// Invokes a suffix by name.
    ///
    /// Returns `Ok(None)` for suffixes that produce no value (`CLEAR`, `ADD`,
    /// and the `CASESENSITIVE` setter).
    ///
    /// # Errors
    ///
    /// [`LexiconError::UnknownSuffix`] for unknown names,
    /// [`LexiconError::ArgumentCount`] for a wrong number of arguments, and
    /// whatever the underlying operation returns.
    pub fn call_suffix(&mut self, name: &str, args: Vec<Value>) -> Result<Option<Value>> {
        let suffix: Suffix = name.parse()?;
        let result = match suffix {
            Suffix::Clear => {
                take::<0>(suffix, args)?;
                self.clear();
                None
            }
            Suffix::Keys => {
                take::<0>(suffix, args)?;
                Some(Value::List(self.keys()))
            }
            Suffix::Values => {
                take::<0>(suffix, args)?;
                Some(Value::List(self.values()))
            }
            Suffix::HasKey => {
                let [key] = take(suffix, args)?;
                Some(Value::Bool(self.contains_key(&key)))
            }
            Suffix::HasValue => {
                let [value] = take(suffix, args)?;
                Some(Value::Bool(self.contains_value(&value)))
            }
            Suffix::Length => {
                take::<0>(suffix, args)?;
                Some(len_value(self.len()))
            }
            Suffix::Copy => {
                take::<0>(suffix, args)?;
                Some(Value::Lexicon(self.copy()))
            }
            Suffix::Add => {
                let [key, value] = take(suffix, args)?;
                self.add(key, value)?;
                None
            }
            Suffix::Remove => {
                let [key] = take(suffix, args)?;
                Some(Value::Bool(self.remove(&key)))
            }
            Suffix::Dump => {
                take::<0>(suffix, args)?;
                Some(Value::Text(self.dump_string()))
            }
            Suffix::CaseSensitive if args.is_empty() => Some(Value::Bool(self.is_case_sensitive())),
            Suffix::CaseSensitive => {
                let [flag] = take(suffix, args)?;
                self.set_suffix(suffix.name(), &flag)?;
                None
            }
        };
        Ok(result)
    }

    /// Reads a suffix as a property.
    ///
    /// Names that are not built-in suffixes fall back to a lookup of the text
    /// key with that name under the active mode.
    ///
    /// # Errors
    ///
    /// [`LexiconError::NotAProperty`] for method suffixes, and
    /// [`LexiconError::UnknownSuffix`] if neither a suffix nor a text key
    /// matches.
    pub fn get_suffix(&self, name: &str) -> Result<Value> {
        let Some(suffix) = Suffix::lookup(name) else {
            return self
                .try_get(&Value::Text(name.to_string()))
                .cloned()
                .ok_or_else(|| LexiconError::UnknownSuffix {
                    name: name.to_string(),
                });
        };
        match suffix {
            Suffix::Keys => Ok(Value::List(self.keys())),
            Suffix::Values => Ok(Value::List(self.values())),
            Suffix::Length => Ok(len_value(self.len())),
            Suffix::Copy => Ok(Value::Lexicon(self.copy())),
            Suffix::Dump => Ok(Value::Text(self.dump_string())),
            Suffix::CaseSensitive => Ok(Value::Bool(self.is_case_sensitive())),
            Suffix::Clear | Suffix::HasKey | Suffix::HasValue | Suffix::Add | Suffix::Remove => {
                Err(LexiconError::NotAProperty {
                    name: suffix.name(),
                })
            }
        }
    }

    /// Assigns a suffix. Only `CASESENSITIVE` / `CASE` is settable.
    ///
    /// Assigning a different mode discards every entry, as
    /// [`set_mode`](Self::set_mode) does.
    ///
    /// # Errors
    ///
    /// [`LexiconError::TypeMismatch`] if the value is not a `Bool`,
    /// [`LexiconError::ReadOnlySuffix`] for other built-in suffixes and
    /// [`LexiconError::UnknownSuffix`] for unknown names.
    pub fn set_suffix(&mut self, name: &str, value: &Value) -> Result<()> {
        let suffix: Suffix = name.parse()?;
        if suffix != Suffix::CaseSensitive {
            return Err(LexiconError::ReadOnlySuffix {
                name: suffix.name(),
            });
        }
        let Some(case_sensitive) = value.as_bool() else {
            return Err(LexiconError::TypeMismatch {
                name: suffix.name(),
                expected: "bool",
                actual: value.type_name(),
            });
        };
        self.set_mode(ComparisonMode::from(case_sensitive));
        Ok(())
    }
}
