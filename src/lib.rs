//! Order-preserving lexicon with case-configurable key comparison.
//!
//! A [`Lexicon`] maps [`Value`] keys to [`Value`] values and remembers
//! insertion order. Key equality is delegated to a swappable
//! [`KeyComparer`]:
//!
//! - **Case-insensitive** (default): text keys match regardless of case.
//! - **Case-sensitive**: text keys match exactly.
//!
//! Keys of different variants never match (`"1"` is not `1`), and equal keys
//! always hash equal under either comparer. Switching the comparison mode
//! empties the lexicon.
//!
//! Lexicons serialize to a [`DumpRecord`], a header plus a flat
//! key/value sequence, and load back from one in the same order.
//!
//! ```
//! use lexicon::{Lexicon, Value};
//!
//! let mut lex = Lexicon::new();
//! lex.add("Alpha".into(), 1.into()).unwrap();
//! lex.add("beta".into(), 2.into()).unwrap();
//!
//! assert!(lex.contains_key(&"ALPHA".into()));
//! assert_eq!(lex.keys(), vec![Value::from("Alpha"), Value::from("beta")]);
//! assert_eq!(lex.dump().header, "LEXICON of 2 items:");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod comparer;
pub mod dump;
pub mod error;
pub mod hash;
pub mod indexable;
pub mod iter;
pub mod suffix;
pub mod value;

mod lexicon;

#[cfg(test)]
mod tests;

pub use comparer::{CaseInsensitiveComparer, CaseSensitiveComparer, ComparisonMode, KeyComparer};
pub use dump::{DumpRecord, LoadPolicy};
pub use error::{LexiconError, Result};
pub use indexable::Indexable;
pub use lexicon::{Lexicon, LexiconCheckpoint};
pub use suffix::Suffix;
pub use value::Value;
