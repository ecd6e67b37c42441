//! Integer-index access for hosts that address every collection by index.
//!
//! This is an adapter over the keyed API, not a positional one: index `i`
//! means the key `Value::Int(i)`, not the `i`-th entry in insertion order.

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::value::Value;

/// Collections addressable with an integer index.
pub trait Indexable {
    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is stored at `index`.
    fn get_index(&self, index: i64) -> Result<&Value>;

    /// Stores `value` at `index`.
    fn set_index(&mut self, index: i64, value: Value);
}

impl Indexable for Lexicon {
    fn get_index(&self, index: i64) -> Result<&Value> {
        self.get(&Value::from(index))
    }

    fn set_index(&mut self, index: i64, value: Value) {
        self.set(Value::from(index), value);
    }
}
