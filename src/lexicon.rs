//! Order-preserving lexicon with a swappable key comparer.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops;

use indexmap::IndexMap;
use indexmap::map::Entry as Slot;

use crate::comparer::{ComparisonMode, KeyComparer};
use crate::error::{LexiconError, Result};
use crate::iter::Iter;
use crate::value::Value;

/// Key-value pair as stored, with the key in its original spelling.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) key: Value,
    pub(crate) value: Value,
}

/// Saved lexicon state for rollback.
///
/// Created by [`Lexicon::checkpoint`]. Restoring via [`Lexicon::rollback`]
/// discards all changes made after the checkpoint, mode switches included.
#[derive(Clone)]
pub struct LexiconCheckpoint {
    mode: ComparisonMode,
    entries: IndexMap<Value, Entry>,
}

impl fmt::Debug for LexiconCheckpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconCheckpoint")
            .field("mode", &self.mode)
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

/// Ordered associative container keyed by [`Value`].
///
/// Entries are kept in insertion order. Key lookup goes through the active
/// [`KeyComparer`]; under [`ComparisonMode::CaseInsensitive`] (the default)
/// `"Alpha"` and `"ALPHA"` address the same entry.
///
/// Internally entries are indexed by their normalized key, so the comparer's
/// equality and hash are applied exactly once per operation.
#[derive(Clone)]
pub struct Lexicon {
    comparer: &'static dyn KeyComparer,
    entries: IndexMap<Value, Entry>,
}

// ---------------------------------------------------------------------------
// Construction & accessors
// ---------------------------------------------------------------------------

impl Lexicon {
    /// Creates an empty, case-insensitive lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(ComparisonMode::default())
    }

    /// Creates an empty lexicon using the given comparison mode.
    #[must_use]
    pub fn with_mode(mode: ComparisonMode) -> Self {
        Self {
            comparer: mode.comparer(),
            entries: IndexMap::new(),
        }
    }

    /// Builds a lexicon from an alternating `key, value, key, value, ...`
    /// sequence, the way scripts construct one.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::OddArgumentCount`] if a key has no value, and
    /// [`LexiconError::DuplicateKey`] if a key repeats.
    pub fn from_flat(items: impl IntoIterator<Item = Value>) -> Result<Self> {
        let items: Vec<Value> = items.into_iter().collect();
        if items.len() % 2 != 0 {
            return Err(LexiconError::OddArgumentCount { count: items.len() });
        }
        let mut lex = Self::new();
        let mut items = items.into_iter();
        while let (Some(key), Some(value)) = (items.next(), items.next()) {
            lex.add(key, value)?;
        }
        Ok(lex)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the lexicon contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the active comparison mode.
    #[must_use]
    pub fn mode(&self) -> ComparisonMode {
        self.comparer.mode()
    }

    /// Returns `true` if text keys are compared exactly.
    #[must_use]
    pub fn is_case_sensitive(&self) -> bool {
        self.mode().is_case_sensitive()
    }

    /// Returns the active key comparer.
    #[must_use]
    pub fn comparer(&self) -> &'static dyn KeyComparer {
        self.comparer
    }

    /// Switches the comparison mode.
    ///
    /// Switching to a different mode **discards every entry**: keys that were
    /// distinct under the old mode may collide under the new one. Setting the
    /// current mode again is a no-op.
    pub fn set_mode(&mut self, mode: ComparisonMode) {
        if mode == self.mode() {
            return;
        }
        tracing::debug!(
            from = %self.mode(),
            to = %mode,
            discarded = self.len(),
            "Switching lexicon comparison mode"
        );
        self.comparer = mode.comparer();
        self.entries = IndexMap::new();
    }

    /// Saves the current state for later rollback.
    #[must_use]
    pub fn checkpoint(&self) -> LexiconCheckpoint {
        LexiconCheckpoint {
            mode: self.mode(),
            entries: self.entries.clone(),
        }
    }

    /// Restores the lexicon to a previously saved checkpoint.
    pub fn rollback(&mut self, cp: LexiconCheckpoint) {
        self.comparer = cp.mode.comparer();
        self.entries = cp.entries;
    }
}

// ---------------------------------------------------------------------------
// Read operations
// ---------------------------------------------------------------------------

impl Lexicon {
    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::KeyNotFound`] if no entry matches under the
    /// active mode.
    pub fn get(&self, key: &Value) -> Result<&Value> {
        self.try_get(key).ok_or_else(|| LexiconError::KeyNotFound {
            key: key.clone(),
            mode: self.mode(),
        })
    }

    /// Returns the value stored under `key`, or `None` if absent.
    #[must_use]
    pub fn try_get(&self, key: &Value) -> Option<&Value> {
        let slot = self.comparer.normalize(key);
        self.entries.get(&*slot).map(|e| &e.value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &Value) -> Option<&mut Value> {
        let slot = self.comparer.normalize(key);
        self.entries.get_mut(&*slot).map(|e| &mut e.value)
    }

    /// Returns `true` if an entry matches `key` under the active mode.
    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.entries.contains_key(&*self.comparer.normalize(key))
    }

    /// Returns `true` if any entry holds `value`.
    ///
    /// Values are compared with plain [`Value`] equality; the comparison mode
    /// only applies to keys.
    #[must_use]
    pub fn contains_value(&self, value: &Value) -> bool {
        self.entries.values().any(|e| e.value == *value)
    }

    /// Returns a snapshot of all keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<Value> {
        self.entries.values().map(|e| e.key.clone()).collect()
    }

    /// Returns a snapshot of all values in insertion order.
    #[must_use]
    pub fn values(&self) -> Vec<Value> {
        self.entries.values().map(|e| e.value.clone()).collect()
    }

    /// Returns an independent copy with the same mode, entries and order.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

// ---------------------------------------------------------------------------
// Write operations
// ---------------------------------------------------------------------------

impl Lexicon {
    /// Inserts or overwrites an entry.
    ///
    /// A new key is appended at the end. An existing key keeps its position
    /// and its original spelling; only the value is replaced.
    pub fn set(&mut self, key: Value, value: Value) {
        let slot = self.comparer.normalize(&key).into_owned();
        match self.entries.entry(slot) {
            Slot::Occupied(mut occupied) => occupied.get_mut().value = value,
            Slot::Vacant(vacant) => {
                vacant.insert(Entry { key, value });
            }
        }
    }

    /// Appends a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::DuplicateKey`] if the key is already present
    /// under the active mode. The lexicon is left unchanged.
    pub fn add(&mut self, key: Value, value: Value) -> Result<()> {
        let slot = self.comparer.normalize(&key).into_owned();
        match self.entries.entry(slot) {
            Slot::Occupied(_) => Err(LexiconError::DuplicateKey {
                key,
                mode: self.comparer.mode(),
            }),
            Slot::Vacant(vacant) => {
                vacant.insert(Entry { key, value });
                Ok(())
            }
        }
    }

    /// Removes the entry matching `key`. Returns `true` if it was present.
    ///
    /// The remaining entries keep their relative order.
    pub fn remove(&mut self, key: &Value) -> bool {
        let slot = self.comparer.normalize(key);
        self.entries.shift_remove(&*slot).is_some()
    }

    /// Removes all entries. The comparison mode is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// ---------------------------------------------------------------------------
// Iteration
// ---------------------------------------------------------------------------

impl Lexicon {
    /// Returns an iterator over `(&key, &value)` pairs in insertion order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.entries.values())
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("mode", &self.mode())
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a>(&'a Lexicon);

impl fmt::Debug for DebugEntries<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

/// Two lexicons are equal when they share a mode and hold equal entries in
/// the same order.
impl PartialEq for Lexicon {
    fn eq(&self, other: &Self) -> bool {
        self.mode() == other.mode()
            && self.len() == other.len()
            && self.iter().eq(other.iter())
    }
}

impl Eq for Lexicon {}

impl Hash for Lexicon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mode().hash(state);
        self.len().hash(state);
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl Extend<(Value, Value)> for Lexicon {
    fn extend<I: IntoIterator<Item = (Value, Value)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl FromIterator<(Value, Value)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut lex = Self::new();
        lex.extend(iter);
        lex
    }
}

impl ops::Index<&Value> for Lexicon {
    type Output = Value;

    fn index(&self, key: &Value) -> &Value {
        match self.try_get(key) {
            Some(value) => value,
            None => panic!("key not found: {key}"),
        }
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = (&'a Value, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
