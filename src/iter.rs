//! Iterator types for lexicons.

use indexmap::map::Values;

use crate::lexicon::Entry;
use crate::value::Value;

/// Iterator over `(&key, &value)` pairs of a [`Lexicon`](crate::Lexicon),
/// in insertion order.
///
/// Keys are yielded in their original spelling, not their normalized form.
pub struct Iter<'a> {
    inner: Values<'a, Value, Entry>,
}

impl<'a> Iter<'a> {
    pub(crate) const fn new(inner: Values<'a, Value, Entry>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Value, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|e| (&e.key, &e.value))
    }
}

impl ExactSizeIterator for Iter<'_> {}
