//! Error types for lexicon operations.

use thiserror::Error;

use crate::{ComparisonMode, Value};

/// Result alias for lexicon operations.
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Structured errors raised by lexicon operations.
///
/// Every variant is local to the operation that raised it; the lexicon is
/// left in its prior state.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LexiconError {
    /// `add` was called with a key that is already present
    #[error("key '{key}' is already present in the {mode} lexicon")]
    DuplicateKey {
        /// The rejected key
        key: Value,
        /// Mode under which the key collided
        mode: ComparisonMode,
    },

    /// Direct lookup of a key that is not present
    #[error("key '{key}' is not present in the {mode} lexicon")]
    KeyNotFound {
        /// The missing key
        key: Value,
        /// Mode under which the lookup ran
        mode: ComparisonMode,
    },

    /// A dump record could not be loaded
    #[error("malformed lexicon dump: {reason}")]
    MalformedDump {
        /// What was wrong with the record
        reason: String,
    },

    /// Flat key/value construction with an unpaired trailing key
    #[error("a lexicon needs an even number of key/value arguments, got {count}")]
    OddArgumentCount {
        /// Number of arguments received
        count: usize,
    },

    /// No built-in suffix (or text key) with this name
    #[error("lexicon has no suffix named '{name}'")]
    UnknownSuffix {
        /// Name as given by the caller
        name: String,
    },

    /// A method suffix was read as a property
    #[error("suffix {name} is a method and cannot be read as a property")]
    NotAProperty {
        /// Canonical suffix name
        name: &'static str,
    },

    /// A suffix was called with the wrong number of arguments
    #[error("suffix {name} takes {expected} argument(s), got {actual}")]
    ArgumentCount {
        /// Canonical suffix name
        name: &'static str,
        /// Number of arguments the suffix takes
        expected: usize,
        /// Number of arguments received
        actual: usize,
    },

    /// A suffix argument had the wrong variant
    #[error("suffix {name} expects a {expected} argument, got {actual}")]
    TypeMismatch {
        /// Canonical suffix name
        name: &'static str,
        /// Expected value variant
        expected: &'static str,
        /// Variant actually received
        actual: &'static str,
    },

    /// A suffix was assigned that cannot be set
    #[error("suffix {name} is read-only")]
    ReadOnlySuffix {
        /// Canonical suffix name
        name: &'static str,
    },
}

impl LexiconError {
    /// Check if this error indicates a missing key
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }

    /// Check if this error indicates a duplicate key
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// Check if this error came from loading a dump
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedDump { .. })
    }

    /// Check if this error came from the scripting suffix surface
    #[must_use]
    pub const fn is_suffix_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownSuffix { .. }
                | Self::NotAProperty { .. }
                | Self::ArgumentCount { .. }
                | Self::TypeMismatch { .. }
                | Self::ReadOnlySuffix { .. }
        )
    }
}
