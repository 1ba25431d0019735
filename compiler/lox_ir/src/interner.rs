//! String interner for identifiers and string literals.
//!
//! Interned strings are leaked to obtain a `'static` lifetime, so a resolved
//! name can be stored in runtime objects (function and class names) without
//! holding a borrow on the interner.
//!
//! A `Name` is a `u32` index, so one interner holds at most `u32::MAX`
//! strings, and none are ever freed. Input-driven callers such as the lexer
//! go through [`StringInterner::try_intern`] and report a full table as an
//! error; [`StringInterner::intern`] panics instead.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Largest number of strings a `Name` can index.
const MAX_NAMES: usize = u32::MAX as usize;

/// Names every interner starts with, in index order.
const PREINTERNED: [(&str, Name); 4] = [
    ("", Name::EMPTY),
    ("this", Name::THIS),
    ("init", Name::INIT),
    ("super", Name::SUPER),
];

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// The table already holds its limit of strings.
    Overflow { count: usize },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternError::Overflow { count } => {
                write!(f, "interner exceeded capacity: {count} strings")
            }
        }
    }
}

impl std::error::Error for InternError {}

/// Storage behind the interner lock.
struct InternTable {
    /// Map from string content to its name.
    map: FxHashMap<&'static str, Name>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<&'static str>,
    /// Most strings the table accepts, pre-interned ones included.
    limit: usize,
}

/// String interner.
///
/// Uses a single `RwLock` so lookups from the evaluator never block each
/// other; interning only takes the write lock on a miss.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner with the empty string and the names the
    /// evaluator resolves on every method call pre-interned.
    pub fn new() -> Self {
        Self::with_limit(MAX_NAMES)
    }

    /// An interner that refuses new strings once it holds `limit` of them.
    ///
    /// The pre-interned names are always present and count toward the
    /// limit. `limit` is capped at `u32::MAX`.
    pub fn with_limit(limit: usize) -> Self {
        let map = PREINTERNED.iter().copied().collect();
        let strings = PREINTERNED.iter().map(|&(s, _)| s).collect();
        StringInterner {
            table: RwLock::new(InternTable {
                map,
                strings,
                limit: limit.min(MAX_NAMES),
            }),
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: already interned
        if let Some(&name) = self.table.read().map.get(s) {
            return Ok(name);
        }

        let mut guard = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&name) = guard.map.get(s) {
            return Ok(name);
        }

        let count = guard.strings.len();
        if count >= guard.limit {
            return Err(InternError::Overflow { count });
        }
        let index = u32::try_from(count).map_err(|_| InternError::Overflow { count })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::from_raw(index);
        guard.strings.push(leaked);
        guard.map.insert(leaked, name);
        Ok(name)
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics when the table is full: `u32::MAX` strings, or the limit given
    /// to [`StringInterner::with_limit`]. Use [`StringInterner::try_intern`]
    /// for strings that come from user input.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the string for a Name.
    ///
    /// Names are only created by this interner, so the index is always valid
    /// for names produced by the same instance. A foreign name resolves to
    /// the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("")
    }

    /// Number of interned strings (including the empty string).
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}

/// Cheaply clonable handle to a shared interner.
///
/// The lexer, parser, evaluator and driver all hold one of these so that a
/// `Name` produced in one phase resolves identically in every other.
#[derive(Clone, Debug, Default)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a handle around a fresh interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Deref for SharedInterner {
    type Target = StringInterner;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
