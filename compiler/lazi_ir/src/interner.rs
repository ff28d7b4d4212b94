//! String interner for identifier storage.
//!
//! Maps identifier text to a single canonical [`Name`] per unique content.
//! Once interned, a string lives as long as the process; callers compare
//! `Name`s instead of bytes.
//!
//! The scan-then-insert sequence runs under one `RwLock`: lookups of
//! already-seen text take the read lock, and insertion re-checks under the
//! write lock so concurrent writers can never produce two names for the
//! same text.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{GrowBuffer, Name};

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// Table exceeded the `u32` index space.
    #[error("interner exceeded capacity: {count} strings, max is {max}", max = u32::MAX)]
    Overflow { count: usize },
}

/// Interned strings plus the index from content to table position.
struct InternTable {
    /// Map from string content to table index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: GrowBuffer<&'static str>,
}

impl InternTable {
    fn with_empty() -> Self {
        let mut table = InternTable {
            map: FxHashMap::default(),
            strings: GrowBuffer::new(),
        };
        // Pre-intern empty string at index 0
        let empty: &'static str = "";
        table.map.insert(empty, Name::EMPTY.raw());
        table.strings.push(empty);
        table
    }
}

/// String interner.
///
/// Content-equal strings always intern to the same [`Name`]; content-unequal
/// strings always intern to different ones.
///
/// # Thread Safety
/// Uses a single `RwLock` around the table. Wrap in [`SharedInterner`] to
/// hand out owned handles across threads.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner holding only the empty string.
    pub fn new() -> Self {
        StringInterner {
            table: RwLock::new(InternTable::with_empty()),
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    ///
    /// The text is copied into storage owned by the interner, so `s` may
    /// point into a transient buffer.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: check if already interned
        {
            let guard = self.table.read();
            if let Some(&index) = guard.map.get(s) {
                return Ok(Name::new(index));
            }
        }

        // Slow path: need to insert
        let mut guard = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::new(index));
        }

        let count = guard.strings.len();
        let index = u32::try_from(count).map_err(|_| InternError::Overflow { count })?;

        // Leak the string to get 'static lifetime
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        trace!(index, text = leaked, "interned new string");

        Ok(Name::new(index))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds `u32::MAX` strings.
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the string for a Name.
    ///
    /// All interned strings are leaked, so the reference is `'static`.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner and lies past the
    /// end of its table.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.table.read();
        guard.strings[name.index()]
    }

    /// Get the number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Check if the interner holds nothing beyond the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for looking up interned string names.
///
/// Lets display code accept any interner handle without depending on how
/// it is shared.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

/// Shared interner for a session that hands out owned handles.
///
/// Cloning shares the same table, so names produced through any clone are
/// interchangeable.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl StringLookup for SharedInterner {
    fn lookup(&self, name: Name) -> &str {
        self.0.lookup(name)
    }
}
