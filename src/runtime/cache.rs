//! Fetch-once slots for remote facts.
//!
//! Every expensive fact a module record learns about its module sits in a [`RemoteCache`]. A
//! slot starts out unfetched, and the first access runs the fetch exactly once. The outcome is
//! kept whether the fetch produced a value or not: a failed symbol lookup is remembered as
//! absent and never retried for the lifetime of the record.

use std::{fmt, sync::OnceLock};

use strum::{Display, EnumIter};

use crate::Result;

/// The lazily fetched facts of a module record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CacheField {
    /// Image size from the loader's records
    ImageSize,
    /// Decoded `DebuggableAttribute` modes
    DebuggingMode,
    /// Symbol-file descriptor from the image's debug directory
    SymbolFile,
    /// The runtime's metadata importer for the module
    MetadataImport,
}

/// Observable state of a [`RemoteCache`] slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CacheState {
    /// The fetch has not run yet
    Unfetched,
    /// The fetch ran and produced a value
    Present,
    /// The fetch ran and produced nothing
    Absent,
}

enum Fetched<T> {
    Value(T),
    Absent,
}

impl<T> Fetched<T> {
    fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Fetched::Value(value),
            None => Fetched::Absent,
        }
    }

    fn value(&self) -> Option<&T> {
        match self {
            Fetched::Value(value) => Some(value),
            Fetched::Absent => None,
        }
    }
}

/// A slot that is fetched at most once and remembers absent results
pub struct RemoteCache<T> {
    slot: OnceLock<Fetched<T>>,
}

impl<T> RemoteCache<T> {
    /// Creates an unfetched slot
    #[must_use]
    pub const fn new() -> Self {
        RemoteCache {
            slot: OnceLock::new(),
        }
    }

    /// Current state of the slot
    #[must_use]
    pub fn state(&self) -> CacheState {
        match self.slot.get() {
            None => CacheState::Unfetched,
            Some(Fetched::Value(_)) => CacheState::Present,
            Some(Fetched::Absent) => CacheState::Absent,
        }
    }

    /// The cached value, without fetching
    #[must_use]
    pub fn cached(&self) -> Option<&T> {
        self.slot.get().and_then(Fetched::value)
    }

    /// Stores the outcome of a fetch done elsewhere. A slot that is already filled keeps its
    /// first outcome.
    pub fn fill(&self, value: Option<T>) -> Option<&T> {
        self.slot
            .get_or_init(|| Fetched::from_option(value))
            .value()
    }

    /// Returns the cached value, running `fetch` if the slot is unfetched
    pub fn get_or_fetch<F>(&self, fetch: F) -> Option<&T>
    where
        F: FnOnce() -> Option<T>,
    {
        self.slot
            .get_or_init(|| Fetched::from_option(fetch()))
            .value()
    }

    /// Returns the cached value, running the fallible `fetch` if the slot is unfetched.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `fetch`. The slot stays unfetched in that case, so the
    /// next call fetches again.
    pub fn get_or_try_fetch<F>(&self, fetch: F) -> Result<Option<&T>>
    where
        F: FnOnce() -> Result<Option<T>>,
    {
        if let Some(fetched) = self.slot.get() {
            return Ok(fetched.value());
        }

        let fetched = Fetched::from_option(fetch()?);
        Ok(self.slot.get_or_init(|| fetched).value())
    }
}

impl<T> Default for RemoteCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RemoteCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteCache")
            .field("state", &self.state())
            .finish()
    }
}
