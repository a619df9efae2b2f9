//! Global interner for symbol names
//!
//! Symbol names live in a process-wide table; atoms carry only a small
//! copyable handle.

use once_cell::sync::Lazy;
use std::fmt;
use std::sync::RwLock;
use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

static NAMES: Lazy<RwLock<StringInterner<DefaultBackend>>> =
    Lazy::new(|| RwLock::new(StringInterner::default()));

/// Handle to an interned symbol name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolName(DefaultSymbol);

impl SymbolName {
    /// Intern `name`, returning the existing handle if it was seen before.
    pub fn intern(name: &str) -> Self {
        if let Some(symbol) = NAMES.read().ok().and_then(|names| names.get(name)) {
            return SymbolName(symbol);
        }
        let mut names = NAMES.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        SymbolName(names.get_or_intern(name))
    }

    /// Run `f` with the name as a string slice, without allocating.
    pub fn with_str<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&str) -> R,
    {
        let names = NAMES.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        // Handles are only ever produced by `intern`, so resolution cannot miss.
        f(names.resolve(self.0).unwrap_or_default())
    }

    /// Owned copy of the name.
    pub fn as_string(&self) -> String {
        self.with_str(str::to_string)
    }

    pub fn is(&self, name: &str) -> bool {
        self.with_str(|s| s == name)
    }
}

impl fmt::Display for SymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|s| f.write_str(s))
    }
}
