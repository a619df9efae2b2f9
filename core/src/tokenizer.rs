//! Word-to-atom table
//!
//! Every bare word read by the lexer is offered to the registered entries,
//! most recently registered first. The first entry whose regex matches the
//! whole word builds the atom; unmatched words become symbols.

use regex::Regex;
use std::fmt;
use std::rc::Rc;

use crate::atom::{Atom, Grounded};
use crate::error::{MettaError, Result};

pub type AtomConstructor = dyn Fn(&str) -> Result<Atom>;

struct Entry {
    regex: Regex,
    constructor: Rc<AtomConstructor>,
}

pub struct Tokenizer {
    entries: Vec<Entry>,
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.regex.as_str()))
            .finish()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Empty table: every word is a symbol.
    pub fn empty() -> Self {
        Tokenizer {
            entries: Vec::new(),
        }
    }

    /// Table with integer and float literals.
    pub fn new() -> Self {
        let mut tokenizer = Self::empty();
        tokenizer.register(r"[+-]?\d+", |word| {
            word.parse::<i64>()
                .map(|n| Atom::gnd(Grounded::Int(n)))
                .map_err(|e| MettaError::syntax(format!("Invalid integer {word}: {e}")))
        });
        tokenizer.register(r"[+-]?\d+\.\d+([eE][+-]?\d+)?", |word| {
            word.parse::<f64>()
                .map(|x| Atom::gnd(Grounded::Float(x)))
                .map_err(|e| MettaError::syntax(format!("Invalid float {word}: {e}")))
        });
        tokenizer
    }

    /// Register `constructor` for words matching `pattern` in full.
    ///
    /// Panics if `pattern` is not a valid regex; patterns are fixed at
    /// registration sites.
    pub fn register<C>(&mut self, pattern: &str, constructor: C)
    where
        C: Fn(&str) -> Result<Atom> + 'static,
    {
        let regex = Regex::new(&format!("^(?:{pattern})$"))
            .unwrap_or_else(|e| panic!("invalid token pattern {pattern}: {e}"));
        self.entries.push(Entry {
            regex,
            constructor: Rc::new(constructor),
        });
    }

    /// Bind the exact word `word` to a fixed atom.
    pub fn register_atom(&mut self, word: &str, atom: Atom) {
        self.register(&regex::escape(word), move |_| Ok(atom.clone()));
    }

    pub fn atom_for(&self, word: &str) -> Result<Atom> {
        match self
            .entries
            .iter()
            .rev()
            .find(|entry| entry.regex.is_match(word))
        {
            Some(entry) => (entry.constructor)(word),
            None => Ok(Atom::sym(word)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_word_is_symbol() {
        let t = Tokenizer::new();
        assert_eq!(t.atom_for("pizza").unwrap(), Atom::sym("pizza"));
    }

    #[test]
    fn test_numbers() {
        let t = Tokenizer::new();
        assert_eq!(t.atom_for("42").unwrap(), Atom::gnd(Grounded::Int(42)));
        assert_eq!(t.atom_for("-3").unwrap(), Atom::gnd(Grounded::Int(-3)));
        assert_eq!(t.atom_for("1.5").unwrap(), Atom::gnd(Grounded::Float(1.5)));
    }

    #[test]
    fn test_signs_alone_are_symbols() {
        let t = Tokenizer::new();
        assert_eq!(t.atom_for("+").unwrap(), Atom::sym("+"));
        assert_eq!(t.atom_for("-").unwrap(), Atom::sym("-"));
    }

    #[test]
    fn test_partial_match_is_symbol() {
        let t = Tokenizer::new();
        assert_eq!(t.atom_for("42abc").unwrap(), Atom::sym("42abc"));
    }

    #[test]
    fn test_later_registration_wins() {
        let mut t = Tokenizer::new();
        t.register_atom("42", Atom::sym("answer"));
        assert_eq!(t.atom_for("42").unwrap(), Atom::sym("answer"));
        assert_eq!(t.atom_for("43").unwrap(), Atom::gnd(Grounded::Int(43)));
    }

    #[test]
    fn test_overflowing_integer_is_error() {
        let t = Tokenizer::new();
        assert!(t.atom_for("99999999999999999999999").is_err());
    }
}
