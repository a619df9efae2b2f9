//! Atom spaces
//!
//! A space is the mutable store of facts and rules that expressions are
//! evaluated against. The front-end only ever adds, removes, queries and
//! substitutes; it never caches what a space contains.

use log::debug;

use crate::atom::Atom;
use crate::matcher::{Bindings, apply_bindings, make_variables_unique, match_atoms};

pub trait Space {
    fn add_atom(&mut self, atom: Atom);

    /// Remove one atom structurally equal to `atom`. Returns whether one was found.
    fn remove_atom(&mut self, atom: &Atom) -> bool;

    /// Bindings for every stored atom that unifies with `pattern`, in storage order.
    fn query(&self, pattern: &Atom) -> Vec<Bindings>;

    fn atoms(&self) -> &[Atom];

    /// `template` instantiated with each set of bindings satisfying `pattern`.
    fn subst(&self, pattern: &Atom, template: &Atom) -> Vec<Atom> {
        self.query(pattern)
            .iter()
            .map(|bindings| apply_bindings(template, bindings))
            .collect()
    }
}

/// In-memory space holding atoms in insertion order.
#[derive(Debug, Clone, Default)]
pub struct GroundingSpace {
    atoms: Vec<Atom>,
}

impl GroundingSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

impl Space for GroundingSpace {
    fn add_atom(&mut self, atom: Atom) {
        debug!("add {atom}");
        self.atoms.push(atom);
    }

    fn remove_atom(&mut self, atom: &Atom) -> bool {
        match self.atoms.iter().position(|stored| stored == atom) {
            Some(index) => {
                debug!("remove {atom}");
                self.atoms.remove(index);
                true
            }
            None => {
                debug!("remove {atom}: not present");
                false
            }
        }
    }

    fn query(&self, pattern: &Atom) -> Vec<Bindings> {
        self.atoms
            .iter()
            .filter_map(|stored| match_atoms(pattern, &make_variables_unique(stored)))
            .collect()
    }

    fn atoms(&self) -> &[Atom] {
        &self.atoms
    }
}
