//! Syntactic unification over atoms
//!
//! This is the minimum the in-memory space needs to answer queries: plain
//! first-order unification with an occurs check. Grounded values match by
//! equality.

use rustc_hash::FxHashMap;

use crate::atom::{Atom, VariableAtom};

/// Variable assignments produced by a successful match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    map: FxHashMap<VariableAtom, Atom>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, var: &VariableAtom) -> Option<&Atom> {
        self.map.get(var)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The fully substituted value of `var`, if it is bound.
    pub fn resolve(&self, var: &VariableAtom) -> Option<Atom> {
        self.map.get(var).map(|atom| apply_bindings(atom, self))
    }

    fn walk<'a>(&'a self, mut atom: &'a Atom) -> &'a Atom {
        while let Atom::Variable(v) = atom {
            match self.map.get(v) {
                Some(bound) => atom = bound,
                None => break,
            }
        }
        atom
    }

    fn occurs(&self, var: &VariableAtom, atom: &Atom) -> bool {
        match self.walk(atom) {
            Atom::Variable(v) => v == var,
            Atom::Expression(e) => e.children().iter().any(|c| self.occurs(var, c)),
            _ => false,
        }
    }
}

/// Extend `bindings` so that `left` and `right` become equal.
///
/// On failure `bindings` may hold partial assignments; callers discard it.
pub fn unify(left: &Atom, right: &Atom, bindings: &mut Bindings) -> bool {
    let left = bindings.walk(left).clone();
    let right = bindings.walk(right).clone();

    match (&left, &right) {
        (Atom::Variable(a), Atom::Variable(b)) if a == b => true,
        (Atom::Variable(v), other) | (other, Atom::Variable(v)) => {
            if bindings.occurs(v, other) {
                return false;
            }
            bindings.map.insert(v.clone(), other.clone());
            true
        }
        (Atom::Symbol(a), Atom::Symbol(b)) => a == b,
        (Atom::Grounded(a), Atom::Grounded(b)) => a == b,
        (Atom::Expression(a), Atom::Expression(b)) => {
            a.children().len() == b.children().len()
                && a
                    .children()
                    .iter()
                    .zip(b.children())
                    .all(|(x, y)| unify(x, y, bindings))
        }
        _ => false,
    }
}

pub fn match_atoms(left: &Atom, right: &Atom) -> Option<Bindings> {
    let mut bindings = Bindings::new();
    if unify(left, right, &mut bindings) {
        Some(bindings)
    } else {
        None
    }
}

/// Replace every bound variable in `template`.
pub fn apply_bindings(template: &Atom, bindings: &Bindings) -> Atom {
    match template {
        Atom::Variable(v) => match bindings.get(v) {
            Some(bound) => apply_bindings(bound, bindings),
            None => template.clone(),
        },
        Atom::Expression(e) => Atom::expr(
            e.children()
                .iter()
                .map(|c| apply_bindings(c, bindings))
                .collect::<Vec<_>>(),
        ),
        _ => template.clone(),
    }
}

/// Copy of `atom` whose variables are replaced by fresh ones, consistently.
pub fn make_variables_unique(atom: &Atom) -> Atom {
    fn rename(atom: &Atom, fresh: &mut FxHashMap<VariableAtom, VariableAtom>) -> Atom {
        match atom {
            Atom::Variable(v) => Atom::Variable(
                fresh
                    .entry(v.clone())
                    .or_insert_with(|| v.make_unique())
                    .clone(),
            ),
            Atom::Expression(e) => Atom::expr(
                e.children()
                    .iter()
                    .map(|c| rename(c, fresh))
                    .collect::<Vec<_>>(),
            ),
            _ => atom.clone(),
        }
    }
    rename(atom, &mut FxHashMap::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_single;
    use crate::tokenizer::Tokenizer;

    fn atom(text: &str) -> Atom {
        parse_single(text, &Tokenizer::new()).unwrap()
    }

    #[test]
    fn test_match_binds_variable() {
        let b = match_atoms(&atom("(likes $x pizza)"), &atom("(likes sam pizza)")).unwrap();
        assert_eq!(b.resolve(&VariableAtom::new("x")), Some(atom("sam")));
    }

    #[test]
    fn test_mismatch() {
        assert!(match_atoms(&atom("(likes $x pizza)"), &atom("(likes sam pasta)")).is_none());
        assert!(match_atoms(&atom("(a b)"), &atom("(a b c)")).is_none());
    }

    #[test]
    fn test_repeated_variable_must_agree() {
        assert!(match_atoms(&atom("(same $x $x)"), &atom("(same a a)")).is_some());
        assert!(match_atoms(&atom("(same $x $x)"), &atom("(same a b)")).is_none());
    }

    #[test]
    fn test_variables_on_both_sides() {
        let b = match_atoms(&atom("(= (double $n) $r)"), &atom("(= (double 2) (twice $m))")).unwrap();
        assert_eq!(
            apply_bindings(&atom("$r"), &b).to_string(),
            "(twice $m)"
        );
        assert_eq!(b.resolve(&VariableAtom::new("n")), Some(atom("2")));
    }

    #[test]
    fn test_occurs_check() {
        assert!(match_atoms(&atom("$x"), &atom("(f $x)")).is_none());
    }

    #[test]
    fn test_apply_leaves_unbound() {
        let b = Bindings::new();
        assert_eq!(apply_bindings(&atom("(a $y)"), &b), atom("(a $y)"));
    }

    #[test]
    fn test_make_unique_is_consistent() {
        let renamed = make_variables_unique(&atom("(pair $x $x $y)"));
        let children = renamed.children().unwrap();
        assert_eq!(children[1], children[2]);
        assert_ne!(children[1], children[3]);
        assert_ne!(children[1], atom("$x"));
    }
}
