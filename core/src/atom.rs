use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{MettaError, Result};
use crate::interner::SymbolName;
use crate::space::Space;

// ============================================================================
// Atoms
// ============================================================================

/// A symbol: a plain interned identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolAtom(SymbolName);

impl SymbolAtom {
    pub fn new(name: &str) -> Self {
        SymbolAtom(SymbolName::intern(name))
    }

    pub fn name(&self) -> SymbolName {
        self.0
    }
}

static NEXT_VARIABLE_ID: AtomicUsize = AtomicUsize::new(1);

/// A variable: a unification placeholder written `$name`.
///
/// Parsed variables have id 0. Stored atoms are matched against renamed
/// copies whose variables carry fresh ids, so two occurrences of `$x` in
/// different facts never capture each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableAtom {
    name: String,
    id: usize,
}

impl VariableAtom {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: 0,
        }
    }

    /// Same name, fresh id.
    pub fn make_unique(&self) -> Self {
        Self {
            name: self.name.clone(),
            id: NEXT_VARIABLE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Name without the `$` sigil, suffixed with `#id` for renamed variables.
    pub fn name(&self) -> String {
        if self.id == 0 {
            self.name.clone()
        } else {
            format!("{}#{}", self.name, self.id)
        }
    }
}

/// An ordered, possibly empty sequence of sub-atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionAtom {
    children: Vec<Atom>,
}

impl ExpressionAtom {
    pub fn children(&self) -> &[Atom] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Atom> {
        self.children
    }
}

// ============================================================================
// Grounded values
// ============================================================================

/// Type names used in operation signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MettaType {
    Atom,
    Undefined,
}

impl fmt::Display for MettaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MettaType::Atom => write!(f, "Atom"),
            MettaType::Undefined => write!(f, "%Undefined%"),
        }
    }
}

/// Native operation signature. Arguments arrive unevaluated.
pub type NativeOp = fn(&[Atom], &dyn Space) -> Result<Vec<Atom>>;

/// A host function callable from expressions.
#[derive(Clone)]
pub struct Operation {
    name: &'static str,
    params: &'static [MettaType],
    ret: MettaType,
    func: NativeOp,
}

impl Operation {
    pub const fn new(
        name: &'static str,
        params: &'static [MettaType],
        ret: MettaType,
        func: NativeOp,
    ) -> Self {
        Self {
            name,
            params,
            ret,
            func,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The operation's type as an arrow expression, e.g. `(-> Atom Atom Atom)`.
    pub fn type_atom(&self) -> Atom {
        let mut children = Vec::with_capacity(self.params.len() + 2);
        children.push(Atom::sym("->"));
        children.extend(self.params.iter().map(|t| Atom::sym(t.to_string())));
        children.push(Atom::sym(self.ret.to_string()));
        Atom::expr(children)
    }

    pub fn execute(&self, args: &[Atom], space: &dyn Space) -> Result<Vec<Atom>> {
        if args.len() != self.arity() {
            return Err(MettaError::arity(self.name, self.arity(), args.len()));
        }
        (self.func)(args, space)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("type", &self.type_atom().to_string())
            .finish()
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.params == other.params && self.ret == other.ret
    }
}

/// Opaque host-side values.
#[derive(Debug, Clone, PartialEq)]
pub enum Grounded {
    Int(i64),
    Float(f64),
    Str(String),
    Operation(Operation),
}

impl fmt::Display for Grounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grounded::Int(n) => write!(f, "{n}"),
            Grounded::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Grounded::Float(x) => write!(f, "{x}"),
            Grounded::Str(s) => write!(f, "{s:?}"),
            Grounded::Operation(op) => write!(f, "{}", op.name()),
        }
    }
}

// ============================================================================
// Atom
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    Symbol(SymbolAtom),
    Variable(VariableAtom),
    Expression(ExpressionAtom),
    Grounded(Grounded),
}

impl Atom {
    pub fn sym(name: impl AsRef<str>) -> Self {
        Atom::Symbol(SymbolAtom::new(name.as_ref()))
    }

    pub fn var(name: impl Into<String>) -> Self {
        Atom::Variable(VariableAtom::new(name))
    }

    pub fn expr(children: impl Into<Vec<Atom>>) -> Self {
        Atom::Expression(ExpressionAtom {
            children: children.into(),
        })
    }

    pub fn gnd(value: Grounded) -> Self {
        Atom::Grounded(value)
    }

    /// True when this atom is the bare symbol `name`.
    pub fn is_symbol(&self, name: &str) -> bool {
        matches!(self, Atom::Symbol(s) if s.name().is(name))
    }

    pub fn children(&self) -> Option<&[Atom]> {
        match self {
            Atom::Expression(e) => Some(e.children()),
            _ => None,
        }
    }
}

impl From<Grounded> for Atom {
    fn from(value: Grounded) -> Self {
        Atom::Grounded(value)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Symbol(s) => write!(f, "{}", s.name()),
            Atom::Variable(v) => write!(f, "${}", v.name()),
            Atom::Grounded(g) => write!(f, "{g}"),
            Atom::Expression(e) => {
                write!(f, "(")?;
                for (i, child) in e.children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
        }
    }
}
