//! Native operations layered over the space primitives
//!
//! `transform` and `join` are bound as words in the tokenizer, so
//! `(transform ...)` parses with the operation itself at the head of the
//! expression and the interpreter dispatches to it directly.

use crate::atom::{Atom, Grounded, MettaType, Operation};
use crate::error::{MettaError, Result};
use crate::interpreter::interpret;
use crate::space::Space;
use crate::tokenizer::Tokenizer;

/// `(transform pattern template)`: `template` instantiated for every match of
/// `pattern` in the space, left unevaluated.
pub fn transform(args: &[Atom], space: &dyn Space) -> Result<Vec<Atom>> {
    let [pattern, template] = args else {
        return Err(MettaError::arity("transform", 2, args.len()));
    };
    Ok(space.subst(pattern, template))
}

/// `(join a b)`: results of `a` followed by results of `b`.
pub fn join(args: &[Atom], space: &dyn Space) -> Result<Vec<Atom>> {
    let [a, b] = args else {
        return Err(MettaError::arity("join", 2, args.len()));
    };
    let mut results = interpret(space, a)?;
    results.extend(interpret(space, b)?);
    Ok(results)
}

pub const TRANSFORM: Operation = Operation::new(
    "transform",
    &[MettaType::Atom, MettaType::Atom],
    MettaType::Undefined,
    transform,
);

pub const JOIN: Operation = Operation::new(
    "join",
    &[MettaType::Atom, MettaType::Atom],
    MettaType::Atom,
    join,
);

/// Bind the operation words in `tokenizer`.
pub fn register_operations(tokenizer: &mut Tokenizer) {
    for op in [TRANSFORM, JOIN] {
        tokenizer.register_atom(op.name(), Atom::gnd(Grounded::Operation(op)));
    }
}
