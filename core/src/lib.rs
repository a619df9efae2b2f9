//! Core atom model for the Recipe Book front-end
//!
//! This crate holds the expression types, the s-expression parser, the
//! atom space and the small interpreter the REPL evaluates against. The
//! session protocol, batch replay and rendering live in `mettar-repl`.

pub mod atom;
pub mod error;
pub mod interner;
pub mod interpreter;
pub mod lexer;
pub mod matcher;
pub mod operations;
pub mod parser;
pub mod space;
pub mod tokenizer;

// Re-export commonly used items for convenience
pub use atom::{Atom, ExpressionAtom, Grounded, MettaType, Operation, SymbolAtom, VariableAtom};
pub use error::{ErrorKind, MettaError, Result};
pub use interner::SymbolName;
pub use interpreter::interpret;
pub use matcher::Bindings;
pub use operations::register_operations;
pub use parser::{parse_all, parse_single};
pub use space::{GroundingSpace, Space};
pub use tokenizer::Tokenizer;
