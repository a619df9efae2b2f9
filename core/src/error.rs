//! Error types shared by the parser, space and interpreter.

use std::fmt;
use std::io;
use std::path::Path;

use crate::atom::Atom;

/// Categories of front-end errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// Malformed expression text
    Syntax,
    /// A script, session or history file could not be read or written
    Io,
    /// The interpreter could not finish evaluating an expression
    Interpret,
    /// A native operation was called with the wrong number of arguments
    Arity,
}

/// An error with optional expression context.
#[derive(Debug, Clone)]
pub struct MettaError {
    pub kind: ErrorKind,
    pub message: String,
    /// The expression being processed when the error occurred
    pub expression: Option<String>,
    pub suggestion: Option<String>,
}

pub type Result<T> = std::result::Result<T, MettaError>;

impl MettaError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            expression: None,
            suggestion: None,
        }
    }

    pub fn with_expression(mut self, expr: &Atom) -> Self {
        self.expression = Some(expr.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn syntax(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax, what)
    }

    /// Wrap an I/O failure on `path`.
    pub fn io(path: &Path, err: io::Error) -> Self {
        Self::new(ErrorKind::Io, format!("{}: {err}", path.display()))
    }

    pub fn interpret(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::Interpret, what)
    }

    pub fn arity(operation: &str, expected: usize, got: usize) -> Self {
        Self::new(
            ErrorKind::Arity,
            format!("{operation}: expected {expected} arguments, got {got}"),
        )
    }
}

impl fmt::Display for MettaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref expr) = self.expression {
            let truncated = if expr.chars().count() > 60 {
                format!("{}...", expr.chars().take(57).collect::<String>())
            } else {
                expr.clone()
            };
            write!(f, " in: {truncated}")?;
        }
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({suggestion})")?;
        }
        Ok(())
    }
}

impl std::error::Error for MettaError {}

impl From<io::Error> for MettaError {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Io, err.to_string())
    }
}

impl From<MettaError> for String {
    fn from(err: MettaError) -> String {
        err.to_string()
    }
}
