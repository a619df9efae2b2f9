//! Lazy replay of parsed scripts
//!
//! A script is a flat stream of top-level atoms. Atoms are stored as facts
//! unless a bare `!` precedes them, in which case they are evaluated and the
//! result is yielded. `/*` and `*/` bracket atoms that are skipped entirely.
//!
//! The comment flag is a plain boolean: markers do not nest, and a stray
//! `*/` outside a comment only clears a flag that was already clear.

use std::io::Write;

use log::debug;
use mettar::{Atom, Result};

use crate::render::render;
use crate::session::Session;

pub const EVALUATE_MARKER: &str = "!";
pub const COMMENT_OPEN: &str = "/*";
pub const COMMENT_CLOSE: &str = "*/";

/// An evaluated (or queried) expression and everything it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub expr: Atom,
    pub results: Vec<Atom>,
}

/// Pull-based replay over a stream of atoms.
///
/// Yields one item per evaluated atom. The first error is yielded and ends
/// the replay.
pub struct BatchRun<'s, I> {
    session: &'s mut Session,
    atoms: I,
    /// The previous atom was a bare `!`
    interpreting: bool,
    commented: bool,
    failed: bool,
}

impl<'s, I> BatchRun<'s, I>
where
    I: Iterator<Item = Atom>,
{
    pub fn new(
        session: &'s mut Session,
        atoms: impl IntoIterator<Item = Atom, IntoIter = I>,
    ) -> Self {
        BatchRun {
            session,
            atoms: atoms.into_iter(),
            interpreting: false,
            commented: false,
            failed: false,
        }
    }
}

impl<I> Iterator for BatchRun<'_, I>
where
    I: Iterator<Item = Atom>,
{
    type Item = Result<Evaluation>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        while let Some(atom) = self.atoms.next() {
            if atom.is_symbol(EVALUATE_MARKER) && !self.commented {
                self.interpreting = true;
            } else if atom.is_symbol(COMMENT_OPEN) {
                self.commented = true;
            } else if atom.is_symbol(COMMENT_CLOSE) {
                self.commented = false;
            } else if self.commented {
                debug!("skipping commented {atom}");
            } else if self.interpreting {
                self.interpreting = false;
                return match self.session.evaluate(&atom) {
                    Ok(results) => Some(Ok(Evaluation {
                        expr: atom,
                        results,
                    })),
                    Err(err) => {
                        self.failed = true;
                        Some(Err(err))
                    }
                };
            } else {
                self.session.add(atom);
            }
        }

        None
    }
}

/// Write one batch step: `> expr` followed by its results, or `> expr /`.
pub fn print_step(out: &mut dyn Write, evaluation: &Evaluation) -> Result<()> {
    if evaluation.results.is_empty() {
        writeln!(out, "> {} /", render(&evaluation.expr))?;
    } else {
        writeln!(out, "> {}", render(&evaluation.expr))?;
        for result in &evaluation.results {
            writeln!(out, "{}", render(result))?;
        }
    }
    Ok(())
}

/// Replay `atoms` and print every step. Returns the number of steps.
pub fn run(session: &mut Session, atoms: Vec<Atom>, out: &mut dyn Write) -> Result<usize> {
    let mut steps = 0;
    for evaluation in BatchRun::new(session, atoms) {
        print_step(out, &evaluation?)?;
        steps += 1;
    }
    Ok(steps)
}
