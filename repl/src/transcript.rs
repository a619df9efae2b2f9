//! Saved-session replay
//!
//! A saved session holds raw input lines. Each line is decoded exactly as it
//! was when typed, so the prefix selects the action and the argument is
//! always data, even when it is itself a marker such as `!` or `/*`.
//! Comments, saves, quits and unrecognized lines had no effect on the space
//! and are dropped.

use std::io::Write;

use log::debug;
use mettar::{Atom, Result};

use crate::batch::{Evaluation, print_step};
use crate::command::Command;
use crate::session::Session;

/// One replayable line of a saved session.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Evaluate(Atom),
    Query(Atom),
    Add(Atom),
    Remove(Atom),
    /// `l<name>`, replayed by loading the named session in turn
    Load(String),
}

/// Decode and parse every line up front; a bad line fails before any replay.
pub fn entries(text: &str, session: &Session) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for line in text.lines() {
        let entry = match Command::decode(line) {
            Command::Evaluate(arg) => Entry::Evaluate(session.parse_single(&arg)?),
            Command::Query(arg) => Entry::Query(session.parse_single(&arg)?),
            Command::Add(arg) => Entry::Add(session.parse_single(&arg)?),
            Command::Remove(arg) => Entry::Remove(session.parse_single(&arg)?),
            Command::Load(name) => Entry::Load(name),
            _ => continue,
        };
        entries.push(entry);
    }
    Ok(entries)
}

/// Apply `entries` in order, printing evaluations and queries as batch steps.
/// Returns the number of steps printed, including those of nested loads.
pub fn replay(session: &mut Session, entries: Vec<Entry>, out: &mut dyn Write) -> Result<usize> {
    let mut steps = 0;
    for entry in entries {
        let evaluation = match entry {
            Entry::Evaluate(expr) => {
                let results = session.evaluate(&expr)?;
                Evaluation { expr, results }
            }
            Entry::Query(expr) => {
                let results = session.query(&expr);
                Evaluation { expr, results }
            }
            Entry::Add(atom) => {
                session.add(atom);
                continue;
            }
            Entry::Remove(atom) => {
                session.remove(&atom);
                continue;
            }
            Entry::Load(name) => {
                debug!("nested load {name:?}");
                steps += session.load(&name, out)?;
                continue;
            }
        };
        print_step(out, &evaluation)?;
        steps += 1;
    }
    Ok(steps)
}
