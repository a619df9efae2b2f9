//! Interactive session loop
//!
//! Each input line becomes exactly one command. Evaluations and queries are
//! yielded; everything else acts on the space, the transcript or the file
//! system and yields nothing. The loop ends on `q` or when input runs out.

use std::io::Write;

use log::info;
use mettar::Result;

use crate::batch::Evaluation;
use crate::command::Command;
use crate::render::render;
use crate::session::Session;

pub const UNRECOGNIZED_HINT: &str = "start a query with !, ?, +, or -";

pub struct Repl<'s, L, W> {
    session: &'s mut Session,
    lines: L,
    out: W,
    finished: bool,
}

impl<'s, L, W> Repl<'s, L, W>
where
    L: Iterator<Item = String>,
    W: Write,
{
    pub fn new(session: &'s mut Session, lines: L, out: W) -> Self {
        Repl {
            session,
            lines,
            out,
            finished: false,
        }
    }

    /// Output used for load replays and diagnostics.
    pub fn output(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn session(&self) -> &Session {
        &*self.session
    }

    fn step(&mut self, line: &str) -> Result<Option<Evaluation>> {
        let command = Command::decode(line);
        if command == Command::Empty {
            return Ok(None);
        }
        self.session.record(line);

        match command {
            Command::Empty | Command::Comment => Ok(None),
            Command::Save(name) => {
                let path = self.session.save_transcript(&name)?;
                info!("session saved to {}", path.display());
                Ok(None)
            }
            Command::Load(name) => {
                self.session.load(&name, &mut self.out)?;
                Ok(None)
            }
            Command::Quit => {
                self.finished = true;
                Ok(None)
            }
            Command::Evaluate(text) => {
                let expr = self.session.parse_single(&text)?;
                let results = self.session.evaluate(&expr)?;
                Ok(Some(Evaluation { expr, results }))
            }
            Command::Query(text) => {
                let expr = self.session.parse_single(&text)?;
                let results = self.session.query(&expr);
                Ok(Some(Evaluation { expr, results }))
            }
            Command::Add(text) => {
                let expr = self.session.parse_single(&text)?;
                self.session.add(expr);
                Ok(None)
            }
            Command::Remove(text) => {
                let expr = self.session.parse_single(&text)?;
                self.session.remove(&expr);
                Ok(None)
            }
            Command::Unrecognized(prefix) => {
                writeln!(self.out, "prefix {prefix} not recognized, {UNRECOGNIZED_HINT}")?;
                Ok(None)
            }
        }
    }
}

impl<L, W> Iterator for Repl<'_, L, W>
where
    L: Iterator<Item = String>,
    W: Write,
{
    type Item = Result<Evaluation>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let Some(line) = self.lines.next() else {
                self.finished = true;
                break;
            };
            match self.step(&line) {
                Ok(Some(evaluation)) => return Some(Ok(evaluation)),
                Ok(None) => {}
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }
        None
    }
}

/// Write the results of one interactive step, or `/` when there are none.
pub fn print_results(out: &mut impl Write, evaluation: &Evaluation) -> Result<()> {
    if evaluation.results.is_empty() {
        writeln!(out, "/")?;
    } else {
        for result in &evaluation.results {
            writeln!(out, "{}", render(result))?;
        }
    }
    Ok(())
}

/// Drive the interactive loop until `q`, end of input, or the first error.
pub fn run<L, W>(session: &mut Session, lines: L, out: W) -> Result<()>
where
    L: Iterator<Item = String>,
    W: Write,
{
    let mut repl = Repl::new(session, lines, out);
    while let Some(step) = repl.next() {
        let evaluation = step?;
        print_results(repl.output(), &evaluation)?;
    }
    repl.output().flush()?;
    Ok(())
}
