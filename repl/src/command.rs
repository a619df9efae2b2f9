//! Line commands
//!
//! The first character of a line selects the command; the rest of the line,
//! trimmed, is its argument.

/// A decoded input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty line, ignored and not recorded
    Empty,
    /// `;` comment
    Comment,
    /// `s<name>` save the transcript
    Save(String),
    /// `l<name>` replay a saved session
    Load(String),
    /// `q` end the session
    Quit,
    /// `!<expr>` evaluate
    Evaluate(String),
    /// `?<expr>` query the space without changing it
    Query(String),
    /// `+<expr>` add a fact
    Add(String),
    /// `-<expr>` remove a fact
    Remove(String),
    /// Any other first character
    Unrecognized(char),
}

impl Command {
    pub fn decode(line: &str) -> Command {
        let mut chars = line.chars();
        let Some(prefix) = chars.next() else {
            return Command::Empty;
        };
        let rest = chars.as_str().trim().to_string();

        match prefix {
            ';' => Command::Comment,
            's' => Command::Save(rest),
            'l' => Command::Load(rest),
            'q' => Command::Quit,
            '!' => Command::Evaluate(rest),
            '?' => Command::Query(rest),
            '+' => Command::Add(rest),
            '-' => Command::Remove(rest),
            other => Command::Unrecognized(other),
        }
    }

    /// Prefix and expression text for the four expression commands.
    pub fn expression(&self) -> Option<(char, &str)> {
        match self {
            Command::Evaluate(text) => Some(('!', text)),
            Command::Query(text) => Some(('?', text)),
            Command::Add(text) => Some(('+', text)),
            Command::Remove(text) => Some(('-', text)),
            _ => None,
        }
    }
}
