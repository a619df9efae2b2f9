//! Session context
//!
//! One `Session` is built at start-up and handed by reference to the batch
//! and interactive machines. It owns the space, the tokenizer used to parse
//! input, the working directory scripts are resolved against, and the
//! transcript of accepted lines.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use mettar::{
    Atom, ErrorKind, GroundingSpace, MettaError, Result, Space, Tokenizer, interpret, parse_all,
    parse_single, register_operations,
};

use crate::batch;
use crate::transcript;

/// File extension of saved sessions.
pub const SESSION_EXTENSION: &str = "mettar";

/// File name prefix of sessions saved without an explicit name.
pub const SESSION_PREFIX: &str = "session_";

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Directory scripts and session files are resolved against
    pub cwd: PathBuf,
    /// Script imported before the REPL starts
    pub bootstrap: String,
    /// Line-editor history; `None` disables persistence
    pub history_file: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            cwd: PathBuf::from("recipebook"),
            bootstrap: "study_group_example.metta".to_string(),
            history_file: dirs::home_dir().map(|home| home.join(".mettar_history")),
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by `METTAR_DIR` and `METTAR_BOOTSTRAP`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = env::var("METTAR_DIR") {
            config.cwd = PathBuf::from(dir);
        }
        if let Ok(bootstrap) = env::var("METTAR_BOOTSTRAP") {
            config.bootstrap = bootstrap;
        }
        config
    }
}

/// File name for a save/load argument: `.mettar` is appended unless present,
/// and an empty name becomes `session_<unix seconds>.mettar`.
pub fn session_file_name(name: &str) -> String {
    if name.is_empty() {
        format!(
            "{SESSION_PREFIX}{}.{SESSION_EXTENSION}",
            chrono::Utc::now().timestamp()
        )
    } else if name.ends_with(&format!(".{SESSION_EXTENSION}")) {
        name.to_string()
    } else {
        format!("{name}.{SESSION_EXTENSION}")
    }
}

// ============================================================================
// Session
// ============================================================================

pub struct Session {
    space: GroundingSpace,
    tokenizer: Tokenizer,
    cwd: PathBuf,
    transcript: Vec<String>,
    /// Files currently being imported, innermost last
    importing: Vec<PathBuf>,
}

impl Session {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        let mut tokenizer = Tokenizer::new();
        register_operations(&mut tokenizer);
        Session {
            space: GroundingSpace::new(),
            tokenizer,
            cwd: cwd.into(),
            transcript: Vec::new(),
            importing: Vec::new(),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.cwd.clone())
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn space(&self) -> &GroundingSpace {
        &self.space
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Append a raw input line to the transcript.
    pub fn record(&mut self, line: &str) {
        self.transcript.push(format!("{line}\n"));
    }

    pub fn parse_single(&self, text: &str) -> Result<Atom> {
        parse_single(text, &self.tokenizer)
    }

    pub fn parse_all(&self, text: &str) -> Result<Vec<Atom>> {
        parse_all(text, &self.tokenizer)
    }

    pub fn evaluate(&self, expr: &Atom) -> Result<Vec<Atom>> {
        interpret(&self.space, expr)
    }

    /// Instances of `expr` in the space; the space is left unchanged.
    pub fn query(&self, expr: &Atom) -> Vec<Atom> {
        self.space.subst(expr, expr)
    }

    pub fn add(&mut self, atom: Atom) {
        self.space.add_atom(atom);
    }

    pub fn remove(&mut self, atom: &Atom) -> bool {
        self.space.remove_atom(atom)
    }

    fn read(&self, name: &str) -> Result<String> {
        let path = self.cwd.join(name);
        fs::read_to_string(&path).map_err(|e| MettaError::io(&path, e))
    }

    /// Replay a file relative to the working directory, printing each step.
    ///
    /// Saved sessions (`.mettar`) replay their lines with the prefixes they
    /// were typed with; any other file is a script for the batch machine.
    /// Returns the number of printed steps.
    pub fn import_file(&mut self, name: &str, out: &mut dyn Write) -> Result<usize> {
        let path = self.cwd.join(name);
        if self.importing.contains(&path) {
            return Err(MettaError::new(
                ErrorKind::Io,
                format!("{}: already being loaded", path.display()),
            )
            .with_suggestion("a saved session cannot load itself"));
        }

        let text = self.read(name)?;
        let is_session = Path::new(name)
            .extension()
            .is_some_and(|ext| ext == SESSION_EXTENSION);

        self.importing.push(path);
        let steps = if is_session {
            transcript::entries(&text, self).and_then(|entries| {
                info!("replaying {} session lines from {name}", entries.len());
                transcript::replay(self, entries, out)
            })
        } else {
            self.parse_all(&text).and_then(|atoms| {
                info!("importing {} atoms from {name}", atoms.len());
                batch::run(self, atoms, out)
            })
        };
        self.importing.pop();
        steps
    }

    /// The `l` command: replay `name` (see [`session_file_name`]), or the
    /// latest saved session when `name` is empty.
    pub fn load(&mut self, name: &str, out: &mut dyn Write) -> Result<usize> {
        let file = if name.is_empty() {
            self.latest_session()?
        } else {
            session_file_name(name)
        };
        let steps = self.import_file(&file, out)?;
        debug!("replayed {file}: {steps} steps");
        Ok(steps)
    }

    /// Lexicographically greatest `session_*.mettar` in the working directory.
    pub fn latest_session(&self) -> Result<String> {
        let dir = self.cwd.to_str().ok_or_else(|| {
            MettaError::new(
                ErrorKind::Io,
                format!("{}: not a UTF-8 path", self.cwd.display()),
            )
        })?;
        let pattern = Path::new(&glob::Pattern::escape(dir))
            .join(format!("{SESSION_PREFIX}*.{SESSION_EXTENSION}"));
        let pattern = pattern.to_string_lossy();

        let entries = glob::glob(&pattern)
            .map_err(|e| MettaError::new(ErrorKind::Io, format!("{pattern}: {e}")))?;

        entries
            .filter_map(|entry| entry.ok())
            .filter_map(|path| path.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .max()
            .ok_or_else(|| {
                MettaError::new(
                    ErrorKind::Io,
                    format!("no saved sessions in {}", self.cwd.display()),
                )
                .with_suggestion("save one first with s")
            })
    }

    /// Write the whole transcript to `name` (see [`session_file_name`]).
    pub fn save_transcript(&self, name: &str) -> Result<PathBuf> {
        let path = self.cwd.join(session_file_name(name));
        fs::write(&path, self.transcript.concat()).map_err(|e| MettaError::io(&path, e))?;
        debug!(
            "saved {} transcript lines to {}",
            self.transcript.len(),
            path.display()
        );
        Ok(path)
    }
}
