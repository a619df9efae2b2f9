use std::path::PathBuf;

use log::{debug, warn};
use mettar::{ErrorKind, MettaError, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Terminal line source with persistent history.
///
/// Iterating yields lines as typed, without the trailing newline. Ctrl-C
/// and Ctrl-D end the stream like end of input. Any other read failure also
/// ends the stream and is reported by [`LineEditor::finish`].
pub struct LineEditor {
    editor: DefaultEditor,
    history: Option<PathBuf>,
    failure: Option<MettaError>,
}

/// Map one readline outcome to a line, end of input, or an error.
fn classify(read: rustyline::Result<String>) -> Result<Option<String>> {
    match read {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(e) => Err(MettaError::new(ErrorKind::Io, format!("reading input: {e}"))),
    }
}

impl LineEditor {
    pub fn new(history: Option<PathBuf>) -> Result<Self> {
        let mut editor = DefaultEditor::new().map_err(|e| {
            MettaError::new(ErrorKind::Io, format!("cannot open line editor: {e}"))
        })?;
        if let Some(path) = &history {
            if let Err(e) = editor.load_history(path) {
                debug!("no history loaded from {}: {e}", path.display());
            }
        }
        Ok(LineEditor {
            editor,
            history,
            failure: None,
        })
    }

    /// Save history and report a read failure that ended the input, if any.
    pub fn finish(&mut self) -> Result<()> {
        if let Some(path) = &self.history {
            if let Err(e) = self.editor.save_history(path) {
                warn!("could not save history to {}: {e}", path.display());
            }
        }
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Iterator for LineEditor {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.failure.is_some() {
            return None;
        }
        match classify(self.editor.readline("")) {
            Ok(Some(line)) => {
                if !line.is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Some(line)
            }
            Ok(None) => None,
            Err(err) => {
                self.failure = Some(err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_line_passes_through() {
        assert_eq!(classify(Ok("+(a)".to_string())).unwrap(), Some("+(a)".to_string()));
    }

    #[test]
    fn test_interrupt_and_eof_end_input() {
        assert_eq!(classify(Err(ReadlineError::Eof)).unwrap(), None);
        assert_eq!(classify(Err(ReadlineError::Interrupted)).unwrap(), None);
    }

    #[test]
    fn test_read_failure_is_io_error() {
        let err = classify(Err(ReadlineError::Io(io::Error::other("broken pipe")))).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Io);
        assert!(err.message.contains("broken pipe"));
    }
}
