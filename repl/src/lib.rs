//! Recipe Book session front-end
//!
//! This crate provides the line protocol on top of `mettar-core`:
//! - Interactive REPL with `!`, `?`, `+`, `-`, `s`, `l`, `q` and `;` lines
//! - Lazy batch replay of scripts, and prefix-faithful replay of saved sessions
//! - Colored, depth-aware rendering of results

pub mod batch;
pub mod command;
pub mod input;
pub mod render;
pub mod repl;
pub mod session;
pub mod transcript;

pub use batch::{BatchRun, Evaluation};
pub use command::Command;
pub use input::LineEditor;
pub use render::render;
pub use repl::Repl;
pub use session::{Session, SessionConfig, session_file_name};
