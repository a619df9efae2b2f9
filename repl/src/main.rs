use std::env;
use std::io::{self, Write};
use std::process;
use std::time::Instant;

use colored::Colorize;
use mettar::Result;
use mettar_repl::{LineEditor, Session, SessionConfig, repl};

fn start(config: &SessionConfig) -> Result<()> {
    let mut out = io::stdout();

    // Clear the screen and home the cursor
    write!(out, "\x1b[2J\x1b[H")?;
    writeln!(out, "{}", "Recipe Book\n".underline())?;

    let mut session = Session::from_config(config);
    let started = Instant::now();
    session.import_file(&config.bootstrap, &mut out)?;
    writeln!(
        out,
        "\nloading took {:.5} seconds, repl:",
        started.elapsed().as_secs_f64()
    )?;

    let mut editor = LineEditor::new(config.history_file.clone())?;
    let result = repl::run(&mut session, &mut editor, &mut out);
    let finished = editor.finish();
    result.and(finished)
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  mettar              Load the bootstrap script and start the REPL");
    eprintln!("  mettar --help, -h   Show this help message");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  METTAR_DIR          Working directory for scripts and sessions (default: recipebook)");
    eprintln!("  METTAR_BOOTSTRAP    Script loaded at start-up (default: study_group_example.metta)");
    eprintln!("  RUST_LOG            Log filter, e.g. debug");
    eprintln!();
    eprintln!("History is kept in ~/.mettar_history.");
}

fn main() {
    env_logger::Builder::from_default_env().init();

    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => {}
        2 if args[1] == "--help" || args[1] == "-h" => {
            print_usage();
            return;
        }
        _ => {
            eprintln!("Error: unexpected arguments");
            print_usage();
            process::exit(1);
        }
    }

    if let Err(e) = start(&SessionConfig::from_env()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
