use std::fs;
use std::path::PathBuf;

use mettar::{ErrorKind, Space};
use mettar_repl::Session;
use tempfile::TempDir;

// Every test in this binary renders without escape codes
fn plain() {
    colored::control::set_override(false);
}

fn recipebook() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // Go to workspace root
    path.push("recipebook");
    path
}

// Write `content` to a script in a fresh directory and import it
fn import_script(content: &str) -> (Session, String) {
    plain();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("script.metta"), content).unwrap();

    let mut session = Session::new(dir.path());
    let mut out = Vec::new();
    session.import_file("script.metta", &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

fn facts(session: &Session) -> Vec<String> {
    session.space().atoms().iter().map(|a| a.to_string()).collect()
}

#[test]
fn test_marker_comment_and_fact() {
    let (session, out) = import_script("! (foo) /* + (bar) */ (baz)");
    assert_eq!(out, "> (foo)\n(foo)\n");
    assert_eq!(facts(&session), vec!["(baz)"]);
}

#[test]
fn test_rules_then_evaluations() {
    let (_, out) = import_script(
        r#"
(likes sam pizza)
(likes bo pizza)
(= (fans-of $dish) (transform (likes $who $dish) $who))

! (fans-of pizza)
! (fans-of soup)
"#,
    );
    assert_eq!(out, "> (fans-of pizza)\nsam\nbo\n> (fans-of soup) /\n");
}

#[test]
fn test_evaluation_without_results_prints_slash() {
    let (_, out) = import_script("! (transform (likes $x soup) $x)");
    assert_eq!(out, "> (transform (likes $x soup) $x) /\n");
}

#[test]
fn test_multiline_expression() {
    let (session, _) = import_script("(recipe\n  soup\n  (water salt))\n");
    assert_eq!(facts(&session), vec!["(recipe soup (water salt))"]);
}

#[test]
fn test_missing_script_is_io_error() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::new(dir.path());
    let err = session.import_file("nope.metta", &mut Vec::new()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Io);
}

#[test]
fn test_syntax_error_stops_before_any_step() {
    plain();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.metta"), "(a) ! (b) (c").unwrap();
    let mut session = Session::new(dir.path());
    let mut out = Vec::new();
    let err = session.import_file("bad.metta", &mut out).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert!(out.is_empty());
    assert!(session.space().is_empty());
}

#[test]
fn test_bootstrap_script() {
    plain();
    let mut session = Session::new(recipebook());
    let mut out = Vec::new();
    let steps = session
        .import_file("study_group_example.metta", &mut out)
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(steps, 5);
    assert!(out.contains("> (dishes-for sam)\npizza\nsalad\n"));
    assert!(out.contains("> (fans-of pizza)\nbo\nsam\n"));
    assert!(out.contains("> (both-menus ana bo)\nsoup\npizza\n"));
    // The commented-out facts never reach the space
    assert!(!facts(&session).contains(&"(likes ana pizza)".to_string()));
}
