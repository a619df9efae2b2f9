use mettar_repl::Session;
use mettar_repl::repl::{self, UNRECOGNIZED_HINT};

fn run_lines(input: &[&str]) -> (Session, String) {
    colored::control::set_override(false);
    let mut session = Session::new(".");
    let mut out = Vec::new();
    let lines = input.iter().map(|s| s.to_string());
    repl::run(&mut session, lines, &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn test_add_then_query() {
    let (session, out) = run_lines(&["+(likes sam pizza)", "+(likes bo pizza)", "?(likes $x pizza)"]);
    assert_eq!(out, "(likes sam pizza)\n(likes bo pizza)\n");
    assert_eq!(session.space().len(), 2);
}

#[test]
fn test_query_without_matches_prints_slash() {
    let (_, out) = run_lines(&["?(likes $x soup)"]);
    assert_eq!(out, "/\n");
}

#[test]
fn test_remove_then_query() {
    let (_, out) = run_lines(&["+(a)", "+(b)", "-(a)", "?$x"]);
    assert_eq!(out, "(b)\n");
}

#[test]
fn test_evaluate_rule() {
    let (_, out) = run_lines(&["+(= (dinner) soup)", "!(dinner)", "!(breakfast)"]);
    assert_eq!(out, "soup\n(breakfast)\n");
}

#[test]
fn test_evaluate_operations() {
    let (_, out) = run_lines(&[
        "+(likes sam pizza)",
        "+(likes ana soup)",
        "!(join (transform (likes $p pizza) $p) (transform (likes $p soup) $p))",
    ]);
    assert_eq!(out, "sam\nana\n");
}

#[test]
fn test_unrecognized_prefix() {
    let (session, out) = run_lines(&["hello", "+(a)"]);
    assert_eq!(out, format!("prefix h not recognized, {UNRECOGNIZED_HINT}\n"));
    assert_eq!(session.space().len(), 1);
}

#[test]
fn test_quit_ignores_remaining_lines() {
    let (session, _) = run_lines(&["+(a)", "q", "+(b)"]);
    assert_eq!(session.space().len(), 1);
    assert_eq!(session.transcript().concat(), "+(a)\nq\n");
}

#[test]
fn test_comment_recorded_but_inert() {
    let (session, out) = run_lines(&["; just thinking"]);
    assert!(out.is_empty());
    assert!(session.space().is_empty());
    assert_eq!(session.transcript().concat(), "; just thinking\n");
}
