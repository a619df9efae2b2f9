use mettar::{
    Atom, ErrorKind, GroundingSpace, Space, Tokenizer, interpret, parse_all, parse_single,
    register_operations,
};

fn tokenizer() -> Tokenizer {
    let mut tokenizer = Tokenizer::new();
    register_operations(&mut tokenizer);
    tokenizer
}

fn load(script: &str) -> (GroundingSpace, Tokenizer) {
    let tokenizer = tokenizer();
    let mut space = GroundingSpace::new();
    for atom in parse_all(script, &tokenizer).unwrap() {
        space.add_atom(atom);
    }
    (space, tokenizer)
}

fn eval(space: &GroundingSpace, tokenizer: &Tokenizer, text: &str) -> Vec<String> {
    let expr = parse_single(text, tokenizer).unwrap();
    interpret(space, &expr)
        .unwrap()
        .iter()
        .map(|a| a.to_string())
        .collect()
}

#[test]
fn test_rule_rewrites_to_transform() {
    let (space, tokenizer) = load(
        r#"
(likes sam pizza)
(likes bo pizza)
(likes sam salad)
(= (fans-of $dish) (transform (likes $person $dish) $person))
"#,
    );
    assert_eq!(eval(&space, &tokenizer, "(fans-of pizza)"), vec!["sam", "bo"]);
    assert_eq!(eval(&space, &tokenizer, "(fans-of soup)"), Vec::<String>::new());
}

#[test]
fn test_join_of_rules() {
    let (space, tokenizer) = load(
        r#"
(= (starter) soup)
(= (main) pizza)
(= (main) salad)
"#,
    );
    assert_eq!(
        eval(&space, &tokenizer, "(join (starter) (main))"),
        vec!["soup", "pizza", "salad"]
    );
}

#[test]
fn test_transform_template_is_not_evaluated() {
    let (space, tokenizer) = load(
        r#"
(likes ana soup)
(= (soup) hot)
"#,
    );
    assert_eq!(
        eval(&space, &tokenizer, "(transform (likes $p $d) ($d))"),
        vec!["(soup)"]
    );
}

#[test]
fn test_comment_lines_in_script() {
    let atoms = parse_all("; heading\n(a) ; trailing\n(b)\n", &tokenizer()).unwrap();
    assert_eq!(atoms.len(), 2);
}

#[test]
fn test_operation_arity_error_carries_expression() {
    let (space, tokenizer) = load("");
    let expr = parse_single("(transform (a))", &tokenizer).unwrap();
    let err = interpret(&space, &expr).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Arity);
    assert_eq!(err.expression.as_deref(), Some("(transform (a))"));
}

#[test]
fn test_removed_fact_no_longer_matches() {
    let (mut space, tokenizer) = load("(likes sam pizza) (likes bo pizza)");
    space.remove_atom(&parse_single("(likes bo pizza)", &tokenizer).unwrap());
    let pattern = parse_single("(likes $x pizza)", &tokenizer).unwrap();
    assert_eq!(
        space.subst(&pattern, &Atom::var("x")),
        vec![Atom::sym("sam")]
    );
}
