use log::trace;

use crate::atom::{Atom, Grounded, VariableAtom};
use crate::error::{MettaError, Result};
use crate::space::Space;

/// Rewrites deeper than this are reported instead of overflowing the stack.
pub const MAX_DEPTH: usize = 256;

// ============================================================================
// Interpreter
// ============================================================================

/// Evaluate `expr` against `space`, returning every result.
///
/// - An expression headed by a grounded operation runs the operation on the
///   unevaluated arguments.
/// - Otherwise each `(= expr rhs)` rule in the space contributes the
///   interpreted `rhs`.
/// - An atom no rule applies to is its own single result.
pub fn interpret(space: &dyn Space, expr: &Atom) -> Result<Vec<Atom>> {
    interpret_at(space, expr, 0)
}

fn interpret_at(space: &dyn Space, expr: &Atom, depth: usize) -> Result<Vec<Atom>> {
    if depth > MAX_DEPTH {
        return Err(MettaError::interpret(format!(
            "Rewrite depth exceeded {MAX_DEPTH}"
        ))
        .with_expression(expr)
        .with_suggestion("check for a rule that rewrites to itself"));
    }
    trace!("interpret[{depth}] {expr}");

    if let Atom::Expression(e) = expr {
        if let Some((Atom::Grounded(Grounded::Operation(op)), args)) = e.children().split_first() {
            return op
                .execute(args, space)
                .map_err(|err| match err.expression {
                    Some(_) => err,
                    None => err.with_expression(expr),
                });
        }
    }

    let result = Atom::Variable(VariableAtom::new("result").make_unique());
    let rule = Atom::expr([Atom::sym("="), expr.clone(), result.clone()]);
    let rewrites = space.subst(&rule, &result);

    if rewrites.is_empty() {
        return Ok(vec![expr.clone()]);
    }

    let mut results = Vec::new();
    for rhs in rewrites {
        results.extend(interpret_at(space, &rhs, depth + 1)?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::parser::parse_single;
    use crate::space::GroundingSpace;
    use crate::tokenizer::Tokenizer;

    fn atom(text: &str) -> Atom {
        parse_single(text, &Tokenizer::new()).unwrap()
    }

    fn space(facts: &[&str]) -> GroundingSpace {
        let mut space = GroundingSpace::new();
        for fact in facts {
            space.add_atom(atom(fact));
        }
        space
    }

    fn shown(results: Vec<Atom>) -> Vec<String> {
        results.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_no_rule_is_identity() {
        let s = space(&[]);
        assert_eq!(shown(interpret(&s, &atom("(foo)")).unwrap()), vec!["(foo)"]);
        assert_eq!(shown(interpret(&s, &atom("bar")).unwrap()), vec!["bar"]);
    }

    #[test]
    fn test_rule_with_variables() {
        let s = space(&["(= (greet $who) (hello $who))"]);
        assert_eq!(
            shown(interpret(&s, &atom("(greet sam)")).unwrap()),
            vec!["(hello sam)"]
        );
    }

    #[test]
    fn test_rules_chain_and_branch() {
        let s = space(&[
            "(= (meal) (dish soup))",
            "(= (meal) (dish pie))",
            "(= (dish pie) apple-pie)",
        ]);
        assert_eq!(
            shown(interpret(&s, &atom("(meal)")).unwrap()),
            vec!["(dish soup)", "apple-pie"]
        );
    }

    #[test]
    fn test_runaway_rule_is_error() {
        let s = space(&["(= (loop) (loop))"]);
        let err = interpret(&s, &atom("(loop)")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Interpret);
    }
}
