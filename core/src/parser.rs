use crate::atom::{Atom, Grounded};
use crate::error::{MettaError, Result};
use crate::lexer::{Lexer, Token};
use crate::tokenizer::Tokenizer;

// ============================================================================
// Parser
// ============================================================================

fn parse_tokens(tokens: &[Token], tokenizer: &Tokenizer) -> Result<(Atom, usize)> {
    if tokens.is_empty() {
        return Err(MettaError::syntax("Unexpected end of input"));
    }

    match &tokens[0] {
        Token::Word(word) => Ok((tokenizer.atom_for(word)?, 1)),
        Token::Variable(name) => Ok((Atom::var(name.as_str()), 1)),
        Token::Str(s) => Ok((Atom::gnd(Grounded::Str(s.clone())), 1)),
        Token::LParen => {
            let mut children = Vec::new();
            let mut i = 1;

            while i < tokens.len() {
                if matches!(tokens[i], Token::RParen) {
                    return Ok((Atom::expr(children), i + 1));
                }

                let (child, consumed) = parse_tokens(&tokens[i..], tokenizer)?;
                children.push(child);
                i += consumed;
            }

            Err(MettaError::syntax("Unclosed parenthesis"))
        }
        Token::RParen => Err(MettaError::syntax("Unexpected )")),
    }
}

/// Parse every top-level atom in `input`.
pub fn parse_all(input: &str, tokenizer: &Tokenizer) -> Result<Vec<Atom>> {
    let tokens = Lexer::new(input).tokenize()?;
    let mut atoms = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let (atom, consumed) = parse_tokens(&tokens[i..], tokenizer)?;
        atoms.push(atom);
        i += consumed;
    }

    Ok(atoms)
}

/// Parse the first atom in `input`. Anything after it is ignored.
pub fn parse_single(input: &str, tokenizer: &Tokenizer) -> Result<Atom> {
    let tokens = Lexer::new(input).tokenize()?;
    if tokens.is_empty() {
        return Err(MettaError::syntax("Expected an expression, found nothing")
            .with_suggestion("type an expression after the prefix"));
    }
    let (atom, _) = parse_tokens(&tokens, tokenizer)?;
    Ok(atom)
}
