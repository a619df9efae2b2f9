use crate::error::{MettaError, Result};

// ============================================================================
// Tokens
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    LParen,
    RParen,
    /// Bare word; the tokenizer decides whether it is a symbol or a grounded value
    Word(String),
    /// `$name`, stored without the sigil
    Variable(String),
    /// String literal with escapes already processed
    Str(String),
}

// ============================================================================
// Lexer
// ============================================================================

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> char {
        if self.position < self.input.len() {
            self.input[self.position]
        } else {
            '\0'
        }
    }

    fn advance(&mut self) {
        if self.position < self.input.len() {
            self.position += 1;
        }
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        loop {
            while !self.is_eof() && self.current_char().is_whitespace() {
                self.advance();
            }

            if !self.is_eof() && self.current_char() == ';' {
                while !self.is_eof() && self.current_char() != '\n' {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn is_delimiter(ch: char) -> bool {
        ch.is_whitespace() || ch == '(' || ch == ')' || ch == ';' || ch == '"'
    }

    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while !self.is_eof() && !Self::is_delimiter(self.current_char()) {
            word.push(self.current_char());
            self.advance();
        }
        word
    }

    fn read_string(&mut self) -> Result<String> {
        // Opening quote
        self.advance();
        let mut content = String::new();

        while !self.is_eof() && self.current_char() != '"' {
            if self.current_char() == '\\' {
                self.advance();
                content.push(self.read_escape()?);
            } else {
                content.push(self.current_char());
                self.advance();
            }
        }

        if self.is_eof() {
            return Err(MettaError::syntax("Unterminated string"));
        }
        self.advance();
        Ok(content)
    }

    fn read_escape(&mut self) -> Result<char> {
        if self.is_eof() {
            return Err(MettaError::syntax("Unterminated string"));
        }
        let c = self.current_char();
        self.advance();

        match c {
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'r' => Ok('\r'),
            '\\' => Ok('\\'),
            '"' => Ok('"'),
            '\'' => Ok('\''),
            '0' => Ok('\0'),
            _ => Err(MettaError::syntax(format!("Unknown escape sequence: \\{c}"))),
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();
        if self.is_eof() {
            return Ok(None);
        }

        let token = match self.current_char() {
            '(' => {
                self.advance();
                Token::LParen
            }
            ')' => {
                self.advance();
                Token::RParen
            }
            '"' => Token::Str(self.read_string()?),
            '$' => {
                self.advance();
                let name = self.read_word();
                if name.is_empty() {
                    return Err(MettaError::syntax("Variable name expected after $"));
                }
                Token::Variable(name)
            }
            _ => Token::Word(self.read_word()),
        };
        Ok(Some(token))
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}
