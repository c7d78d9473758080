//! Valve220 map text lexer.
//!
//! Produces punctuation tokens for `( ) [ ]`, brace tokens for a `{` or `}`
//! that stands alone, and bare words for everything else. Numbers are not
//! classified here: a texture name such as `+0BUTTON` or `1` is only known
//! to be a name from its position, so the parser converts words to numbers
//! where the grammar expects them.
//! `//` starts a comment that runs to the end of the line.

use crate::error::{MapError, Result};

/// A token in map text.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Left parenthesis `(`.
    LParen,
    /// Right parenthesis `)`.
    RParen,
    /// Left bracket `[`.
    LBracket,
    /// Right bracket `]`.
    RBracket,
    /// Left brace `{`.
    LBrace,
    /// Right brace `}`.
    RBrace,
    /// Run of other non-whitespace characters.
    Word(String),
}

/// Position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

/// A token with its position in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    /// The token.
    pub token: Token,
    /// Position where the token starts.
    pub pos: Position,
}

/// Lexer over map text.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    col: usize,
}

fn is_delimiter(ch: u8) -> bool {
    matches!(ch, b'(' | b')' | b'[' | b']')
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Current position, used for end-of-input errors.
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            col: self.col,
        }
    }

    /// Tokenize the entire input.
    pub fn tokenize(&mut self) -> Result<Vec<SpannedToken>> {
        let mut tokens = Vec::new();
        while let Some(tok) = self.next_token()? {
            tokens.push(tok);
        }
        Ok(tokens)
    }

    /// Get the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<SpannedToken>> {
        self.skip_whitespace_and_comments();

        let Some(ch) = self.peek_byte() else {
            return Ok(None);
        };
        let pos = self.position();

        let token = match ch {
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b'[' => Token::LBracket,
            b']' => Token::RBracket,
            // `{BLUE` is a texture name, a lone `{` opens a block.
            b'{' | b'}' if !self.brace_stands_alone() => {
                return Ok(Some(SpannedToken { token: self.read_word(), pos }));
            }
            b'{' => Token::LBrace,
            b'}' => Token::RBrace,
            b'"' => {
                return Err(MapError::lexer(
                    pos.line,
                    pos.col,
                    "quoted strings are not valid inside a brush",
                ));
            }
            _ => return Ok(Some(SpannedToken { token: self.read_word(), pos })),
        };
        self.advance();

        Ok(Some(SpannedToken { token, pos }))
    }

    fn brace_stands_alone(&self) -> bool {
        self.input
            .as_bytes()
            .get(self.pos + 1)
            .map_or(true, |ch| ch.is_ascii_whitespace())
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.peek_byte()?;
        self.pos += 1;
        if ch == b'\n' {
            self.line += 1;
            self.col = 1;
        } else if ch & 0xC0 != 0x80 {
            // Count characters, not UTF-8 continuation bytes.
            self.col += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while let Some(ch) = self.peek_byte() {
                if ch.is_ascii_whitespace() {
                    self.advance();
                } else {
                    break;
                }
            }

            if self.input[self.pos..].starts_with("//") {
                while let Some(ch) = self.peek_byte() {
                    if ch == b'\n' {
                        break;
                    }
                    self.advance();
                }
                continue;
            }

            break;
        }
    }

    fn read_word(&mut self) -> Token {
        let start = self.pos;
        while let Some(ch) = self.peek_byte() {
            if ch.is_ascii_whitespace() || is_delimiter(ch) {
                break;
            }
            self.advance();
        }
        Token::Word(self.input[start..self.pos].to_string())
    }
}
