use std::iter::Peekable;
use std::str::Chars;
use std::sync::Arc;

use crate::error::{Error, ParseErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub file: Arc<str>,
    pub line: usize,
    pub text: String,
    pub quoted: bool,
}

/// Splits configuration text into tokens, tagging each with its file and line.
pub fn tokenize(file: &str, input: &str) -> Result<Vec<Token>, Error> {
    Lexer {
        file: Arc::from(file),
        chars: input.chars().peekable(),
        line: 1,
        tokens: Vec::new(),
    }
    .run()
}

struct Lexer<'a> {
    file: Arc<str>,
    chars: Peekable<Chars<'a>>,
    line: usize,
    tokens: Vec<Token>,
}

impl Lexer<'_> {
    fn run(mut self) -> Result<Vec<Token>, Error> {
        let mut text = String::new();
        let mut start_line = self.line;

        while let Some(ch) = self.chars.next() {
            match ch {
                '\n' => {
                    self.flush(&mut text, start_line);
                    self.line += 1;
                }
                c if c.is_whitespace() => self.flush(&mut text, start_line),
                '#' if text.is_empty() => self.skip_comment(),
                '"' | '`' if text.is_empty() => {
                    let quoted = self.quoted(ch)?;
                    self.tokens.push(quoted);
                }
                c => {
                    if text.is_empty() {
                        start_line = self.line;
                    }
                    text.push(c);
                }
            }
        }
        self.flush(&mut text, start_line);
        Ok(self.tokens)
    }

    fn flush(&mut self, text: &mut String, line: usize) {
        if text.is_empty() {
            return;
        }
        self.tokens.push(Token {
            file: Arc::clone(&self.file),
            line,
            text: std::mem::take(text),
            quoted: false,
        });
    }

    fn skip_comment(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            self.chars.next();
        }
    }

    // Backtick tokens are literal; double-quoted tokens honour `\"`.
    fn quoted(&mut self, delim: char) -> Result<Token, Error> {
        let line = self.line;
        let mut text = String::new();
        while let Some(c) = self.chars.next() {
            match c {
                c if c == delim => {
                    return Ok(Token {
                        file: Arc::clone(&self.file),
                        line,
                        text,
                        quoted: true,
                    });
                }
                '\\' if delim == '"' && self.chars.peek() == Some(&'"') => {
                    self.chars.next();
                    text.push('"');
                }
                '\n' => {
                    self.line += 1;
                    text.push('\n');
                }
                c => text.push(c),
            }
        }
        Err(Error::Parse {
            file: self.file.to_string(),
            line,
            kind: ParseErrorKind::UnterminatedQuote,
        })
    }
}
