use crate::caddyfile::lexer::{Token, tokenize};
use crate::error::{Error, ParseErrorKind};

/// Cursor over lexed tokens with line-aware navigation.
///
/// The cursor starts before the first token, so the first call to
/// [`Dispenser::next`] lands on it.
#[derive(Debug, Clone)]
pub struct Dispenser {
    file: String,
    tokens: Vec<Token>,
    cursor: isize,
    nesting: usize,
}

impl Dispenser {
    pub fn new(file: &str, input: &str) -> Result<Self, Error> {
        Ok(Self::from_tokens(file, tokenize(file, input)?))
    }

    pub fn from_tokens(file: &str, tokens: Vec<Token>) -> Self {
        Self {
            file: file.to_string(),
            tokens,
            cursor: -1,
            nesting: 0,
        }
    }

    /// Advances to the next token, wherever it is.
    pub fn next(&mut self) -> bool {
        if self.cursor + 1 < self.tokens.len() as isize {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Advances to the next token only if it is on the same line and is not
    /// the opening brace of a block.
    pub fn next_arg(&mut self) -> bool {
        if !self.next_on_same_line() {
            return false;
        }
        if self.val() == "{" {
            self.cursor -= 1;
            return false;
        }
        true
    }

    /// Advances to the next token only if it starts a new line.
    pub fn next_line(&mut self) -> bool {
        let advance = match (self.current(), self.peek()) {
            (None, Some(_)) => true,
            (Some(curr), Some(next)) => next.line > curr.line,
            _ => false,
        };
        if advance {
            self.cursor += 1;
        }
        advance
    }

    /// Iterates the lines of a block opened at `initial_nesting`.
    ///
    /// Called with the cursor on the directive, it opens a `{` on the same
    /// line and steps onto the first token inside. Subsequent calls step to
    /// the next token, returning false once the matching `}` is consumed.
    pub fn next_block(&mut self, initial_nesting: usize) -> bool {
        if self.nesting > initial_nesting {
            if !self.next() {
                return false;
            }
            match self.val() {
                "}" => self.nesting -= 1,
                "{" => self.nesting += 1,
                _ => {}
            }
            return self.nesting > initial_nesting;
        }
        if !self.next_on_same_line() {
            return false;
        }
        if self.val() != "{" {
            self.cursor -= 1;
            return false;
        }
        if !self.next() || self.val() == "}" {
            return false;
        }
        self.nesting += 1;
        true
    }

    pub fn nesting(&self) -> usize {
        self.nesting
    }

    /// Text of the current token, or empty before the first token.
    pub fn val(&self) -> &str {
        self.current().map(|t| t.text.as_str()).unwrap_or("")
    }

    /// Line of the current token, or of the nearest token when the cursor is
    /// out of range.
    pub fn line(&self) -> usize {
        self.current()
            .or_else(|| self.tokens.last())
            .map(|t| t.line)
            .unwrap_or(0)
    }

    pub fn file(&self) -> &str {
        self.current()
            .map(|t| &*t.file)
            .unwrap_or(self.file.as_str())
    }

    /// Consumes and returns the remaining arguments on the current line.
    pub fn remaining_args(&mut self) -> Vec<String> {
        let mut args = Vec::new();
        while self.next_arg() {
            args.push(self.val().to_string());
        }
        args
    }

    pub fn err(&self, kind: ParseErrorKind) -> Error {
        Error::Parse {
            file: self.file().to_string(),
            line: self.line(),
            kind,
        }
    }

    pub fn arg_err(&self) -> Error {
        self.err(ParseErrorKind::ArgCount(self.val().to_string()))
    }

    pub fn eof_err(&self) -> Error {
        self.err(ParseErrorKind::UnexpectedEof)
    }

    fn current(&self) -> Option<&Token> {
        usize::try_from(self.cursor)
            .ok()
            .and_then(|i| self.tokens.get(i))
    }

    fn peek(&self) -> Option<&Token> {
        usize::try_from(self.cursor + 1)
            .ok()
            .and_then(|i| self.tokens.get(i))
    }

    fn next_on_same_line(&mut self) -> bool {
        let advance = match (self.current(), self.peek()) {
            (None, Some(_)) => true,
            (Some(curr), Some(next)) => next.line == curr.line,
            _ => false,
        };
        if advance {
            self.cursor += 1;
        }
        advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_next_walks_all_tokens() {
        let mut d = Dispenser::new("f", "a b\nc").unwrap();
        assert_eq!(d.val(), "");
        let mut seen = Vec::new();
        while d.next() {
            seen.push(d.val().to_string());
        }
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_next_arg_stops_at_line_end() {
        let mut d = Dispenser::new("f", "dir one two\nother").unwrap();
        assert!(d.next());
        assert_eq!(d.remaining_args(), vec!["one", "two"]);
        assert!(!d.next_arg());
        assert!(d.next_line());
        assert_eq!(d.val(), "other");
        assert!(!d.next_line());
    }

    #[test]
    fn test_next_arg_does_not_consume_open_brace() {
        let mut d = Dispenser::new("f", "dir {\n}").unwrap();
        assert!(d.next());
        assert!(!d.next_arg());
        assert_eq!(d.val(), "dir");
    }

    #[test]
    fn test_next_block_iterates_lines() {
        let input = "dir {\n  a 1\n  b 2\n}\nafter";
        let mut d = Dispenser::new("f", input).unwrap();
        assert!(d.next());
        let nesting = d.nesting();
        let mut keys = Vec::new();
        while d.next_block(nesting) {
            keys.push(d.val().to_string());
            assert!(d.next_arg());
        }
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(d.nesting(), 0);
        assert!(d.next());
        assert_eq!(d.val(), "after");
    }

    #[test]
    fn test_next_block_tracks_nested_braces() {
        let input = "dir {\n  a {\n    x\n  }\n  b\n}";
        let mut d = Dispenser::new("f", input).unwrap();
        assert!(d.next());
        let mut seen = Vec::new();
        while d.next_block(0) {
            seen.push((d.val().to_string(), d.nesting()));
        }
        assert_eq!(
            seen,
            vec![
                ("a".to_string(), 1),
                ("{".to_string(), 2),
                ("x".to_string(), 2),
                ("}".to_string(), 1),
                ("b".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_next_block_empty_and_absent() {
        let mut d = Dispenser::new("f", "dir {\n}").unwrap();
        assert!(d.next());
        assert!(!d.next_block(0));

        let mut d = Dispenser::new("f", "dir\nother").unwrap();
        assert!(d.next());
        assert!(!d.next_block(0));
        assert_eq!(d.val(), "dir");
    }

    #[test]
    fn test_errors_carry_position() {
        let mut d = Dispenser::new("Caddyfile", "a\nb c").unwrap();
        d.next();
        d.next();
        assert_matches!(
            d.arg_err(),
            Error::Parse { ref file, line: 2, kind: ParseErrorKind::ArgCount(ref v) }
                if file == "Caddyfile" && v == "b"
        );
        assert_matches!(
            Dispenser::new("empty", "").unwrap().eof_err(),
            Error::Parse { line: 0, kind: ParseErrorKind::UnexpectedEof, .. }
        );
    }
}
