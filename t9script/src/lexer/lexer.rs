use logos::{Logos, Lexer as LogosLexer};
use crate::error::ScriptError;
use super::Token;

pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
    current_line: usize,
    /// Offset up to which newlines have been counted
    counted_to: usize,
    pub input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
            current_line: 1,
            counted_to: 0,
            input,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, ScriptError> {
        let next = self.inner.next();
        self.track_lines();

        match next {
            Some(Ok(token)) => Ok(Some(token)),
            Some(Err(())) => {
                let text = self.inner.slice();
                Err(ScriptError::Parse {
                    line: self.current_line,
                    message: format!("Unexpected token: '{}'", text),
                })
            }
            None => Ok(None),
        }
    }

    /// Line of the most recently returned token
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    fn track_lines(&mut self) {
        let start = self.inner.span().start.max(self.counted_to);
        let skipped = &self.input[self.counted_to..start];
        self.current_line += skipped.chars().filter(|&c| c == '\n').count();
        self.counted_to = start;
    }

    pub fn collect_all(mut self) -> Result<Vec<Token>, ScriptError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}
