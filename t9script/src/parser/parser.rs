use std::collections::HashSet;

use t9_core::{HelperKey, InputEvent, KeyId, Timestamp};

use crate::error::{Result, ScriptError};
use crate::lexer::{Lexer, Token};
use super::ast::*;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Option<Token>,
    /// Line of `current`
    line: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            current: None,
            line: 1,
        }
    }

    /// Parse a layout script
    pub fn parse_layout(&mut self) -> Result<LayoutFile> {
        self.advance()?;
        let mut ast = LayoutFile::new();
        let mut seen_keys = HashSet::new();
        let mut seen_symbols = HashSet::new();

        while let Some(token) = &self.current {
            match token {
                Token::Key => {
                    let decl = self.parse_key_decl()?;
                    if !seen_keys.insert(decl.key) {
                        return Err(self.error_at(decl.line, format!("Duplicate declaration of {}", decl.key)));
                    }
                    ast.keys.push(decl);
                }
                Token::Symbols => {
                    let decl = self.parse_symbol_decl()?;
                    if !seen_symbols.insert(decl.key) {
                        return Err(self.error_at(decl.line, format!("Duplicate symbols for {}", decl.key)));
                    }
                    ast.symbols.push(decl);
                }
                other => {
                    return Err(self.error(format!("Expected 'key' or 'symbols', found {:?}", other)));
                }
            }
        }

        Ok(ast)
    }

    /// Parse an event script
    pub fn parse_events(&mut self) -> Result<EventScript> {
        self.advance()?;
        let mut script = EventScript::new();
        let mut clock: Timestamp = 0;

        while let Some(token) = &self.current {
            let line = self.line;
            let event = match token {
                Token::Press => {
                    self.advance()?;
                    let key = self.parse_key_ref()?;
                    if self.current == Some(Token::At) {
                        self.advance()?;
                        clock = self.expect_number()?;
                    }
                    InputEvent::press(key, clock)
                }
                Token::Long => {
                    self.advance()?;
                    InputEvent::long_press(self.parse_key_ref()?)
                }
                Token::Select => {
                    self.advance()?;
                    InputEvent::select(self.expect_char()?)
                }
                Token::Dismiss => {
                    self.advance()?;
                    InputEvent::Dismiss
                }
                other => {
                    return Err(self.error(format!(
                        "Expected 'press', 'long', 'select' or 'dismiss', found {:?}",
                        other
                    )));
                }
            };
            script.events.push(EventDecl { event, line });
        }

        Ok(script)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        self.line = self.lexer.current_line();
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> Result<()> {
        if self.current.as_ref() != Some(&expected) {
            return Err(self.error(format!("Expected {:?}, found {:?}", expected, self.current)));
        }
        self.advance()
    }

    fn expect_number(&mut self) -> Result<u64> {
        match self.current {
            Some(Token::Number(n)) => {
                self.advance()?;
                Ok(n)
            }
            _ => Err(self.error(format!("Expected number, found {:?}", self.current))),
        }
    }

    fn expect_string(&mut self) -> Result<String> {
        match self.current.take() {
            Some(Token::String(s)) => {
                self.advance()?;
                Ok(s)
            }
            other => {
                let message = format!("Expected string literal, found {:?}", other);
                self.current = other;
                Err(self.error(message))
            }
        }
    }

    /// A string literal holding exactly one character
    fn expect_char(&mut self) -> Result<char> {
        let line = self.line;
        let s = self.expect_string()?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ch),
            _ => Err(self.error_at(line, format!("Expected a single character, found {:?}", s))),
        }
    }

    /// A digit key id, 0-9
    fn expect_digit(&mut self) -> Result<KeyId> {
        let line = self.line;
        let n = self.expect_number()?;
        u8::try_from(n)
            .ok()
            .and_then(KeyId::digit)
            .ok_or_else(|| self.error_at(line, format!("Key must be a digit 0-9, found {}", n)))
    }

    /// A key in an event: a number up to 255 or a helper name
    fn parse_key_ref(&mut self) -> Result<KeyId> {
        let line = self.line;
        match self.current.take() {
            Some(Token::Number(n)) => {
                let raw = u8::try_from(n)
                    .map_err(|_| self.error_at(line, format!("Key id {} out of range", n)))?;
                self.advance()?;
                Ok(KeyId(raw))
            }
            Some(Token::Identifier(name)) => {
                let helper = HelperKey::from_name(&name)
                    .ok_or_else(|| self.error_at(line, format!("Unknown helper key '{}'", name)))?;
                self.advance()?;
                Ok(helper.id())
            }
            other => {
                let message = format!("Expected key, found {:?}", other);
                self.current = other;
                Err(self.error(message))
            }
        }
    }

    fn parse_key_decl(&mut self) -> Result<KeyDecl> {
        let line = self.line;
        self.expect(Token::Key)?;
        let key = self.expect_digit()?;

        let mut lower = None;
        let mut upper = None;
        let mut numeric = None;

        loop {
            let clause = match &self.current {
                Some(Token::Lower) => "lower",
                Some(Token::Upper) => "upper",
                Some(Token::Numeric) => "numeric",
                _ => break,
            };
            let clause_line = self.line;
            self.advance()?;

            let duplicate = match clause {
                "lower" => lower.replace(self.expect_string()?).is_some(),
                "upper" => upper.replace(self.expect_string()?).is_some(),
                _ => numeric.replace(self.expect_char()?).is_some(),
            };
            if duplicate {
                return Err(self.error_at(clause_line, format!("Duplicate '{}' clause for {}", clause, key)));
            }
        }

        let lower = lower.ok_or_else(|| self.error_at(line, format!("{} is missing a 'lower' clause", key)))?;
        let upper = upper.ok_or_else(|| self.error_at(line, format!("{} is missing an 'upper' clause", key)))?;

        Ok(KeyDecl { key, lower, upper, numeric, line })
    }

    fn parse_symbol_decl(&mut self) -> Result<SymbolDecl> {
        let line = self.line;
        self.expect(Token::Symbols)?;
        let key = self.expect_digit()?;
        let symbols = self.expect_string()?;
        Ok(SymbolDecl { key, symbols, line })
    }

    fn error(&self, message: String) -> ScriptError {
        self.error_at(self.line, message)
    }

    fn error_at(&self, line: usize, message: String) -> ScriptError {
        ScriptError::Parse { line, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_clauses_in_any_order() {
        let mut parser = Parser::new(r#"key 3 numeric "3" upper "DEF3" lower "def3""#);
        let ast = parser.parse_layout().unwrap();
        assert_eq!(
            ast.keys,
            vec![KeyDecl {
                key: KeyId(3),
                lower: "def3".into(),
                upper: "DEF3".into(),
                numeric: Some('3'),
                line: 1,
            }]
        );
    }

    #[test]
    fn test_press_reuses_previous_timestamp() {
        let mut parser = Parser::new("press 2 @700\npress 2\npress OK");
        let script = parser.parse_events().unwrap();
        let events: Vec<_> = script.events.into_iter().map(|d| d.event).collect();
        assert_eq!(
            events,
            vec![
                InputEvent::press(KeyId(2), 700),
                InputEvent::press(KeyId(2), 700),
                InputEvent::press(KeyId::CONFIRM, 700),
            ]
        );
    }

    #[test]
    fn test_helper_names_are_exact() {
        let mut parser = Parser::new("press BKSP");
        match parser.parse_events() {
            Err(ScriptError::Parse { message, .. }) => assert!(message.contains("BKSP")),
            other => panic!("Expected parse error, got {:?}", other),
        }
        assert!(Parser::new("press ok").parse_events().is_err());
    }

    #[test]
    fn test_event_lines() {
        let mut parser = Parser::new("// header\nlong 1\n\nselect \"#\"");
        let script = parser.parse_events().unwrap();
        let lines: Vec<_> = script.events.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![2, 4]);
    }
}
