//! Parser for Python literals as they appear in fixture scripts and answers.
//!
//! Supports lists (nested, optional trailing comma), single- and double-quoted
//! strings with backslash escapes, ints, floats, `True`, `False` and `None`.

use thiserror::Error;

use super::value::Value;

/// Deepest list nesting accepted before parsing gives up.
pub const MAX_DEPTH: usize = 64;

/// Errors produced while parsing literal text. Offsets are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("unexpected end of input at offset {0}")]
    UnexpectedEnd(usize),
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { offset: usize, found: char },
    #[error("unterminated string starting at offset {0}")]
    UnterminatedString(usize),
    #[error("invalid number {text:?} at offset {offset}")]
    InvalidNumber { offset: usize, text: String },
    #[error("unknown name {name:?} at offset {offset}")]
    UnknownName { offset: usize, name: String },
    #[error("lists nested deeper than {max} at offset {0}", max = MAX_DEPTH)]
    TooDeep(usize),
    #[error("expected a list at offset {0}")]
    ExpectedList(usize),
    #[error("trailing input at offset {0}")]
    TrailingInput(usize),
}

/// Parse a single literal, rejecting anything after it.
pub fn parse_value(text: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser::new(text);
    let value = parser.value()?;
    parser.finish()?;
    Ok(value)
}

/// Parse a list literal and return its elements.
pub fn parse_list(text: &str) -> Result<Vec<Value>, LiteralError> {
    let mut parser = Parser::new(text);
    parser.skip_ws();
    if parser.peek() != Some('[') {
        return Err(LiteralError::ExpectedList(parser.pos));
    }
    let items = parser.list()?;
    parser.finish()?;
    Ok(items)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn finish(&mut self) -> Result<(), LiteralError> {
        self.skip_ws();
        if self.pos != self.src.len() {
            return Err(LiteralError::TrailingInput(self.pos));
        }
        Ok(())
    }

    fn value(&mut self) -> Result<Value, LiteralError> {
        self.skip_ws();
        let offset = self.pos;
        match self.peek() {
            None => Err(LiteralError::UnexpectedEnd(offset)),
            Some('[') => self.list().map(Value::List),
            Some(quote @ ('\'' | '"')) => self.string(quote).map(Value::Str),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.number(),
            Some(c) if c.is_alphabetic() || c == '_' => self.name(),
            Some(found) => Err(LiteralError::UnexpectedChar { offset, found }),
        }
    }

    fn list(&mut self) -> Result<Vec<Value>, LiteralError> {
        if self.depth >= MAX_DEPTH {
            return Err(LiteralError::TooDeep(self.pos));
        }
        self.depth += 1;
        let items = self.list_items();
        self.depth -= 1;
        items
    }

    fn list_items(&mut self) -> Result<Vec<Value>, LiteralError> {
        self.bump();
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                Some(']') => {
                    self.bump();
                    return Ok(items);
                }
                None => return Err(LiteralError::UnexpectedEnd(self.pos)),
                Some(_) => {}
            }
            items.push(self.value()?);
            self.skip_ws();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {
                    self.bump();
                    return Ok(items);
                }
                Some(found) => {
                    return Err(LiteralError::UnexpectedChar {
                        offset: self.pos,
                        found,
                    });
                }
                None => return Err(LiteralError::UnexpectedEnd(self.pos)),
            }
        }
    }

    fn string(&mut self, quote: char) -> Result<String, LiteralError> {
        let start = self.pos;
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err(LiteralError::UnterminatedString(start)),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.bump() {
                    None => return Err(LiteralError::UnterminatedString(start)),
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some('0') => out.push('\0'),
                    Some(c @ ('\\' | '\'' | '"')) => out.push(c),
                    // Unknown escapes are kept verbatim, as Python does.
                    Some(other) => {
                        out.push('\\');
                        out.push(other);
                    }
                },
                Some(c) => out.push(c),
            }
        }
    }

    fn number(&mut self) -> Result<Value, LiteralError> {
        let offset = self.pos;
        while matches!(
            self.peek(),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E' | '_')
        ) {
            self.bump();
        }
        let text = &self.src[offset..self.pos];
        let digits = text.replace('_', "");
        let invalid = || LiteralError::InvalidNumber {
            offset,
            text: text.to_string(),
        };
        if digits.contains(['.', 'e', 'E']) {
            digits.parse::<f64>().map(Value::Float).map_err(|_| invalid())
        } else {
            digits.parse::<i64>().map(Value::Int).map_err(|_| invalid())
        }
    }

    fn name(&mut self) -> Result<Value, LiteralError> {
        let offset = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        match &self.src[offset..self.pos] {
            "True" => Ok(Value::Bool(true)),
            "False" => Ok(Value::Bool(false)),
            "None" => Ok(Value::None),
            name => Err(LiteralError::UnknownName {
                offset,
                name: name.to_string(),
            }),
        }
    }
}
