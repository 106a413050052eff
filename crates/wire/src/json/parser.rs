//! JSON text parser
//!
//! Recursive-descent parser producing a [`Json`] tree. Integers that fit in
//! an i64 stay integers; anything with a fraction or exponent (or too large
//! for i64) becomes a double.

use super::decode::DecodeError;
use super::tree::Json;

/// Parse a complete JSON document, rejecting trailing content.
pub(crate) fn parse(input: &str, max_depth: usize) -> Result<Json, DecodeError> {
    let trimmed = input.trim_matches(is_json_whitespace);
    if trimmed.is_empty() {
        return Err(DecodeError::UnexpectedEnd);
    }

    let mut parser = JsonParser::new(trimmed, max_depth);
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    match parser.peek() {
        None => Ok(value),
        Some(c) => Err(DecodeError::UnexpectedChar(c)),
    }
}

/// Space, tab, line feed and carriage return; nothing else separates tokens
fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

struct JsonParser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> JsonParser<'a> {
    fn new(input: &'a str, max_depth: usize) -> Self {
        JsonParser {
            input,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if is_json_whitespace(c) {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn expect_literal(&mut self, literal: &str, value: Json) -> Result<Json, DecodeError> {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(DecodeError::InvalidJson(format!("Expected '{}'", literal)))
        }
    }

    fn enter(&mut self) -> Result<(), DecodeError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(DecodeError::TooDeep(self.max_depth));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_value(&mut self) -> Result<Json, DecodeError> {
        self.skip_whitespace();

        match self.peek() {
            None => Err(DecodeError::UnexpectedEnd),
            Some('n') => self.expect_literal("null", Json::Null),
            Some('t') => self.expect_literal("true", Json::Bool(true)),
            Some('f') => self.expect_literal("false", Json::Bool(false)),
            Some('"') => self.parse_string().map(Json::String),
            Some('[') => self.parse_array(),
            Some('{') => self.parse_object(),
            Some(c) if c == '-' || c.is_ascii_digit() => self.parse_number(),
            Some(c) => Err(DecodeError::UnexpectedChar(c)),
        }
    }

    fn parse_string(&mut self) -> Result<String, DecodeError> {
        self.advance(); // consume opening quote
        let mut result = String::new();

        loop {
            match self.peek() {
                None => return Err(DecodeError::UnexpectedEnd),
                Some('"') => {
                    self.advance();
                    return Ok(result);
                }
                Some('\\') => {
                    self.advance();
                    let escaped = self.peek().ok_or(DecodeError::UnexpectedEnd)?;
                    self.advance();
                    match escaped {
                        '"' => result.push('"'),
                        '\\' => result.push('\\'),
                        '/' => result.push('/'),
                        'n' => result.push('\n'),
                        'r' => result.push('\r'),
                        't' => result.push('\t'),
                        'b' => result.push('\x08'),
                        'f' => result.push('\x0c'),
                        'u' => result.push(self.parse_unicode_escape()?),
                        c => {
                            return Err(DecodeError::InvalidJson(format!(
                                "Invalid escape: \\{}",
                                c
                            )))
                        }
                    }
                }
                Some(c) if (c as u32) < 0x20 => {
                    return Err(DecodeError::InvalidJson(
                        "Unescaped control character in string".to_string(),
                    ))
                }
                Some(c) => {
                    result.push(c);
                    self.advance();
                }
            }
        }
    }

    fn parse_hex4(&mut self) -> Result<u32, DecodeError> {
        let end = self.pos + 4;
        let hex = self
            .input
            .get(self.pos..end)
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| DecodeError::InvalidJson("Invalid unicode escape".to_string()))?;
        let code = u32::from_str_radix(hex, 16)
            .map_err(|_| DecodeError::InvalidJson("Invalid unicode escape".to_string()))?;
        self.pos = end;
        Ok(code)
    }

    /// Parse the digits after `\u`, joining UTF-16 surrogate pairs
    fn parse_unicode_escape(&mut self) -> Result<char, DecodeError> {
        let high = self.parse_hex4()?;
        let code = if (0xD800..0xDC00).contains(&high) {
            if !self.input[self.pos..].starts_with("\\u") {
                return Err(DecodeError::InvalidJson("Unpaired surrogate".to_string()));
            }
            self.pos += 2;
            let low = self.parse_hex4()?;
            if !(0xDC00..0xE000).contains(&low) {
                return Err(DecodeError::InvalidJson("Unpaired surrogate".to_string()));
            }
            0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
        } else {
            high
        };
        char::from_u32(code)
            .ok_or_else(|| DecodeError::InvalidJson("Invalid unicode codepoint".to_string()))
    }

    /// Consume a run of ASCII digits, returning how many there were
    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
        self.pos - start
    }

    fn require_digits(&mut self, start: usize) -> Result<(), DecodeError> {
        if self.skip_digits() == 0 {
            let end = self.peek().map_or(self.pos, |c| self.pos + c.len_utf8());
            return Err(DecodeError::InvalidNumber(self.input[start..end].to_string()));
        }
        Ok(())
    }

    fn parse_number(&mut self) -> Result<Json, DecodeError> {
        let start = self.pos;

        if self.peek() == Some('-') {
            self.advance();
        }
        if self.peek() == Some('0') {
            self.advance();
            if matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.skip_digits();
                return Err(DecodeError::InvalidNumber(self.input[start..self.pos].to_string()));
            }
        } else {
            self.require_digits(start)?;
        }

        let mut is_double = false;

        if self.peek() == Some('.') {
            is_double = true;
            self.advance();
            self.require_digits(start)?;
        }

        if let Some('e' | 'E') = self.peek() {
            is_double = true;
            self.advance();
            if let Some('+' | '-') = self.peek() {
                self.advance();
            }
            self.require_digits(start)?;
        }

        let num_str = &self.input[start..self.pos];

        if !is_double {
            if let Ok(i) = num_str.parse::<i64>() {
                return Ok(Json::Int(i));
            }
        }
        // Fractions, exponents and integers beyond i64 range
        num_str
            .parse::<f64>()
            .map(Json::Double)
            .map_err(|_| DecodeError::InvalidNumber(num_str.to_string()))
    }

    fn parse_array(&mut self) -> Result<Json, DecodeError> {
        self.enter()?;
        self.advance(); // consume '['
        self.skip_whitespace();

        let mut items = Vec::new();

        if self.peek() == Some(']') {
            self.advance();
            self.leave();
            return Ok(Json::Array(items));
        }

        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();

            match self.peek() {
                Some(',') => self.advance(),
                Some(']') => {
                    self.advance();
                    self.leave();
                    return Ok(Json::Array(items));
                }
                Some(c) => return Err(DecodeError::UnexpectedChar(c)),
                None => return Err(DecodeError::UnexpectedEnd),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Json, DecodeError> {
        self.enter()?;
        self.advance(); // consume '{'
        self.skip_whitespace();

        let mut members = Vec::new();

        if self.peek() == Some('}') {
            self.advance();
            self.leave();
            return Ok(Json::Object(members));
        }

        loop {
            self.skip_whitespace();

            if self.peek() != Some('"') {
                return Err(DecodeError::InvalidJson("Expected string key".to_string()));
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            if self.peek() != Some(':') {
                return Err(DecodeError::InvalidJson("Expected ':'".to_string()));
            }
            self.advance();

            let value = self.parse_value()?;
            members.push((key, value));

            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.advance(),
                Some('}') => {
                    self.advance();
                    self.leave();
                    return Ok(Json::Object(members));
                }
                Some(c) => return Err(DecodeError::UnexpectedChar(c)),
                None => return Err(DecodeError::UnexpectedEnd),
            }
        }
    }
}
