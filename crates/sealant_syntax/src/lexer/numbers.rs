//! Numeric literal scanning.

use super::{Lexer, TokenKind};
use crate::ast::Span;
use crate::diagnostics::CompileError;

impl<'a> Lexer<'a> {
    /// Scan an integer or float literal whose first digit has been consumed.
    ///
    /// `start` points at the leading `-` of a negative literal. Underscores are accepted as digit
    /// separators (`1_000`). A literal with a fractional part or exponent becomes a `Float`.
    pub(super) fn scan_number(&mut self, start: usize) {
        let mut is_float = false;

        self.consume_digits();

        // Fractional part: only when a digit follows the dot.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance();
            self.consume_digits();
        }

        // Exponent
        if matches!(self.peek(), Some('e' | 'E')) {
            let after = self.peek_next();
            let has_exponent = match after {
                Some(c) if c.is_ascii_digit() => true,
                Some('+' | '-') => self.source[self.current_pos..]
                    .chars()
                    .nth(2)
                    .is_some_and(|c| c.is_ascii_digit()),
                _ => false,
            };
            if has_exponent {
                is_float = true;
                self.advance();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.advance();
                }
                self.consume_digits();
            }
        }

        let text: String = self.source[start..self.current_pos].chars().filter(|c| *c != '_').collect();
        let span = Span::new(start, self.current_pos);

        if is_float {
            match text.parse::<f64>() {
                Ok(v) => self.add_token(TokenKind::Float(v), start),
                Err(_) => self
                    .errors
                    .push(CompileError::syntax(format!("Invalid float literal '{}'", text), span)),
            }
        } else {
            match text.parse::<i64>() {
                Ok(v) => self.add_token(TokenKind::Int(v), start),
                Err(_) => self.errors.push(
                    CompileError::syntax(format!("Integer literal '{}' is out of range", text), span)
                        .with_note(format!("integers must fit in {} bits", i64::BITS)),
                ),
            }
        }
    }

    fn consume_digits(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }
    }
}
