//! String literal scanning.

use super::{Lexer, TokenKind};
use crate::ast::Span;
use crate::diagnostics::CompileError;

impl<'a> Lexer<'a> {
    /// Scan a single- or double-quoted string literal. The opening quote has been consumed.
    ///
    /// Strings may not span lines. Supported escapes: `\n`, `\t`, `\r`, `\\`, `\"`, `\'`, `\0`.
    pub(super) fn scan_string(&mut self, start: usize, quote: char) {
        let mut value = String::new();

        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.errors.push(
                        CompileError::syntax("Unterminated string literal".to_string(), Span::new(start, self.current_pos))
                            .with_hint(format!("close the string with {quote}")),
                    );
                    return;
                }
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    let escape_start = self.current_pos;
                    self.advance();
                    match self.advance() {
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        Some('r') => value.push('\r'),
                        Some('0') => value.push('\0'),
                        Some('\\') => value.push('\\'),
                        Some('"') => value.push('"'),
                        Some('\'') => value.push('\''),
                        Some(other) => {
                            self.errors.push(CompileError::syntax(
                                format!("Unknown escape sequence '\\{}'", other),
                                Span::new(escape_start, self.current_pos),
                            ));
                        }
                        None => {
                            self.errors.push(CompileError::syntax(
                                "Unterminated string literal".to_string(),
                                Span::new(start, self.current_pos),
                            ));
                            return;
                        }
                    }
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }

        self.add_token(TokenKind::String(value), start);
    }
}
