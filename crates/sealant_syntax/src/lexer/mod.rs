//! Lexer for the sealant declaration language
//!
//! Handles tokenization including:
//! - Keywords (sealed, class, interface, trait, permits, let, widen, ...)
//! - Identifiers and literals (int, float, string)
//! - Operators and punctuation (`=`, `==`, `|`, brackets, `,`, `:`)
//! - Line structure: one `Newline` token per logical line, none inside brackets
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String literal scanning
//! - `numbers` - Numeric literal scanning

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use sealant_core::lang::operators::OperatorId;
use sealant_core::lang::punctuation::{self, PunctuationId};

/// Lexer for sealant source code.
///
/// Converts source text into a stream of tokens, handling:
/// - Keywords and identifiers
/// - Numeric and string literals
/// - Operators and punctuation
/// - Implicit line continuation inside brackets
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// Bracket depth for implicit line continuation (parens, brackets)
    bracket_depth: usize,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            bracket_depth: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        if self.bracket_depth > 0 {
            self.errors.push(CompileError::syntax(
                "Unclosed bracket at end of file".to_string(),
                Span::new(self.current_pos, self.current_pos),
            ));
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, Span::new(self.current_pos, self.current_pos)));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            ' ' | '\t' | '\r' => {}

            // Comments run to end of line
            '#' => {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            }

            '\n' => {
                // Implicit line continuation inside brackets; collapse blank lines.
                let after_newline = matches!(self.tokens.last().map(|t| &t.kind), None | Some(TokenKind::Newline));
                if self.bracket_depth == 0 && !after_newline {
                    self.add_token(TokenKind::Newline, start);
                }
            }

            '=' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::EqEq, start);
                } else {
                    self.add_op(OperatorId::Eq, start);
                }
            }
            '|' => self.add_op(OperatorId::Pipe, start),

            '(' => self.open_bracket(PunctuationId::LParen, start),
            ')' => self.close_bracket(PunctuationId::RParen, start),
            '[' => self.open_bracket(PunctuationId::LBracket, start),
            ']' => self.close_bracket(PunctuationId::RBracket, start),

            '"' | '\'' => self.scan_string(start, c),

            '-' if self.peek().is_some_and(|n| n.is_ascii_digit()) => {
                self.advance();
                self.scan_number(start);
            }
            '0'..='9' => self.scan_number(start),

            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => {
                if let Some(id) = punctuation::from_char(c) {
                    self.add_punct(id, start);
                } else {
                    self.errors.push(CompileError::syntax(
                        format!("Unexpected character '{}'", c),
                        Span::new(start, self.current_pos),
                    ));
                }
            }
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn add_op(&mut self, id: OperatorId, start: usize) {
        self.add_token(TokenKind::Operator(id), start);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    /// Emit a bracket token and track bracket depth.
    fn open_bracket(&mut self, kind: PunctuationId, start: usize) {
        self.bracket_depth += 1;
        self.add_punct(kind, start);
    }

    /// Emit a closing bracket token and decrement bracket depth.
    /// Produces an error if there's no matching opening bracket.
    fn close_bracket(&mut self, kind: PunctuationId, start: usize) {
        if self.bracket_depth == 0 {
            self.errors.push(CompileError::syntax(
                "Unmatched closing bracket".to_string(),
                Span::new(start, self.current_pos),
            ));
        } else {
            self.bracket_depth -= 1;
        }
        self.add_punct(kind, start);
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start);
        }
    }
}

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sealant_core::lang::keywords::{self, KeywordId};
    use sealant_core::lang::operators;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let tokens = lex(k.canonical).unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", k.canonical, errs));
            assert_eq!(tokens.len(), 2, "expected token + EOF for keyword {:?}, got {:?}", k.id, tokens);
            assert!(tokens[0].kind.is_keyword(k.id));
            assert!(matches!(tokens[1].kind, TokenKind::Eof));
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        for o in operators::OPERATORS {
            let tokens = lex(o.canonical).unwrap();
            assert_eq!(tokens.len(), 2, "expected token + EOF for operator {:?}", o.canonical);
            assert!(tokens[0].kind.is_operator(o.id));
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        for p in punctuation::PUNCTUATION {
            let source = match p.id {
                PunctuationId::LParen | PunctuationId::RParen => "()",
                PunctuationId::LBracket | PunctuationId::RBracket => "[]",
                PunctuationId::Comma | PunctuationId::Colon => p.canonical,
            };
            let tokens = lex(source).unwrap();
            assert!(
                tokens.iter().any(|t| t.kind.is_punctuation(p.id)),
                "lex({source:?}) did not produce {:?}",
                p.id
            );
        }
    }

    #[test]
    fn test_declaration_line() {
        let toks = kinds("sealed interface OperatingSystem permits Linux, MacOS\n");
        assert_eq!(
            toks,
            vec![
                TokenKind::Keyword(KeywordId::Sealed),
                TokenKind::Keyword(KeywordId::Interface),
                TokenKind::Ident("OperatingSystem".to_string()),
                TokenKind::Keyword(KeywordId::Permits),
                TokenKind::Ident("Linux".to_string()),
                TokenKind::Punctuation(PunctuationId::Comma),
                TokenKind::Ident("MacOS".to_string()),
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_blank_lines_and_comments_collapse() {
        let toks = kinds("\n\n# header\nclass A # trailing\n\n\nclass B\n");
        let newlines = toks.iter().filter(|k| matches!(k, TokenKind::Newline)).count();
        assert_eq!(newlines, 2);
        assert!(matches!(toks[0], TokenKind::Keyword(KeywordId::Class)));
    }

    #[test]
    fn test_no_newline_inside_brackets() {
        let toks = kinds("let t: (int,\n  string) = (1,\n \"a\")\n");
        let newlines = toks.iter().filter(|k| matches!(k, TokenKind::Newline)).count();
        assert_eq!(newlines, 1);
    }

    #[test]
    fn test_literals() {
        let toks = kinds("42 -7 3.5 -0.25 1e3 \"hi\\n\" 'x'");
        assert_eq!(
            toks,
            vec![
                TokenKind::Int(42),
                TokenKind::Int(-7),
                TokenKind::Float(3.5),
                TokenKind::Float(-0.25),
                TokenKind::Float(1000.0),
                TokenKind::String("hi\n".to_string()),
                TokenKind::String("x".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_eq_vs_eqeq() {
        let toks = kinds("t[0] = 1\nassert t[0] == 1");
        assert!(toks.contains(&TokenKind::Operator(OperatorId::Eq)));
        assert!(toks.contains(&TokenKind::Operator(OperatorId::EqEq)));
    }

    #[test]
    fn test_unexpected_character() {
        let errs = lex("class A @").unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("Unexpected character '@'"));
    }

    #[test]
    fn test_unmatched_and_unclosed_brackets() {
        assert!(lex(")").is_err());
        let errs = lex("let t: (int, int").unwrap_err();
        assert!(errs[0].message.contains("Unclosed bracket"));
    }

    #[test]
    fn test_unterminated_string() {
        let errs = lex("let t: (string, int) = (\"abc, 1)").unwrap_err();
        assert!(errs.iter().any(|e| e.message.contains("Unterminated string")));
    }
}
