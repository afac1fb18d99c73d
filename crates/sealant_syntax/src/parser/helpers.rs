/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Line handling (`skip_newlines`, `expect_line_end`)
/// - Error recovery (`synchronize`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return `true` if the current token ends the logical line.
    fn is_at_line_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Newline | TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos.saturating_sub(1)]
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Span of the most recently consumed token.
    fn previous_span(&self) -> Span {
        self.tokens[self.pos.saturating_sub(1)].span
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Build a syntax error pointing at the current token.
    fn error_here(&self, msg: &str) -> CompileError {
        CompileError::syntax(
            format!("{}, found {}", msg, self.peek().kind.describe()),
            self.current_span(),
        )
    }

    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> Result<Span, CompileError> {
        if self.check_keyword(id) {
            Ok(self.advance().span)
        } else {
            Err(self.error_here(msg))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<Span, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance().span)
        } else {
            Err(self.error_here(msg))
        }
    }

    fn expect_op(&mut self, id: OperatorId, msg: &str) -> Result<Span, CompileError> {
        if self.check_op(id) {
            Ok(self.advance().span)
        } else {
            Err(self.error_here(msg))
        }
    }

    /// Require the current item to end here.
    fn expect_line_end(&mut self) -> Result<(), CompileError> {
        match self.peek().kind {
            TokenKind::Newline => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            _ => Err(self.error_here("Expected end of line")),
        }
    }

    fn skip_newlines(&mut self) {
        while matches!(self.peek().kind, TokenKind::Newline) {
            self.advance();
        }
    }

    /// Skip the rest of the current line after an error.
    fn synchronize(&mut self) {
        while !self.is_at_end() {
            if matches!(self.peek().kind, TokenKind::Newline) {
                self.advance();
                return;
            }
            self.advance();
        }
    }

    fn is_at_declaration_start(&self) -> bool {
        self.check_keyword(KeywordId::Sealed)
            || self.check_keyword(KeywordId::Class)
            || self.check_keyword(KeywordId::Interface)
            || self.check_keyword(KeywordId::Trait)
    }
}
