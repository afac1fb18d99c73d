/// Type expression parsing.
///
/// ```text
/// type  := atom ('|' atom)*
/// atom  := IDENT | 'null' | '(' type (',' type)* ')'
/// ```
///
/// Parentheses always build a tuple type; arity is validated later, so `(int)` parses as a
/// one-element tuple and gets rejected by the checker with a proper reason code.
impl<'a> Parser<'a> {
    fn type_expr(&mut self) -> Result<Spanned<Type>, CompileError> {
        let first = self.type_atom()?;
        if !self.check_op(OperatorId::Pipe) {
            return Ok(first);
        }

        let start = first.span;
        let mut members = vec![first];
        while self.match_op(OperatorId::Pipe) {
            members.push(self.type_atom()?);
        }
        Ok(Spanned::new(Type::Union(members), start.merge(self.previous_span())))
    }

    fn type_atom(&mut self) -> Result<Spanned<Type>, CompileError> {
        let start = self.current_span();
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(Spanned::new(Type::Named(name), start))
            }
            TokenKind::Keyword(KeywordId::Null) => {
                self.advance();
                Ok(Spanned::new(Type::Null, start))
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let mut elems = Vec::new();
                if !self.check_punct(PunctuationId::RParen) {
                    elems.push(self.type_expr()?);
                    while self.match_punct(PunctuationId::Comma) {
                        elems.push(self.type_expr()?);
                    }
                }
                let end = self.expect_punct(PunctuationId::RParen, "Expected ')' to close tuple type")?;
                Ok(Spanned::new(Type::Tuple(elems), start.merge(end)))
            }
            _ => Err(self.error_here("Expected type")),
        }
    }
}
