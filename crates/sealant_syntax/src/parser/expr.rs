/// Value expression parsing.
///
/// Values are literals only: numbers, strings, booleans, `null`, `new Name`, and parenthesized
/// tuples of values.
impl<'a> Parser<'a> {
    fn expression(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let start = self.current_span();
        let expr = match &self.peek().kind {
            TokenKind::Int(v) => Expr::Int(*v),
            TokenKind::Float(v) => Expr::Float(*v),
            TokenKind::String(s) => Expr::String(s.clone()),
            TokenKind::Keyword(KeywordId::True) => Expr::Bool(true),
            TokenKind::Keyword(KeywordId::False) => Expr::Bool(false),
            TokenKind::Keyword(KeywordId::Null) => Expr::Null,
            TokenKind::Keyword(KeywordId::New) => {
                self.advance();
                let name = self.identifier_spanned()?;
                return Ok(Spanned::new(Expr::New(name.node), start.merge(name.span)));
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let mut elems = Vec::new();
                if !self.check_punct(PunctuationId::RParen) {
                    elems.push(self.expression()?);
                    while self.match_punct(PunctuationId::Comma) {
                        elems.push(self.expression()?);
                    }
                }
                let end = self.expect_punct(PunctuationId::RParen, "Expected ')' to close tuple")?;
                return Ok(Spanned::new(Expr::Tuple(elems), start.merge(end)));
            }
            TokenKind::Ident(name) => {
                return Err(CompileError::syntax(format!("Expected value, found identifier '{}'", name), start)
                    .with_hint(format!("use `new {}` to construct an instance", name)));
            }
            _ => return Err(self.error_here("Expected value")),
        };
        self.advance();
        Ok(Spanned::new(expr, start))
    }
}
