/// Tuple statement parsing.
///
/// ```text
/// let NAME ':' type '=' expr
/// NAME '[' INT ']' '=' expr
/// read NAME '[' INT ']'
/// assert NAME '[' INT ']' '==' expr
/// widen NAME to type
/// ```
impl<'a> Parser<'a> {
    fn statement(&mut self) -> Result<Stmt, CompileError> {
        if self.match_keyword(KeywordId::Let) {
            let name = self.identifier_spanned()?;
            self.expect_punct(PunctuationId::Colon, "Expected ':' after tuple name")?;
            let ty = self.type_expr()?;
            self.expect_op(OperatorId::Eq, "Expected '=' after tuple type")?;
            let value = self.expression()?;
            return Ok(Stmt::Let { name, ty, value });
        }

        if self.match_keyword(KeywordId::Read) {
            return Ok(Stmt::Read(self.slot_ref()?));
        }

        if self.match_keyword(KeywordId::Assert) {
            let target = self.slot_ref()?;
            self.expect_op(OperatorId::EqEq, "Expected '==' in assertion")?;
            let expected = self.expression()?;
            return Ok(Stmt::Assert { target, expected });
        }

        if self.match_keyword(KeywordId::Widen) {
            let name = self.identifier_spanned()?;
            self.expect_keyword(KeywordId::To, "Expected 'to' after tuple name")?;
            let ty = self.type_expr()?;
            return Ok(Stmt::Widen { name, ty });
        }

        if matches!(self.peek().kind, TokenKind::Ident(_)) {
            let target = self.slot_ref()?;
            self.expect_op(OperatorId::Eq, "Expected '=' in slot assignment")?;
            let value = self.expression()?;
            return Ok(Stmt::Assign { target, value });
        }

        Err(self.error_here("Expected declaration or statement"))
    }

    /// `NAME '[' INT ']'`
    fn slot_ref(&mut self) -> Result<SlotRef, CompileError> {
        let tuple = self.identifier_spanned()?;
        self.expect_punct(PunctuationId::LBracket, "Expected '[' after tuple name")?;

        let index_span = self.current_span();
        let index = match self.peek().kind {
            TokenKind::Int(v) if v >= 0 => v as usize,
            TokenKind::Int(v) => {
                return Err(CompileError::syntax(
                    format!("Tuple index must be non-negative, found {}", v),
                    index_span,
                ));
            }
            _ => return Err(self.error_here("Expected integer tuple index")),
        };
        self.advance();

        self.expect_punct(PunctuationId::RBracket, "Expected ']' after tuple index")?;
        Ok(SlotRef {
            tuple,
            index: Spanned::new(index, index_span),
        })
    }
}
