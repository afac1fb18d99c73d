/// Miscellaneous parser utilities.
///
/// Identifier parsing shared by declarations and statements.
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier_spanned(&mut self) -> Result<Spanned<Ident>, CompileError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let span = self.current_span();
                let name = name.clone();
                self.advance();
                Ok(Spanned::new(name, span))
            }
            _ => Err(self.error_here("Expected identifier")),
        }
    }

    fn identifier_list_spanned(&mut self) -> Result<Vec<Spanned<Ident>>, CompileError> {
        let mut idents = vec![self.identifier_spanned()?];
        while self.match_punct(PunctuationId::Comma) {
            idents.push(self.identifier_spanned()?);
        }
        Ok(idents)
    }
}
