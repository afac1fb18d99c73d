/// Declaration parsing.
///
/// `sealed? (class|interface|trait) Name (extends|implements|uses A, B)* (permits C, D)?`
impl<'a> Parser<'a> {
    fn declaration(&mut self) -> Result<TypeDecl, CompileError> {
        let is_sealed = self.match_keyword(KeywordId::Sealed);

        let kind = match self.peek().keyword_id().and_then(DeclKind::from_keyword) {
            Some(kind) => {
                self.advance();
                kind
            }
            None => return Err(self.error_here("Expected 'class', 'interface', or 'trait'")),
        };

        let name = self.identifier_spanned()?;

        let mut clauses = Vec::new();
        while let Some(keyword) = self.peek().keyword_id().and_then(InheritKeyword::from_keyword) {
            let start = self.current_span();
            self.advance();
            let targets = self.identifier_list_spanned()?;
            clauses.push(Spanned::new(InheritClause { keyword, targets }, start.merge(self.previous_span())));
        }

        let permits = if self.check_keyword(KeywordId::Permits) {
            let permits_span = self.current_span();
            self.advance();
            if !is_sealed {
                return Err(CompileError::syntax(
                    format!("'permits' on non-sealed {} '{}'", kind, name.node),
                    permits_span,
                )
                .with_hint(format!("declare it as `sealed {} {}` to restrict its subtypes", kind, name.node)));
            }
            // A bare `permits` is kept as an empty list so the checker can report it.
            if self.is_at_line_end() {
                Some(Vec::new())
            } else {
                Some(self.identifier_list_spanned()?)
            }
        } else {
            None
        };

        if self.peek().keyword_id().and_then(InheritKeyword::from_keyword).is_some() {
            return Err(self
                .error_here("Unexpected inheritance clause")
                .with_note("inheritance clauses must come before `permits`"));
        }

        Ok(TypeDecl {
            is_sealed,
            kind,
            name,
            clauses,
            permits,
        })
    }
}
