// Parser core type and entrypoint.
//
// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
//
// ## Notes
// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
//   single module while avoiding a single “god file”.
// - Every item occupies exactly one logical line; the lexer suppresses line breaks inside
//   brackets, so a long tuple literal may still wrap.

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and recovers from errors by skipping to the next line, so one run
///   reports every malformed line.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<CompileError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `sealant_syntax::lexer` (must end with `Eof`).
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns a list of [`CompileError`]s if parsing fails. The parser attempts
    /// to recover and continue after an error to report multiple issues in one pass.
    pub fn parse(mut self) -> Result<Program, Vec<CompileError>> {
        let mut items = Vec::new();

        self.skip_newlines();

        while !self.is_at_end() {
            match self.item().and_then(|item| self.expect_line_end().map(|_| item)) {
                Ok(item) => items.push(item),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
            self.skip_newlines();
        }

        if self.errors.is_empty() {
            Ok(Program { items })
        } else {
            Err(self.errors)
        }
    }

    /// Parse one top-level item: a declaration or a tuple statement.
    fn item(&mut self) -> Result<Spanned<Item>, CompileError> {
        if self.is_at_declaration_start() {
            let start = self.current_span();
            let decl = self.declaration()?;
            Ok(Spanned::new(Item::Declaration(decl), start.merge(self.previous_span())))
        } else {
            let start = self.current_span();
            let stmt = self.statement()?;
            Ok(Spanned::new(Item::Statement(stmt), start.merge(self.previous_span())))
        }
    }
}
