//! Diagnostics and error reporting for sealant.
//!
//! [`CompileError`] is the spanned, user-facing form of every problem the toolchain reports: lexer and
//! parser errors, and the validators' rejections once the checker has attached a source location.

use std::fmt;

use crate::ast::Span;

/// A compile-time error with location information
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    /// Stable reason code, when the error comes from a validator.
    pub code: Option<&'static str>,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Error,
            code: None,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            ..Self::new(message, span)
        }
    }

    pub fn inheritance(message: String, span: Span) -> Self {
        Self {
            kind: ErrorKind::Inheritance,
            ..Self::new(message, span)
        }
    }

    pub fn type_error(message: String, span: Span) -> Self {
        Self {
            kind: ErrorKind::Type,
            ..Self::new(message, span)
        }
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CompileError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Error,
    Syntax,
    Inheritance,
    Type,
    Warning,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Error => write!(f, "error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Inheritance => write!(f, "inheritance error"),
            ErrorKind::Type => write!(f, "type error"),
            ErrorKind::Warning => write!(f, "warning"),
        }
    }
}

/// Render an error with source context as plain text.
///
/// ```text
/// inheritance error[sealant::sealed_interface_not_permitted]: ...
///   --> os.seal:4:1
///    |
///  4 | class DummyOS implements UnixLike
///    | ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
///    = hint: ...
/// ```
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let (line_num, col_num, line_text) = get_line_info(source, error.span.start);
    let mut out = String::new();

    match error.code {
        Some(code) => out.push_str(&format!("{}[{}]: {}\n", error.kind, code, error.message)),
        None => out.push_str(&format!("{}: {}\n", error.kind, error.message)),
    }
    out.push_str(&format!("  --> {}:{}:{}\n", file_name, line_num, col_num));

    let width = line_num.to_string().len();
    out.push_str(&format!("  {:>width$} |\n", "", width = width));
    out.push_str(&format!("  {:>width$} | {}\n", line_num, line_text, width = width));

    // Underline the span, clipped to the current line.
    let line_start = error.span.start - (col_num - 1);
    let underline_end = error.span.end.min(line_start + line_text.len());
    let underline_len = underline_end.saturating_sub(error.span.start).max(1);
    out.push_str(&format!(
        "  {:>width$} | {}{}\n",
        "",
        " ".repeat(col_num - 1),
        "^".repeat(underline_len),
        width = width
    ));

    for note in &error.notes {
        out.push_str(&format!("  {:>width$} = note: {}\n", "", note, width = width));
    }
    for hint in &error.hints {
        out.push_str(&format!("  {:>width$} = hint: {}\n", "", hint, width = width));
    }
    out
}

/// Print an error with source context to stderr.
pub fn print_error(file_name: &str, source: &str, error: &CompileError) {
    eprintln!("{}", format_error(file_name, source, error));
}

/// Get line number, column number, and line text for a byte offset
fn get_line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = &source[line_start..line_end];
    let col_num = offset - line_start + 1;

    (line_num, col_num, line_text)
}
