//! Convert checker diagnostics to LSP diagnostics

use tower_lsp::lsp_types::{
    Diagnostic, DiagnosticRelatedInformation, DiagnosticSeverity, Location, NumberOrString, Position, Range, Url,
};

use crate::frontend::diagnostics::{CompileError, ErrorKind};

/// Convert a byte offset to LSP Position (0-based line, UTF-16 character)
pub fn offset_to_position(source: &str, offset: usize) -> Position {
    let offset = offset.min(source.len());
    let mut line = 0u32;
    let mut col = 0u32;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 0;
        } else {
            col += c.len_utf16() as u32;
        }
    }

    Position::new(line, col)
}

/// Convert an LSP Position back to a byte offset, clamped to the end of its line.
pub fn position_to_offset(source: &str, position: Position) -> usize {
    let mut line = 0u32;
    let mut col = 0u32;

    for (i, c) in source.char_indices() {
        if line == position.line && (col >= position.character || c == '\n') {
            return i;
        }
        if c == '\n' {
            line += 1;
            col = 0;
        } else if line == position.line {
            col += c.len_utf16() as u32;
        }
    }

    source.len()
}

/// Convert a span to LSP Range
pub fn span_to_range(source: &str, start: usize, end: usize) -> Range {
    let start_pos = offset_to_position(source, start);
    let end_pos = offset_to_position(source, end.max(start + 1));
    Range::new(start_pos, end_pos)
}

fn error_kind_to_severity(kind: ErrorKind) -> DiagnosticSeverity {
    match kind {
        ErrorKind::Error | ErrorKind::Syntax | ErrorKind::Inheritance | ErrorKind::Type => DiagnosticSeverity::ERROR,
        ErrorKind::Warning => DiagnosticSeverity::WARNING,
    }
}

/// Convert a CompileError to LSP Diagnostic
pub fn compile_error_to_diagnostic(error: &CompileError, source: &str, uri: &Url) -> Diagnostic {
    let range = span_to_range(source, error.span.start, error.span.end);

    let mut message = error.message.clone();
    for note in &error.notes {
        message.push_str("\n\nnote: ");
        message.push_str(note);
    }
    for hint in &error.hints {
        message.push_str("\n\nhint: ");
        message.push_str(hint);
    }

    // Notes and hints also go to related information (shows in Problems panel)
    let related_information: Vec<DiagnosticRelatedInformation> = error
        .notes
        .iter()
        .map(|note| format!("note: {}", note))
        .chain(error.hints.iter().map(|hint| format!("hint: {}", hint)))
        .map(|message| DiagnosticRelatedInformation {
            location: Location {
                uri: uri.clone(),
                range,
            },
            message,
        })
        .collect();

    Diagnostic {
        range,
        severity: Some(error_kind_to_severity(error.kind)),
        code: error.code.map(|code| NumberOrString::String(code.to_string())),
        code_description: None,
        source: Some("sealant".to_string()),
        message,
        related_information: if related_information.is_empty() {
            None
        } else {
            Some(related_information)
        },
        tags: None,
        data: None,
    }
}
