//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use crate::config::CheckConfig;
use crate::frontend::ast::Program;
use crate::frontend::checker::Checker;
use crate::frontend::diagnostics::{self, CompileError};
use crate::frontend::{lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB).
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file, with a size limit.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be accessed
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render a batch of errors against their source, one block per error.
fn render_errors(file_path: &str, source: &str, errors: &[CompileError]) -> String {
    let mut msg = String::new();
    for err in errors {
        msg.push_str(&diagnostics::format_error(file_path, source, err));
    }
    msg.trim_end().to_string()
}

/// Lex and parse a file, rendering syntax errors on failure.
fn parse_source(file_path: &str, source: &str) -> Result<Program, String> {
    let tokens = lexer::lex(source).map_err(|errs| render_errors(file_path, source, &errs))?;
    parser::parse(&tokens).map_err(|errs| render_errors(file_path, source, &errs))
}

/// Lex, parse and check one file.
///
/// Returns the checker even when checking failed, so callers can still inspect the graph. The second element holds
/// the rendered errors, if any.
fn check_source(file_path: &str, config: &CheckConfig) -> CliResult<(Checker, Option<String>)> {
    let source = read_source(file_path)?;
    let program = parse_source(file_path, &source).map_err(CliError::failure)?;

    let mut checker = Checker::new(config.clone());
    let rendered = checker
        .check_program(&program)
        .err()
        .map(|errs| render_errors(file_path, &source, &errs));
    Ok((checker, rendered))
}

/// Tokenize and display tokens.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source).map_err(|errs| CliError::failure(render_errors(file_path, &source, &errs)))?;

    for tok in &tokens {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display AST.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let ast = parse_source(file_path, &source).map_err(CliError::failure)?;
    println!("{:#?}", ast);
    Ok(ExitCode::SUCCESS)
}

/// Check every file, reporting all of them before failing.
///
/// Successful `read` statements are printed as `name[index] = value`.
pub fn check_files(file_paths: &[String], config: &CheckConfig) -> CliResult<ExitCode> {
    let mut failures = Vec::new();

    for file_path in file_paths {
        match check_source(file_path, config) {
            Ok((checker, None)) => {
                for read in checker.reads() {
                    println!("{}[{}] = {}", read.tuple, read.index, read.value);
                }
                println!("✓ {} passed!", file_path);
            }
            Ok((_, Some(rendered))) => failures.push(rendered),
            Err(e) => failures.push(e.message),
        }
    }

    if failures.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::debug!(failed = failures.len(), total = file_paths.len(), "check failed");
        Err(CliError::failure(failures.join("\n\n")))
    }
}

/// Print reflection info for one declaration, or all of them.
///
/// Reflection runs on whatever graph the checker built, so it still works for files with errors; the errors are
/// printed to stderr and the command exits with failure.
pub fn reflect_file(file_path: &str, name: Option<&str>, json: bool, config: &CheckConfig) -> CliResult<ExitCode> {
    let (checker, rendered) = check_source(file_path, config)?;
    let graph = checker.graph();

    let reflections = match name {
        Some(name) => {
            let reflection = graph
                .reflect(name)
                .ok_or_else(|| CliError::failure(format!("No declaration named '{}' in '{}'", name, file_path)))?;
            vec![reflection]
        }
        None => graph.reflect_all().collect(),
    };

    if json {
        let value = match (name, reflections.as_slice()) {
            (Some(_), [single]) => single.to_json(),
            _ => serde_json::Value::Array(reflections.iter().map(|r| r.to_json()).collect()),
        };
        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| CliError::failure(format!("Cannot serialize reflection: {}", e)))?;
        println!("{}", text);
    } else {
        let blocks: Vec<String> = reflections.iter().map(|r| r.to_string()).collect();
        println!("{}", blocks.join("\n\n"));
    }

    match rendered {
        Some(rendered) => Err(CliError::failure(rendered)),
        None => Ok(ExitCode::SUCCESS),
    }
}
