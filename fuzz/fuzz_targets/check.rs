#![no_main]

use libfuzzer_sys::fuzz_target;
use sealant::{CheckConfig, checker, diagnostics, lexer, parser};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(tokens) = lexer::lex(source) else {
        return;
    };
    let Ok(ast) = parser::parse(&tokens) else {
        return;
    };
    // Rendering exercises span arithmetic against the source.
    if let Err(errors) = checker::check(&ast, &CheckConfig::default()) {
        for error in &errors {
            let _ = diagnostics::format_error("fuzz.seal", source, error);
        }
    }
});
