//! sealant Language Server binary entry point
//!
//! Run with: sealant-lsp
//!
//! The LSP communicates via stdin/stdout using the Language Server Protocol.

use sealant::lsp::SealantLanguageServer;
use tower_lsp::{LspService, Server};

#[tokio::main]
async fn main() {
    // stdout carries the protocol, so logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(SealantLanguageServer::new);

    Server::new(stdin, stdout, socket).serve(service).await;
}
