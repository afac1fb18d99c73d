//! LSP (Language Server Protocol) backend implementation for sealant

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use sealant_core::lang::keywords::KEYWORDS;

use crate::config::CheckConfig;
use crate::frontend::ast::{DeclKind, Span};
use crate::frontend::checker::Checker;
use crate::frontend::diagnostics::CompileError;
use crate::frontend::{lexer, parser};
use crate::lsp::diagnostics::{compile_error_to_diagnostic, position_to_offset, span_to_range};
use crate::version::SEALANT_VERSION;

/// Result of running the pipeline over one document.
pub struct Analysis {
    /// Present once the document parsed; kept even when checking reported errors.
    pub checker: Option<Checker>,
    pub errors: Vec<CompileError>,
}

/// Lex, parse and check `source`.
pub fn analyze(source: &str, config: &CheckConfig) -> Analysis {
    let tokens = match lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(errors) => return Analysis { checker: None, errors },
    };
    let program = match parser::parse(&tokens) {
        Ok(program) => program,
        Err(errors) => return Analysis { checker: None, errors },
    };

    let mut checker = Checker::new(config.clone());
    let errors = checker.check_program(&program).err().unwrap_or_default();
    Analysis {
        checker: Some(checker),
        errors,
    }
}

/// Document state stored by the LSP
pub struct DocumentState {
    pub source: String,
    pub version: i32,
    pub checker: Option<Checker>,
}

/// sealant Language Server
pub struct SealantLanguageServer {
    client: Client,
    config: Arc<RwLock<CheckConfig>>,
    documents: Arc<RwLock<HashMap<Url, DocumentState>>>,
}

impl SealantLanguageServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            config: Arc::new(RwLock::new(CheckConfig::default())),
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Analyze a document and publish diagnostics
    async fn analyze_document(&self, uri: &Url, source: &str, version: i32) {
        let config = self.config.read().await.clone();
        let analysis = analyze(source, &config);
        tracing::debug!(%uri, version, errors = analysis.errors.len(), "analyzed document");

        let diagnostics: Vec<Diagnostic> = analysis
            .errors
            .iter()
            .map(|error| compile_error_to_diagnostic(error, source, uri))
            .collect();

        {
            let mut docs = self.documents.write().await;
            if is_stale(&docs, uri, version) {
                tracing::debug!(%uri, version, "discarding analysis of an outdated version");
                return;
            }
            docs.insert(
                uri.clone(),
                DocumentState {
                    source: source.to_string(),
                    version,
                    checker: analysis.checker,
                },
            );
        }

        // Publish diagnostics (even if empty, to clear old ones)
        self.client
            .publish_diagnostics(uri.clone(), diagnostics, Some(version))
            .await;
    }
}

/// Return `true` if a newer version of `uri` than `version` is already stored.
pub fn is_stale(docs: &HashMap<Url, DocumentState>, uri: &Url, version: i32) -> bool {
    docs.get(uri).is_some_and(|doc| doc.version > version)
}

/// Read check options from the client's `initializationOptions`.
///
/// Recognized keys: `numericWidening` (bool) and `maxErrors` (unsigned). Anything else is ignored.
pub fn config_from_options(options: Option<&serde_json::Value>) -> CheckConfig {
    let mut config = CheckConfig::default();
    let Some(options) = options else {
        return config;
    };
    if let Some(widening) = options.get("numericWidening").and_then(|v| v.as_bool()) {
        config = config.with_numeric_widening(widening);
    }
    if let Some(max) = options.get("maxErrors").and_then(|v| v.as_u64()) {
        config = config.with_max_errors(usize::try_from(max).ok());
    }
    config
}

/// The identifier under `offset`, with its span.
pub fn word_at(source: &str, offset: usize) -> Option<(&str, Span)> {
    let is_ident = |c: char| c.is_alphanumeric() || c == '_';
    let offset = offset.min(source.len());

    let start = source[..offset]
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_ident(c))
        .last()
        .map_or(offset, |(i, _)| i);
    let end = source[offset..]
        .char_indices()
        .find(|&(_, c)| !is_ident(c))
        .map_or(source.len(), |(i, _)| offset + i);

    (start < end).then(|| (&source[start..end], Span::new(start, end)))
}

/// Hover text for a name: reflection for declarations, type and contents for tuple bindings.
pub fn hover_markdown(checker: &Checker, name: &str) -> Option<String> {
    if let Some(reflection) = checker.graph().reflect(name) {
        return Some(format!("```sealant\n{}\n```", reflection));
    }
    let tuple = checker.tuple(name)?;
    let values: Vec<String> = tuple.values().iter().map(|v| v.to_string()).collect();
    Some(format!(
        "```sealant\nlet {}: {}\n```\n\nslots: `{}`\n\nvalues: `({})`",
        name,
        tuple.declared_type(),
        tuple.constraints(),
        values.join(", ")
    ))
}

fn completion_kind(kind: DeclKind) -> CompletionItemKind {
    match kind {
        DeclKind::Class => CompletionItemKind::CLASS,
        DeclKind::Interface | DeclKind::Trait => CompletionItemKind::INTERFACE,
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for SealantLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        *self.config.write().await = config_from_options(params.initialization_options.as_ref());

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                // Real-time diagnostics via text sync
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                definition_provider: Some(OneOf::Left(true)),
                completion_provider: Some(CompletionOptions::default()),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "sealant-lsp".to_string(),
                version: Some(SEALANT_VERSION.to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "sealant LSP initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        self.analyze_document(&uri, &params.text_document.text, params.text_document.version)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // FULL sync: the last change holds the whole document
        if let Some(change) = params.content_changes.into_iter().last() {
            self.analyze_document(&uri, &change.text, version).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.documents.write().await.remove(&uri);
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let docs = self.documents.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };
        let Some(checker) = &doc.checker else {
            return Ok(None);
        };

        let offset = position_to_offset(&doc.source, position);
        let Some((name, span)) = word_at(&doc.source, offset) else {
            return Ok(None);
        };

        Ok(hover_markdown(checker, name).map(|markdown| Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: markdown,
            }),
            range: Some(span_to_range(&doc.source, span.start, span.end)),
        }))
    }

    async fn goto_definition(&self, params: GotoDefinitionParams) -> Result<Option<GotoDefinitionResponse>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let docs = self.documents.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };
        let Some(checker) = &doc.checker else {
            return Ok(None);
        };

        let offset = position_to_offset(&doc.source, position);
        let definition = word_at(&doc.source, offset).and_then(|(name, _)| checker.declaration_span(name));

        Ok(definition.map(|span| {
            GotoDefinitionResponse::Scalar(Location {
                uri: uri.clone(),
                range: span_to_range(&doc.source, span.start, span.end),
            })
        }))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;

        let docs = self.documents.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };

        let mut items: Vec<CompletionItem> = KEYWORDS
            .iter()
            .map(|kw| CompletionItem {
                label: kw.canonical.to_string(),
                kind: Some(CompletionItemKind::KEYWORD),
                ..Default::default()
            })
            .collect();

        if let Some(checker) = &doc.checker {
            for reflection in checker.graph().reflect_all() {
                let sealed = if reflection.is_sealed() { "sealed " } else { "" };
                items.push(CompletionItem {
                    label: reflection.name().to_string(),
                    kind: Some(completion_kind(reflection.kind())),
                    detail: Some(format!("{}{} {}", sealed, reflection.kind(), reflection.name())),
                    ..Default::default()
                });
            }
            for (name, tuple) in checker.tuples() {
                items.push(CompletionItem {
                    label: name.clone(),
                    kind: Some(CompletionItemKind::VARIABLE),
                    detail: Some(tuple.declared_type().to_string()),
                    ..Default::default()
                });
            }
        }

        Ok(Some(CompletionResponse::Array(items)))
    }
}
