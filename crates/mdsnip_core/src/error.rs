use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum SnipError {
	#[error(transparent)]
	#[diagnostic(code(mdsnip::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse markdown: {0}")]
	#[diagnostic(code(mdsnip::markdown))]
	Markdown(String),
	#[error("invalid glob pattern `{pattern}`: {reason}")]
	#[diagnostic(code(mdsnip::glob_pattern))]
	GlobPattern { pattern: String, reason: String },
	#[error("config file not found: {path}")]
	#[diagnostic(code(mdsnip::config_missing))]
	ConfigMissing { path: String },
	#[error("failed to load config from {path}: {reason}")]
	#[diagnostic(code(mdsnip::config_parse))]
	ConfigParse { path: String, reason: String },
	#[error("config: {0}")]
	#[diagnostic(code(mdsnip::config_invalid))]
	ConfigInvalid(String),
	#[error("relative reference `{reference}` requires the location of the referencing markdown file")]
	#[diagnostic(code(mdsnip::missing_document_context))]
	MissingDocumentContext { reference: String },
	#[error("path traversal attempt detected: {reference}")]
	#[diagnostic(code(mdsnip::path_traversal))]
	PathTraversal { reference: String },
	#[error("invalid url `{url}`: {reason}")]
	#[diagnostic(code(mdsnip::remote_url))]
	RemoteUrl { url: String, reason: String },
	#[error("insecure http urls are not allowed; use https or set `allow_insecure_http`: {url}")]
	#[diagnostic(code(mdsnip::insecure_http))]
	InsecureHttp { url: String },
	#[error("invalid url scheme `{scheme}`: only http and https are supported")]
	#[diagnostic(code(mdsnip::remote_scheme))]
	RemoteScheme { scheme: String },
	#[error("remote file not found: {url}")]
	#[diagnostic(code(mdsnip::remote_not_found))]
	RemoteNotFound { url: String },
	#[error("failed to fetch remote file: {url} (http {status})")]
	#[diagnostic(code(mdsnip::remote_status))]
	RemoteStatus { url: String, status: u16 },
	#[error("request timed out after {timeout_ms}ms: {url}")]
	#[diagnostic(code(mdsnip::remote_timeout))]
	RemoteTimeout { url: String, timeout_ms: u64 },
	#[error("failed to fetch remote file {url}: {reason}")]
	#[diagnostic(code(mdsnip::remote_fetch))]
	RemoteFetch { url: String, reason: String },
}

pub type SnipResult<T> = Result<T, SnipError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
