//! `mdsnip_core` keeps fenced code blocks inside markdown documents
//! synchronized with real source files. Each tracked block carries a
//! `snippet=<path>[#L<start>[-L<end>]]` directive in its fence info string;
//! the engine resolves the directive to bytes (locally or over HTTPS),
//! extracts the requested lines, and either rewrites drifting blocks in
//! place (`sync`) or reports them as structured issues (`check`). The
//! inverse flow (`extract`) pulls untracked blocks out into standalone
//! snippet files and annotates the fence headers.

pub use config::*;
pub use directive::*;
pub use eject::*;
pub use engine::*;
pub use error::*;
pub use extract::*;
pub use extraction::*;
pub use issue::*;
pub use languages::*;
pub use loader::*;
pub use resolve::*;
pub use rewrite::*;
pub use scanner::*;
pub use walk::*;

pub mod config;
mod directive;
mod eject;
mod engine;
mod error;
mod extract;
mod extraction;
mod issue;
mod languages;
mod loader;
mod resolve;
mod rewrite;
mod scanner;
mod walk;
