//! Structural extraction of functions and classes.
//!
//! This module turns the text of a single source file into a language-neutral
//! [`CodeModel`]. Two strategies sit behind the [`Extractor`] trait:
//!
//! - Python: tree-sitter parse, walked node by node
//! - JavaScript/TypeScript: regex scanning with brace counting to bound
//!   class bodies
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────┐
//! │ Source text │────▶│ Extractor    │────▶│ CodeModel │
//! └─────────────┘     │ (py, js)     │     └───────────┘
//!                     └──────────────┘           │
//!                                    ┌───────────┴──────────┐
//!                                    ▼                      ▼
//!                             ┌─────────────┐       ┌──────────────┐
//!                             │ Stub        │       │ Report       │
//!                             │ generators  │       │ generator    │
//!                             └─────────────┘       └──────────────┘
//! ```

mod braces;
mod docstring;
mod languages;
mod model;
mod traits;

use std::path::PathBuf;

use thiserror::Error;

pub use braces::find_block_end;
pub use docstring::clean_docstring;
pub use languages::{get_extractor, register_extractors, JavaScriptExtractor, PythonExtractor};
pub use model::{is_public_function, is_public_method, ClassModel, CodeModel, FunctionSignature};
pub use traits::Extractor;

/// Errors that can occur while building a code model.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported language '{language}' for file {}", path.display())]
    UnsupportedLanguage { path: PathBuf, language: String },
    #[error("syntax error in {path}: {message}")]
    Parse { path: String, message: String },
    #[error("parser setup failed: {0}")]
    Parser(String),
}
