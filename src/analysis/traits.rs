//! Core trait for structural extraction.

use crate::language::Language;

use super::{AnalysisError, CodeModel};

/// Grammar-specific extractor.
///
/// Each supported grammar (tree-sitter backed Python, pattern-scanned
/// JavaScript) implements this trait to turn raw file contents into a
/// [`CodeModel`].
///
/// # Thread Safety
///
/// tree_sitter::Parser is not Sync, so implementations create parsers per
/// call instead of storing them.
pub trait Extractor: Send + Sync {
    /// The grammar this extractor handles, also used as the model's tag.
    fn language(&self) -> Language;

    /// Build a code model from the full text of a file.
    ///
    /// `path` is echoed into the model and error messages only. Extraction is
    /// all-or-nothing: an error never carries a partial model.
    fn extract(&self, path: &str, source: &str) -> Result<CodeModel, AnalysisError>;
}
