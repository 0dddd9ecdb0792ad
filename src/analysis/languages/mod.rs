//! Grammar-specific extractor implementations.

mod javascript;
mod python;

pub use javascript::JavaScriptExtractor;
pub use python::PythonExtractor;

use super::Extractor;
use crate::language::Language;
use once_cell::sync::OnceCell;

/// Static storage for the Python extractor.
static PYTHON_EXTRACTOR: OnceCell<PythonExtractor> = OnceCell::new();

/// Static storage for the JavaScript extractor.
static JAVASCRIPT_EXTRACTOR: OnceCell<JavaScriptExtractor> = OnceCell::new();

/// Initialize all available extractors.
///
/// Idempotent; [`get_extractor`] initializes lazily as well.
pub fn register_extractors() {
    PYTHON_EXTRACTOR.get_or_init(PythonExtractor::new);
    JAVASCRIPT_EXTRACTOR.get_or_init(JavaScriptExtractor::new);
}

/// Get the extractor for a source language.
///
/// TypeScript resolves to the JavaScript extractor. Returns None for
/// languages without one.
pub fn get_extractor(language: Language) -> Option<&'static dyn Extractor> {
    let extractor: &'static dyn Extractor = match language.extraction_grammar()? {
        Language::Python => PYTHON_EXTRACTOR.get_or_init(PythonExtractor::new),
        Language::JavaScript => JAVASCRIPT_EXTRACTOR.get_or_init(JavaScriptExtractor::new),
        _ => return None,
    };
    Some(extractor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_language() {
        assert_eq!(
            get_extractor(Language::Python).map(|e| e.language()),
            Some(Language::Python)
        );
        assert_eq!(
            get_extractor(Language::JavaScript).map(|e| e.language()),
            Some(Language::JavaScript)
        );
        assert_eq!(
            get_extractor(Language::TypeScript).map(|e| e.language()),
            Some(Language::JavaScript)
        );
        assert!(get_extractor(Language::Ruby).is_none());
        assert!(get_extractor(Language::Unknown).is_none());
    }
}
