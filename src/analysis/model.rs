//! Language-neutral code model produced by the extractors.

use serde::Serialize;

use crate::language::Language;

/// A free function or a class method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    /// The callable name.
    pub name: String,
    /// Definition line (1-indexed).
    pub line: usize,
    /// Declared parameter names, receiver excluded.
    pub args: Vec<String>,
    /// Attached documentation text, if the grammar has one.
    pub docstring: Option<String>,
    /// Whether the definition used explicit async syntax.
    pub is_async: bool,
}

impl FunctionSignature {
    /// Create a signature with no arguments, docstring or async marker.
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
            args: Vec::new(),
            docstring: None,
            is_async: false,
        }
    }
}

/// A class and the methods declared directly in its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassModel {
    pub name: String,
    pub line: usize,
    pub docstring: Option<String>,
    pub methods: Vec<FunctionSignature>,
}

/// Structural summary of one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeModel {
    /// The grammar used for extraction.
    pub language: Language,
    /// The analyzed path, as given.
    pub file_path: String,
    /// Free callables in encounter order.
    pub functions: Vec<FunctionSignature>,
    /// Classes in encounter order.
    pub classes: Vec<ClassModel>,
}

impl CodeModel {
    pub fn new(language: Language, file_path: impl Into<String>) -> Self {
        Self {
            language,
            file_path: file_path.into(),
            functions: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Total number of methods across all classes.
    pub fn method_count(&self) -> usize {
        self.classes.iter().map(|c| c.methods.len()).sum()
    }
}

/// Visibility rule for module-level callables: any leading underscore hides it.
pub fn is_public_function(name: &str) -> bool {
    !name.starts_with('_')
}

/// Visibility rule for class methods.
///
/// Single-underscore names are private, dunder names are always kept.
pub fn is_public_method(name: &str) -> bool {
    !name.starts_with('_') || name.starts_with("__")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_visibility() {
        assert!(is_public_function("add"));
        assert!(!is_public_function("_helper"));
        assert!(!is_public_function("__init__"));
    }

    #[test]
    fn test_method_visibility_is_asymmetric() {
        assert!(is_public_method("increment"));
        assert!(!is_public_method("_reset"));
        assert!(is_public_method("__init__"));
        assert!(is_public_method("__repr__"));
        assert!(is_public_method("__private"));
    }

    #[test]
    fn test_method_count() {
        let mut model = CodeModel::new(Language::Python, "m.py");
        model.classes.push(ClassModel {
            name: "A".to_string(),
            line: 1,
            docstring: None,
            methods: vec![FunctionSignature::new("x", 2), FunctionSignature::new("y", 3)],
        });
        model.classes.push(ClassModel {
            name: "B".to_string(),
            line: 5,
            docstring: None,
            methods: vec![FunctionSignature::new("z", 6)],
        });
        assert_eq!(model.method_count(), 3);
    }
}
