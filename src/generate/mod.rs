//! Scaffold test generation.
//!
//! Each [`Convention`] renders a [`CodeModel`] into test source text in one
//! language's idiomatic test-authoring style. Rendering is pure; writing the
//! result to disk is the pipeline's job.

mod jest;
mod naming;
mod placeholders;
mod unittest;

use crate::analysis::CodeModel;
use crate::language::Language;

pub use naming::{module_stem, test_class_name, test_file_name, title_case};
pub use placeholders::{
    placeholder_args, Literals, Placeholder, JAVASCRIPT_LITERALS, PYTHON_LITERALS,
};

/// Test-authoring convention for generated stubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// Python `unittest.TestCase` module.
    Unittest,
    /// Jest `describe`/`test` file.
    Jest,
}

impl Convention {
    /// Pick the convention for a model language.
    pub fn for_language(language: Language) -> Option<Self> {
        match language {
            Language::Python => Some(Convention::Unittest),
            Language::JavaScript | Language::TypeScript => Some(Convention::Jest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Convention::Unittest => "unittest",
            Convention::Jest => "jest",
        }
    }

    /// Render scaffold test source for the model.
    pub fn render(&self, model: &CodeModel) -> String {
        match self {
            Convention::Unittest => unittest::render(model),
            Convention::Jest => jest::render(model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convention_for_language() {
        assert_eq!(Convention::for_language(Language::Python), Some(Convention::Unittest));
        assert_eq!(Convention::for_language(Language::JavaScript), Some(Convention::Jest));
        assert_eq!(Convention::for_language(Language::TypeScript), Some(Convention::Jest));
        assert_eq!(Convention::for_language(Language::Go), None);
    }

    #[test]
    fn test_render_dispatch() {
        let model = CodeModel::new(Language::Python, "empty.py");
        assert!(Convention::Unittest.render(&model).contains("class TestEmpty"));

        let model = CodeModel::new(Language::JavaScript, "empty.js");
        assert!(Convention::Jest.render(&model).contains("describe('empty'"));
    }
}
