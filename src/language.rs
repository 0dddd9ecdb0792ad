//! Source language classification by file extension.

use phf::phf_map;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Language tag for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    Cpp,
    C,
    CSharp,
    Ruby,
    Go,
    Rust,
    Unknown,
}

/// Fixed extension table (lowercase, without the dot).
static EXTENSIONS: phf::Map<&'static str, Language> = phf_map! {
    "py" => Language::Python,
    "js" => Language::JavaScript,
    "ts" => Language::TypeScript,
    "java" => Language::Java,
    "cpp" => Language::Cpp,
    "c" => Language::C,
    "cs" => Language::CSharp,
    "rb" => Language::Ruby,
    "go" => Language::Go,
    "rs" => Language::Rust,
};

impl Language {
    /// Returns the language tag string (e.g., "python", "javascript").
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::CSharp => "csharp",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Unknown => "unknown",
        }
    }

    /// The grammar used to extract a code model from sources of this language.
    ///
    /// TypeScript is scanned with the JavaScript patterns. Returns None for
    /// languages without an extractor.
    pub fn extraction_grammar(&self) -> Option<Language> {
        match self {
            Language::Python => Some(Language::Python),
            Language::JavaScript | Language::TypeScript => Some(Language::JavaScript),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a file by its extension. Never fails; unlisted extensions map to
/// [`Language::Unknown`].
pub fn detect_language<P: AsRef<Path>>(path: P) -> Language {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .and_then(|e| EXTENSIONS.get(e.as_str()).copied())
        .unwrap_or(Language::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(detect_language("pkg/module.py"), Language::Python);
        assert_eq!(detect_language("app.js"), Language::JavaScript);
        assert_eq!(detect_language("app.ts"), Language::TypeScript);
        assert_eq!(detect_language("Main.java"), Language::Java);
        assert_eq!(detect_language("lib.rs"), Language::Rust);
        assert_eq!(detect_language("Program.cs"), Language::CSharp);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(detect_language("SCRIPT.PY"), Language::Python);
        assert_eq!(detect_language("index.Js"), Language::JavaScript);
    }

    #[test]
    fn test_unknown_extensions() {
        assert_eq!(detect_language("README.md"), Language::Unknown);
        assert_eq!(detect_language("Makefile"), Language::Unknown);
        assert_eq!(detect_language("component.jsx"), Language::Unknown);
    }

    #[test]
    fn test_extraction_grammar() {
        assert_eq!(Language::Python.extraction_grammar(), Some(Language::Python));
        assert_eq!(
            Language::TypeScript.extraction_grammar(),
            Some(Language::JavaScript)
        );
        assert_eq!(Language::Go.extraction_grammar(), None);
        assert_eq!(Language::Unknown.extraction_grammar(), None);
    }
}
