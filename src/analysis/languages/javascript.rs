//! JavaScript extractor built on regex scanning.
//!
//! No parser is involved: functions are found by a fixed list of declaration
//! patterns and class bodies are bounded by counting braces. Parameter lists
//! are never inspected, so every signature has empty `args`, and docstrings
//! are always absent.

use lazy_static::lazy_static;
use phf::phf_set;
use regex::Regex;

use crate::analysis::{
    find_block_end, AnalysisError, ClassModel, CodeModel, Extractor, FunctionSignature,
};
use crate::language::Language;

lazy_static! {
    /// Named-callable patterns, applied in this order. Group 1 is the name.
    static ref FUNCTION_PATTERNS: Vec<Regex> = [
        r"function\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*\([^)]*\)",
        r"const\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*function\s*\([^)]*\)",
        r"const\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*\([^)]*\)\s*=>",
        // Bare single-parameter arrows are only recognized after `const`.
        r"const\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*\w+\s*=>",
        r"let\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*function\s*\([^)]*\)",
        r"let\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*\([^)]*\)\s*=>",
        r"var\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*function\s*\([^)]*\)",
        r"var\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*\([^)]*\)\s*=>",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();

    static ref CLASS_PATTERN: Regex =
        Regex::new(r"\bclass\s+([a-zA-Z_$][a-zA-Z0-9_$]*)").unwrap();

    /// Anything shaped like `name(...) {` inside a class body.
    static ref METHOD_PATTERN: Regex =
        Regex::new(r"\b([a-zA-Z_$][a-zA-Z0-9_$]*)\s*\([^)]*\)\s*\{").unwrap();
}

/// Built-in globals the function patterns can capture by accident.
static BUILTIN_NAMES: phf::Set<&'static str> = phf_set! {
    "require", "console", "Math", "Array", "Object", "String", "Number", "Date", "Promise",
};

/// Reserved method name left out of class method lists.
const CONSTRUCTOR: &str = "constructor";

pub struct JavaScriptExtractor;

impl JavaScriptExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_functions(&self, source: &str) -> Vec<FunctionSignature> {
        let mut functions = Vec::new();

        for pattern in FUNCTION_PATTERNS.iter() {
            for caps in pattern.captures_iter(source) {
                let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                if BUILTIN_NAMES.contains(name.as_str()) {
                    continue;
                }
                functions.push(FunctionSignature::new(
                    name.as_str(),
                    line_at(source, whole.start()),
                ));
            }
        }

        functions
    }

    fn extract_classes(&self, source: &str) -> Vec<ClassModel> {
        let mut classes = Vec::new();

        for caps in CLASS_PATTERN.captures_iter(source) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            let body_start = whole.end();
            let body_end = match find_block_end(source, body_start) {
                Some(end) => end,
                None => {
                    tracing::warn!(
                        class = name.as_str(),
                        line = line_at(source, whole.start()),
                        "class body is not closed; no methods recorded"
                    );
                    body_start
                }
            };
            let body = &source[body_start..body_end];

            let methods = METHOD_PATTERN
                .captures_iter(body)
                .filter_map(|m| {
                    let (whole, method) = (m.get(0)?, m.get(1)?);
                    if method.as_str() == CONSTRUCTOR {
                        return None;
                    }
                    Some(FunctionSignature::new(
                        method.as_str(),
                        line_at(source, body_start + whole.start()),
                    ))
                })
                .collect();

            classes.push(ClassModel {
                name: name.as_str().to_string(),
                line: line_at(source, whole.start()),
                docstring: None,
                methods,
            });
        }

        classes
    }
}

impl Default for JavaScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for JavaScriptExtractor {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn extract(&self, path: &str, source: &str) -> Result<CodeModel, AnalysisError> {
        let mut model = CodeModel::new(Language::JavaScript, path);
        model.functions = self.extract_functions(source);
        model.classes = self.extract_classes(source);

        tracing::debug!(
            path,
            functions = model.functions.len(),
            classes = model.classes.len(),
            "extracted javascript model"
        );
        Ok(model)
    }
}

/// 1-indexed line of a byte offset.
fn line_at(source: &str, offset: usize) -> usize {
    source.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> CodeModel {
        JavaScriptExtractor::new()
            .extract("sample.js", source)
            .expect("pattern extraction never fails")
    }

    fn names(functions: &[FunctionSignature]) -> Vec<&str> {
        functions.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_function_declaration_args_are_empty() {
        let model = extract("function greet(name) {}\n");

        assert_eq!(model.language, Language::JavaScript);
        assert_eq!(model.functions.len(), 1);
        assert_eq!(model.functions[0].name, "greet");
        assert_eq!(model.functions[0].line, 1);
        assert!(model.functions[0].args.is_empty());
        assert!(model.functions[0].docstring.is_none());
    }

    #[test]
    fn test_binding_forms_in_pattern_order() {
        let model = extract(
            r#"const arrow = (a, b) => a + b;
let paren = (x) => x * 2;
var expr = function (y) { return y; };
function declared() {}
const constExpr = function () {};
const unary = n => n;
"#,
        );

        // Declarations first, then const, let and var forms.
        assert_eq!(
            names(&model.functions),
            vec!["declared", "constExpr", "arrow", "unary", "paren", "expr"]
        );
        assert_eq!(model.functions[0].line, 4);
        assert_eq!(model.functions[2].line, 1);
        assert_eq!(model.functions[3].line, 6);
        assert_eq!(model.functions[4].line, 2);
        assert_eq!(model.functions[5].line, 3);
    }

    #[test]
    fn test_bare_arrow_needs_const() {
        let model = extract("let dbl = n => n * 2;\nvar inc = n => n + 1;\n");
        assert!(model.functions.is_empty());
    }

    #[test]
    fn test_class_keyword_stands_alone() {
        let model = extract("// subclass Hidden {\nclass Shown {\n  run() {}\n}\n");
        assert_eq!(model.classes.len(), 1);
        assert_eq!(model.classes[0].name, "Shown");
    }

    #[test]
    fn test_builtin_names_are_skipped() {
        let model = extract("const Promise = (fn) => fn;\nconst real = () => 1;\n");
        assert_eq!(names(&model.functions), vec!["real"]);
    }

    #[test]
    fn test_class_methods() {
        let model = extract(
            r#"class Counter {
  constructor() {
    this.value = 0;
  }

  increment(by) {
    this.value += by;
  }

  reset() {
    this.value = 0;
  }
}

function after() {}
"#,
        );

        assert_eq!(model.classes.len(), 1);
        let counter = &model.classes[0];
        assert_eq!(counter.name, "Counter");
        assert_eq!(counter.line, 1);
        assert!(counter.docstring.is_none());
        assert_eq!(names(&counter.methods), vec!["increment", "reset"]);
        assert_eq!(counter.methods[0].line, 6);
        assert_eq!(counter.methods[1].line, 10);
        assert!(counter.methods.iter().all(|m| m.args.is_empty()));

        assert_eq!(names(&model.functions), vec!["after"]);
    }

    #[test]
    fn test_class_scan_over_approximates() {
        let model = extract(
            r#"class Widget {
  render() {
    if (this.ready) {
      return helper(this);
    }
  }
}
"#,
        );

        let methods = names(&model.classes[0].methods);
        assert!(methods.contains(&"render"));
        assert!(methods.contains(&"if"));
    }

    #[test]
    fn test_unclosed_class_has_no_methods() {
        let model = extract("class Broken {\n  method() {\n");
        assert_eq!(model.classes.len(), 1);
        assert!(model.classes[0].methods.is_empty());
    }

    #[test]
    fn test_line_at() {
        let text = "a\nb\nc";
        assert_eq!(line_at(text, 0), 1);
        assert_eq!(line_at(text, 2), 2);
        assert_eq!(line_at(text, 4), 3);
    }
}
