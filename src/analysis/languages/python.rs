//! Python extractor backed by tree-sitter.

use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor, Tree};

use crate::analysis::docstring::{clean_docstring, literal_content};
use crate::analysis::{
    is_public_function, is_public_method, AnalysisError, ClassModel, CodeModel, Extractor,
    FunctionSignature,
};
use crate::language::Language;

/// Every definition the extractor cares about, in encounter order.
const DEFINITION_QUERY: &str = r#"
(function_definition) @function
(class_definition) @class
"#;

/// Instance receiver, dropped from argument lists by literal match.
const RECEIVER: &str = "self";

pub struct PythonExtractor {
    grammar: tree_sitter::Language,
}

impl PythonExtractor {
    pub fn new() -> Self {
        Self {
            grammar: tree_sitter_python::LANGUAGE.into(),
        }
    }

    fn create_parser(&self) -> Result<Parser, AnalysisError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.grammar)
            .map_err(|e| AnalysisError::Parser(e.to_string()))?;
        Ok(parser)
    }

    fn parse(&self, path: &str, source: &str) -> Result<Tree, AnalysisError> {
        let mut parser = self.create_parser()?;
        let tree = parser.parse(source, None).ok_or_else(|| AnalysisError::Parse {
            path: path.to_string(),
            message: "parser produced no tree".to_string(),
        })?;

        let root = tree.root_node();
        if root.has_error() {
            let message = match first_error(root) {
                Some(node) if node.is_missing() => format!(
                    "missing '{}' at line {}",
                    node.kind(),
                    node.start_position().row + 1
                ),
                Some(node) => format!("invalid syntax at line {}", node.start_position().row + 1),
                None => "invalid syntax".to_string(),
            };
            return Err(AnalysisError::Parse {
                path: path.to_string(),
                message,
            });
        }

        Ok(tree)
    }

    fn build_function(&self, node: Node, source: &[u8]) -> FunctionSignature {
        FunctionSignature {
            name: node_name(node, source),
            line: node.start_position().row + 1,
            args: parameter_names(node, source),
            docstring: docstring(node, source),
            is_async: is_async(node),
        }
    }

    fn build_class(&self, node: Node, source: &[u8]) -> ClassModel {
        let mut methods = Vec::new();

        if let Some(body) = node.child_by_field_name("body") {
            let mut cursor = body.walk();
            for entry in body.named_children(&mut cursor) {
                let Some(func) = as_function(entry) else {
                    continue;
                };
                let name = node_name(func, source);
                if is_public_method(&name) {
                    methods.push(self.build_function(func, source));
                }
            }
        }

        ClassModel {
            name: node_name(node, source),
            line: node.start_position().row + 1,
            docstring: docstring(node, source),
            methods,
        }
    }
}

impl Default for PythonExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for PythonExtractor {
    fn language(&self) -> Language {
        Language::Python
    }

    fn extract(&self, path: &str, source: &str) -> Result<CodeModel, AnalysisError> {
        let tree = self.parse(path, source)?;
        let bytes = source.as_bytes();

        let query = Query::new(&self.grammar, DEFINITION_QUERY)
            .map_err(|e| AnalysisError::Parser(e.to_string()))?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), bytes);

        let mut definitions = Vec::new();
        while let Some(m) = matches.next() {
            for capture in m.captures {
                definitions.push((capture.node, capture.index));
            }
        }
        // Breadth-first: every definition of an outer scope level comes
        // before any nested one, source order within a level.
        definitions.sort_by_key(|(node, _)| (scope_depth(*node), node.start_byte()));

        let mut model = CodeModel::new(Language::Python, path);

        for (node, index) in definitions {
            match query.capture_names()[index as usize] {
                "function" => {
                    if is_method(node) {
                        continue;
                    }
                    let name = node_name(node, bytes);
                    if is_public_function(&name) {
                        model.functions.push(self.build_function(node, bytes));
                    }
                }
                "class" => model.classes.push(self.build_class(node, bytes)),
                _ => {}
            }
        }

        tracing::debug!(
            path,
            functions = model.functions.len(),
            classes = model.classes.len(),
            "extracted python model"
        );
        Ok(model)
    }
}

fn node_name(node: Node, source: &[u8]) -> String {
    node.child_by_field_name("name")
        .and_then(|n| n.utf8_text(source).ok())
        .unwrap_or("")
        .to_string()
}

/// Unwrap a class body entry to its function definition, if it is one.
fn as_function(entry: Node) -> Option<Node> {
    match entry.kind() {
        "function_definition" => Some(entry),
        "decorated_definition" => entry
            .child_by_field_name("definition")
            .filter(|d| d.kind() == "function_definition"),
        _ => None,
    }
}

/// Whether a function definition sits directly in a class body.
fn is_method(func: Node) -> bool {
    let mut owner = func.parent();
    if owner.is_some_and(|p| p.kind() == "decorated_definition") {
        owner = owner.and_then(|p| p.parent());
    }
    owner
        .filter(|block| block.kind() == "block")
        .and_then(|block| block.parent())
        .is_some_and(|p| p.kind() == "class_definition")
}

fn is_async(func: Node) -> bool {
    func.child(0).is_some_and(|c| c.kind() == "async")
}

/// Positional-or-keyword parameters in declaration order.
///
/// Positional-only parameters (before `/`), variadics and keyword-only
/// parameters are left out, as is the receiver.
fn parameter_names(func: Node, source: &[u8]) -> Vec<String> {
    let Some(params) = func.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut names = Vec::new();
    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        let name = match param.kind() {
            "identifier" => Some(param),
            "default_parameter" | "typed_default_parameter" => param.child_by_field_name("name"),
            "typed_parameter" => param.named_child(0),
            "positional_separator" => {
                names.clear();
                continue;
            }
            "keyword_separator" | "list_splat_pattern" | "dictionary_splat_pattern" => break,
            _ => None,
        };
        let Some(name) = name else {
            continue;
        };
        match name.kind() {
            "identifier" => names.extend(name.utf8_text(source).ok().map(str::to_string)),
            // `*args: T` and `**kwargs: T`
            "list_splat_pattern" | "dictionary_splat_pattern" => break,
            _ => {}
        }
    }

    names.retain(|name| name != RECEIVER);
    names
}

/// Nesting level of a definition as Python's own AST counts it.
///
/// Blocks, decorators and `else`/`finally` wrappers add no level, and each
/// `elif` sits one level inside the branch before it.
fn scope_depth(node: Node) -> usize {
    let mut depth = 0;
    let mut current = node;
    while let Some(parent) = current.parent() {
        depth += match current.kind() {
            "block" | "decorated_definition" | "finally_clause" => 0,
            "else_clause" => preceding_elifs(current),
            "elif_clause" => preceding_elifs(current) + 1,
            _ => 1,
        };
        current = parent;
    }
    depth
}

fn preceding_elifs(clause: Node) -> usize {
    let mut count = 0;
    let mut sibling = clause.prev_named_sibling();
    while let Some(node) = sibling {
        if node.kind() == "elif_clause" {
            count += 1;
        }
        sibling = node.prev_named_sibling();
    }
    count
}

/// The leading string literal of a definition body, cleaned.
fn docstring(def: Node, source: &[u8]) -> Option<String> {
    let body = def.child_by_field_name("body")?;
    let mut cursor = body.walk();
    let first = body
        .named_children(&mut cursor)
        .find(|n| n.kind() != "comment")?;

    if first.kind() != "expression_statement" || first.named_child_count() != 1 {
        return None;
    }
    let expr = first.named_child(0)?;

    let content = match expr.kind() {
        "string" => literal_content(expr.utf8_text(source).ok()?)?,
        "concatenated_string" => {
            let mut parts = String::new();
            let mut cursor = expr.walk();
            for part in expr.named_children(&mut cursor) {
                if part.kind() != "string" {
                    continue;
                }
                parts.push_str(&literal_content(part.utf8_text(source).ok()?)?);
            }
            parts
        }
        _ => return None,
    };

    Some(clean_docstring(&content))
}

/// Depth-first search for the first error or missing node.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|c| c.has_error())
        .find_map(first_error)
}
