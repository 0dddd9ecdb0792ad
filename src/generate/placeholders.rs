//! Placeholder argument synthesis from parameter names.
//!
//! The values produced here only make the commented-out invocations in a
//! generated stub read naturally. They carry no semantics.

/// Keyword buckets, checked in order against the lowercased parameter name.
const TEXT_HINTS: &[&str] = &["name", "title", "text", "str"];
const COUNT_HINTS: &[&str] = &["num", "count", "size", "int"];
const FLAG_HINTS: &[&str] = &["flag", "enabled", "bool"];

/// The kind of placeholder chosen for one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// Name/title/text-like: a quoted `test_<param>` string.
    Text(String),
    /// Count/size-like: a fixed integer.
    Count,
    /// Flag-like: a fixed boolean.
    Flag,
    /// Anything else: a quoted `mock_<param>` string.
    Mock(String),
}

/// Literal spellings for a target language.
#[derive(Debug, Clone, Copy)]
pub struct Literals {
    pub true_literal: &'static str,
}

pub const PYTHON_LITERALS: Literals = Literals { true_literal: "True" };
pub const JAVASCRIPT_LITERALS: Literals = Literals { true_literal: "true" };

impl Placeholder {
    /// Classify a parameter name by case-insensitive substring match.
    pub fn classify(param: &str) -> Self {
        let lower = param.to_lowercase();
        let hit = |hints: &[&str]| hints.iter().any(|h| lower.contains(h));

        if hit(TEXT_HINTS) {
            Placeholder::Text(param.to_string())
        } else if hit(COUNT_HINTS) {
            Placeholder::Count
        } else if hit(FLAG_HINTS) {
            Placeholder::Flag
        } else {
            Placeholder::Mock(param.to_string())
        }
    }

    pub fn render(&self, literals: Literals) -> String {
        match self {
            Placeholder::Text(param) => format!("'test_{}'", param),
            Placeholder::Count => "1".to_string(),
            Placeholder::Flag => literals.true_literal.to_string(),
            Placeholder::Mock(param) => format!("'mock_{}'", param),
        }
    }
}

/// Render a comma-separated placeholder argument list.
pub fn placeholder_args(args: &[String], literals: Literals) -> String {
    args.iter()
        .map(|a| Placeholder::classify(a).render(literals))
        .collect::<Vec<_>>()
        .join(", ")
}
