//! Testpilot - test scaffold generator.
//!
//! Testpilot reads one source file, extracts a structural summary of its
//! public callables (free functions and class methods with their parameters
//! and docstrings), and writes a skeleton test file in the language's native
//! convention together with a markdown coverage report.
//!
//! # Architecture
//!
//! - `language`: extension-based language classification
//! - `analysis`: extractors producing a language-neutral `CodeModel`
//!   (tree-sitter for Python, regex scanning for JavaScript)
//! - `generate`: unittest and Jest scaffold renderers
//! - `report`: markdown, pretty and JSON output
//! - `config`: YAML configuration
//! - `pipeline`: classify, extract, render and write in one call
//! - `package`: zip a directory under one top-level folder
//!
//! # Adding a New Language
//!
//! Implement the `Extractor` trait in `src/analysis/languages/`, register it
//! in `languages/mod.rs`, and map the language to a `Convention` in
//! `generate/mod.rs`.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod generate;
pub mod language;
pub mod package;
pub mod pipeline;
pub mod report;

pub use analysis::{
    get_extractor, register_extractors, AnalysisError, ClassModel, CodeModel, Extractor,
    FunctionSignature,
};
pub use config::Config;
pub use generate::{test_file_name, Convention};
pub use language::{detect_language, Language};
pub use pipeline::{analyze_file, generate, GenerationOutcome};
