//! End-to-end generation: classify, extract, render, write.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::{get_extractor, AnalysisError, CodeModel};
use crate::config::Config;
use crate::generate::{test_file_name, Convention};
use crate::language::detect_language;
use crate::report;

/// Files produced by one successful run.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub model: CodeModel,
    pub convention: Convention,
    pub test_file: PathBuf,
    pub report_file: PathBuf,
}

/// Read and extract a code model from a source file.
///
/// Fails on unreadable input, on extensions without an extractor, and on
/// syntax errors in tree-parsed grammars.
pub fn analyze_file(path: &Path) -> Result<CodeModel, AnalysisError> {
    let source = fs::read_to_string(path).map_err(|source| AnalysisError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let language = detect_language(path);
    let extractor = get_extractor(language).ok_or_else(|| AnalysisError::UnsupportedLanguage {
        path: path.to_path_buf(),
        language: language.to_string(),
    })?;

    extractor.extract(&path.to_string_lossy(), &source)
}

/// Generate the test scaffold and report for one source file.
///
/// Nothing is written unless extraction succeeds. Both outputs are fully
/// rewritten on every run.
pub fn generate(path: &Path, config: &Config) -> anyhow::Result<GenerationOutcome> {
    let model = analyze_file(path)?;

    let convention = Convention::for_language(model.language).ok_or_else(|| {
        anyhow::anyhow!("no test convention for language '{}'", model.language)
    })?;
    let test_source = convention.render(&model);
    let report_text = report::render_markdown(&model, config.docstring_limit);

    let out_dir = config.output_dir();
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let test_file = out_dir.join(test_file_name(&model.file_path, model.language));
    fs::write(&test_file, test_source)
        .with_context(|| format!("writing test file {}", test_file.display()))?;

    let report_file = out_dir.join(&config.report_file);
    fs::write(&report_file, report_text)
        .with_context(|| format!("writing report {}", report_file.display()))?;

    tracing::debug!(
        convention = convention.as_str(),
        test_file = %test_file.display(),
        report_file = %report_file.display(),
        "wrote generated files"
    );

    Ok(GenerationOutcome {
        model,
        convention,
        test_file,
        report_file,
    })
}
