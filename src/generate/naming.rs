//! File, module and class naming for generated tests.

use std::path::Path;

use crate::language::Language;

/// File stem of the analyzed source (`pkg/my_mod.py` -> `my_mod`).
pub fn module_stem(source_file: &str) -> String {
    Path::new(source_file)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Name of the generated test file for a source file.
///
/// - python: `test_<stem>.py`
/// - javascript/typescript: `<stem>.test.js`
/// - anything else: `test_<stem>.<ext>`, or `test_<stem>` without an extension
pub fn test_file_name(source_file: &str, language: Language) -> String {
    let stem = module_stem(source_file);

    match language {
        Language::Python => format!("test_{}.py", stem),
        Language::JavaScript | Language::TypeScript => format!("{}.test.js", stem),
        _ => match Path::new(source_file).extension() {
            Some(ext) => format!("test_{}.{}", stem, ext.to_string_lossy()),
            None => format!("test_{}", stem),
        },
    }
}

/// Title-case like Python's `str.title`: a letter is uppercased when it does
/// not follow another letter, lowercased otherwise.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(c);
            prev_cased = false;
        }
    }
    out
}

/// `unittest` class name for a module stem: `my_module` -> `TestMyModule`.
pub fn test_class_name(stem: &str) -> String {
    format!("Test{}", title_case(stem).replace('_', ""))
}
