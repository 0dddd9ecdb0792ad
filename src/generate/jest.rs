//! Jest scaffold renderer for JavaScript sources.

use crate::analysis::{CodeModel, FunctionSignature};

use super::naming::module_stem;
use super::placeholders::{placeholder_args, JAVASCRIPT_LITERALS};

/// Render a Jest test file for the model.
///
/// Only free functions are rendered; classes produce no output in this
/// convention.
pub fn render(model: &CodeModel) -> String {
    let module = module_stem(&model.file_path);
    let imports: Vec<&str> = model.functions.iter().map(|f| f.name.as_str()).collect();

    let mut lines: Vec<String> = Vec::new();
    if imports.is_empty() {
        lines.push(format!("const {{}} = require('./{}');", module));
    } else {
        lines.push(format!(
            "const {{ {} }} = require('./{}');",
            imports.join(", "),
            module
        ));
    }
    lines.push(String::new());
    lines.push(format!("describe('{}', () => {{", module));

    for func in &model.functions {
        render_function(&mut lines, func);
    }

    lines.push("});".into());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_function(lines: &mut Vec<String>, func: &FunctionSignature) {
    let name = &func.name;

    lines.push(format!("  describe('{}', () => {{", name));
    lines.push(format!(
        "    test('should execute {} successfully', () => {{",
        name
    ));
    lines.push(format!("      // TODO: Implement actual test for {}", name));
    lines.push(format!(
        "      // const result = {}({});",
        name,
        placeholder_args(&func.args, JAVASCRIPT_LITERALS)
    ));
    lines.push("      // expect(result).toBeDefined();".into());
    lines.push("    });".into());
    lines.push(String::new());
    lines.push(format!(
        "    test('should handle edge cases for {}', () => {{",
        name
    ));
    lines.push(format!("      // TODO: Add edge case tests for {}", name));
    lines.push("    });".into());
    lines.push("  });".into());
    lines.push(String::new());
}
