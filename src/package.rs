//! Bundle a directory into a zip archive.
//!
//! Every regular file under the directory is stored deflated, with its path
//! relative to the directory placed under a single top-level folder.

use anyhow::Context;
use std::fs::File;
use std::io;
use std::path::{Component, Path};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Write every file under `dir` into `output`, each entry prefixed with
/// `prefix/`. Returns the number of files stored.
///
/// Entries are added in file-name order so archives are reproducible. The
/// output file itself is skipped when it lives inside `dir`.
pub fn package_dir(dir: &Path, output: &Path, prefix: &str) -> anyhow::Result<usize> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let file = File::create(output)
        .with_context(|| format!("creating archive {}", output.display()))?;
    let output_real = output.canonicalize().ok();
    let mut archive = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut count = 0;
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if output_real.is_some() && path.canonicalize().ok() == output_real {
            continue;
        }

        let relative = path.strip_prefix(dir).unwrap_or(path);
        let name = entry_name(prefix, relative);
        archive
            .start_file(name.as_str(), options)
            .with_context(|| format!("adding {}", name))?;
        let mut source =
            File::open(path).with_context(|| format!("reading {}", path.display()))?;
        io::copy(&mut source, &mut archive).with_context(|| format!("writing {}", name))?;

        tracing::debug!(entry = %name, "archived file");
        count += 1;
    }

    archive
        .finish()
        .with_context(|| format!("finishing archive {}", output.display()))?;
    Ok(count)
}

/// Archive entry name: always `/`-separated, whatever the host separator.
fn entry_name(prefix: &str, relative: &Path) -> String {
    let mut parts = vec![prefix.trim_matches('/').to_string()];
    parts.extend(relative.components().filter_map(|c| match c {
        Component::Normal(part) => Some(part.to_string_lossy().to_string()),
        _ => None,
    }));
    parts.retain(|p| !p.is_empty());
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_entry_name() {
        assert_eq!(
            entry_name("bundle", Path::new("scripts/generate.py")),
            "bundle/scripts/generate.py"
        );
        assert_eq!(entry_name("bundle/", Path::new("README.md")), "bundle/README.md");
    }

    #[test]
    fn test_package_dir_prefixes_entries() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("tool");
        std::fs::create_dir_all(src.join("scripts")).unwrap();
        std::fs::write(src.join("SKILL.md"), "# Tool\n").unwrap();
        std::fs::write(src.join("scripts/run.py"), "print('hi')\n").unwrap();
        let output = temp.path().join("tool.zip");

        let count = package_dir(&src, &output, "test-pilot").unwrap();
        assert_eq!(count, 2);

        let mut archive = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        assert_eq!(names, vec!["test-pilot/SKILL.md", "test-pilot/scripts/run.py"]);

        let mut content = String::new();
        archive
            .by_name("test-pilot/scripts/run.py")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "print('hi')\n");
    }

    #[test]
    fn test_output_inside_directory_is_skipped() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.txt"), "a").unwrap();
        let output = temp.path().join("bundle.zip");

        assert_eq!(package_dir(temp.path(), &output, "bundle").unwrap(), 1);
    }

    #[test]
    fn test_missing_directory() {
        let temp = TempDir::new().unwrap();
        let err = package_dir(&temp.path().join("absent"), &temp.path().join("x.zip"), "x")
            .unwrap_err();
        assert!(err.to_string().contains("not a directory"));
        assert!(!temp.path().join("x.zip").exists());
    }
}
