//! Command-line interface for testpilot.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{self, Config, DEFAULT_TEMPLATE};
use crate::package;
use crate::pipeline;
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Scaffold unit tests and a coverage report from a single source file.
///
/// Testpilot extracts the public functions and class methods of a Python or
/// JavaScript file and writes a skeleton test file in the language's native
/// test convention (unittest or Jest), plus a markdown report. Every
/// generated assertion is commented out and needs a human to finish it.
#[derive(Parser)]
#[command(name = "testpilot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a test scaffold and report for a source file
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),
    /// Write a default testpilot config file
    Init(InitArgs),
    /// Bundle a directory into a zip archive
    Package(PackageArgs),
}

/// Arguments for the generate command.
#[derive(Parser)]
pub struct GenerateArgs {
    /// Source file to analyze
    pub path: PathBuf,

    /// Directory for the generated files (overrides the config file)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "testpilot.yaml")]
    pub output: PathBuf,
}

/// Arguments for the package command.
#[derive(Parser)]
pub struct PackageArgs {
    /// Directory to bundle
    pub path: PathBuf,

    /// Archive path (default: <prefix>.zip in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Top-level folder for archive entries (default: the directory name)
    #[arg(short, long)]
    pub prefix: Option<String>,
}

/// Run the generate command.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let mut config = match Config::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };
    if let Some(dir) = &args.output_dir {
        config.output_dir = Some(dir.clone());
    }

    let outcome = match pipeline::generate(&args.path, &config) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return Ok(EXIT_ERROR);
        }
    };

    match args.format.as_str() {
        "json" => report::write_json(&outcome.model, &outcome.test_file, &outcome.report_file)?,
        _ => report::write_pretty(&outcome.model, &outcome.test_file, &outcome.report_file),
    }

    Ok(EXIT_SUCCESS)
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, DEFAULT_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to customize output locations", args.output.display());
    println!("  2. Run: testpilot generate <source-file> --config {}", args.output.display());
    if let Some(user) = config::user_config_path() {
        println!();
        println!("A user-wide config can also live at {}", user.display());
    }

    Ok(EXIT_SUCCESS)
}

/// Run the package command.
pub fn run_package(args: &PackageArgs) -> anyhow::Result<i32> {
    let prefix = match args.prefix.clone().or_else(|| {
        args.path
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
    }) {
        Some(p) if !p.trim_matches('/').is_empty() => p,
        _ => {
            eprintln!("Error: cannot derive an archive prefix, use --prefix");
            return Ok(EXIT_ERROR);
        }
    };
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}.zip", prefix)));

    match package::package_dir(&args.path, &output, &prefix) {
        Ok(count) => {
            println!("Packaged {} files into {}", count, output.display());
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            Ok(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::try_parse_from(["testpilot", "gen", "src/app.py", "-o", "out"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.path, PathBuf::from("src/app.py"));
                assert_eq!(args.output_dir, Some(PathBuf::from("out")));
                assert_eq!(args.format, "pretty");
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_invalid_format() {
        let args = GenerateArgs {
            path: PathBuf::from("x.py"),
            output_dir: None,
            config: None,
            format: "xml".to_string(),
        };
        assert_eq!(run_generate(&args).unwrap(), EXIT_ERROR);
    }

    #[test]
    fn test_generate_failure_exit_code() {
        let temp = TempDir::new().unwrap();
        let args = GenerateArgs {
            path: temp.path().join("missing.py"),
            output_dir: Some(temp.path().to_path_buf()),
            config: Some(temp.path().join("absent.yaml")),
            format: "pretty".to_string(),
        };
        assert_eq!(run_generate(&args).unwrap(), EXIT_ERROR);
    }

    #[test]
    fn test_generate_success_exit_code() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("calc.py");
        std::fs::write(&src, "def add(a, b):\n    return a + b\n").unwrap();
        let cfg = temp.path().join("testpilot.yaml");
        std::fs::write(&cfg, DEFAULT_TEMPLATE).unwrap();

        let args = GenerateArgs {
            path: src,
            output_dir: Some(temp.path().join("out")),
            config: Some(cfg),
            format: "json".to_string(),
        };
        assert_eq!(run_generate(&args).unwrap(), EXIT_SUCCESS);
        assert!(temp.path().join("out/test_calc.py").exists());
        assert!(temp.path().join("out/test-report.md").exists());
    }

    #[test]
    fn test_init_writes_template_once() {
        let temp = TempDir::new().unwrap();
        let args = InitArgs {
            output: temp.path().join("conf/testpilot.yaml"),
        };
        assert_eq!(run_init(&args).unwrap(), EXIT_SUCCESS);
        let written = std::fs::read_to_string(&args.output).unwrap();
        assert_eq!(written, DEFAULT_TEMPLATE);
        assert_eq!(run_init(&args).unwrap(), EXIT_ERROR);
    }

    #[test]
    fn test_package_command() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("bundle");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("notes.md"), "notes\n").unwrap();

        let args = PackageArgs {
            path: dir.clone(),
            output: Some(temp.path().join("out.zip")),
            prefix: None,
        };
        assert_eq!(run_package(&args).unwrap(), EXIT_SUCCESS);

        let file = std::fs::File::open(temp.path().join("out.zip")).unwrap();
        let archive = zip::ZipArchive::new(file).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert_eq!(names, vec!["bundle/notes.md"]);

        let missing = PackageArgs {
            path: temp.path().join("absent"),
            output: Some(temp.path().join("none.zip")),
            prefix: Some("x".to_string()),
        };
        assert_eq!(run_package(&missing).unwrap(), EXIT_ERROR);
    }
}
