//! CloudFormation registry schema to Rust code generator
//!
//! Usage:
//!   # Generate one module from a schema file (or stdin)
//!   aws cloudformation describe-type --type RESOURCE --type-name AWS::KMS::Key \
//!     --query 'Schema' --output text | cfn-codegen generate
//!
//!   # Regenerate the resource crate from the checked-in schemas
//!   cfn-codegen sync --schema-dir schemas --out-dir cfn-resources/src/generated
//!
//!   # Verify the checked-in modules are up to date
//!   cfn-codegen sync --schema-dir schemas --out-dir cfn-resources/src/generated --check --diff

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use cfn_codegen::{CodegenConfig, ResourceModel, emit, load_model, render};
use clap::{Parser, Subcommand};
use colored::Colorize;
use similar::{ChangeTag, TextDiff};

#[derive(Parser, Debug)]
#[command(name = "cfn-codegen")]
#[command(about = "Generate typed resource declarations from CloudFormation schemas")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the module for a single schema
    Generate {
        /// Input file (reads from stdin if not specified)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output file (writes to stdout if not specified)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Regenerate a module directory from a directory of schemas
    Sync {
        /// Directory containing registry schemas (*.json)
        #[arg(long, default_value = "schemas")]
        schema_dir: PathBuf,

        /// Directory receiving the generated modules
        #[arg(long, default_value = "cfn-resources/src/generated")]
        out_dir: PathBuf,

        /// Report stale files without writing them
        #[arg(long, short)]
        check: bool,

        /// Show diff of changed files
        #[arg(long)]
        diff: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = CodegenConfig::default();

    match args.command {
        Command::Generate { file, output } => run_generate(file.as_deref(), output.as_deref(), &config),
        Command::Sync {
            schema_dir,
            out_dir,
            check,
            diff,
        } => run_sync(&schema_dir, &out_dir, check, diff, &config),
    }
}

fn run_generate(file: Option<&Path>, output: Option<&Path>, config: &CodegenConfig) -> Result<()> {
    let schema_json = if let Some(path) = file {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let model = load_model(&schema_json).context("Failed to build resource model")?;
    let code = emit::emit_resource(&model, config);

    if let Some(path) = output {
        fs::write(path, &code).with_context(|| format!("Failed to write to: {}", path.display()))?;
        eprintln!("Generated: {}", path.display());
    } else {
        print!("{}", code);
    }
    Ok(())
}

/// Load every `*.json` schema in a directory, sorted by file name
fn load_models(schema_dir: &Path) -> Result<Vec<ResourceModel>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(schema_dir)
        .with_context(|| format!("Failed to read directory: {}", schema_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut models = Vec::with_capacity(paths.len());
    for path in &paths {
        log::info!("Loading {}", path.display());
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let model = load_model(&json).with_context(|| format!("Invalid schema: {}", path.display()))?;
        models.push(model);
    }
    Ok(models)
}

fn run_sync(
    schema_dir: &Path,
    out_dir: &Path,
    check: bool,
    show_diff: bool,
    config: &CodegenConfig,
) -> Result<()> {
    let models = load_models(schema_dir)?;
    if models.is_empty() {
        bail!("No schemas found in {}", schema_dir.display());
    }
    let files = render(&models, config)?;

    let mut stale = Vec::new();
    for (name, code) in &files {
        let path = out_dir.join(name);
        let existing = read_existing(&path)?;
        if existing == *code {
            log::debug!("Up to date: {}", path.display());
            continue;
        }

        if show_diff {
            print_diff(&path, &existing, code);
        }
        if !check {
            fs::create_dir_all(out_dir)
                .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;
            fs::write(&path, code).with_context(|| format!("Failed to write to: {}", path.display()))?;
            println!("{} {}", "Generated:".green(), path.display());
        }
        stale.push(path);
    }

    for orphan in orphaned_modules(out_dir, &files) {
        println!("{} {}", "Not generated from any schema:".yellow(), orphan.display());
    }

    if check && !stale.is_empty() {
        println!("{}", "The following files are out of date:".yellow());
        for path in &stale {
            println!("  {}", path.display());
        }
        bail!("Generated modules are out of date; run cfn-codegen sync");
    }

    if stale.is_empty() {
        println!("{}", "All generated modules are up to date.".green());
    } else if !check {
        println!("{}", format!("Generated {} file(s).", stale.len()).green().bold());
    }
    Ok(())
}

/// Current contents of a generated file; a missing file reads as empty
fn read_existing(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e).with_context(|| format!("Failed to read: {}", path.display())),
    }
}

/// `.rs` files in the output directory that no schema produces
fn orphaned_modules(out_dir: &Path, files: &BTreeMap<String, String>) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(out_dir) else {
        return Vec::new();
    };
    let mut orphans: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| !files.contains_key(name))
        })
        .collect();
    orphans.sort();
    orphans
}

fn print_diff(file: &Path, original: &str, generated: &str) {
    println!("\n{} {}:", "Diff for".cyan().bold(), file.display());

    let diff = TextDiff::from_lines(original, generated);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-".red(),
            ChangeTag::Insert => "+".green(),
            ChangeTag::Equal => " ".normal(),
        };
        print!("{}{}", sign, change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = r#"{"typeName": "AWS::KMS::Key", "properties": {"Enabled": {"type": "boolean"}}}"#;

    #[test]
    fn sync_writes_then_checks_clean() {
        let schemas = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(schemas.path().join("AWS_KMS_Key.json"), KEY).unwrap();
        fs::write(schemas.path().join("README.md"), "ignored").unwrap();
        let config = CodegenConfig::default();

        run_sync(schemas.path(), out.path(), false, false, &config).unwrap();
        assert!(out.path().join("kms_key.rs").exists());
        assert!(out.path().join("mod.rs").exists());

        run_sync(schemas.path(), out.path(), true, false, &config).unwrap();
    }

    #[test]
    fn check_reports_stale_files_without_writing() {
        let schemas = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(schemas.path().join("AWS_KMS_Key.json"), KEY).unwrap();
        fs::write(out.path().join("kms_key.rs"), "// stale\n").unwrap();

        let result = run_sync(schemas.path(), out.path(), true, false, &CodegenConfig::default());
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(out.path().join("kms_key.rs")).unwrap(), "// stale\n");
        assert!(!out.path().join("mod.rs").exists());
    }

    #[test]
    fn unreadable_existing_file_is_an_error() {
        let schemas = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(schemas.path().join("AWS_KMS_Key.json"), KEY).unwrap();
        let module = out.path().join("kms_key.rs");
        fs::write(&module, [0xff, 0xfe, 0xfd]).unwrap();

        for check in [true, false] {
            let err = run_sync(schemas.path(), out.path(), check, false, &CodegenConfig::default())
                .unwrap_err();
            assert!(err.to_string().contains("Failed to read"), "{:#}", err);
        }
        assert_eq!(fs::read(&module).unwrap(), vec![0xff, 0xfe, 0xfd]);
        assert_eq!(read_existing(&out.path().join("absent.rs")).unwrap(), "");
    }

    #[test]
    fn empty_schema_dir_is_an_error() {
        let schemas = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        assert!(run_sync(schemas.path(), out.path(), false, false, &CodegenConfig::default()).is_err());
    }

    #[test]
    fn orphans_are_listed() {
        let out = tempfile::tempdir().unwrap();
        fs::write(out.path().join("old_module.rs"), "").unwrap();
        fs::write(out.path().join("mod.rs"), "").unwrap();
        let mut files = BTreeMap::new();
        files.insert("mod.rs".to_string(), String::new());
        let orphans = orphaned_modules(out.path(), &files);
        assert_eq!(orphans, vec![out.path().join("old_module.rs")]);
    }
}
