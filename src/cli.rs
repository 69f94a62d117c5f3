//! Minimal CLI: read JSON → (interface declarations | type-description debug view)
use std::path::{Path, PathBuf};
use clap::{Parser, Subcommand, Args};
use colored::Colorize;
use serde_json::Value;
use thiserror::Error;

use crate::error::GenerateError;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer `export interface` declarations from sample JSON documents
#[derive(Parser, Debug)]
#[command(name = "json-iface", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and write `export interface` declarations (one output per input)
    Interface(InterfaceOut),
    /// infer and print the type-description debug view as JSON
    Schema(SchemaOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document; must yield exactly one value.
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct InterfaceOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// root declaration name (default: input file stem, alphanumerics only)
    #[arg(long)]
    root_name: Option<String>,

    /// output .ts file (default: `<input dir>/<stem>-type.ts`); single input only
    #[arg(short, long, conflicts_with = "stdout")]
    out: Option<PathBuf>,

    /// print declarations to stdout instead of writing files
    #[arg(long, default_value_t = false)]
    stdout: bool,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted); single input only
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

/// One parsed (and optionally narrowed) input document.
#[derive(Debug)]
struct Document {
    path: PathBuf,
    value: Value,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("invalid JSON in {}: {source}", .path.display())]
    InvalidJson { path: PathBuf, source: serde_json::Error },

    #[error("JSON pointer `{pointer}` matched nothing in {}", .path.display())]
    PointerMiss { path: PathBuf, pointer: String },

    #[error("jq filter failed on {}: {message}", .path.display())]
    Jq { path: PathBuf, message: String },

    #[error("{}: {source}", .path.display())]
    Generate { path: PathBuf, source: GenerateError },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: std::io::Error },

    #[error("invalid glob pattern `{pattern}`: {message}")]
    Glob { pattern: String, message: String },

    #[error("glob pattern matched no files: {pattern}")]
    NoMatch { pattern: String },

    #[error("--out needs exactly one input, got {count}")]
    OutNeedsSingleInput { count: usize },

    #[error("failed to render type description: {0}")]
    Render(#[from] serde_json::Error),
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn resolve(&self) -> Result<Vec<PathBuf>, InputError> {
        resolve_file_path_patterns(&self.input)
    }

    fn load_process(
        &self,
        source_paths: Vec<PathBuf>,
        mut apply: impl FnMut(Document) -> Result<(), InputError>,
    ) -> Result<(), InputError> {
        for source_path in source_paths {
            let source = std::fs::read_to_string(&source_path).map_err(|source| {
                match source.kind() {
                    std::io::ErrorKind::NotFound => InputError::NotFound { path: source_path.clone() },
                    _ => InputError::Read { path: source_path.clone(), source },
                }
            })?;
            let json_value = serde_json::from_str::<Value>(&source).map_err(|source| {
                InputError::InvalidJson { path: source_path.clone(), source }
            })?;
            let json_value = self.select(&source_path, json_value)?;
            let json_value = self.filter(&source_path, json_value)?;
            apply(Document { path: source_path, value: json_value })?;
        }
        Ok(())
    }

    fn select(&self, path: &Path, value: Value) -> Result<Value, InputError> {
        let Some(pointer) = self.json_pointer.as_ref() else {
            return Ok(value);
        };
        value.pointer(pointer).cloned().ok_or_else(|| InputError::PointerMiss {
            path: path.to_path_buf(),
            pointer: pointer.clone(),
        })
    }

    fn filter(&self, path: &Path, value: Value) -> Result<Value, InputError> {
        let Some(jq_expr) = self.jq_expr.as_ref() else {
            return Ok(value);
        };
        let jq_error = |message: String| InputError::Jq { path: path.to_path_buf(), message };
        let mut outputs = crate::jq_exec::run_jaq(jq_expr, &value)
            .map_err(|error| jq_error(format!("{error:#}")))?;
        if outputs.len() != 1 {
            return Err(jq_error(format!("expected exactly one output, got {}", outputs.len())));
        }
        Ok(outputs.remove(0))
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<(), InputError> {
        match &self.cmd {
            Command::Interface(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let source_paths = target.input_settings.resolve()?;
                if target.out.is_some() && source_paths.len() != 1 {
                    return Err(InputError::OutNeedsSingleInput { count: source_paths.len() });
                }

                target.input_settings.load_process(source_paths, |doc| {
                    let root_name = target.root_name.clone()
                        .unwrap_or_else(|| root_name_for(&doc.path));
                    let src = crate::generate(&doc.value, &root_name).map_err(|source| {
                        InputError::Generate { path: doc.path.clone(), source }
                    })?;

                    if target.stdout {
                        println!("{src}");
                        return Ok(())
                    }
                    let out = target.out.clone().unwrap_or_else(|| output_path_for(&doc.path));
                    write_output(&out, &src)?;
                    tracing::info!(input = %doc.path.display(), output = %out.display(), "wrote declarations");
                    report_success(&out, &src);
                    Ok(())
                })
            }
            Command::Schema(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let source_paths = target.input_settings.resolve()?;
                if target.out.is_some() && source_paths.len() != 1 {
                    return Err(InputError::OutNeedsSingleInput { count: source_paths.len() });
                }

                target.input_settings.load_process(source_paths, |doc| {
                    let ty = crate::inference::classify(&doc.value);
                    let schema_src = serde_json::to_string_pretty(&ty)?;
                    match target.out.as_ref() {
                        Some(out) => write_output(out, &schema_src),
                        None => {
                            println!("{schema_src}");
                            Ok(())
                        }
                    }
                })
            }
        }
    }
}

/// `data/my-sample.json` → `mysample` (normalized later by the generator).
pub fn root_name_for(path: &Path) -> String {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    crate::naming::alphanumeric_only(&stem)
}

/// `data/my-sample.json` → `data/my-sample-type.ts`.
pub fn output_path_for(path: &Path) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    path.with_file_name(format!("{stem}-type.ts"))
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: &Path, contents: &str) -> Result<(), InputError> {
    let write_error = |source| InputError::Write { path: out.to_path_buf(), source };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(out, contents).map_err(write_error)
}

fn report_success(out: &Path, src: &str) {
    let rule = "─".repeat(50);
    println!("{} generated declarations: {}", "✔".green().bold(), out.display().to_string().bold());
    println!();
    println!("{}", rule.dimmed());
    println!("{src}");
    println!("{}", rule.dimmed());
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>, InputError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // `glob` has no brace expansion, so `{` is literal.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if !has_glob_chars(pattern) {
            out.push(PathBuf::from(pattern));
            continue;
        }

        let glob_error = |message: String| InputError::Glob { pattern: pattern.to_string(), message };
        let entries = glob::glob(pattern).map_err(|e| glob_error(e.to_string()))?;
        let before = out.len();
        for entry in entries {
            out.push(entry.map_err(|e| glob_error(e.to_string()))?);
        }
        if out.len() == before {
            // explicit glob that matched nothing
            return Err(InputError::NoMatch { pattern: pattern.to_string() });
        }
    }

    Ok(out)
}
