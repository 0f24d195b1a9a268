#![deny(unsafe_code)]
//! CLI for shaderkit manifests.
//!
//! Subcommands:
//! - `check <manifest>`: parse and validate a manifest without a GL context
//! - `list <manifest>`: print the shaders and programs a manifest declares

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use shaderkit_core::{ShaderKind, ShaderManifest};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "shaderkit", about = "Shader manifest checker")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate that every program references declared shaders of the right kind.
    Check {
        /// Path to the manifest JSON file.
        manifest: PathBuf,
    },
    /// List the shaders and programs in a manifest.
    List {
        /// Path to the manifest JSON file.
        manifest: PathBuf,
    },
}

fn load_manifest(path: &Path) -> Result<ShaderManifest, CliError> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let manifest = ShaderManifest::from_json(&text)?;
    log::debug!(
        "loaded {} ({} shaders, {} programs)",
        path.display(),
        manifest.shaders.len(),
        manifest.programs.len()
    );
    Ok(manifest)
}

fn shader_names(manifest: &ShaderManifest, kind: ShaderKind) -> Vec<&str> {
    manifest
        .shaders
        .iter()
        .filter(|s| s.kind == kind)
        .map(|s| s.name.as_str())
        .collect()
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Check { manifest: path } => {
            let manifest = load_manifest(&path)?;
            let warnings = manifest.validate()?;
            for warning in &warnings {
                log::warn!("{warning}");
            }
            if cli.json {
                let info = serde_json::json!({
                    "manifest": path.display().to_string(),
                    "valid": true,
                    "warnings": warnings,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "{}: ok ({} shaders, {} programs, {} warnings)",
                    path.display(),
                    manifest.shaders.len(),
                    manifest.programs.len(),
                    warnings.len()
                );
            }
        }
        Command::List { manifest: path } => {
            let manifest = load_manifest(&path)?;
            let vertex = shader_names(&manifest, ShaderKind::Vertex);
            let fragment = shader_names(&manifest, ShaderKind::Fragment);
            if cli.json {
                let info = serde_json::json!({
                    "vertex": vertex,
                    "fragment": fragment,
                    "programs": manifest.programs,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Vertex shaders:");
                for name in vertex {
                    println!("  {name}");
                }
                println!("Fragment shaders:");
                for name in fragment {
                    println!("  {name}");
                }
                println!("Programs:");
                for p in &manifest.programs {
                    println!("  {} = {} + {}", p.name, p.vertex, p.fragment);
                }
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
