//! Error types for shaderkit.
//!
//! Compile and link failures are values, not control flow: the manager
//! collects [`ShaderError::Compile`] entries in an append-only list, and
//! [`ProgramBuilder::build`](crate::ProgramBuilder::build) hands back
//! [`ShaderError::Link`] in its `Err` arm.

use crate::kind::ShaderKind;
use thiserror::Error;

/// A diagnostic produced while compiling a shader or linking a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShaderError {
    /// A shader stage failed to compile.
    #[error("error compiling {kind} shader '{name}':\n{log}")]
    Compile {
        /// Which namespace the shader was registered under.
        kind: ShaderKind,
        /// The name the caller registered the source under.
        name: String,
        /// The driver's info log.
        log: String,
    },

    /// A program failed to link.
    #[error("program link error:\n{log}")]
    Link {
        /// The driver's program info log.
        log: String,
    },

    /// The driver refused to allocate a shader or program object.
    #[error("failed to create {object}: {reason}")]
    Create {
        /// What was being created (e.g. "vertex shader", "program").
        object: String,
        /// The reason reported by the driver.
        reason: String,
    },
}

impl ShaderError {
    /// Human-readable one-line summary, without the driver log.
    pub fn message(&self) -> String {
        match self {
            ShaderError::Compile { kind, name, .. } => {
                format!("error compiling {kind} shader '{name}'")
            }
            ShaderError::Link { .. } => "program link error".to_string(),
            ShaderError::Create { object, .. } => format!("failed to create {object}"),
        }
    }

    /// Raw diagnostic text as reported by the compiler, linker, or driver.
    pub fn log(&self) -> &str {
        match self {
            ShaderError::Compile { log, .. } | ShaderError::Link { log } => log,
            ShaderError::Create { reason, .. } => reason,
        }
    }
}

/// Errors produced while parsing or validating a [`ShaderManifest`](crate::ShaderManifest).
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest was not valid JSON or did not match the expected shape.
    #[error("invalid manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// A program referenced a shader that the manifest does not declare.
    #[error("program '{program}' references undeclared {kind} shader '{shader}'")]
    MissingShader {
        program: String,
        kind: ShaderKind,
        shader: String,
    },

    /// Two programs share the same name.
    #[error("duplicate program name: {0}")]
    DuplicateProgram(String),
}
