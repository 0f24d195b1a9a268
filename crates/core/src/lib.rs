#![deny(unsafe_code)]
//! Shader registry and program builder over a single GL context.
//!
//! A [`ContextManager`] compiles vertex and fragment sources as they are
//! registered and keeps the results by `(kind, name)`; compile failures are
//! collected as [`ShaderError`] values instead of being raised. A
//! [`ProgramBuilder`] attaches registered shaders by name and links them.
//! [`ShaderManifest`] loads a whole set of shaders and programs from JSON.
//!
//! All native calls go through the [`GlBackend`] trait. With the `render`
//! feature, `glow::Context` implements it.

pub mod backend;
pub mod builder;
pub mod diagnostics;
pub mod error;
pub mod kind;
pub mod manager;
pub mod manifest;

#[cfg(feature = "render")]
pub mod render;

#[cfg(test)]
mod test_backend;

pub use backend::{ContextString, GlBackend};
pub use builder::ProgramBuilder;
pub use diagnostics::format_shader_error;
pub use error::{ManifestError, ShaderError};
pub use kind::{ShaderKey, ShaderKind};
pub use manager::{ContextManager, CLEAR_COLOR};
pub use manifest::{ProgramEntry, ProgramSet, ShaderEntry, ShaderManifest};
