//! Shader registry scoped to a single graphics context.
//!
//! [`ContextManager`] compiles sources as they are registered, keeps the
//! successful shader objects keyed by `(kind, name)`, and queues failures
//! as [`ShaderError`] values that callers poll afterwards.

use crate::backend::{ContextString, GlBackend};
use crate::builder::ProgramBuilder;
use crate::diagnostics::format_shader_error;
use crate::error::ShaderError;
use crate::kind::{ShaderKey, ShaderKind};
use std::collections::HashMap;

/// Opaque mid gray used by [`ContextManager::paint`].
pub const CLEAR_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Owns the compiled shaders and accumulated diagnostics of one context.
///
/// Dropping the manager releases every stored shader. To keep using the
/// context afterwards, build the manager over a borrowed context
/// (`ContextManager::new(&gl)`); `&B` is a [`GlBackend`] too.
pub struct ContextManager<B: GlBackend> {
    backend: B,
    shaders: HashMap<ShaderKey, B::Shader>,
    errors: Vec<ShaderError>,
}

impl<B: GlBackend> ContextManager<B> {
    /// Wraps a context with an empty registry.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            shaders: HashMap::new(),
            errors: Vec::new(),
        }
    }

    /// Returns a reference to the underlying context.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Driver `GL_VERSION` string.
    pub fn version(&self) -> String {
        self.backend.context_string(ContextString::Version)
    }

    /// Driver `GL_SHADING_LANGUAGE_VERSION` string.
    pub fn shading_language_version(&self) -> String {
        self.backend.context_string(ContextString::ShadingLanguageVersion)
    }

    /// Compiles `source` as a vertex shader and stores it under `name`.
    ///
    /// Failures are recorded in the error list, never returned.
    pub fn add_vertex_shader(&mut self, name: &str, source: &str) {
        self.add_shader(ShaderKind::Vertex, name, source);
    }

    /// Compiles `source` as a fragment shader and stores it under `name`.
    ///
    /// Failures are recorded in the error list, never returned.
    pub fn add_fragment_shader(&mut self, name: &str, source: &str) {
        self.add_shader(ShaderKind::Fragment, name, source);
    }

    /// Compiles and stores a shader of the given kind.
    ///
    /// Re-registering an existing `(kind, name)` releases the previous shader
    /// object before storing the new one. A failed compile leaves any
    /// previous entry in place.
    pub fn add_shader(&mut self, kind: ShaderKind, name: &str, source: &str) {
        match self.compile(kind, name, source) {
            Ok(shader) => {
                let key = ShaderKey::new(kind, name);
                if let Some(previous) = self.shaders.insert(key, shader) {
                    log::debug!("replacing {kind} shader '{name}', releasing {previous:?}");
                    self.backend.delete_shader(previous);
                }
            }
            Err(err) => {
                log::warn!(
                    "{}\n{}",
                    err.message(),
                    format_shader_error(source, err.log())
                );
                self.errors.push(err);
            }
        }
    }

    fn compile(
        &self,
        kind: ShaderKind,
        name: &str,
        source: &str,
    ) -> Result<B::Shader, ShaderError> {
        let shader = self
            .backend
            .create_shader(kind)
            .map_err(|reason| ShaderError::Create {
                object: format!("{kind} shader '{name}'"),
                reason,
            })?;

        if self.backend.compile_shader(shader, source) {
            return Ok(shader);
        }

        let log = self.backend.shader_info_log(shader);
        self.backend.delete_shader(shader);
        Err(ShaderError::Compile {
            kind,
            name: name.to_string(),
            log,
        })
    }

    /// Looks up a compiled vertex shader by name.
    pub fn vertex_shader(&self, name: &str) -> Option<B::Shader> {
        self.shader(ShaderKind::Vertex, name)
    }

    /// Looks up a compiled fragment shader by name.
    pub fn fragment_shader(&self, name: &str) -> Option<B::Shader> {
        self.shader(ShaderKind::Fragment, name)
    }

    /// Looks up a compiled shader by kind and name.
    pub fn shader(&self, kind: ShaderKind, name: &str) -> Option<B::Shader> {
        self.shaders.get(&ShaderKey::new(kind, name)).copied()
    }

    /// Number of compiled shaders currently stored, across both kinds.
    pub fn shader_count(&self) -> usize {
        self.shaders.len()
    }

    /// True iff at least one registration failed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All recorded errors, oldest first.
    pub fn errors(&self) -> &[ShaderError] {
        &self.errors
    }

    /// Calls `visitor` once per recorded error, oldest first.
    pub fn for_each_error<F>(&self, visitor: F)
    where
        F: FnMut(&ShaderError),
    {
        self.errors.iter().for_each(visitor);
    }

    /// Releases every stored shader and empties both namespaces.
    ///
    /// The error list is kept.
    pub fn clear_shaders(&mut self) {
        for (key, shader) in self.shaders.drain() {
            log::debug!("releasing {key}");
            self.backend.delete_shader(shader);
        }
    }

    /// Clears the current framebuffer to [`CLEAR_COLOR`].
    pub fn paint(&self) {
        self.backend.clear_color_buffer(CLEAR_COLOR);
    }

    /// Binds `program` for subsequent draw calls.
    pub fn use_program(&self, program: B::Program) {
        self.backend.use_program(Some(program));
    }

    /// Releases a program returned by [`ProgramBuilder::build`].
    pub fn delete_program(&self, program: B::Program) {
        self.backend.delete_program(program);
    }

    /// Starts a new program on this context.
    ///
    /// # Errors
    ///
    /// Returns [`ShaderError::Create`] if the driver cannot allocate a program object.
    pub fn builder(&self) -> Result<ProgramBuilder<'_, B>, ShaderError> {
        ProgramBuilder::new(self)
    }
}

impl<B: GlBackend> Drop for ContextManager<B> {
    fn drop(&mut self) {
        self.clear_shaders();
    }
}
