//! Program assembly from named shaders.

use crate::backend::GlBackend;
use crate::error::ShaderError;
use crate::kind::ShaderKind;
use crate::manager::ContextManager;

/// Collects shader attachments for one program object and links it.
///
/// Created by [`ContextManager::builder`]. [`build`](Self::build) consumes
/// the builder, so a program is linked at most once. A builder dropped
/// without building releases its program object.
pub struct ProgramBuilder<'a, B: GlBackend> {
    manager: &'a ContextManager<B>,
    program: B::Program,
    attached: Vec<B::Shader>,
    // Set by `build`; ownership of `program` has moved to the caller or the
    // program was deleted on link failure.
    released: bool,
}

impl<'a, B: GlBackend> ProgramBuilder<'a, B> {
    pub(crate) fn new(manager: &'a ContextManager<B>) -> Result<Self, ShaderError> {
        let program = manager
            .backend()
            .create_program()
            .map_err(|reason| ShaderError::Create {
                object: "program".to_string(),
                reason,
            })?;
        Ok(Self {
            manager,
            program,
            attached: Vec::new(),
            released: false,
        })
    }

    /// Attaches the vertex shader registered as `name`, if there is one.
    pub fn attach_vertex(self, name: &str) -> Self {
        self.attach(ShaderKind::Vertex, name)
    }

    /// Attaches the fragment shader registered as `name`, if there is one.
    pub fn attach_fragment(self, name: &str) -> Self {
        self.attach(ShaderKind::Fragment, name)
    }

    /// Attaches a shader by kind and name. Unknown names are skipped.
    pub fn attach(mut self, kind: ShaderKind, name: &str) -> Self {
        let Some(shader) = self.manager.shader(kind, name) else {
            log::debug!("no {kind} shader named '{name}', skipping attachment");
            return self;
        };
        if !self.attached.contains(&shader) {
            self.manager.backend().attach_shader(self.program, shader);
            self.attached.push(shader);
        }
        self
    }

    /// Number of distinct shaders attached so far.
    pub fn attached(&self) -> usize {
        self.attached.len()
    }

    /// Links the program.
    ///
    /// The link step always runs, even with nothing attached; the driver
    /// decides whether that is valid. Attached shaders are detached
    /// afterwards either way.
    ///
    /// # Errors
    ///
    /// Returns [`ShaderError::Link`] with the driver's info log if linking
    /// fails. The program object is released in that case.
    pub fn build(mut self) -> Result<B::Program, ShaderError> {
        let gl = self.manager.backend();
        let program = self.program;
        self.released = true;

        let linked = gl.link_program(program);
        for shader in self.attached.drain(..) {
            gl.detach_shader(program, shader);
        }

        if linked {
            Ok(program)
        } else {
            let log = gl.program_info_log(program);
            gl.delete_program(program);
            Err(ShaderError::Link { log })
        }
    }
}

impl<B: GlBackend> Drop for ProgramBuilder<'_, B> {
    fn drop(&mut self) {
        if !self.released {
            self.manager.backend().delete_program(self.program);
        }
    }
}
