//! `glow::Context` as a [`GlBackend`].
//!
//! Every call here is a thin wrapper around the corresponding `glow`
//! function. `glow` marks raw GL calls unsafe; the handles passed in were
//! all produced by the same context.

use crate::backend::{ContextString, GlBackend};
use crate::kind::ShaderKind;
use crate::manager::ContextManager;
use glow::HasContext;

/// A [`ContextManager`] driving a `glow` context.
pub type GlContextManager = ContextManager<glow::Context>;

/// Returns the GL shader type enum for a [`ShaderKind`].
pub fn gl_shader_type(kind: ShaderKind) -> u32 {
    match kind {
        ShaderKind::Vertex => glow::VERTEX_SHADER,
        ShaderKind::Fragment => glow::FRAGMENT_SHADER,
    }
}

#[allow(unsafe_code)]
impl GlBackend for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;

    fn create_shader(&self, kind: ShaderKind) -> Result<glow::Shader, String> {
        // SAFETY: gl_shader_type only yields valid shader type constants.
        unsafe { HasContext::create_shader(self, gl_shader_type(kind)) }
    }

    fn compile_shader(&self, shader: glow::Shader, source: &str) -> bool {
        // SAFETY: shader is a live handle from create_shader on this context.
        unsafe {
            self.shader_source(shader, source);
            HasContext::compile_shader(self, shader);
            self.get_shader_compile_status(shader)
        }
    }

    fn shader_info_log(&self, shader: glow::Shader) -> String {
        // SAFETY: shader is a live handle from this context.
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: glow::Shader) {
        // SAFETY: the caller gives up the handle; it is not used afterwards.
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<glow::Program, String> {
        // SAFETY: no arguments; failure is reported through the Result.
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: glow::Program, shader: glow::Shader) {
        // SAFETY: both handles are live objects of this context.
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: glow::Program, shader: glow::Shader) {
        // SAFETY: shader was attached to program by attach_shader.
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: glow::Program) -> bool {
        // SAFETY: program is a live handle from create_program.
        unsafe {
            HasContext::link_program(self, program);
            self.get_program_link_status(program)
        }
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        // SAFETY: program is a live handle from this context.
        unsafe { self.get_program_info_log(program) }
    }

    fn delete_program(&self, program: glow::Program) {
        // SAFETY: the caller gives up the handle; it is not used afterwards.
        unsafe { HasContext::delete_program(self, program) }
    }

    fn use_program(&self, program: Option<glow::Program>) {
        // SAFETY: program is None or a successfully linked program.
        unsafe { HasContext::use_program(self, program) }
    }

    fn clear_color_buffer(&self, [r, g, b, a]: [f32; 4]) {
        // SAFETY: plain state setting and a clear of the bound framebuffer.
        unsafe {
            self.clear_color(r, g, b, a);
            self.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    fn context_string(&self, which: ContextString) -> String {
        let parameter = match which {
            ContextString::Version => glow::VERSION,
            ContextString::ShadingLanguageVersion => glow::SHADING_LANGUAGE_VERSION,
        };
        // SAFETY: both parameters are valid string queries on every context.
        unsafe { self.get_parameter_string(parameter) }
    }
}
