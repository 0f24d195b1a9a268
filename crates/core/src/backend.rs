//! The narrow slice of a GL context that shader management needs.
//!
//! [`GlBackend`] mirrors the handful of `glow::HasContext` calls used for
//! shader and program objects, with status queries folded into the compile
//! and link calls. With the `render` feature, `glow::Context` implements it
//! (see [`crate::render`]).

use crate::kind::ShaderKind;
use std::fmt::Debug;
use std::hash::Hash;

/// Driver strings that can be queried from a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextString {
    /// `GL_VERSION`.
    Version,
    /// `GL_SHADING_LANGUAGE_VERSION`.
    ShadingLanguageVersion,
}

/// A graphics context able to compile shaders and link programs.
///
/// Methods take `&self` because GL contexts are driven through shared
/// references; the context itself is not safe for concurrent use.
pub trait GlBackend {
    /// Native shader object handle.
    type Shader: Copy + Eq + Hash + Debug;
    /// Native program object handle.
    type Program: Copy + Eq + Hash + Debug;

    /// Allocates an empty shader object of the given kind.
    fn create_shader(&self, kind: ShaderKind) -> Result<Self::Shader, String>;

    /// Uploads `source`, compiles it, and returns the compile status.
    fn compile_shader(&self, shader: Self::Shader, source: &str) -> bool;

    fn shader_info_log(&self, shader: Self::Shader) -> String;

    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);

    /// Links the program and returns the link status.
    fn link_program(&self, program: Self::Program) -> bool;

    fn program_info_log(&self, program: Self::Program) -> String;

    fn delete_program(&self, program: Self::Program);

    /// Binds `program` for subsequent draw calls, or unbinds with `None`.
    fn use_program(&self, program: Option<Self::Program>);

    /// Clears the color buffer of the bound framebuffer to `rgba`.
    fn clear_color_buffer(&self, rgba: [f32; 4]);

    fn context_string(&self, which: ContextString) -> String;
}

/// A borrowed context drives the same calls, so a manager can be built over
/// `&glow::Context` while the caller keeps ownership of the context.
impl<T: GlBackend + ?Sized> GlBackend for &T {
    type Shader = T::Shader;
    type Program = T::Program;

    fn create_shader(&self, kind: ShaderKind) -> Result<Self::Shader, String> {
        (**self).create_shader(kind)
    }

    fn compile_shader(&self, shader: Self::Shader, source: &str) -> bool {
        (**self).compile_shader(shader, source)
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        (**self).shader_info_log(shader)
    }

    fn delete_shader(&self, shader: Self::Shader) {
        (**self).delete_shader(shader)
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        (**self).create_program()
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        (**self).attach_shader(program, shader)
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        (**self).detach_shader(program, shader)
    }

    fn link_program(&self, program: Self::Program) -> bool {
        (**self).link_program(program)
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        (**self).program_info_log(program)
    }

    fn delete_program(&self, program: Self::Program) {
        (**self).delete_program(program)
    }

    fn use_program(&self, program: Option<Self::Program>) {
        (**self).use_program(program)
    }

    fn clear_color_buffer(&self, rgba: [f32; 4]) {
        (**self).clear_color_buffer(rgba)
    }

    fn context_string(&self, which: ContextString) -> String {
        (**self).context_string(which)
    }
}
