//! `glow` integration.
//!
//! This module is only available when the `render` feature is enabled.
//! It implements [`GlBackend`](crate::GlBackend) for `glow::Context`, so a
//! [`ContextManager`](crate::ContextManager) can drive a native OpenGL
//! context or a browser WebGL2 context.

pub mod context;

pub use context::{gl_shader_type, GlContextManager};
