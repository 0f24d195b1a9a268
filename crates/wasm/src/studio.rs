//! JavaScript-facing wrapper around a WebGL2 `ContextManager`.

use crate::{describe_errors, ProgramTable};
use shaderkit_core::render::GlContextManager;
use shaderkit_core::ContextManager;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

/// Shader registry bound to one canvas.
#[wasm_bindgen]
pub struct ShaderStudio {
    manager: GlContextManager,
    programs: ProgramTable<glow::Program>,
}

#[wasm_bindgen]
impl ShaderStudio {
    /// Acquires the canvas's WebGL2 context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<ShaderStudio, JsError> {
        let context = canvas
            .get_context("webgl2")
            .map_err(|_| JsError::new("failed to query webgl2 context"))?
            .ok_or_else(|| JsError::new("webgl2 is not supported by this canvas"))?
            .dyn_into::<WebGl2RenderingContext>()
            .map_err(|_| JsError::new("context is not a WebGl2RenderingContext"))?;
        let gl = glow::Context::from_webgl2_context(context);
        Ok(Self {
            manager: ContextManager::new(gl),
            programs: ProgramTable::new(),
        })
    }

    pub fn version(&self) -> String {
        self.manager.version()
    }

    #[wasm_bindgen(js_name = shadingLanguageVersion)]
    pub fn shading_language_version(&self) -> String {
        self.manager.shading_language_version()
    }

    #[wasm_bindgen(js_name = addVertexShader)]
    pub fn add_vertex_shader(&mut self, name: &str, source: &str) {
        self.manager.add_vertex_shader(name, source);
    }

    #[wasm_bindgen(js_name = addFragmentShader)]
    pub fn add_fragment_shader(&mut self, name: &str, source: &str) {
        self.manager.add_fragment_shader(name, source);
    }

    #[wasm_bindgen(js_name = hasErrors)]
    pub fn has_errors(&self) -> bool {
        self.manager.has_errors()
    }

    /// Recorded compile errors, oldest first.
    pub fn errors(&self) -> Vec<String> {
        describe_errors(self.manager.errors())
    }

    #[wasm_bindgen(js_name = clearShaders)]
    pub fn clear_shaders(&mut self) {
        self.manager.clear_shaders();
    }

    /// Links the named vertex and fragment shaders and returns a program id.
    #[wasm_bindgen(js_name = buildProgram)]
    pub fn build_program(&mut self, vertex: &str, fragment: &str) -> Result<u32, JsError> {
        let program = self
            .manager
            .builder()
            .and_then(|b| b.attach_vertex(vertex).attach_fragment(fragment).build())
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(self.programs.insert(program))
    }

    #[wasm_bindgen(js_name = useProgram)]
    pub fn use_program(&self, id: u32) -> Result<(), JsError> {
        let program = self.program(id)?;
        self.manager.use_program(program);
        Ok(())
    }

    #[wasm_bindgen(js_name = deleteProgram)]
    pub fn delete_program(&mut self, id: u32) -> Result<(), JsError> {
        let program = self
            .programs
            .remove(id)
            .ok_or_else(|| unknown_program(id))?;
        self.manager.delete_program(program);
        Ok(())
    }

    pub fn paint(&self) {
        self.manager.paint();
    }
}

impl ShaderStudio {
    fn program(&self, id: u32) -> Result<glow::Program, JsError> {
        self.programs.get(id).ok_or_else(|| unknown_program(id))
    }
}

fn unknown_program(id: u32) -> JsError {
    JsError::new(&format!("unknown program id {id}"))
}
