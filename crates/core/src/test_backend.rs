//! In-memory [`GlBackend`] for unit tests.
//!
//! Compilation succeeds when the source has a `main` and no `#error`
//! directive. Linking needs one compiled vertex and one compiled fragment
//! shader, and every fragment `in` must be declared `out` by the vertex
//! shader. Logs imitate the Mesa `ERROR: 0:<line>:` shape.

use crate::backend::{ContextString, GlBackend};
use crate::kind::ShaderKind;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

pub const VERTEX_SOURCE: &str = "#version 300 es
in vec2 a_position;
out vec2 v_uv;
void main() {
    v_uv = a_position * 0.5 + 0.5;
    gl_Position = vec4(a_position, 0.0, 1.0);
}
";

pub const FRAGMENT_SOURCE: &str = "#version 300 es
precision mediump float;
in vec2 v_uv;
out vec4 color;
void main() {
    color = vec4(v_uv, 0.0, 1.0);
}
";

pub const MISMATCHED_FRAGMENT_SOURCE: &str = "#version 300 es
precision mediump float;
in vec3 v_normal;
out vec4 color;
void main() {
    color = vec4(v_normal, 1.0);
}
";

pub const BAD_SOURCE: &str = "#version 300 es
#error deliberately broken
void main() {}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeShader(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeProgram(u32);

struct ShaderObject {
    kind: ShaderKind,
    source: String,
    compiled: bool,
    log: String,
}

#[derive(Default)]
struct State {
    next_id: u32,
    shaders: HashMap<FakeShader, ShaderObject>,
    deleted_shaders: HashSet<FakeShader>,
    programs: HashMap<FakeProgram, (Vec<FakeShader>, String)>,
    link_calls: usize,
    program_deletes: usize,
    bound: Option<FakeProgram>,
    last_clear: Option<[f32; 4]>,
}

impl State {
    fn next(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Records every call and keeps object lifetimes so tests can check leaks.
#[derive(Default)]
pub struct RecordingGl {
    state: RefCell<State>,
    fail_create: Cell<bool>,
}

impl RecordingGl {
    /// Makes the next `create_shader`/`create_program` call fail.
    pub fn fail_next_create(&self) {
        self.fail_create.set(true);
    }

    pub fn live_shaders(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().programs.len()
    }

    pub fn was_deleted(&self, shader: FakeShader) -> bool {
        self.state.borrow().deleted_shaders.contains(&shader)
    }

    pub fn attachments(&self, program: FakeProgram) -> usize {
        self.state
            .borrow()
            .programs
            .get(&program)
            .map_or(0, |(attached, _)| attached.len())
    }

    pub fn link_calls(&self) -> usize {
        self.state.borrow().link_calls
    }

    pub fn program_deletes(&self) -> usize {
        self.state.borrow().program_deletes
    }

    pub fn bound_program(&self) -> Option<FakeProgram> {
        self.state.borrow().bound
    }

    pub fn last_clear(&self) -> Option<[f32; 4]> {
        self.state.borrow().last_clear
    }

    fn take_failure(&self) -> Result<(), String> {
        if self.fail_create.replace(false) {
            Err("context lost".to_string())
        } else {
            Ok(())
        }
    }
}

fn declared(source: &str, qualifier: &str) -> HashSet<String> {
    source
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix(qualifier)?.strip_suffix(';'))
        .filter_map(|decl| decl.split_whitespace().last())
        .map(String::from)
        .collect()
}

fn link_log(vertex: &ShaderObject, fragment: &ShaderObject) -> String {
    let outputs = declared(&vertex.source, "out ");
    let mut missing: Vec<String> = declared(&fragment.source, "in ")
        .into_iter()
        .filter(|input| !outputs.contains(input))
        .collect();
    missing.sort();
    missing
        .iter()
        .map(|name| {
            format!("ERROR: Input of fragment shader '{name}' not written by vertex shader")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl GlBackend for RecordingGl {
    type Shader = FakeShader;
    type Program = FakeProgram;

    fn create_shader(&self, kind: ShaderKind) -> Result<FakeShader, String> {
        self.take_failure()?;
        let mut state = self.state.borrow_mut();
        let shader = FakeShader(state.next());
        state.shaders.insert(
            shader,
            ShaderObject {
                kind,
                source: String::new(),
                compiled: false,
                log: String::new(),
            },
        );
        Ok(shader)
    }

    fn compile_shader(&self, shader: FakeShader, source: &str) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(object) = state.shaders.get_mut(&shader) else {
            return false;
        };
        object.source = source.to_string();
        object.log = match source.lines().position(|l| l.trim_start().starts_with("#error")) {
            Some(i) => format!("ERROR: 0:{}: '#error' : deliberately broken", i + 1),
            None if !source.contains("void main") => {
                "ERROR: 0:1: 'main' : function not defined".to_string()
            }
            None => String::new(),
        };
        object.compiled = object.log.is_empty();
        object.compiled
    }

    fn shader_info_log(&self, shader: FakeShader) -> String {
        self.state
            .borrow()
            .shaders
            .get(&shader)
            .map(|s| s.log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: FakeShader) {
        let mut state = self.state.borrow_mut();
        if state.shaders.remove(&shader).is_some() {
            state.deleted_shaders.insert(shader);
        }
    }

    fn create_program(&self) -> Result<FakeProgram, String> {
        self.take_failure()?;
        let mut state = self.state.borrow_mut();
        let program = FakeProgram(state.next());
        state.programs.insert(program, (Vec::new(), String::new()));
        Ok(program)
    }

    fn attach_shader(&self, program: FakeProgram, shader: FakeShader) {
        if let Some((attached, _)) = self.state.borrow_mut().programs.get_mut(&program) {
            attached.push(shader);
        }
    }

    fn detach_shader(&self, program: FakeProgram, shader: FakeShader) {
        if let Some((attached, _)) = self.state.borrow_mut().programs.get_mut(&program) {
            attached.retain(|s| *s != shader);
        }
    }

    fn link_program(&self, program: FakeProgram) -> bool {
        let mut state = self.state.borrow_mut();
        state.link_calls += 1;
        let Some((attached, _)) = state.programs.get(&program) else {
            return false;
        };

        let pick = |kind: ShaderKind| {
            attached
                .iter()
                .filter_map(|s| state.shaders.get(s))
                .find(|obj| obj.kind == kind && obj.compiled)
        };
        let log = match (pick(ShaderKind::Vertex), pick(ShaderKind::Fragment)) {
            (Some(v), Some(f)) => link_log(v, f),
            (None, _) => "ERROR: program has no compiled vertex shader attached".to_string(),
            (_, None) => "ERROR: program has no compiled fragment shader attached".to_string(),
        };

        let linked = log.is_empty();
        if let Some((_, stored)) = state.programs.get_mut(&program) {
            *stored = log;
        }
        linked
    }

    fn program_info_log(&self, program: FakeProgram) -> String {
        self.state
            .borrow()
            .programs
            .get(&program)
            .map(|(_, log)| log.clone())
            .unwrap_or_default()
    }

    fn delete_program(&self, program: FakeProgram) {
        let mut state = self.state.borrow_mut();
        state.program_deletes += 1;
        state.programs.remove(&program);
    }

    fn use_program(&self, program: Option<FakeProgram>) {
        self.state.borrow_mut().bound = program;
    }

    fn clear_color_buffer(&self, rgba: [f32; 4]) {
        self.state.borrow_mut().last_clear = Some(rgba);
    }

    fn context_string(&self, which: ContextString) -> String {
        match which {
            ContextString::Version => "OpenGL ES 3.0 (recording)".to_string(),
            ContextString::ShadingLanguageVersion => "OpenGL ES GLSL ES 3.00".to_string(),
        }
    }
}
