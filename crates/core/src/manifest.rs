//! JSON manifests describing a set of shaders and the programs built from them.
//!
//! ```json
//! {
//!   "shaders": [
//!     { "name": "quad", "kind": "vertex", "source": "#version 300 es\n..." },
//!     { "name": "flat", "kind": "fragment", "source": "#version 300 es\n..." }
//!   ],
//!   "programs": [
//!     { "name": "basic", "vertex": "quad", "fragment": "flat" }
//!   ]
//! }
//! ```

use crate::backend::GlBackend;
use crate::error::{ManifestError, ShaderError};
use crate::kind::{ShaderKey, ShaderKind};
use crate::manager::ContextManager;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One shader source to register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderEntry {
    pub name: String,
    pub kind: ShaderKind,
    pub source: String,
}

/// One program to link from previously registered shaders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramEntry {
    pub name: String,
    pub vertex: String,
    pub fragment: String,
}

/// A set of shaders and programs loaded together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShaderManifest {
    #[serde(default)]
    pub shaders: Vec<ShaderEntry>,
    #[serde(default)]
    pub programs: Vec<ProgramEntry>,
}

/// Outcome of linking every program in a manifest, keyed by program name.
pub type ProgramSet<P> = BTreeMap<String, Result<P, ShaderError>>;

impl ShaderManifest {
    /// Parses a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] if the text is not a valid manifest.
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the manifest as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the manifest is internally consistent.
    ///
    /// Every program must reference shaders the manifest declares, with the
    /// right kind, and program names must be unique. Shader names that
    /// repeat within a kind are allowed (later entries replace earlier ones
    /// when loaded) and are returned as warnings.
    ///
    /// # Errors
    ///
    /// Returns the first [`ManifestError`] found.
    pub fn validate(&self) -> Result<Vec<String>, ManifestError> {
        let mut declared = HashSet::new();
        let mut warnings = Vec::new();
        for entry in &self.shaders {
            let key = ShaderKey::new(entry.kind, entry.name.as_str());
            if !declared.insert(key) {
                warnings.push(format!(
                    "{} shader '{}' is declared more than once; the last one wins",
                    entry.kind, entry.name
                ));
            }
        }

        let mut programs = HashSet::new();
        for program in &self.programs {
            if !programs.insert(program.name.as_str()) {
                return Err(ManifestError::DuplicateProgram(program.name.clone()));
            }
            for (kind, shader) in [
                (ShaderKind::Vertex, &program.vertex),
                (ShaderKind::Fragment, &program.fragment),
            ] {
                if !declared.contains(&ShaderKey::new(kind, shader.as_str())) {
                    return Err(ManifestError::MissingShader {
                        program: program.name.clone(),
                        kind,
                        shader: shader.clone(),
                    });
                }
            }
        }

        Ok(warnings)
    }

    /// Registers every shader with `manager`, then builds every program.
    ///
    /// Compile failures land in the manager's error list as usual. A
    /// program whose shaders failed to compile, or that names a shader the
    /// manifest never declares, still goes through the link step and reports
    /// the driver's link error. When program names repeat, only the first
    /// entry is linked.
    pub fn load_into<B: GlBackend>(
        &self,
        manager: &mut ContextManager<B>,
    ) -> ProgramSet<B::Program> {
        for entry in &self.shaders {
            manager.add_shader(entry.kind, &entry.name, &entry.source);
        }

        let mut built = ProgramSet::new();
        for program in &self.programs {
            if built.contains_key(&program.name) {
                log::warn!(
                    "program '{}' is declared more than once; keeping the first",
                    program.name
                );
                continue;
            }
            let result = manager.builder().and_then(|builder| {
                builder
                    .attach_vertex(&program.vertex)
                    .attach_fragment(&program.fragment)
                    .build()
            });
            if let Err(err) = &result {
                log::warn!("program '{}': {err}", program.name);
            }
            built.insert(program.name.clone(), result);
        }
        built
    }
}
