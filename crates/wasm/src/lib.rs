#![deny(unsafe_code)]
//! WASM bindings for shaderkit.
//!
//! [`ShaderStudio`] wraps a `ContextManager` driving the WebGL2 context of
//! an HTML canvas. Programs are handed to JavaScript as integer ids because
//! `glow` program handles cannot cross the wasm boundary.

use shaderkit_core::ShaderError;
use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
mod studio;

#[cfg(target_arch = "wasm32")]
pub use studio::ShaderStudio;

/// Renders recorded errors as `message\nlog` strings for display in JS.
pub fn describe_errors(errors: &[ShaderError]) -> Vec<String> {
    errors
        .iter()
        .map(|e| match e.log().trim() {
            "" => e.message(),
            log => format!("{}\n{log}", e.message()),
        })
        .collect()
}

/// Live programs handed out to JavaScript, keyed by integer id.
///
/// Ids are never reused, so a stale id from a deleted program cannot alias
/// a newer one. Only live entries are stored.
pub struct ProgramTable<P> {
    next_id: u32,
    programs: HashMap<u32, P>,
}

impl<P: Copy> ProgramTable<P> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            programs: HashMap::new(),
        }
    }

    /// Stores `program` and returns its id.
    pub fn insert(&mut self, program: P) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.programs.insert(id, program);
        id
    }

    pub fn get(&self, id: u32) -> Option<P> {
        self.programs.get(&id).copied()
    }

    pub fn remove(&mut self, id: u32) -> Option<P> {
        self.programs.remove(&id)
    }

    /// Number of live programs.
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl<P: Copy> Default for ProgramTable<P> {
    fn default() -> Self {
        Self::new()
    }
}
