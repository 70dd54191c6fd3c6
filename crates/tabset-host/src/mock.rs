//! In-memory evaluation context for testing.
//!
//! Provides [`MemoryContext`] (behind the `mock` feature flag) so plugin
//! crates can exercise the full compile-then-render flow without a real
//! engine.

use std::collections::HashMap;

use crate::context::RenderContext;

/// Template node understood by [`MemoryContext`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemoryNode {
    /// Literal text, rendered verbatim.
    Text(String),
    /// Variable reference, resolved against the scope stack.
    Var(String),
    /// Binds a variable in the innermost scope; renders to nothing.
    Assign {
        /// Variable name.
        name: String,
        /// Value to bind.
        value: String,
    },
}

impl MemoryNode {
    /// Create a literal text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a variable reference node.
    #[must_use]
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Create an assignment node.
    #[must_use]
    pub fn assign(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Assign {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Error from [`MemoryContext`] node rendering.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Variable reference with no binding in any scope.
    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),
}

/// In-memory context with a stack of string-variable scopes.
///
/// Variable lookup searches from the innermost scope outward; assignment
/// always binds in the innermost scope. The outermost scope is permanent and
/// never popped.
///
/// # Example
///
/// ```
/// use tabset_host::{MemoryContext, MemoryNode, RenderContext};
///
/// let mut ctx = MemoryContext::new().with_var("name", "world");
/// let nodes = [MemoryNode::text("hello "), MemoryNode::var("name")];
/// assert_eq!(ctx.render_nodes(&nodes).unwrap(), "hello world");
/// ```
#[derive(Debug)]
pub struct MemoryContext {
    scopes: Vec<HashMap<String, String>>,
}

impl Default for MemoryContext {
    fn default() -> Self {
        Self {
            scopes: vec![HashMap::new()],
        }
    }
}

impl MemoryContext {
    /// Create a context with a single empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a variable in the outermost scope.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.scopes[0].insert(name.into(), value.into());
        self
    }

    /// Bind a variable in the innermost scope.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.into(), value.into());
        }
    }

    /// Look up a variable, innermost scope first.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .map(String::as_str)
    }

    /// Current scope stack depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

impl RenderContext for MemoryContext {
    type Node = MemoryNode;
    type Error = EvalError;

    fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn pop_scope(&mut self) {
        // The outermost scope is permanent.
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    fn render_nodes(&mut self, nodes: &[MemoryNode]) -> Result<String, EvalError> {
        let mut out = String::new();
        for node in nodes {
            match node {
                MemoryNode::Text(text) => out.push_str(text),
                MemoryNode::Var(name) => {
                    let value = self
                        .get(name)
                        .ok_or_else(|| EvalError::UndefinedVariable(name.clone()))?;
                    out.push_str(value);
                }
                MemoryNode::Assign { name, value } => {
                    self.set(name.clone(), value.clone());
                }
            }
        }
        Ok(out)
    }
}
