//! Evaluation context and scoped variable acquisition.
//!
//! Tags never manipulate host scopes directly; they enter a nested scope
//! through [`ScopeGuard`] and render nodes through it.

/// Host evaluation context used while rendering a compiled tag.
///
/// The context owns a stack of variable scopes and knows how to render the
/// host's own template nodes to text. Both associated types are opaque to tag
/// implementations: nodes are collected during compilation and handed back
/// verbatim at render time, and render errors pass through tags unchanged.
///
/// # Example
///
/// ```
/// use tabset_host::RenderContext;
///
/// struct Literal;
///
/// impl RenderContext for Literal {
///     type Node = String;
///     type Error = std::convert::Infallible;
///
///     fn push_scope(&mut self) {}
///     fn pop_scope(&mut self) {}
///
///     fn render_nodes(&mut self, nodes: &[String]) -> Result<String, Self::Error> {
///         Ok(nodes.concat())
///     }
/// }
///
/// let mut ctx = Literal;
/// let out = ctx.render_nodes(&["a".to_owned(), "b".to_owned()]).unwrap();
/// assert_eq!(out, "ab");
/// ```
pub trait RenderContext {
    /// Host-owned template node type.
    type Node;
    /// Error raised when node rendering fails (e.g. an unresolved variable).
    type Error;

    /// Push a fresh variable scope onto the context.
    fn push_scope(&mut self);

    /// Pop the innermost variable scope.
    ///
    /// **Invariant**: only called after a matching [`push_scope`](Self::push_scope).
    fn pop_scope(&mut self);

    /// Render a sequence of nodes to text against the current scope stack.
    fn render_nodes(&mut self, nodes: &[Self::Node]) -> Result<String, Self::Error>;
}

/// RAII handle over one nested variable scope.
///
/// [`enter`](Self::enter) pushes a scope; dropping the guard pops it. Because
/// node rendering goes through the guard, any variable bound while it is
/// alive disappears when it drops, no matter how rendering exits.
///
/// # Example
///
/// ```
/// use tabset_host::{RenderContext, ScopeGuard};
///
/// struct Depth(usize);
///
/// impl RenderContext for Depth {
///     type Node = ();
///     type Error = std::convert::Infallible;
///     fn push_scope(&mut self) { self.0 += 1; }
///     fn pop_scope(&mut self) { self.0 -= 1; }
///     fn render_nodes(&mut self, _: &[()]) -> Result<String, Self::Error> {
///         Ok(String::new())
///     }
/// }
///
/// let mut ctx = Depth(0);
/// {
///     let mut guard = ScopeGuard::enter(&mut ctx);
///     let _ = guard.render_nodes(&[]);
/// }
/// assert_eq!(ctx.0, 0);
/// ```
pub struct ScopeGuard<'a, C: RenderContext + ?Sized> {
    ctx: &'a mut C,
}

impl<'a, C: RenderContext + ?Sized> ScopeGuard<'a, C> {
    /// Push a new scope and return a guard that pops it on drop.
    pub fn enter(ctx: &'a mut C) -> Self {
        ctx.push_scope();
        Self { ctx }
    }

    /// Enter a further nested scope for the lifetime of the returned guard.
    pub fn nested(&mut self) -> ScopeGuard<'_, C> {
        ScopeGuard::enter(self.ctx)
    }

    /// Render nodes against the guarded scope.
    pub fn render_nodes(&mut self, nodes: &[C::Node]) -> Result<String, C::Error> {
        self.ctx.render_nodes(nodes)
    }
}

impl<C: RenderContext + ?Sized> Drop for ScopeGuard<'_, C> {
    fn drop(&mut self) {
        self.ctx.pop_scope();
    }
}
