//! Block-tag compilation contract and tag registration surface.

use crate::context::RenderContext;
use crate::error::ParseError;

/// Options the host passes when instantiating a block tag.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Name of the template being compiled (if known).
    pub source_name: Option<String>,
    /// Line number of the opening tag (1-indexed).
    pub line: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_name: None,
            line: 1,
        }
    }
}

impl ParseOptions {
    /// Create options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source template name.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Set the line number of the opening tag.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

/// A block tag during its mutable compilation phase.
///
/// The host drives this trait while parsing the block body:
/// [`unknown_tag`](Self::unknown_tag) for each boundary construct it does not
/// handle itself, [`append_node`](Self::append_node) for each parsed content
/// node, and [`finish`](Self::finish) once the closing marker is reached.
///
/// Implementations are `Send` only (not `Sync`); each compiled template owns
/// its tag instances.
pub trait BlockTag<C: RenderContext>: Send {
    /// Report a boundary construct found inside the block body.
    ///
    /// Tags that recognize the construct consume it and return `Ok(())`.
    /// Anything else is delegated to host-default handling, which typically
    /// fails compilation with [`ParseError::UnknownTag`].
    fn unknown_tag(&mut self, tag: &str, markup: &str, line: usize) -> Result<(), ParseError>;

    /// Hand over a parsed content node.
    ///
    /// Nodes arrive in document order between boundary constructs.
    fn append_node(&mut self, node: C::Node);

    /// Consume the tag and freeze it into its immutable compiled form.
    fn finish(self: Box<Self>) -> Box<dyn CompiledTag<C>>;
}

/// A block tag after compilation: immutable, renderable any number of times.
pub trait CompiledTag<C: RenderContext>: Send {
    /// Render the tag to its output text.
    ///
    /// Pure with respect to the tag: repeated calls against an unchanged
    /// context produce identical output. The first failing content node
    /// aborts rendering and its error propagates unchanged.
    fn render(&self, ctx: &mut C) -> Result<String, C::Error>;

    /// Diagnostics collected during compilation.
    fn warnings(&self) -> &[String] {
        &[]
    }
}

/// Factory the host invokes to instantiate a registered block tag.
///
/// Arguments are the tag name, the raw markup of the opening tag, and the
/// parse options for the template being compiled.
pub type BlockTagFactory<C> =
    Box<dyn Fn(&str, &str, &ParseOptions) -> Box<dyn BlockTag<C>> + Send>;

/// Registry of named block-level constructs, implemented by the host.
///
/// # Example
///
/// ```
/// use tabset_host::{BlockTagFactory, RenderContext, TagRegistry};
///
/// struct Names(Vec<&'static str>);
///
/// impl<C: RenderContext> TagRegistry<C> for Names {
///     fn register_block(&mut self, name: &'static str, _factory: BlockTagFactory<C>) {
///         self.0.push(name);
///     }
/// }
/// ```
pub trait TagRegistry<C: RenderContext> {
    /// Register a block tag under a name.
    fn register_block(&mut self, name: &'static str, factory: BlockTagFactory<C>);
}

/// Host-default handling for boundary constructs a tag does not recognize.
///
/// Held by tags as a delegate; the host supplies whichever policy its
/// compilation pipeline uses.
pub trait UnknownTagHandler: Send {
    /// Handle an unrecognized boundary construct.
    fn on_unknown(&mut self, tag: &str, markup: &str, line: usize) -> Result<(), ParseError>;
}

/// Strict host default: any unrecognized construct fails compilation.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrictUnknownTags;

impl UnknownTagHandler for StrictUnknownTags {
    fn on_unknown(&mut self, tag: &str, _markup: &str, line: usize) -> Result<(), ParseError> {
        Err(ParseError::UnknownTag {
            tag: tag.to_owned(),
            line,
        })
    }
}
