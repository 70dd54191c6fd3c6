//! The `tabs` block tag and its compiled form.

use tabset_host::{
    BlockTag, CompiledTag, ParseError, RenderContext, StrictUnknownTags, TagRegistry,
    UnknownTagHandler,
};

use crate::group::{TabGroup, TabGroupBuilder};

/// Name of the enclosing block tag.
pub const TABS_TAG: &str = "tabs";

/// Name of the sub-section boundary tag.
pub const TAB_TAG: &str = "tab";

/// Block tag that collects `tab` sub-sections during compilation.
///
/// Each `tab <label>` boundary starts a new section; the label is the raw
/// markup text of the boundary tag. Any other boundary construct goes to the
/// unknown-tag handler, which defaults to [`StrictUnknownTags`] (compilation
/// fails).
pub struct TabsTag<C: RenderContext> {
    builder: TabGroupBuilder<C::Node>,
    unknown: Box<dyn UnknownTagHandler>,
}

impl<C: RenderContext> TabsTag<C> {
    /// Create a tag with the strict host-default unknown-tag handling.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: TabGroupBuilder::new(),
            unknown: Box::new(StrictUnknownTags),
        }
    }

    /// Replace the handling for unrecognized boundary tags.
    #[must_use]
    pub fn with_unknown_handler(mut self, handler: impl UnknownTagHandler + 'static) -> Self {
        self.unknown = Box::new(handler);
        self
    }
}

impl<C: RenderContext> Default for TabsTag<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> BlockTag<C> for TabsTag<C>
where
    C: RenderContext + 'static,
    C::Node: Send,
{
    fn unknown_tag(&mut self, tag: &str, markup: &str, line: usize) -> Result<(), ParseError> {
        if tag == TAB_TAG {
            self.builder.begin_section(markup);
            Ok(())
        } else {
            self.unknown.on_unknown(tag, markup, line)
        }
    }

    fn append_node(&mut self, node: C::Node) {
        self.builder.push_node(node);
    }

    fn finish(self: Box<Self>) -> Box<dyn CompiledTag<C>> {
        let mut warnings = Vec::new();
        let discarded = self.builder.discarded_nodes();
        if discarded > 0 {
            tracing::warn!(discarded, "content before the first tab was discarded");
            warnings.push(format!(
                "{discarded} node(s) before the first tab were discarded"
            ));
        }
        Box::new(CompiledTabs {
            group: self.builder.finish(),
            warnings,
        })
    }
}

/// Compiled, immutable form of [`TabsTag`].
pub struct CompiledTabs<C: RenderContext> {
    group: TabGroup<C::Node>,
    warnings: Vec<String>,
}

impl<C: RenderContext> CompiledTabs<C> {
    /// The frozen tab group.
    #[must_use]
    pub fn group(&self) -> &TabGroup<C::Node> {
        &self.group
    }
}

impl<C> CompiledTag<C> for CompiledTabs<C>
where
    C: RenderContext,
    C::Node: Send,
{
    fn render(&self, ctx: &mut C) -> Result<String, C::Error> {
        self.group.render(ctx)
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Register the `tabs` block tag with a host registry.
///
/// # Example
///
/// ```
/// use tabset_host::{BlockTagFactory, MemoryContext, TagRegistry};
///
/// struct Registered(Vec<&'static str>);
///
/// impl TagRegistry<MemoryContext> for Registered {
///     fn register_block(&mut self, name: &'static str, _: BlockTagFactory<MemoryContext>) {
///         self.0.push(name);
///     }
/// }
///
/// let mut registry = Registered(Vec::new());
/// tabset_tag::register(&mut registry);
/// assert_eq!(registry.0, vec!["tabs"]);
/// ```
pub fn register<C>(registry: &mut dyn TagRegistry<C>)
where
    C: RenderContext + 'static,
    C::Node: Send + 'static,
{
    registry.register_block(
        TABS_TAG,
        Box::new(|_tag, _markup, _options| Box::new(TabsTag::new())),
    );
}
