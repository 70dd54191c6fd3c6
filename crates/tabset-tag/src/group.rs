//! Tab group data model.
//!
//! Two-phase lifecycle: [`TabGroupBuilder`] is append-only while the host
//! parses the block body; [`TabGroupBuilder::finish`] freezes it into an
//! immutable [`TabGroup`] that renders any number of times.

use tabset_host::{RenderContext, ScopeGuard};

/// One labeled sub-section of a tab group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabEntry<N> {
    /// Raw label text as captured from the boundary tag markup.
    ///
    /// Kept untrimmed; whitespace is stripped at render time only.
    pub title: String,
    /// Host-owned template nodes between this boundary and the next.
    pub content: Vec<N>,
}

/// Append-only collector for the compilation phase.
#[derive(Debug)]
pub struct TabGroupBuilder<N> {
    entries: Vec<TabEntry<N>>,
    discarded: usize,
}

impl<N> TabGroupBuilder<N> {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            discarded: 0,
        }
    }

    /// Start a new labeled sub-section; subsequent nodes attach to it.
    ///
    /// The title is stored raw. Duplicate titles stay separate entries.
    pub fn begin_section(&mut self, title: impl Into<String>) {
        self.entries.push(TabEntry {
            title: title.into(),
            content: Vec::new(),
        });
    }

    /// Append a content node to the current sub-section.
    ///
    /// Nodes arriving before the first section have no home and are dropped;
    /// the count is reported by [`discarded_nodes`](Self::discarded_nodes).
    pub fn push_node(&mut self, node: N) {
        if let Some(entry) = self.entries.last_mut() {
            entry.content.push(node);
        } else {
            self.discarded += 1;
        }
    }

    /// Number of nodes dropped because they preceded the first section.
    #[must_use]
    pub fn discarded_nodes(&self) -> usize {
        self.discarded
    }

    /// Number of sections collected so far.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.entries.len()
    }

    /// Freeze the builder into an immutable group.
    #[must_use]
    pub fn finish(self) -> TabGroup<N> {
        TabGroup {
            entries: self.entries,
        }
    }
}

impl<N> Default for TabGroupBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable, ordered collection of labeled sub-sections.
///
/// Entries render in registration order, duplicates preserved. The group
/// never changes after [`TabGroupBuilder::finish`]; rendering borrows it
/// read-only, so repeated renders against an unchanged context are
/// byte-identical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabGroup<N> {
    entries: Vec<TabEntry<N>>,
}

impl<N> TabGroup<N> {
    /// The collected entries, in document order.
    #[must_use]
    pub fn entries(&self) -> &[TabEntry<N>] {
        &self.entries
    }

    /// True when the group has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Render all sections to a single string.
    ///
    /// Each section becomes `**<trimmed title>**` followed by a blank line
    /// and its rendered content; sections are joined by one blank line, with
    /// no trailing separator. A group with zero sections renders to the
    /// empty string.
    ///
    /// The whole render runs inside a nested variable scope, and each
    /// section's content renders in a further scope of its own, popped before
    /// the next section starts. Both scopes are released on every exit path.
    ///
    /// # Errors
    ///
    /// The first content node that fails to render aborts the remaining
    /// sections; the host error propagates unchanged.
    pub fn render<C>(&self, ctx: &mut C) -> Result<String, C::Error>
    where
        C: RenderContext<Node = N>,
    {
        tracing::debug!(sections = self.entries.len(), "rendering tab group");

        let mut block = ScopeGuard::enter(ctx);
        let mut parts = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let body = block.nested().render_nodes(&entry.content)?;
            parts.push(format!("**{}**\n\n{body}", entry.title.trim()));
        }
        Ok(parts.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tabset_host::{MemoryContext, MemoryNode};

    use super::*;

    fn group(sections: &[(&str, &str)]) -> TabGroup<MemoryNode> {
        let mut builder = TabGroupBuilder::new();
        for (title, text) in sections {
            builder.begin_section(*title);
            builder.push_node(MemoryNode::text(*text));
        }
        builder.finish()
    }

    #[test]
    fn test_empty_group_renders_empty_string() {
        let group: TabGroup<MemoryNode> = TabGroupBuilder::new().finish();
        let mut ctx = MemoryContext::new();
        assert_eq!(group.render(&mut ctx).unwrap(), "");
    }

    #[test]
    fn test_single_section() {
        let group = group(&[("Overview", "Hello")]);
        let mut ctx = MemoryContext::new();
        assert_eq!(group.render(&mut ctx).unwrap(), "**Overview**\n\nHello");
    }

    #[test]
    fn test_sections_joined_by_one_blank_line() {
        let group = group(&[("A", "1"), ("B", "2")]);
        let mut ctx = MemoryContext::new();
        assert_eq!(group.render(&mut ctx).unwrap(), "**A**\n\n1\n\n**B**\n\n2");
    }

    #[test]
    fn test_title_trimmed_at_render_time() {
        let group = group(&[("  Setup  ", "content")]);
        assert_eq!(group.entries()[0].title, "  Setup  ");

        let mut ctx = MemoryContext::new();
        assert_eq!(group.render(&mut ctx).unwrap(), "**Setup**\n\ncontent");
    }

    #[test]
    fn test_duplicate_titles_stay_separate() {
        let group = group(&[("Install", "with apt"), ("Install", "with brew")]);
        assert_eq!(group.len(), 2);

        let mut ctx = MemoryContext::new();
        assert_eq!(
            group.render(&mut ctx).unwrap(),
            "**Install**\n\nwith apt\n\n**Install**\n\nwith brew"
        );
    }

    #[test]
    fn test_registration_order_preserved() {
        let group = group(&[("zebra", "z"), ("alpha", "a"), ("zebra", "z2")]);
        let titles: Vec<&str> = group.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["zebra", "alpha", "zebra"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let group = group(&[("A", "1"), ("B", "2")]);
        let mut ctx = MemoryContext::new();
        let first = group.render(&mut ctx).unwrap();
        let second = group.render(&mut ctx).unwrap();
        assert_eq!(first, second);
        assert_eq!(ctx.depth(), 1);
    }

    #[test]
    fn test_section_bindings_do_not_leak_to_next_section() {
        let mut builder = TabGroupBuilder::new();
        builder.begin_section("first");
        builder.push_node(MemoryNode::assign("x", "1"));
        builder.push_node(MemoryNode::text("set"));
        builder.begin_section("second");
        builder.push_node(MemoryNode::var("x"));
        let group = builder.finish();

        let mut ctx = MemoryContext::new();
        let err = group.render(&mut ctx).unwrap_err();
        assert_eq!(
            err,
            tabset_host::EvalError::UndefinedVariable("x".to_owned())
        );
    }

    #[test]
    fn test_bindings_do_not_leak_to_surrounding_template() {
        let mut builder = TabGroupBuilder::new();
        builder.begin_section("only");
        builder.push_node(MemoryNode::assign("leaky", "yes"));
        builder.push_node(MemoryNode::text("done"));
        let group = builder.finish();

        let mut ctx = MemoryContext::new();
        assert_eq!(group.render(&mut ctx).unwrap(), "**only**\n\ndone");
        assert_eq!(ctx.get("leaky"), None);
        assert_eq!(ctx.depth(), 1);
    }

    #[test]
    fn test_outer_variables_visible_inside_sections() {
        let mut builder = TabGroupBuilder::new();
        builder.begin_section("greeting");
        builder.push_node(MemoryNode::text("hello "));
        builder.push_node(MemoryNode::var("name"));
        let group = builder.finish();

        let mut ctx = MemoryContext::new().with_var("name", "world");
        assert_eq!(group.render(&mut ctx).unwrap(), "**greeting**\n\nhello world");
    }

    #[test]
    fn test_first_error_aborts_and_scopes_unwind() {
        let group = {
            let mut builder = TabGroupBuilder::new();
            builder.begin_section("bad");
            builder.push_node(MemoryNode::var("missing"));
            builder.begin_section("never rendered");
            builder.push_node(MemoryNode::text("unreachable"));
            builder.finish()
        };

        let mut ctx = MemoryContext::new();
        assert!(group.render(&mut ctx).is_err());
        assert_eq!(ctx.depth(), 1);
    }

    #[test]
    fn test_builder_discards_preamble_nodes() {
        let mut builder = TabGroupBuilder::new();
        builder.push_node(MemoryNode::text("stray"));
        builder.push_node(MemoryNode::text("also stray"));
        builder.begin_section("real");
        builder.push_node(MemoryNode::text("kept"));

        assert_eq!(builder.discarded_nodes(), 2);
        assert_eq!(builder.section_count(), 1);

        let group = builder.finish();
        assert_eq!(group.entries()[0].content.len(), 1);
    }

    #[test]
    fn test_empty_section_renders_heading_only() {
        let mut builder = TabGroupBuilder::new();
        builder.begin_section("Empty");
        let group = builder.finish();

        let mut ctx = MemoryContext::new();
        assert_eq!(group.render(&mut ctx).unwrap(), "**Empty**\n\n");
    }
}
