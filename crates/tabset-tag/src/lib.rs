//! Block tag that renders labeled tab sections as sequential formatted text.
//!
//! Implements a `tabs` block tag for any host implementing the
//! `tabset-host` contract. Inside the block, each `tab <label>` boundary
//! starts a new labeled section; rendering emits every section in document
//! order as `**<label>**` followed by its content, with one blank line
//! between sections:
//!
//! ```text
//! {% tabs %}
//! {% tab macOS %}
//! Install with Homebrew.
//! {% tab Linux %}
//! Install with apt.
//! {% endtabs %}
//! ```
//!
//! renders to:
//!
//! ```text
//! **macOS**
//!
//! Install with Homebrew.
//!
//! **Linux**
//!
//! Install with apt.
//! ```
//!
//! # Architecture
//!
//! Compilation and rendering are separate phases:
//!
//! 1. **Compilation** ([`TabsTag`]): the host reports `tab` boundaries and
//!    content nodes; the tag collects them into a [`TabGroupBuilder`].
//!    Boundary tags it does not recognize go to the host-default
//!    [`UnknownTagHandler`](tabset_host::UnknownTagHandler).
//!
//! 2. **Rendering** ([`TabGroup`]): the frozen group renders inside a nested
//!    variable scope, each section in a further scope of its own, so bindings
//!    made by section content never leak to following sections or to the
//!    surrounding template.
//!
//! # Example
//!
//! ```
//! use tabset_host::{BlockTag, CompiledTag, MemoryContext, MemoryNode};
//! use tabset_tag::TabsTag;
//!
//! let mut tag: TabsTag<MemoryContext> = TabsTag::new();
//! tag.unknown_tag("tab", "Overview", 2).unwrap();
//! tag.append_node(MemoryNode::text("Hello"));
//!
//! let compiled = Box::new(tag).finish();
//! let mut ctx = MemoryContext::new();
//! assert_eq!(compiled.render(&mut ctx).unwrap(), "**Overview**\n\nHello");
//! ```

mod group;
mod tag;

pub use group::{TabEntry, TabGroup, TabGroupBuilder};
pub use tag::{CompiledTabs, TAB_TAG, TABS_TAG, TabsTag, register};
