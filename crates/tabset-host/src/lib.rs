//! Host templating-engine interface consumed by block-tag plugins.
//!
//! A templating engine that wants to support pluggable block tags implements
//! the traits in this crate; plugin crates (such as `tabset-tag`) implement
//! the other side of the contract and never see engine internals.
//!
//! # Architecture
//!
//! Block tags move through a two-phase lifecycle, enforced by types:
//!
//! 1. **Compilation** ([`BlockTag`]): the host parses the block body and
//!    reports boundary tags via [`unknown_tag`](BlockTag::unknown_tag) and
//!    content nodes via [`append_node`](BlockTag::append_node). The tag is
//!    mutable in this phase only.
//!
//! 2. **Rendering** ([`CompiledTag`]): [`BlockTag::finish`] consumes the tag
//!    and yields an immutable compiled form that can render any number of
//!    times against a [`RenderContext`].
//!
//! Variable scoping during rendering goes through [`ScopeGuard`], which pops
//! the scope it pushed on every exit path, including early returns from `?`.
//!
//! Testing support lives in [`MemoryContext`] (behind the `mock` feature
//! flag) so plugin crates can drive the full flow without a real engine.

mod context;
mod error;
#[cfg(feature = "mock")]
mod mock;
mod tag;

pub use context::{RenderContext, ScopeGuard};
pub use error::ParseError;
#[cfg(feature = "mock")]
pub use mock::{EvalError, MemoryContext, MemoryNode};
pub use tag::{
    BlockTag, BlockTagFactory, CompiledTag, ParseOptions, StrictUnknownTags, TagRegistry,
    UnknownTagHandler,
};
