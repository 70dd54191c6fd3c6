//! Compilation-phase error types.

/// Error raised while compiling a block tag.
///
/// This covers only the parse/registration phase. Render-phase failures are
/// host errors ([`RenderContext::Error`](crate::RenderContext::Error)) and
/// pass through tags unchanged, never wrapped.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A boundary construct that no registered handler recognizes.
    #[error("line {line}: unknown tag '{tag}'")]
    UnknownTag {
        /// Name of the unrecognized tag.
        tag: String,
        /// Line number of the tag (1-indexed).
        line: usize,
    },
    /// Input ended while a block tag was still open.
    #[error("unclosed block tag '{tag}'")]
    UnclosedBlock {
        /// Name of the block tag left open.
        tag: String,
    },
}
