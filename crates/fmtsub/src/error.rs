//! Error types for the fmtsub crate.
//!
//! Concatenation and assembly never fail. Errors only come from the
//! construction boundary: the checked [`Fmt::new`](crate::Fmt::new) constructor
//! and the runtime template parser.

use thiserror::Error;

/// Errors that can occur when building a [`Fmt`](crate::Fmt).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FmtError {
    /// Segment and slot counts do not line up (`segments` must be `slots + 1`).
    #[error("a template with {slots} slot(s) needs {} segment(s), got {segments}", .slots + 1)]
    SegmentCount { segments: usize, slots: usize },

    /// The template's `{}` placeholders do not match the supplied slots.
    #[error("template has {placeholders} placeholder(s) but {slots} slot(s) were supplied")]
    SlotCount { placeholders: usize, slots: usize },

    /// A `{` at the very end of the template.
    #[error("unclosed placeholder at byte {offset}")]
    UnclosedPlaceholder { offset: usize },

    /// A `{` followed by something other than `}` or `{`.
    #[error("invalid placeholder at byte {offset}: expected `{{}}` or an escaped `{{{{`")]
    InvalidPlaceholder { offset: usize },
}

/// Result type for fmtsub operations.
pub type Result<T> = std::result::Result<T, FmtError>;
