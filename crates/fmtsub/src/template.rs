//! Runtime parser for `{}` placeholder templates.
//!
//! # Syntax
//!
//! - `{}` - a placeholder, filled by the next slot
//! - `{{` and `}}` - escaped braces (render as `{` and `}`)
//! - a lone `}` passes through unchanged
//!
//! Anything else inside braces is an error: placeholders are positional and
//! carry no names or format specs. Directives like `%o` belong to the
//! substitution markers, not to the template.
//!
//! The `fmt!` macro compiles the same splitter and applies it at compile time.

use crate::error::{FmtError, Result};
use crate::split::{self, SplitError};

/// Splits `template` into the literal segments around its placeholders.
pub(crate) fn split_placeholders(template: &str) -> Result<Vec<String>> {
    split::split_placeholders(template).map_err(|e| {
        log::debug!("cannot split template {:?}: {:?}", template, e);
        match e {
            SplitError::Unclosed { offset } => FmtError::UnclosedPlaceholder { offset },
            SplitError::Invalid { offset } => FmtError::InvalidPlaceholder { offset },
        }
    })
}
