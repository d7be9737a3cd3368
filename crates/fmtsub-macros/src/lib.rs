//! Proc macros for fmtsub.
//!
//! - [`fmt!`] - build a `Fmt` from a `{}` placeholder literal and its slot
//!   expressions
//!
//! The template literal is split at compile time, so a placeholder count that
//! does not match the number of arguments is a compile error rather than a
//! runtime one.

#[path = "../../fmtsub/src/split.rs"]
mod split;
mod template;

use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Builds a `fmtsub::Fmt` from a template literal.
///
/// Each `{}` in the literal is a placeholder, filled by the matching argument
/// in order. `{{` and `}}` produce literal braces. Arguments are converted
/// with `fmtsub::Slot::from`, so:
///
/// - `sub(value, "%o")` becomes a substitution marker
/// - another `Fmt` is nested in place
/// - strings, numbers and booleans are inlined as raw text
///
/// # Example
///
/// ```rust,ignore
/// use fmtsub::{fmt, sub, Fmt};
/// use serde_json::json;
///
/// let msg: Fmt = fmt!("Format me: {}", sub(json!({"value": false}), "%o"));
/// assert_eq!(msg.assemble().format(), "Format me: %o");
/// ```
///
/// # Compile-Time Errors
///
/// The macro will fail to compile if:
/// - The number of `{}` placeholders differs from the number of arguments
/// - A `{` is followed by anything other than `}` or `{`
/// - The literal ends with an unclosed `{`
#[proc_macro]
pub fn fmt(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as template::FmtInput);
    template::fmt_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
