//! fmtsub - printf-style substitution templates as values.
//!
//! Console and logging sinks that do their own formatting take a format
//! string followed by the values its directives refer to:
//! `log("Hey, %o!", name)`. fmtsub lets you build that pair up piece by piece
//! without flattening it into a plain string along the way.
//!
//! - [`Fmt`] - a template: literal segments with placeholder slots between them
//! - [`Slot`] - what a placeholder holds: a raw value, a [`Substitution`], or a
//!   nested [`Fmt`]
//! - [`sub`] - pairs a value with the marker text (e.g. `%o`) that stands in for it
//! - [`Fmt::concat_all`] / [`Fmt::concat`] - joins templates without nesting
//!   them, gluing the literal edges together
//! - [`Fmt::assemble`] - flattens a template into an [`Assembled`] format
//!   string and argument list
//!
//! # Quick Start
//!
//! ```rust
//! use fmtsub::{fmt, sub, Fmt};
//! use serde_json::json;
//!
//! let first: Fmt = fmt!("1: {}", sub(json!(5), "%s"));
//! let second: Fmt = fmt!("\n2: {}", sub(json!(1), "%o"));
//!
//! let out = first.concat([second]).assemble();
//! assert_eq!(out.format(), "1: %s\n2: %o");
//! assert_eq!(out.args(), &[json!(5), json!(1)]);
//! ```
//!
//! # Slot Semantics
//!
//! | Slot | Format string gets | Arguments get |
//! |------|--------------------|---------------|
//! | `sub(v, "%o")` | `%o` | `v` |
//! | nested `Fmt` | its assembled format string | its arguments |
//! | raw value | the value's text form | nothing |
//!
//! Marker text is opaque: it is copied into the format string verbatim and
//! never parsed. Raw values are written with a [`Stringify`] strategy; see
//! [`Fmt::assemble_with`].
//!
//! # Concatenation
//!
//! Concatenating templates is the same as writing their text back to back.
//! Nesting each template in the next would work too, but produces a value
//! whose assembly recurses once per item. [`Fmt::concat_all`] instead moves
//! every segment and slot into one flat template in linear time:
//!
//! ```rust
//! use fmtsub::{fmt, sub, Fmt};
//! use serde_json::json;
//!
//! let out = Fmt::concat_all([
//!     fmt!("1 {} ", sub(json!(4), "%s")),
//!     fmt!("{} 2", sub(json!(2), "%o")),
//! ])
//! .assemble();
//!
//! assert_eq!(out.format(), "1 %s %o 2");
//! ```
//!
//! # Thread Safety
//!
//! Templates are immutable once built. `Fmt<V>` is `Send + Sync` whenever `V`
//! is, and can be shared between threads without locking.

extern crate self as fmtsub;

mod assemble;
mod concat;
mod error;
mod slot;
mod split;
mod stringify;
mod template;
mod value;

// Re-export public API
pub use assemble::Assembled;
pub use error::{FmtError, Result};
pub use slot::{sub, Slot, Substitution};
pub use stringify::{DefaultStringify, DisplayStringify, InlineText, JsonStringify, Stringify};
pub use value::Fmt;

#[cfg(feature = "macros")]
pub use fmtsub_macros::fmt;
