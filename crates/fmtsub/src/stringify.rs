//! Strategies for inlining raw slot values as text.
//!
//! A [`Slot::Raw`](crate::Slot::Raw) value contributes no argument; it is
//! written straight into the format string. How it is written is up to a
//! [`Stringify`] strategy:
//!
//! - [`DefaultStringify`] - the value type's own [`InlineText`] form (used by
//!   [`Fmt::assemble`](crate::Fmt::assemble))
//! - [`DisplayStringify`] - any [`Display`] type
//! - [`JsonStringify`] - `serde_json::Value`, with strings left unquoted
//! - any `Fn(&V) -> String` closure

use std::fmt::Display;

use serde_json::Value;

/// Writes a raw slot value into the format string.
pub trait Stringify<V: ?Sized> {
    /// Appends the text form of `value` to `out`.
    fn stringify(&self, value: &V, out: &mut String);
}

impl<V: ?Sized, F> Stringify<V> for F
where
    F: Fn(&V) -> String,
{
    fn stringify(&self, value: &V, out: &mut String) {
        out.push_str(&self(value));
    }
}

/// The default text form of a value when it is inlined into a format string.
///
/// Strings are inlined as-is, numbers and booleans in their usual decimal
/// form, and JSON values the way a console prints them without a directive.
pub trait InlineText {
    /// Appends the text form of `self` to `out`.
    fn inline_text(&self, out: &mut String);
}

impl<T: InlineText + ?Sized> InlineText for &T {
    fn inline_text(&self, out: &mut String) {
        (**self).inline_text(out);
    }
}

impl InlineText for str {
    fn inline_text(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl InlineText for String {
    fn inline_text(&self, out: &mut String) {
        out.push_str(self);
    }
}

macro_rules! impl_inline_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl InlineText for $ty {
                fn inline_text(&self, out: &mut String) {
                    out.push_str(&self.to_string());
                }
            }
        )*
    };
}

impl_inline_display!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl InlineText for Value {
    fn inline_text(&self, out: &mut String) {
        match self {
            Value::String(s) => out.push_str(s),
            // Objects, arrays, numbers, booleans and null use their JSON form.
            other => out.push_str(&other.to_string()),
        }
    }
}

/// Uses the value type's [`InlineText`] impl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultStringify;

impl<V: InlineText + ?Sized> Stringify<V> for DefaultStringify {
    fn stringify(&self, value: &V, out: &mut String) {
        value.inline_text(out);
    }
}

/// Uses the value's [`Display`] impl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayStringify;

impl<V: Display + ?Sized> Stringify<V> for DisplayStringify {
    fn stringify(&self, value: &V, out: &mut String) {
        out.push_str(&value.to_string());
    }
}

/// Writes `serde_json::Value`s, leaving top-level strings unquoted.
///
/// [`JsonStringify::pretty_printed`] writes objects and arrays with
/// `serde_json`'s pretty printer instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonStringify {
    pretty: bool,
}

impl JsonStringify {
    /// A strategy that writes compact JSON.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// A strategy that pretty-prints objects and arrays.
    pub fn pretty_printed() -> Self {
        Self { pretty: true }
    }

    /// Returns `true` if objects and arrays are pretty-printed.
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Stringify<Value> for JsonStringify {
    fn stringify(&self, value: &Value, out: &mut String) {
        match value {
            Value::Object(_) | Value::Array(_) if self.pretty => {
                match serde_json::to_string_pretty(value) {
                    Ok(text) => out.push_str(&text),
                    Err(_) => value.inline_text(out),
                }
            }
            _ => value.inline_text(out),
        }
    }
}
