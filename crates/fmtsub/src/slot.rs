//! Placeholder slot types.
//!
//! Every placeholder in a [`Fmt`] holds a [`Slot`]. A slot is one of three
//! things:
//!
//! | Variant | Format string gets | Argument list gets |
//! |---------|--------------------|--------------------|
//! | [`Slot::Marker`] | the marker text (e.g. `%o`) | the value |
//! | [`Slot::Nested`] | the nested template's format string | the nested arguments |
//! | [`Slot::Raw`] | the value's text form | nothing |
//!
//! # Conversions
//!
//! `Slot::from` routes a [`Substitution`] to `Marker` and a [`Fmt`] to
//! `Nested`. Plain strings, numbers and booleans become `Raw` when the slot's
//! value type can be built from them. Anything else goes through
//! [`Slot::raw`].

use serde_json::Value;

use crate::value::Fmt;

/// A value paired with the marker text that stands in for it.
///
/// Assembly copies [`marker`](Self::marker) verbatim into the format string
/// and appends [`value`](Self::value) to the argument list. The marker is
/// never parsed, so `%o`, `%d` or any custom token work the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Substitution<V> {
    value: V,
    marker: String,
}

impl<V> Substitution<V> {
    /// Pairs `value` with `marker`.
    pub fn new(value: V, marker: impl Into<String>) -> Self {
        Self {
            value,
            marker: marker.into(),
        }
    }

    /// The value appended to the argument list.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The text spliced into the format string.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Splits the substitution back into its value and marker.
    pub fn into_parts(self) -> (V, String) {
        (self.value, self.marker)
    }
}

/// Constructs a [`Substitution`].
///
/// # Example
///
/// ```rust
/// use fmtsub::{fmt, sub, Fmt};
/// use serde_json::json;
///
/// let hello: Fmt = fmt!("Hey, {}!", sub(json!("Aubrey"), "%o"));
/// let out = hello.assemble();
///
/// assert_eq!(out.format(), "Hey, %o!");
/// assert_eq!(out.args(), &[json!("Aubrey")]);
/// ```
pub fn sub<V>(value: V, marker: impl Into<String>) -> Substitution<V> {
    Substitution::new(value, marker)
}

/// One placeholder position in a [`Fmt`].
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<V = Value> {
    /// A plain value, inlined as text during assembly.
    Raw(V),
    /// A value substituted through its marker text.
    Marker(Substitution<V>),
    /// Another template, spliced in place during assembly.
    Nested(Fmt<V>),
}

impl<V> Slot<V> {
    /// Wraps a value that should be inlined as text.
    pub fn raw(value: V) -> Self {
        Slot::Raw(value)
    }

    /// Returns `true` if this is a `Raw` slot.
    pub fn is_raw(&self) -> bool {
        matches!(self, Slot::Raw(_))
    }

    /// Returns `true` if this is a `Marker` slot.
    pub fn is_marker(&self) -> bool {
        matches!(self, Slot::Marker(_))
    }

    /// Returns `true` if this is a `Nested` slot.
    pub fn is_nested(&self) -> bool {
        matches!(self, Slot::Nested(_))
    }
}

impl<V> From<Substitution<V>> for Slot<V> {
    fn from(substitution: Substitution<V>) -> Self {
        Slot::Marker(substitution)
    }
}

impl<V> From<Fmt<V>> for Slot<V> {
    fn from(fmt: Fmt<V>) -> Self {
        Slot::Nested(fmt)
    }
}

impl From<Value> for Slot<Value> {
    fn from(value: Value) -> Self {
        Slot::Raw(value)
    }
}

impl<'a, V: From<&'a str>> From<&'a str> for Slot<V> {
    fn from(text: &'a str) -> Self {
        Slot::Raw(V::from(text))
    }
}

macro_rules! impl_raw_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<V: From<$ty>> From<$ty> for Slot<V> {
                fn from(value: $ty) -> Self {
                    Slot::Raw(V::from(value))
                }
            }
        )*
    };
}

impl_raw_from!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String);
