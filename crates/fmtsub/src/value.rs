//! The template value type.
//!
//! A [`Fmt`] is a string with placeholders kept apart from its literal text:
//! `n` slots sit between `n + 1` literal segments. Values are never mutated
//! after construction. Concatenation and assembly read existing values and
//! produce new ones.

use std::ops::Add;

use serde_json::Value;

use crate::assemble::Assembled;
use crate::concat::Concat;
use crate::error::{FmtError, Result};
use crate::slot::Slot;
use crate::stringify::{DefaultStringify, InlineText, Stringify};
use crate::template;

/// A string with printf-style substitutions, kept as structure until assembly.
///
/// The value type `V` is whatever the eventual consumer accepts as an
/// argument. It defaults to [`serde_json::Value`] so heterogeneous argument
/// lists work without extra plumbing.
///
/// # Example
///
/// ```rust
/// use fmtsub::{fmt, sub, Fmt};
/// use serde_json::json;
///
/// let part1: Fmt = fmt!("Foo: {}", sub(json!({"foo": true}), "%o"));
/// let part2: Fmt = fmt!("Bar: {}", sub(json!({"bar": false}), "%o"));
/// let message: Fmt = fmt!("Part 2: {}\nPart 1: {}", part2, part1);
///
/// let (format, args) = message.assemble().into_parts();
/// assert_eq!(format, "Part 2: Bar: %o\nPart 1: Foo: %o");
/// assert_eq!(args, vec![json!({"bar": false}), json!({"foo": true})]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Fmt<V = Value> {
    segments: Vec<String>,
    slots: Vec<Slot<V>>,
}

impl<V> Fmt<V> {
    /// Builds a template from its literal segments and slots.
    ///
    /// Fails with [`FmtError::SegmentCount`] unless there is exactly one more
    /// segment than there are slots.
    pub fn new(segments: Vec<String>, slots: Vec<Slot<V>>) -> Result<Self> {
        if segments.len() != slots.len() + 1 {
            return Err(FmtError::SegmentCount {
                segments: segments.len(),
                slots: slots.len(),
            });
        }
        Ok(Self { segments, slots })
    }

    /// Builds a template from parts the caller has already checked.
    ///
    /// This is what the `fmt!` macro expands to; the macro verifies the
    /// segment and slot counts at compile time. The invariant is asserted in
    /// debug builds only.
    #[doc(hidden)]
    pub fn from_raw_parts(segments: Vec<String>, slots: Vec<Slot<V>>) -> Self {
        debug_assert_eq!(
            segments.len(),
            slots.len() + 1,
            "a template needs exactly one more segment than slots"
        );
        Self { segments, slots }
    }

    /// Parses `{}`-style template text and fills its placeholders with `slots`.
    ///
    /// `{{` and `}}` stand for literal braces. The number of placeholders
    /// must match the number of slots.
    ///
    /// ```rust
    /// use fmtsub::{sub, Fmt, Slot};
    ///
    /// let fmt = Fmt::<i64>::parse("{{{}}} = {}", [Slot::raw(1), sub(2i64, "%d").into()]).unwrap();
    /// let out = fmt.assemble();
    /// assert_eq!(out.format(), "{1} = %d");
    /// assert_eq!(out.args(), &[2]);
    /// ```
    pub fn parse<I>(template: &str, slots: I) -> Result<Self>
    where
        I: IntoIterator<Item = Slot<V>>,
    {
        let segments = template::split_placeholders(template)?;
        let slots: Vec<Slot<V>> = slots.into_iter().collect();
        if segments.len() != slots.len() + 1 {
            return Err(FmtError::SlotCount {
                placeholders: segments.len() - 1,
                slots: slots.len(),
            });
        }
        Ok(Self { segments, slots })
    }

    /// A template made of a single literal and no slots.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            segments: vec![text.into()],
            slots: Vec::new(),
        }
    }

    /// The empty template, equivalent to an empty literal.
    pub fn empty() -> Self {
        Self::literal(String::new())
    }

    /// The literal segments, one more than there are slots.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The placeholder slots, in order.
    pub fn slots(&self) -> &[Slot<V>] {
        &self.slots
    }

    /// Number of placeholder slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the template has no slots at all.
    pub fn is_literal(&self) -> bool {
        self.slots.is_empty()
    }

    /// Splits the template into its segments and slots.
    pub fn into_parts(mut self) -> (Vec<String>, Vec<Slot<V>>) {
        (
            std::mem::take(&mut self.segments),
            std::mem::take(&mut self.slots),
        )
    }

    /// Concatenates any number of templates into one.
    ///
    /// The result is structurally the same as if all the inputs had been
    /// written as a single template: adjacent literal edges are glued
    /// together, slots keep their order, and no nesting is introduced. Zero
    /// inputs produce the empty template.
    ///
    /// ```rust
    /// use fmtsub::{fmt, sub, Fmt};
    /// use serde_json::json;
    ///
    /// let numbers: Vec<Fmt> = (0..3).map(|n| fmt!("{}", sub(json!(n), "%d"))).collect();
    /// let joined = Fmt::concat_all(numbers);
    ///
    /// assert_eq!(joined.assemble().format(), "%d%d%d");
    /// assert_eq!(joined.segments().len(), 4);
    /// ```
    pub fn concat_all<I>(fmts: I) -> Self
    where
        I: IntoIterator<Item = Fmt<V>>,
    {
        let mut concat = Concat::new();
        for fmt in fmts {
            concat.push(fmt);
        }
        concat.finish()
    }

    /// Concatenates `others` after `self`.
    ///
    /// Same as [`Fmt::concat_all`] with `self` prepended.
    pub fn concat<I>(self, others: I) -> Self
    where
        I: IntoIterator<Item = Fmt<V>>,
    {
        Self::concat_all(std::iter::once(self).chain(others))
    }

    /// Concatenates `items` with `separator` between each pair.
    ///
    /// ```rust
    /// use fmtsub::{fmt, sub, Fmt};
    /// use serde_json::json;
    ///
    /// let items: Vec<Fmt> = (0..5).map(|n| fmt!("{}", sub(json!(n), "%o"))).collect();
    /// let out = Fmt::join(items, &fmt!(", ")).assemble();
    ///
    /// assert_eq!(out.format(), "%o, %o, %o, %o, %o");
    /// assert_eq!(out.args().len(), 5);
    /// ```
    pub fn join<I>(items: I, separator: &Fmt<V>) -> Self
    where
        I: IntoIterator<Item = Fmt<V>>,
        V: Clone,
    {
        let mut concat = Concat::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                concat.push(separator.clone());
            }
            concat.push(item);
        }
        concat.finish()
    }

    /// Assembles the template into a format string and argument list.
    ///
    /// Raw slots are inlined with the value type's [`InlineText`] form. Use
    /// [`Fmt::assemble_with`] to choose a different strategy.
    pub fn assemble(&self) -> Assembled<V>
    where
        V: Clone + InlineText,
    {
        self.assemble_with(&DefaultStringify)
    }

    /// Assembles the template, inlining raw slots with `stringify`.
    ///
    /// ```rust
    /// use fmtsub::{Fmt, Slot};
    ///
    /// let fmt = Fmt::<i64>::parse("n = {}", [Slot::raw(255)]).unwrap();
    /// let out = fmt.assemble_with(&|n: &i64| format!("{n:#x}"));
    /// assert_eq!(out.format(), "n = 0xff");
    /// assert!(out.args().is_empty());
    /// ```
    pub fn assemble_with<S>(&self, stringify: &S) -> Assembled<V>
    where
        V: Clone,
        S: Stringify<V> + ?Sized,
    {
        crate::assemble::assemble(self, stringify)
    }
}

impl<V> Default for Fmt<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V> Drop for Fmt<V> {
    fn drop(&mut self) {
        // Unhook nested templates onto a heap stack so that dropping a deeply
        // nested value never recurses.
        let mut pending = take_nested(&mut self.slots);
        while let Some(mut fmt) = pending.pop() {
            pending.extend(take_nested(&mut fmt.slots));
        }
    }
}

fn take_nested<V>(slots: &mut [Slot<V>]) -> Vec<Fmt<V>> {
    slots
        .iter_mut()
        .filter_map(|slot| match slot {
            Slot::Nested(fmt) if !fmt.slots.is_empty() => Some(Fmt {
                segments: std::mem::take(&mut fmt.segments),
                slots: std::mem::take(&mut fmt.slots),
            }),
            _ => None,
        })
        .collect()
}

impl<V> From<&str> for Fmt<V> {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl<V> From<String> for Fmt<V> {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}

impl<V> Add for Fmt<V> {
    type Output = Fmt<V>;

    fn add(self, rhs: Fmt<V>) -> Self::Output {
        self.concat([rhs])
    }
}

impl<V> FromIterator<Fmt<V>> for Fmt<V> {
    fn from_iter<I: IntoIterator<Item = Fmt<V>>>(iter: I) -> Self {
        Self::concat_all(iter)
    }
}
