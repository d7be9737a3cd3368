//! Assembly of templates into printf-style argument lists.
//!
//! Assembly walks a [`Fmt`] and writes every segment and slot into one format
//! string, collecting marker values into an argument list along the way.
//! Nested templates are walked in place with an explicit stack, so deeply
//! nested input costs heap, not call stack.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::slot::Slot;
use crate::stringify::Stringify;
use crate::value::Fmt;

/// A format string plus the values its markers refer to.
///
/// This is the shape a printf-style sink expects: pass
/// [`format`](Self::format) as the first argument and
/// [`args`](Self::args) after it.
///
/// # Serialization
///
/// `Assembled` serializes as one flat sequence, the format string followed by
/// the arguments, ready to be spread into a variadic console call:
///
/// ```rust
/// use fmtsub::{fmt, sub, Fmt};
/// use serde_json::json;
///
/// let msg: Fmt = fmt!("Hey, {}!", sub(json!("Aubrey"), "%o"));
/// let wire = serde_json::to_string(&msg.assemble()).unwrap();
/// assert_eq!(wire, r#"["Hey, %o!","Aubrey"]"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled<V> {
    format: String,
    args: Vec<V>,
}

impl<V> Assembled<V> {
    /// The format string, with every marker and inlined value in place.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// The substitution values, in marker order.
    pub fn args(&self) -> &[V] {
        &self.args
    }

    /// Splits into the format string and argument list.
    pub fn into_parts(self) -> (String, Vec<V>) {
        (self.format, self.args)
    }
}

impl<V> From<Assembled<V>> for (String, Vec<V>) {
    fn from(assembled: Assembled<V>) -> Self {
        assembled.into_parts()
    }
}

impl<V: Serialize> Serialize for Assembled<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.args.len() + 1))?;
        seq.serialize_element(&self.format)?;
        for arg in &self.args {
            seq.serialize_element(arg)?;
        }
        seq.end()
    }
}

/// Assembles `fmt`, inlining raw slots with `stringify`.
pub(crate) fn assemble<V, S>(fmt: &Fmt<V>, stringify: &S) -> Assembled<V>
where
    V: Clone,
    S: Stringify<V> + ?Sized,
{
    let mut out = Assembled {
        format: String::new(),
        args: Vec::new(),
    };
    write_fmt(fmt, stringify, &mut out);

    log::trace!(
        "assembled template into {} byte(s) of format and {} argument(s)",
        out.format.len(),
        out.args.len()
    );
    out
}

fn write_fmt<V, S>(fmt: &Fmt<V>, stringify: &S, out: &mut Assembled<V>)
where
    V: Clone,
    S: Stringify<V> + ?Sized,
{
    // One frame per template being walked. A frame alternates segment, slot,
    // segment, ... and is popped once its slots run out.
    let mut stack = vec![(fmt.segments().iter(), fmt.slots().iter())];

    while let Some((segments, slots)) = stack.last_mut() {
        if let Some(segment) = segments.next() {
            out.format.push_str(segment);
        }

        match slots.next() {
            Some(Slot::Marker(substitution)) => {
                out.format.push_str(substitution.marker());
                out.args.push(substitution.value().clone());
            }
            Some(Slot::Nested(nested)) => {
                stack.push((nested.segments().iter(), nested.slots().iter()));
            }
            Some(Slot::Raw(value)) => stringify.stringify(value, &mut out.format),
            None => {
                stack.pop();
            }
        }
    }
}
