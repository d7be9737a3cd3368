//! Boundary-preserving concatenation.
//!
//! Writing two templates back to back leaves no placeholder between the last
//! segment of the first and the first segment of the second, so those two
//! literals have to become one. [`Concat`] keeps the trailing segment of what
//! it has seen so far open (the pending tail) and glues the next input's
//! leading segment onto it.
//!
//! ```text
//! ["a", "b"] [x]   +   ["c", "d", "e"] [y, z]
//!         => ["a", "bc", "d", "e"] [x, y, z]
//! ```
//!
//! Every input's segments and slots are moved, never re-parsed, so the cost is
//! linear in the total input size and the result is as flat as its inputs.

use crate::slot::Slot;
use crate::value::Fmt;

/// Incremental concatenation of [`Fmt`] values.
pub(crate) struct Concat<V> {
    segments: Vec<String>,
    slots: Vec<Slot<V>>,
    tail: Option<String>,
    inputs: usize,
}

impl<V> Concat<V> {
    pub(crate) fn new() -> Self {
        Self {
            segments: Vec::new(),
            slots: Vec::new(),
            tail: None,
            inputs: 0,
        }
    }

    /// Appends `fmt` after everything pushed so far.
    pub(crate) fn push(&mut self, fmt: Fmt<V>) {
        let (segments, slots) = fmt.into_parts();
        let mut segments = segments.into_iter();
        // Every Fmt has at least one segment.
        let last = segments.next_back().unwrap_or_default();

        match self.tail.take() {
            Some(mut tail) => match segments.next() {
                Some(head) => {
                    tail.push_str(&head);
                    self.segments.push(tail);
                    self.segments.extend(segments);
                    self.tail = Some(last);
                }
                None => {
                    // A single segment is both head and tail.
                    tail.push_str(&last);
                    self.tail = Some(tail);
                }
            },
            None => {
                self.segments.extend(segments);
                self.tail = Some(last);
            }
        }

        self.slots.extend(slots);
        self.inputs += 1;
    }

    /// Closes the pending tail and builds the result.
    pub(crate) fn finish(self) -> Fmt<V> {
        let Concat {
            mut segments,
            slots,
            tail,
            inputs,
        } = self;
        segments.push(tail.unwrap_or_default());

        log::trace!(
            "concatenated {} template(s) into {} segment(s) and {} slot(s)",
            inputs,
            segments.len(),
            slots.len()
        );

        Fmt::from_raw_parts(segments, slots)
    }
}
