//! Property-based tests for concatenation and assembly using proptest.

use fmtsub::{sub, Fmt, Slot};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z %{}\n]{0,6}"
}

fn leaf_slot_strategy() -> impl Strategy<Value = Slot<i64>> {
    prop_oneof![
        any::<i64>().prop_map(Slot::raw),
        (any::<i64>(), "%[a-z]").prop_map(|(value, marker)| Slot::from(sub(value, marker))),
    ]
}

fn build(segments: Vec<String>, slots: Vec<Slot<i64>>) -> Fmt<i64> {
    Fmt::new(segments, slots).unwrap()
}

/// Templates with up to two levels of nesting.
fn fmt_strategy() -> impl Strategy<Value = Fmt<i64>> {
    let flat = (
        segment_strategy(),
        prop::collection::vec((leaf_slot_strategy(), segment_strategy()), 0..4),
    )
        .prop_map(|(head, pairs)| {
            let mut segments = vec![head];
            let mut slots = Vec::new();
            for (slot, segment) in pairs {
                slots.push(slot);
                segments.push(segment);
            }
            build(segments, slots)
        });

    flat.prop_recursive(2, 16, 3, |inner| {
        (
            segment_strategy(),
            prop::collection::vec((inner.prop_map(Slot::Nested), segment_strategy()), 0..3),
        )
            .prop_map(|(head, pairs)| {
                let mut segments = vec![head];
                let mut slots = Vec::new();
                for (slot, segment) in pairs {
                    slots.push(slot);
                    segments.push(segment);
                }
                build(segments, slots)
            })
    })
}

fn depth(fmt: &Fmt<i64>) -> usize {
    fmt.slots()
        .iter()
        .map(|slot| match slot {
            Slot::Nested(inner) => 1 + depth(inner),
            _ => 0,
        })
        .max()
        .unwrap_or(0)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every concatenation result has one more segment than slots.
    #[test]
    fn concat_keeps_segment_invariant(fmts in prop::collection::vec(fmt_strategy(), 0..6)) {
        let total_slots: usize = fmts.iter().map(Fmt::slot_count).sum();
        let joined = Fmt::concat_all(fmts);

        prop_assert_eq!(joined.segments().len(), joined.slots().len() + 1);
        prop_assert_eq!(joined.slot_count(), total_slots);
    }

    /// Grouping does not change the assembled output.
    #[test]
    fn concat_is_associative(a in fmt_strategy(), b in fmt_strategy(), c in fmt_strategy()) {
        let left = Fmt::concat_all([a.clone(), b.clone()]).concat([c.clone()]);
        let right = a.clone().concat([Fmt::concat_all([b.clone(), c.clone()])]);
        let flat = Fmt::concat_all([a, b, c]);

        prop_assert_eq!(left.assemble(), flat.assemble());
        prop_assert_eq!(right.assemble(), flat.assemble());
    }

    /// Concatenating a single value gives back the same structure.
    #[test]
    fn concat_single_is_identity(a in fmt_strategy()) {
        let joined = Fmt::concat_all([a.clone()]);
        prop_assert_eq!(&joined, &a);
        prop_assert_eq!(joined.assemble(), a.assemble());
    }

    /// The empty template is a neutral element on both sides.
    #[test]
    fn empty_is_neutral(a in fmt_strategy()) {
        prop_assert_eq!(&Fmt::concat_all([Fmt::empty(), a.clone()]), &a);
        prop_assert_eq!(&Fmt::concat_all([a.clone(), Fmt::empty()]), &a);
    }

    /// Assembling a concatenation is juxtaposing the assembled parts.
    #[test]
    fn concat_is_juxtaposition(fmts in prop::collection::vec(fmt_strategy(), 0..6)) {
        let mut format = String::new();
        let mut args = Vec::new();
        for fmt in &fmts {
            let (f, a) = fmt.assemble().into_parts();
            format.push_str(&f);
            args.extend(a);
        }

        let joined = Fmt::concat_all(fmts).assemble();
        prop_assert_eq!(joined.format(), format.as_str());
        prop_assert_eq!(joined.args(), args.as_slice());
    }

    /// Concatenation never nests deeper than its deepest input.
    #[test]
    fn concat_does_not_grow_depth(fmts in prop::collection::vec(fmt_strategy(), 1..6)) {
        let deepest = fmts.iter().map(depth).max().unwrap_or(0);
        let joined = Fmt::concat_all(fmts);
        prop_assert_eq!(depth(&joined), deepest);
    }

    /// A nested slot assembles the same as splicing its contents in place.
    #[test]
    fn nesting_matches_splicing(
        before in segment_strategy(),
        inner in fmt_strategy(),
        after in segment_strategy(),
    ) {
        let nested = build(vec![before.clone(), after.clone()], vec![Slot::from(inner.clone())]);
        let spliced = Fmt::concat_all([Fmt::literal(before), inner, Fmt::literal(after)]);

        prop_assert_eq!(nested.assemble(), spliced.assemble());
    }

    /// Only markers contribute arguments; raw values never do.
    #[test]
    fn args_come_only_from_markers(a in fmt_strategy()) {
        fn markers(fmt: &Fmt<i64>) -> usize {
            fmt.slots()
                .iter()
                .map(|slot| match slot {
                    Slot::Marker(_) => 1,
                    Slot::Nested(inner) => markers(inner),
                    Slot::Raw(_) => 0,
                })
                .sum()
        }

        prop_assert_eq!(a.assemble().args().len(), markers(&a));
    }
}
