//! Property-based tests for the core state machines.

use folio_core::content::{CATEGORIES, PROJECTS};
use folio_core::gallery::filter_projects;
use folio_core::typewriter::{Typewriter, TypewriterPhase};
use proptest::prelude::*;

proptest! {
    /// The visible text is always a prefix of the active phrase, and a
    /// single step never changes it by more than one character.
    #[test]
    fn typewriter_text_is_a_prefix_and_steps_by_one(
        phrases in proptest::collection::vec("[a-zA-Z ]{0,12}", 1..5),
        steps in 1usize..400,
    ) {
        let mut tw = Typewriter::new(phrases.clone());
        let mut prev_len = tw.text().chars().count();

        for _ in 0..steps {
            tw.step();

            prop_assert!(tw.phrase_index() < phrases.len());
            let phrase = &phrases[tw.phrase_index()];
            prop_assert!(phrase.starts_with(tw.text()));

            let len = tw.text().chars().count();
            let delta = len.abs_diff(prev_len);
            prop_assert!(delta <= 1, "text changed by {delta} chars in one step");
            prev_len = len;
        }
    }

    /// While the machine reports `Typing` the text only ever grows, and
    /// while it reports `Deleting` it only ever shrinks.
    #[test]
    fn typewriter_growth_matches_phase(
        phrases in proptest::collection::vec("[a-z]{1,8}", 1..4),
    ) {
        let mut tw = Typewriter::new(phrases);
        let mut prev_len = 0usize;
        let mut prev_phase = tw.phase();

        for _ in 0..300 {
            tw.step();
            let len = tw.text().chars().count();
            match prev_phase {
                TypewriterPhase::Typing => prop_assert!(len >= prev_len),
                TypewriterPhase::Deleting => prop_assert!(len <= prev_len),
                _ => {}
            }
            prev_len = len;
            prev_phase = tw.phase();
        }
    }

    /// Filtering twice by the same label yields the same selection.
    #[test]
    fn filter_is_idempotent(index in 0..CATEGORIES.len()) {
        let category = CATEGORIES[index];
        let once = filter_projects(PROJECTS, category);
        let owned: Vec<_> = once.iter().map(|p| **p).collect();
        let twice = filter_projects(&owned, category);

        prop_assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(&twice) {
            prop_assert_eq!(a.id, b.id);
        }
    }

    /// Every filtered selection is a subsequence of the full list.
    #[test]
    fn filter_preserves_order(index in 0..CATEGORIES.len()) {
        let category = CATEGORIES[index];
        let filtered = filter_projects(PROJECTS, category);
        let ids: Vec<u32> = filtered.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ids, sorted, "source list is id-ordered, so selections must be too");
    }
}
