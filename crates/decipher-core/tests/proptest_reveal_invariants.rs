#![forbid(unsafe_code)]
//! Property tests for the scramble-reveal invariants.
//!
//! Run with: cargo test -p decipher-core --test proptest_reveal_invariants

use std::time::Duration;

use decipher_core::charset::Charset;
use decipher_core::reveal::RevealRun;
use proptest::prelude::*;

fn arb_text() -> impl Strategy<Value = String> {
    "[ -~]{0,48}" // printable ASCII, spaces included
}

fn arb_dts() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..250, 0..40)
}

proptest! {
    /// The reveal count never decreases across any tick sequence.
    #[test]
    fn reveal_count_is_monotonic(text in arb_text(), dts in arb_dts()) {
        let mut run = RevealRun::new(&text).reveal_delay(Duration::from_millis(30));
        let mut last = run.revealed();
        for dt in dts {
            run.tick(Duration::from_millis(dt));
            prop_assert!(run.revealed() >= last);
            last = run.revealed();
        }
    }

    /// Every revealed index displays the true character; every index is in
    /// bounds of the reveal count invariant.
    #[test]
    fn revealed_prefix_is_the_target(text in arb_text(), dts in arb_dts()) {
        let mut run = RevealRun::new(&text);
        let chars: Vec<char> = text.chars().collect();
        for dt in dts {
            run.tick(Duration::from_millis(dt));
            prop_assert!(run.revealed() <= chars.len());
            for i in 0..run.revealed() {
                prop_assert_eq!(run.display_char(i), Some(chars[i]));
            }
        }
    }

    /// Space indices display a space at every sampled time.
    #[test]
    fn spaces_are_never_scrambled(text in arb_text(), dts in arb_dts()) {
        let mut run = RevealRun::new(&text).flip_delay(Duration::ZERO);
        let chars: Vec<char> = text.chars().collect();
        for dt in dts {
            run.tick(Duration::from_millis(dt));
            for (i, ch) in chars.iter().enumerate() {
                if *ch == ' ' {
                    prop_assert_eq!(run.display_char(i), Some(' '));
                }
            }
        }
    }

    /// Unrevealed non-space indices always display a charset member.
    #[test]
    fn scramble_glyphs_are_charset_members(
        text in arb_text(),
        pool in "[a-z0-9]{1,16}",
        dts in arb_dts(),
    ) {
        let charset = Charset::new(&pool);
        let mut run = RevealRun::new(&text)
            .charset(charset.clone())
            .flip_delay(Duration::from_millis(20));
        let chars: Vec<char> = text.chars().collect();
        for dt in dts {
            run.tick(Duration::from_millis(dt));
            for (i, ch) in chars.iter().enumerate() {
                if i >= run.revealed() && *ch != ' ' {
                    let shown = run.display_char(i).unwrap();
                    prop_assert!(charset.contains(shown));
                }
            }
        }
    }

    /// Once total elapsed time reaches `reveal_delay * len`, the run is
    /// complete and displays the target exactly.
    #[test]
    fn completion_is_bounded_by_len_times_delay(text in arb_text(), delay_ms in 1u64..80) {
        let delay = Duration::from_millis(delay_ms);
        let mut run = RevealRun::new(&text).reveal_delay(delay);
        let len = text.chars().count() as u32;
        run.tick(delay * len);
        prop_assert!(run.is_complete());
        prop_assert_eq!(run.display(), text);
    }

    /// A run replays identically for the same seed and tick sequence.
    #[test]
    fn runs_are_deterministic(text in arb_text(), seed in any::<u64>(), dts in arb_dts()) {
        let mut a = RevealRun::new(&text).seed(seed);
        let mut b = RevealRun::new(&text).seed(seed);
        for dt in &dts {
            a.tick(Duration::from_millis(*dt));
            b.tick(Duration::from_millis(*dt));
            prop_assert_eq!(a.display(), b.display());
        }
    }
}
