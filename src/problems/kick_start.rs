use std::io::BufRead;

use proconio::{input, source::Source};

use super::Solution;

const KICK: &[u8] = b"KICK";
const START: &[u8] = b"START";

/// One case of the Kick Start warm-up: count the pairs of a `KICK` marker
/// followed (at any later index, overlaps included) by a `START` marker.
#[derive(Debug, Clone)]
pub struct Input {
    text: String,
}

impl Input {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Solution for Input {
    type Answer = u64;

    const NUMBERED_CASES: bool = true;

    fn read_case<R: BufRead, S: Source<R>>(source: &mut S) -> Self {
        input! {
            from &mut *source,
            text: String,
        }

        Self { text }
    }

    /// Scans right-to-left, so `starts_seen` is the number of `START`
    /// markers beginning at or after the current index. No index can
    /// carry both markers, so every `KICK` pairs with exactly those.
    fn solve(&self) -> u64 {
        let text = self.text.as_bytes();
        let mut starts_seen = 0u64;
        let mut pairs = 0u64;

        for i in (0..text.len()).rev() {
            if text[i..].starts_with(START) {
                starts_seen += 1;
            }

            if text[i..].starts_with(KICK) {
                pairs += starts_seen;
            }
        }

        pairs
    }
}
