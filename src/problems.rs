pub mod chef_and_easy_q;
pub mod city_hop;
pub mod kick_start;

use std::{fmt::Display, io::BufRead};

use proconio::source::Source;

/// A single test case of one judge problem.
pub trait Solution {
    type Answer: Display;

    /// `true` for judges that expect the `Case #i: ` output prefix.
    const NUMBERED_CASES: bool = false;

    /// Reads one case from the token stream.
    fn read_case<R: BufRead, S: Source<R>>(source: &mut S) -> Self;

    /// Computes the answer for this case.
    fn solve(&self) -> Self::Answer;
}
