use std::{fmt::Display, io::BufRead};

use proconio::{input, source::Source};

use super::Solution;

/// One case of the circular-city hop: cities `1..=n` sit on a ring, and a
/// traveller at city `x` takes fixed jumps of `k` cities forward, past
/// city `n`, hoping to land exactly on city `y`.
#[derive(Debug, Clone, Copy)]
pub struct Input {
    city_cnt: i64,
    jump_len: i64,
    start_city: i64,
    target_city: i64,
}

impl Input {
    pub fn new(city_cnt: i64, jump_len: i64, start_city: i64, target_city: i64) -> Self {
        Self {
            city_cnt,
            jump_len,
            start_city,
            target_city,
        }
    }

    /// Forward distance from start to target, wrapping past city `n`.
    fn distance(&self) -> i64 {
        self.city_cnt - self.start_city + self.target_city
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachable {
    Yes,
    No,
}

impl Display for Reachable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reachable::Yes => write!(f, "YES"),
            Reachable::No => write!(f, "NO"),
        }
    }
}

impl Solution for Input {
    type Answer = Reachable;

    fn read_case<R: BufRead, S: Source<R>>(source: &mut S) -> Self {
        input! {
            from &mut *source,
            city_cnt: i64,
            jump_len: i64,
            start_city: i64,
            target_city: i64,
        }

        Self {
            city_cnt,
            jump_len,
            start_city,
            target_city,
        }
    }

    fn solve(&self) -> Reachable {
        // a zero jump never advances; guard before taking the modulo
        if self.jump_len != 0 && self.distance() % self.jump_len == 0 {
            Reachable::Yes
        } else {
            Reachable::No
        }
    }
}
