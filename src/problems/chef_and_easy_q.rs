use std::io::BufRead;

use proconio::{input, source::Source};

use super::Solution;

/// One case of CodeChef's CHEFEZQ: tasks arrive for `n` days and the
/// queue drains a fixed number of tasks per day.
#[derive(Debug, Clone)]
pub struct Input {
    process_per_day: u64,
    arrivals: Vec<u64>,
}

impl Input {
    pub fn new(process_per_day: u64, arrivals: Vec<u64>) -> Self {
        Self {
            process_per_day,
            arrivals,
        }
    }

    pub fn process_per_day(&self) -> u64 {
        self.process_per_day
    }

    pub fn arrivals(&self) -> &[u64] {
        &self.arrivals
    }
}

impl Solution for Input {
    type Answer = u64;

    fn read_case<R: BufRead, S: Source<R>>(source: &mut S) -> Self {
        input! {
            from &mut *source,
            n: usize,
            process_per_day: u64,
            arrivals: [u64; n],
        }

        Self {
            process_per_day,
            arrivals,
        }
    }

    /// First 1-based day on which the queue runs dry.
    ///
    /// Each arrival day adds that day's tasks and removes one day of
    /// capacity; the first day the backlog goes negative is the answer.
    /// A backlog still positive after the last arrival drains at capacity
    /// per day.
    fn solve(&self) -> u64 {
        let capacity = self.process_per_day as i64;
        let mut backlog = 0i64;

        for (day, &arrived) in self.arrivals.iter().enumerate() {
            backlog += arrived as i64 - capacity;

            if backlog < 0 {
                return day as u64 + 1;
            }
        }

        let n = self.arrivals.len() as u64;

        if backlog == 0 {
            n + 1
        } else {
            n + backlog as u64 / self.process_per_day + 1
        }
    }
}

#[cfg(test)]
mod test {
    use proconio::source::once::OnceSource;
    use rand::Rng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    /// Day-by-day reference simulation of the queue.
    fn simulate(process_per_day: u64, arrivals: &[u64]) -> u64 {
        let capacity = process_per_day as i64;
        let mut backlog = 0i64;
        let mut day = 0usize;

        loop {
            if let Some(&arrived) = arrivals.get(day) {
                backlog += arrived as i64;
            }

            day += 1;
            backlog -= capacity;

            if backlog < 0 {
                return day as u64;
            }
        }
    }

    #[test]
    fn runs_dry_on_the_first_short_day() {
        assert_eq!(Input::new(5, vec![1, 1, 1]).solve(), 1);
    }

    #[test]
    fn runs_dry_after_arrivals_stop() {
        assert_eq!(Input::new(2, vec![5, 1, 1]).solve(), 4);
    }

    #[test]
    fn exact_drain_finishes_the_day_after() {
        assert_eq!(Input::new(2, vec![2, 2]).solve(), 3);
    }

    #[test]
    fn leftover_drains_at_capacity() {
        assert_eq!(Input::new(2, vec![3, 3, 3]).solve(), 5);
        assert_eq!(Input::new(2, vec![6]).solve(), 4);
    }

    #[test]
    fn reads_case_tokens() {
        let mut source = OnceSource::from("3 2\n3 3 3\n");
        let input = Input::read_case(&mut source);

        assert_eq!(input.process_per_day(), 2);
        assert_eq!(input.arrivals(), &[3, 3, 3]);
        assert_eq!(input.solve(), 5);
    }

    #[test]
    fn matches_simulation() {
        let mut rng = Pcg64Mcg::new(42);

        for _ in 0..1000 {
            let n = rng.gen_range(1..=30);
            let process_per_day = rng.gen_range(1..=10);
            let arrivals = (0..n).map(|_| rng.gen_range(0..=15)).collect::<Vec<_>>();

            let expected = simulate(process_per_day, &arrivals);
            let actual = Input::new(process_per_day, arrivals.clone()).solve();

            assert_eq!(
                actual, expected,
                "process_per_day = {}, arrivals = {:?}",
                process_per_day, arrivals
            );
        }
    }
}
