use contest_solutions::{judge, problems::kick_start};

fn main() {
    judge::run::<kick_start::Input>();
}
