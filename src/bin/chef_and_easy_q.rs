use contest_solutions::{judge, problems::chef_and_easy_q};

fn main() {
    judge::run::<chef_and_easy_q::Input>();
}
