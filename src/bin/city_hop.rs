use contest_solutions::{judge, problems::city_hop};

fn main() {
    judge::run::<city_hop::Input>();
}
