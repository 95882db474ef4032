//! Judge-facing plumbing: run-environment configuration and the batch
//! driver every binary goes through.

use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    rc::Rc,
    str::FromStr,
};

use proconio::{
    input,
    source::{auto::AutoSource, Source},
};

use crate::problems::Solution;

thread_local! {
    static CONFIG: Rc<Config> = Rc::new(Config::new());
}

/// Where a binary reads cases from and writes answers to.
///
/// On the judge (`ONLINE_JUDGE` set) this is always stdin/stdout. Locally,
/// `CP_INPUT` / `CP_OUTPUT` may redirect either side to a file.
pub struct Config {
    input_file: Option<String>,
    output_file: Option<String>,
}

impl Config {
    fn new() -> Self {
        let online_judge = env::var("ONLINE_JUDGE").is_ok();

        let (input_file, output_file) = if online_judge {
            (None, None)
        } else {
            (
                non_empty(get_env("CP_INPUT", String::new())),
                non_empty(get_env("CP_OUTPUT", String::new())),
            )
        };

        Self {
            input_file,
            output_file,
        }
    }

    pub fn get() -> Rc<Self> {
        CONFIG.with(|c| c.clone())
    }

    pub fn input_file(&self) -> Option<&str> {
        self.input_file.as_deref()
    }

    pub fn output_file(&self) -> Option<&str> {
        self.output_file.as_deref()
    }
}

fn get_env<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Entry point shared by the binaries: resolve the run environment, then
/// feed every case through [`run_batch`].
pub fn run<P: Solution>() {
    let config = Config::get();

    let reader: Box<dyn BufRead> = match config.input_file() {
        Some(path) => Box::new(BufReader::new(
            File::open(path).expect("cannot open input file"),
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let writer: Box<dyn Write> = match config.output_file() {
        Some(path) => Box::new(File::create(path).expect("cannot create output file")),
        None => Box::new(io::stdout()),
    };

    let mut source = AutoSource::new(reader);
    let mut out = BufWriter::new(writer);

    run_batch::<P, _, _, _>(&mut source, &mut out);

    out.flush().expect("cannot flush output");
}

/// Reads the leading case count, then solves and prints each case in
/// input order.
pub fn run_batch<P, R, S, W>(source: &mut S, out: &mut W)
where
    P: Solution,
    R: BufRead,
    S: Source<R>,
    W: Write,
{
    input! {
        from &mut *source,
        case_cnt: usize,
    }

    for case in 1..=case_cnt {
        let input = P::read_case(&mut *source);
        let answer = input.solve();

        if P::NUMBERED_CASES {
            writeln!(out, "Case #{}: {}", case, answer).expect("cannot write answer");
        } else {
            writeln!(out, "{}", answer).expect("cannot write answer");
        }
    }
}

/// Prints `name = value` pairs to stderr. Judges discard stderr, so calls
/// may stay in submitted code.
#[macro_export]
macro_rules! debug {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        eprint!("[{}:{}] {} = {:?}", file!(), line!(), stringify!($first), &$first);
        $(eprint!(", {} = {:?}", stringify!($rest), &$rest);)*
        eprintln!();
    }};
}
