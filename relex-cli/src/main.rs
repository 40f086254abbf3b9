use clap::{Parser, ValueEnum};
use relex::Engine;
use thiserror::Error;

/// Compiles a regular expression and scans an input string for every
/// non-overlapping match.
#[derive(Debug, Parser)]
#[command(name = "relex-cli", version, about)]
struct RelexArgs {
    /// The pattern to compile.
    pattern: String,
    /// The text to scan for matches.
    input: String,
    /// Which representation drives the scan.
    #[arg(long, value_enum, default_value_t = Simulator::Dfa)]
    simulator: Simulator,
    /// Print compile-stage diagnostics (state counts, equivalence classes).
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Simulator {
    Dfa,
    Nfa,
}

#[derive(Debug, Error)]
enum Error {
    #[error("couldn't compile pattern: {0}")]
    Compile(#[from] relex::error::ParseError),
}

fn main() {
    let args = RelexArgs::parse();

    #[allow(unused_variables)]
    let log = |s: &str| {
        if args.verbose {
            println!("{s}")
        }
    };
    macro_rules! log {
        ($($t:tt)*) => (log(&format!($($t)*)))
    }

    if let Err(e) = run(&args, &log) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &RelexArgs, log: &impl Fn(&str)) -> Result<(), Error> {
    let engine = Engine::compile(&args.pattern)?;
    log!("compiled pattern {:?}", args.pattern);

    let input = args.input.as_bytes();
    let matches: Vec<_> = match args.simulator {
        Simulator::Dfa => engine.find_all(input).collect(),
        Simulator::Nfa => engine.find_all_nfa(input).collect(),
    };

    if matches.is_empty() {
        log!("no matches found");
    }
    for m in &matches {
        let text = String::from_utf8_lossy(&input[m.offset..m.offset + m.length]);
        println!("{}:{} {:?}", m.offset, m.length, text);
    }

    Ok(())
}
