use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rdcalc::{
    Associativity, ParseOptions, get_result,
    interpreter::parser::options::DEFAULT_MAX_DEPTH,
};

/// Which strategy's output to print on its own.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Recursive tree evaluation.
    Tree,
    /// Explicit-stack evaluation.
    Stack,
    /// Postfix (reverse-Polish) rendering.
    Postfix,
}

/// rdcalc evaluates arithmetic expressions with a recursive-descent parser.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the tree result, the postfix sequence and the stack result on
    /// three lines.
    #[arg(short, long, conflicts_with = "strategy")]
    all: bool,

    /// Print the output of a single strategy.
    #[arg(short, long, value_enum, default_value_t = Strategy::Tree)]
    strategy: Strategy,

    /// Group chained operators from the left, so `1-2-3` is `-4`.
    #[arg(long)]
    left_assoc: bool,

    /// Ignore tokens after a complete expression instead of failing.
    #[arg(long)]
    allow_trailing: bool,

    /// Maximum parser recursion depth.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// The expression to evaluate, e.g. "(2+3)*4".
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

impl Args {
    fn options(&self) -> ParseOptions {
        ParseOptions { associativity:  if self.left_assoc {
                                           Associativity::Left
                                       } else {
                                           Associativity::Right
                                       },
                       allow_trailing: self.allow_trailing,
                       max_depth:      self.max_depth, }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let report = match get_result(&args.expression, &args.options()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    if args.all {
        println!("{report}");
    } else {
        match args.strategy {
            Strategy::Tree => println!("{}", report.tree),
            Strategy::Stack => println!("{}", report.stack),
            Strategy::Postfix => println!("{}", report.postfix),
        }
    }

    ExitCode::SUCCESS
}
