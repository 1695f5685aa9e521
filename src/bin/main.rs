use std::env;
use std::io::{self, Write};
use std::process::exit;

use clap::Parser;
use clap::error::ErrorKind;

use fraction_abi::operation::{OperationSet, run};

/// Exact rational arithmetic, printing the result as an ABI encoded (int256, uint256).
///
/// Computes `a/b <operation> c/d`.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
#[command(allow_negative_numbers = true)]
struct Opts {
    /// One of add, sub, mul, div, lt, gt, eq, neq, lte, gte
    #[arg(allow_hyphen_values = true)]
    operation: String,
    /// Numerator of the left operand
    #[arg(allow_hyphen_values = true)]
    a: String,
    /// Denominator of the left operand
    #[arg(allow_hyphen_values = true)]
    b: String,
    /// Numerator of the right operand
    #[arg(allow_hyphen_values = true)]
    c: String,
    /// Denominator of the right operand
    #[arg(allow_hyphen_values = true)]
    d: String,
    /// Only accept add, sub, mul and div; must precede the operation
    #[arg(long)]
    arithmetic_only: bool,
}

fn main() {
    env_logger::init();

    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
            _ => {
                log::debug!("{}", error);
                let program = env::args().next().unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string());
                eprintln!("Usage: {} operation a b c d", program);
                exit(1);
            },
        },
    };

    let operations = if opts.arithmetic_only {
        OperationSet::Arithmetic
    } else {
        OperationSet::Full
    };

    let operands = [opts.a.as_str(), opts.b.as_str(), opts.c.as_str(), opts.d.as_str()];
    let encoded = match run(operations, &opts.operation, operands) {
        Ok(encoded) => encoded,
        Err(error) => {
            eprintln!("error: {}", error);
            exit(1);
        },
    };

    let mut stdout = io::stdout().lock();
    if let Err(error) = write!(stdout, "{}", encoded).and_then(|()| stdout.flush()) {
        eprintln!("error: could not write the result: {}", error);
        exit(1);
    }
}
