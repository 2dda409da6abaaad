//! RPNC: the complex number RPN calculator
use clap::Parser;
use log::debug;
use rpnc::prelude::*;
use std::io::{self, Write};

/// RPNC: A Reverse Polish Notation calculator for complex numbers.
/// Literals are `R`, `iI` or `R+iI`. Type `.com` for the operators,
/// `.` to print the top of the stack, and `.q` to quit.
#[derive(Parser, Debug)]
#[clap(name = "rpnc")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Tokens to evaluate instead of reading standard input
    #[clap(allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    debug!("{:#?}", options);

    let mut calc = Calculator::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if options.tokens.is_empty() {
        let stdin = io::stdin();
        calc.run(stdin.lock(), &mut out)?;
    } else {
        // Each argument may hold several tokens, as in `rpnc "3 4 +" .`
        let script = options.tokens.join("\n");
        calc.run(script.as_bytes(), &mut out)?;
    }

    out.flush()?;
    Ok(())
}
