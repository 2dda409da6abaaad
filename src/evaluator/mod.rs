//! The evaluator loop: read a token, dispatch it, report the outcome

pub mod format;
mod tokens;

pub use tokens::Tokens;

use crate::authoring::*;
use crate::{literal, operator};
use std::io::{BufRead, Write};

/// What a token asks the evaluator to do
#[derive(Debug)]
pub enum Command<'a> {
    /// `.`: print the top of the stack
    Print,
    /// `.q`: stop evaluating
    Quit,
    /// `.com` or `?`: list the available commands
    Help,
    /// A numeric literal
    Push(Complex64),
    /// A known operator
    Apply(&'static Operator),
    /// Anything else
    Unrecognized(&'a str),
}

/// Decide what `token` means. The meta-commands take precedence over
/// literals, and literals over operators
pub fn classify(token: &str) -> Command<'_> {
    match token {
        "." => return Command::Print,
        ".q" => return Command::Quit,
        ".com" | "?" => return Command::Help,
        _ => (),
    }
    if let Some(z) = literal::parse(token) {
        return Command::Push(z);
    }
    if let Some(op) = operator::lookup(token) {
        return Command::Apply(op);
    }
    Command::Unrecognized(token)
}

/// Whether the evaluator should go on reading tokens
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Flow {
    Continue,
    Quit,
}

/// The calculator state: the stack, owned for the lifetime of the session
#[derive(Debug, Default)]
pub struct Calculator {
    stack: Stack,
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator::default()
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Process a single token, writing any output to `out`.
    ///
    /// Bad tokens and stack underflow are reported on `out` and are not
    /// errors: the only `Err` returned is a failure to write.
    pub fn step<W: Write>(&mut self, token: &str, out: &mut W) -> Result<Flow, Error> {
        debug!("token: {token}");
        match classify(token) {
            Command::Print => writeln!(out, "{}", format::top_of_stack(self.stack.top()))?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => write!(out, "{}", format::listing())?,
            Command::Push(z) => {
                trace!("push: {z}");
                self.stack.push(z);
            }
            Command::Apply(op) => {
                let stack = std::mem::take(&mut self.stack);
                let (stack, status) = op.apply(stack);
                self.stack = stack;
                if let Err(e) = status {
                    writeln!(out, "{e}")?;
                }
            }
            Command::Unrecognized(token) => {
                warn!("unrecognized: {token}");
                writeln!(out, "{}", Error::Unrecognized)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Evaluate the tokens of `input` until `.q` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), Error> {
        for token in Tokens::new(input) {
            let flow = self.step(&token?, out)?;
            out.flush()?;
            if flow == Flow::Quit {
                debug!("quit");
                break;
            }
        }
        Ok(())
    }
}

// ----- T E S T S ---------------------------------------------------------------------
