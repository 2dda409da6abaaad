//! *A calculator for complex numbers, speaking Reverse Polish Notation*.
//!
//! Tokens are read one at a time: numeric literals (`3`, `i2.5`,
//! `1.5+i-2`) are pushed onto a stack, operators (`+`, `sin`, `mean`, ...)
//! consume elements from the top of the stack and push their result.
//!
//! ```
//! use rpnc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! let mut out = Vec::new();
//! for token in ["3", "4", "+", "."] {
//!     calc.step(token, &mut out)?;
//! }
//! assert_eq!(String::from_utf8_lossy(&out), "(7.000000)\n");
//! # Ok::<(), rpnc::Error>(())
//! ```

mod evaluator;
mod literal;
mod operator;
mod stack;

/// The bread-and-butter, shrink-wrapped for external use
pub mod prelude {
    pub use crate::evaluator::Calculator;
    pub use crate::evaluator::Command;
    pub use crate::evaluator::Flow;
    pub use crate::evaluator::Tokens;
    pub use crate::operator::Arity;
    pub use crate::operator::Operator;
    pub use crate::stack::Stack;
    pub use crate::Error;
    pub use num_complex::Complex64;
}

/// Preamble for the operator body modules
pub(crate) mod authoring {
    pub use log::debug;
    pub use log::trace;
    pub use log::warn;

    pub use crate::operator::Operator;
    pub use crate::stack::Stack;
    pub use crate::Error;
    pub use num_complex::Complex64;
}

pub use evaluator::classify;
pub use evaluator::format;
pub use literal::parse as parse_literal;
pub use operator::lookup;
pub use operator::OPERATORS;

use std::io;
use thiserror::Error;

/// The messages of the two non-fatal variants are part of the program's
/// output, and are printed verbatim by the evaluator loop
#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error")]
    Io(#[from] io::Error),

    #[error("stack too small")]
    StackTooSmall,

    #[error("Oops - unrecognized operation (.com for availible operations)")]
    Unrecognized,
}
