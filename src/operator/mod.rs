use crate::authoring::*;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

// ----- B U I L T I N   O P E R A T O R S ---------------------------------------------

// Install new operators by adding them in the `mod` and `OPERATORS`
// blocks below. The order of `OPERATORS` is the order of the help listing

mod aggregate;
mod arithmetic;
mod transcendental;

use Arity::{Any, Exactly};

#[rustfmt::skip]
pub static OPERATORS: [Operator; 18] = [
    Operator::new("+",     "(y+x) adds x and y on the stack",                 Exactly(2), InnerOp(arithmetic::add)),
    Operator::new("-",     "(y-x) takes x from y on the stack",               Exactly(2), InnerOp(arithmetic::subtract)),
    Operator::new("*",     "(y*x) multiplies x with y on the stack",          Exactly(2), InnerOp(arithmetic::multiply)),
    Operator::new("/",     "(y/x) divides y by x on the stack",               Exactly(2), InnerOp(arithmetic::divide)),
    Operator::new("^",     "(y**x) raises y to the power of x on the stack",  Exactly(2), InnerOp(arithmetic::power)),
    Operator::new("$",     "(e**x) raises e to the power of x on the stack",  Exactly(1), InnerOp(transcendental::exp)),
    Operator::new("log",   "(log x) logs x on the stack",                     Exactly(1), InnerOp(transcendental::log)),
    Operator::new("sin",   "(sin x) sins x on the stack",                     Exactly(1), InnerOp(transcendental::sin)),
    Operator::new("cos",   "(cos x) coses x on the stack",                    Exactly(1), InnerOp(transcendental::cos)),
    Operator::new("tan",   "(tan x) tans x on the stack",                     Exactly(1), InnerOp(transcendental::tan)),
    Operator::new("asin",  "(asin x) asins x on the stack",                   Exactly(1), InnerOp(transcendental::asin)),
    Operator::new("acos",  "(acos x) acoses x on the stack",                  Exactly(1), InnerOp(transcendental::acos)),
    Operator::new("atan",  "(atan x) atans x on the stack",                   Exactly(1), InnerOp(transcendental::atan)),
    Operator::new("sum",   "sums all values on the stack",                    Any,        InnerOp(aggregate::sum)),
    Operator::new("mean",  "takes the mean of all the values on the stack",   Any,        InnerOp(aggregate::mean)),
    Operator::new("clear", "clears the stack",                                Any,        InnerOp(aggregate::clear)),
    Operator::new("count", "counts the number of values on the stack",        Any,        InnerOp(aggregate::count)),
    Operator::new("pop",   "pops the element at the top of the stack",        Exactly(1), InnerOp(aggregate::pop)),
];

// A BTreeMap cannot be compile-time const-constructed, so the index
// is built on first use
static INDEX: Lazy<BTreeMap<&'static str, &'static Operator>> =
    Lazy::new(|| OPERATORS.iter().map(|op| (op.token, op)).collect());

/// Find the operator invoked by `token` (exact match)
pub fn lookup(token: &str) -> Option<&'static Operator> {
    INDEX.get(token).copied()
}

// ----- S T R U C T   I N N E R O P ---------------------------------------------------

/// The body of an operator: takes the stack over, returns its new state.
///
/// Wrapped so `Operator` can derive `Debug`. The body runs only after
/// `Operator::apply` has checked the arity, so it never sees a stack
/// too small for it.
pub struct InnerOp(pub fn(stack: Stack) -> Stack);

// Cannot autoderive the Debug trait
impl core::fmt::Debug for InnerOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "InnerOp")
    }
}

// ----- S T R U C T   O P E R A T O R -------------------------------------------------

/// The number of stack elements an operator requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Consumes this many elements from the top, so at least that many
    /// must be present
    Exactly(usize),
    /// Works on whatever is there, including nothing
    Any,
}

impl Arity {
    pub fn satisfied_by(&self, depth: usize) -> bool {
        match *self {
            Exactly(n) => depth >= n,
            Any => true,
        }
    }
}

/// The static description of an operator: its token, help text, arity,
/// and the function doing the work
#[derive(Debug)]
pub struct Operator {
    pub token: &'static str,
    pub description: &'static str,
    pub arity: Arity,
    pub inner: InnerOp,
}

impl Operator {
    pub const fn new(
        token: &'static str,
        description: &'static str,
        arity: Arity,
        inner: InnerOp,
    ) -> Operator {
        Operator {
            token,
            description,
            arity,
            inner,
        }
    }

    /// Apply the operator to `stack`, returning the new stack. If the stack
    /// is too small, it is handed back untouched along with the error.
    pub fn apply(&self, stack: Stack) -> (Stack, Result<(), Error>) {
        if !self.arity.satisfied_by(stack.len()) {
            warn!(
                "{}: needs {:?}, stack depth is {}",
                self.token,
                self.arity,
                stack.len()
            );
            return (stack, Err(Error::StackTooSmall));
        }
        debug!("{}: applied to {}", self.token, stack);
        ((self.inner.0)(stack), Ok(()))
    }
}

// ----- A N C I L L A R Y   F U N C T I O N S -----------------------------------------

// Pop x, then y, and push f(y, x)
pub(crate) fn binary(mut stack: Stack, f: fn(Complex64, Complex64) -> Complex64) -> Stack {
    let x = stack.pop();
    let y = stack.pop();
    stack.push(f(y, x));
    stack
}

pub(crate) fn unary(mut stack: Stack, f: fn(Complex64) -> Complex64) -> Stack {
    let x = stack.pop();
    stack.push(f(x));
    stack
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(values: &[(f64, f64)]) -> Stack {
        Stack::from(
            values
                .iter()
                .map(|&(re, im)| Complex64::new(re, im))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn table() {
        let tokens: Vec<&str> = OPERATORS.iter().map(|op| op.token).collect();
        assert_eq!(
            tokens,
            [
                "+", "-", "*", "/", "^", "$", "log", "sin", "cos", "tan", "asin", "acos", "atan",
                "sum", "mean", "clear", "count", "pop"
            ]
        );
        for op in OPERATORS.iter() {
            assert!(std::ptr::eq(lookup(op.token).unwrap(), op));
        }
        assert!(lookup("xyz").is_none());
        assert!(lookup("SIN").is_none());
        assert!(lookup(" sin").is_none());
    }

    #[test]
    fn underflow_leaves_stack_untouched() {
        for op in OPERATORS.iter() {
            let Exactly(n) = op.arity else {
                continue;
            };
            let before = stack_of(&vec![(1., 2.); n - 1]);
            let (after, status) = op.apply(before.clone());
            assert!(matches!(status, Err(Error::StackTooSmall)), "{}", op.token);
            assert_eq!(after, before, "{}", op.token);
        }
    }

    #[test]
    fn operand_order() -> Result<(), Error> {
        // 10 2 - => 8, 10 2 / => 5
        let (stack, status) = lookup("-").unwrap().apply(stack_of(&[(7., 0.), (10., 0.), (2., 0.)]));
        status?;
        assert_eq!(stack, stack_of(&[(7., 0.), (8., 0.)]));

        let (stack, status) = lookup("/").unwrap().apply(stack_of(&[(10., 0.), (2., 0.)]));
        status?;
        assert_eq!(stack, stack_of(&[(5., 0.)]));
        Ok(())
    }
}
