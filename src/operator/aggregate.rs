//! Operators working on the stack as a whole
use crate::authoring::*;

pub(super) fn sum(stack: Stack) -> Stack {
    let total: Complex64 = stack.iter().sum();
    Stack::from(vec![total])
}

// The mean of the empty stack is 0/0, i.e. NaN, not an error
pub(super) fn mean(stack: Stack) -> Stack {
    let total: Complex64 = stack.iter().sum();
    let n = Complex64::new(stack.len() as f64, 0.);
    Stack::from(vec![total / n])
}

pub(super) fn clear(_stack: Stack) -> Stack {
    Stack::new()
}

pub(super) fn count(mut stack: Stack) -> Stack {
    let n = stack.len() as f64;
    stack.push(Complex64::new(n, 0.));
    stack
}

pub(super) fn pop(mut stack: Stack) -> Stack {
    let discarded = stack.pop();
    trace!("pop: discarding {discarded}");
    stack
}

// ----- T E S T S ---------------------------------------------------------------------
