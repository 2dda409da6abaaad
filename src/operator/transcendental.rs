use super::unary;
use crate::authoring::*;

pub(super) fn exp(stack: Stack) -> Stack {
    unary(stack, Complex64::exp)
}

// Principal branch
pub(super) fn log(stack: Stack) -> Stack {
    unary(stack, Complex64::ln)
}

pub(super) fn sin(stack: Stack) -> Stack {
    unary(stack, Complex64::sin)
}

pub(super) fn cos(stack: Stack) -> Stack {
    unary(stack, Complex64::cos)
}

pub(super) fn tan(stack: Stack) -> Stack {
    unary(stack, Complex64::tan)
}

pub(super) fn asin(stack: Stack) -> Stack {
    unary(stack, Complex64::asin)
}

pub(super) fn acos(stack: Stack) -> Stack {
    unary(stack, Complex64::acos)
}

pub(super) fn atan(stack: Stack) -> Stack {
    unary(stack, Complex64::atan)
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_4, PI};

    fn top_after(f: fn(Stack) -> Stack, re: f64, im: f64) -> Complex64 {
        let stack = f(Stack::from(vec![Complex64::new(re, im)]));
        assert_eq!(stack.len(), 1);
        stack.top().unwrap()
    }

    #[test]
    fn exp_and_log() {
        let z = top_after(exp, 1., 0.);
        assert_float_eq!(z.re, E, abs <= 1e-12);

        // e**(i pi) = -1
        let z = top_after(exp, 0., PI);
        assert_float_eq!(z.re, -1., abs <= 1e-12);
        assert_float_eq!(z.im, 0., abs <= 1e-12);

        // log(-1) = i pi
        let z = top_after(log, -1., 0.);
        assert_float_eq!(z.re, 0., abs <= 1e-12);
        assert_float_eq!(z.im, PI, abs <= 1e-12);
    }

    #[test]
    fn trigonometry() {
        let z = top_after(sin, FRAC_PI_2, 0.);
        assert_float_eq!(z.re, 1., abs <= 1e-12);

        let z = top_after(cos, 0., 0.);
        assert_float_eq!(z.re, 1., abs <= 1e-12);

        let z = top_after(tan, FRAC_PI_4, 0.);
        assert_float_eq!(z.re, 1., abs <= 1e-12);

        // sin(i) = i sinh(1)
        let z = top_after(sin, 0., 1.);
        assert_float_eq!(z.re, 0., abs <= 1e-12);
        assert_float_eq!(z.im, 1f64.sinh(), abs <= 1e-12);
    }

    #[test]
    fn inverse_trigonometry() {
        let z = top_after(asin, 1., 0.);
        assert_float_eq!(z.re, FRAC_PI_2, abs <= 1e-12);

        let z = top_after(acos, 1., 0.);
        assert_float_eq!(z.re, 0., abs <= 1e-12);

        let z = top_after(atan, 1., 0.);
        assert_float_eq!(z.re, FRAC_PI_4, abs <= 1e-12);

        // Outside the real domain of asin, the result is complex
        let z = top_after(asin, 2., 0.);
        assert_float_eq!(z.re, FRAC_PI_2, abs <= 1e-12);
        assert!(z.im.abs() > 1.);
    }
}
