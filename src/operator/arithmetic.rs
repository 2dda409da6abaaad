//! The binary operators: y ∘ x, where x is the top of the stack
use super::binary;
use crate::authoring::*;

pub(super) fn add(stack: Stack) -> Stack {
    binary(stack, |y, x| y + x)
}

pub(super) fn subtract(stack: Stack) -> Stack {
    binary(stack, |y, x| y - x)
}

pub(super) fn multiply(stack: Stack) -> Stack {
    binary(stack, |y, x| y * x)
}

// Division by zero follows the floating point conventions: Inf or NaN
pub(super) fn divide(stack: Stack) -> Stack {
    binary(stack, |y, x| y / x)
}

pub(super) fn power(stack: Stack) -> Stack {
    binary(stack, pow)
}

/// The complex power y**x, with the conventional special cases for y = 0
pub(crate) fn pow(y: Complex64, x: Complex64) -> Complex64 {
    if y.re == 0. && y.im == 0. {
        if x.re.is_nan() || x.im.is_nan() {
            return Complex64::new(f64::NAN, f64::NAN);
        }
        if x.re == 0. {
            return Complex64::new(1., 0.);
        }
        if x.re < 0. {
            if x.im == 0. {
                return Complex64::new(f64::INFINITY, 0.);
            }
            return Complex64::new(f64::INFINITY, f64::INFINITY);
        }
        return Complex64::new(0., 0.);
    }

    // In polar form, so real powers of real bases stay exact
    let modulus = y.norm();
    let arg = y.arg();
    let mut r = modulus.powf(x.re);
    let mut theta = x.re * arg;
    if x.im != 0. {
        r *= (-x.im * arg).exp();
        theta += x.im * modulus.ln();
    }
    Complex64::from_polar(r, theta)
}

// ----- T E S T S ---------------------------------------------------------------------
