//! Parsing of numeric literals: `R`, `iI`, and `R+iI`

use num_complex::Complex64;

/// Parse a token as a complex literal, or return `None` if it is not one.
///
/// The forms are tried in the order `R+iI`, `R`, `iI`. A token must be
/// consumed in full: `3.4.5` or `2+i3x` are not literals.
pub fn parse(token: &str) -> Option<Complex64> {
    combined(token)
        .or_else(|| real(token))
        .or_else(|| imaginary(token))
}

// R+iI - both components must be present and valid
fn combined(token: &str) -> Option<Complex64> {
    let (re, im) = token.split_once("+i")?;
    Some(Complex64::new(float(re)?, float(im)?))
}

fn real(token: &str) -> Option<Complex64> {
    Some(Complex64::new(float(token)?, 0.))
}

fn imaginary(token: &str) -> Option<Complex64> {
    let im = token.strip_prefix('i')?;
    Some(Complex64::new(0., float(im)?))
}

fn float(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms() {
        assert_eq!(parse("3"), Some(Complex64::new(3., 0.)));
        assert_eq!(parse("-2.5e1"), Some(Complex64::new(-25., 0.)));
        assert_eq!(parse("i3"), Some(Complex64::new(0., 3.)));
        assert_eq!(parse("i-0.5"), Some(Complex64::new(0., -0.5)));
        assert_eq!(parse("2+i3"), Some(Complex64::new(2., 3.)));
        assert_eq!(parse("-1.5+i-2"), Some(Complex64::new(-1.5, -2.)));
        assert_eq!(parse("1e-3+i2E2"), Some(Complex64::new(0.001, 200.)));
    }

    #[test]
    fn not_literals() {
        for token in ["", "+", "-", "i", "xyz", "sin", "3.4.5", "2+i", "+i3", "2+i3x", "1e"] {
            assert_eq!(parse(token), None, "{token}");
        }
    }

    // The combined form must never degrade into a real-only parse of its prefix
    #[test]
    fn no_partial_consumption() {
        assert_eq!(parse("2+i3.3.3"), None);
        assert_eq!(parse("2.x+i3"), None);
    }

    #[test]
    fn special_values() {
        let inf = parse("inf").unwrap();
        assert!(inf.re.is_infinite() && inf.im == 0.);
        let nan = parse("iNaN").unwrap();
        assert!(nan.im.is_nan() && nan.re == 0.);
    }
}
