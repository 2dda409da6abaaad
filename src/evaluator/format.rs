//! Rendering of stack values and of the command listing

use crate::operator::OPERATORS;
use num_complex::Complex64;

/// Shown by `.` when the stack is empty
pub const EMPTY: &str = "(*.******)";

/// The meta-commands handled directly by the evaluator loop, listed after
/// the operators
#[rustfmt::skip]
pub const META_COMMANDS: [(&str, &str); 3] = [
    (".",    "prints the top value of stack"),
    (".q",   "quits the program"),
    (".com", "lists all availiable commands"),
];

/// `(R)` for real values, `(R+iI)` otherwise, or the empty marker
pub fn top_of_stack(top: Option<Complex64>) -> String {
    let Some(z) = top else {
        return EMPTY.to_string();
    };
    if z.im == 0. {
        return format!("({})", fixed(z.re));
    }
    format!("({}+i{})", fixed(z.re), fixed(z.im))
}

/// Six decimals, with the non-finite values spelled `NaN`, `+Inf`, `-Inf`
pub fn fixed(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0. { "+Inf" } else { "-Inf" }.to_string();
    }
    format!("{x:.6}")
}

/// The command listing: one line per operator in table order, then the
/// meta-commands. Tokens are right aligned in a column one character
/// wider than the longest token, and two spaces precede the description.
pub fn listing() -> String {
    let rows: Vec<(&str, &str)> = OPERATORS
        .iter()
        .map(|op| (op.token, op.description))
        .chain(META_COMMANDS)
        .collect();
    let width = rows.iter().map(|row| row.0.len()).max().unwrap_or(0) + 1;

    let mut text = String::new();
    for (token, description) in rows {
        text += &format!("{token:>width$}  {description}\n");
    }
    text
}

// ----- T E S T S ---------------------------------------------------------------------
