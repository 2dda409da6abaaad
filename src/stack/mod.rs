use num_complex::Complex64;
use std::fmt;

/// The operand stack. Grows and shrinks at its tail only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack(Vec<Complex64>);

impl Stack {
    pub fn new() -> Stack {
        Stack(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, z: Complex64) {
        self.0.push(z);
    }

    /// Remove the top element. An empty stack yields zero: callers check
    /// arity before popping, so this only guards the arithmetic
    pub fn pop(&mut self) -> Complex64 {
        self.0.pop().unwrap_or_default()
    }

    pub fn top(&self) -> Option<Complex64> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Complex64> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.0
    }
}

impl From<Vec<Complex64>> for Stack {
    fn from(elements: Vec<Complex64>) -> Stack {
        Stack(elements)
    }
}

// Bottom to top, as in `[1+0i, 2+3i]`
impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, z) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{z}")?;
        }
        write!(f, "]")
    }
}

// ----- T E S T S ---------------------------------------------------------------------
