use std::collections::VecDeque;
use std::io::BufRead;

/// Whitespace delimited tokens from a reader, one line read at a time,
/// so an interactive session is answered as soon as a line is entered.
///
/// Invalid UTF-8 is replaced by U+FFFD, so a mangled token is just an
/// unrecognized token, and the rest of its line survives.
pub struct Tokens<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Tokens {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending.is_empty() {
            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => return None,
                Ok(_) => self.pending.extend(
                    String::from_utf8_lossy(&self.line)
                        .split_whitespace()
                        .map(String::from),
                ),
                Err(e) => return Some(Err(e)),
            }
        }
        self.pending.pop_front().map(Ok)
    }
}

// ----- T E S T S ---------------------------------------------------------------------
