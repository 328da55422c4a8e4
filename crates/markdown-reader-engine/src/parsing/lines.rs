/// A cursor over the lines of a document, used by the block parser.
///
/// Lines are split on `\n`; a single trailing `\r` is dropped so CRLF input
/// behaves like LF. A trailing newline yields a final empty line, matching
/// how the text is laid out on screen.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    i: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        let lines = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        Self { lines, i: 0 }
    }

    /// Index of the current line.
    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.lines.len()
    }

    /// The current line, untrimmed.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.i).copied()
    }

    /// Advances past the current line, returning it.
    pub fn bump(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.i += 1;
        Some(line)
    }

    /// Consumes lines while `f` maps them to `Some`, collecting the results.
    ///
    /// Stops at (and does not consume) the first line mapped to `None`.
    pub fn take_while_map<T>(&mut self, mut f: impl FnMut(&'a str) -> Option<T>) -> Vec<T> {
        let mut out = vec![];
        while let Some(line) = self.peek() {
            match f(line) {
                Some(v) => {
                    out.push(v);
                    self.i += 1;
                }
                None => break,
            }
        }
        out
    }

    /// Consumes lines until one satisfies `is_end`, returning the lines before it.
    ///
    /// The terminating line is consumed too. Returns `(lines, closed)`, where
    /// `closed` is false if input ran out first.
    pub fn take_until(&mut self, mut is_end: impl FnMut(&str) -> bool) -> (Vec<&'a str>, bool) {
        let mut out = vec![];
        while let Some(line) = self.bump() {
            if is_end(line) {
                return (out, true);
            }
            out.push(line);
        }
        (out, false)
    }
}
