/// A cursor for byte-by-byte inline scanning with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position
/// (via `base` offset), so spans can point into a larger document.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Base offset added to the local index for absolute positions.
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The byte just before the cursor, if any. Used for look-behind checks.
    pub fn prev(&self) -> Option<u8> {
        self.i.checked_sub(1).and_then(|j| self.s.as_bytes().get(j).copied())
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances while the current byte is not one of `stops`.
    pub fn bump_until(&mut self, stops: &[u8]) {
        while let Some(b) = self.peek() {
            if stops.contains(&b) {
                break;
            }
            self.i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello", 10);
        assert_eq!(cur.pos(), 10);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 11);
    }

    #[test]
    fn prev_looks_behind() {
        let mut cur = Cursor::new("*a", 0);
        assert_eq!(cur.prev(), None);
        cur.bump();
        assert_eq!(cur.prev(), Some(b'*'));
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**bold**", 0);
        assert!(cur.starts_with(b"**"));
        assert!(!cur.starts_with(b"]("));
    }

    #[test]
    fn starts_with_past_end() {
        let mut cur = Cursor::new("ab", 0);
        cur.bump_n(5);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"a"));
    }

    #[test]
    fn bump_until_stops_at_delimiter() {
        let mut cur = Cursor::new("abc*def", 0);
        cur.bump_until(b"*\n");
        assert_eq!(cur.pos(), 3);
        assert_eq!(cur.peek(), Some(b'*'));
    }

    #[test]
    fn bump_until_runs_to_eof() {
        let mut cur = Cursor::new("abc", 0);
        cur.bump_until(b"`");
        assert!(cur.eof());
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x", 0);
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }
}
