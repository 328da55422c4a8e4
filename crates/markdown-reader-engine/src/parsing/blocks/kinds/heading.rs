/// ATX heading with owned delimiter constants.
///
/// Only levels 1 through 4 are recognized; deeper headings fall through to
/// paragraphs.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 4;

    /// Parses a trimmed line as a heading, returning `(level, text)`.
    ///
    /// The `#` run must be exactly `level` long and followed by a space.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let b = line.as_bytes();
        (1..=Self::MAX_LEVEL).find_map(|level| {
            let n = usize::from(level);
            let run = b.get(..n)?;
            if run.iter().all(|&c| c == Self::MARKER) && b.get(n) == Some(&b' ') {
                Some((level, line[n + 1..].trim()))
            } else {
                None
            }
        })
    }
}
