/// Bold delimiters: `**text**`.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8; 2] = b"**";
    /// Bytes that may not appear inside bold text.
    pub const STOPS: &'static [u8] = b"*\n";
}

/// Italic delimiters: `*text*`.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    /// Bytes that may not appear inside italic text.
    pub const STOPS: &'static [u8] = b"*\n";
}
