/// `[text](url)` link delimiters.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    /// The `](` pair between text and url.
    pub const MIDDLE: &'static [u8; 2] = b"](";
    pub const URL_CLOSE: u8 = b')';
}
