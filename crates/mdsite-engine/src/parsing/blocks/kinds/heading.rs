/// ATX heading syntax: one to six `#` followed by a space.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the heading level if `block` opens with a heading marker.
    pub fn level(block: &str) -> Option<u8> {
        let hashes = block
            .bytes()
            .take_while(|&b| b == Self::MARKER)
            .count();
        let level = u8::try_from(hashes).ok()?;
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        (block.as_bytes().get(hashes) == Some(&b' ')).then_some(level)
    }

    /// Heading text with the markers and the single separating space removed.
    pub fn content(block: &str, level: u8) -> &str {
        block.get(usize::from(level) + 1..).unwrap_or_default()
    }
}
