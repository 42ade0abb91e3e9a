/// Insertion point into a document, as a char offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub offset: usize,
    /// Column kept across vertical motion through shorter lines.
    pub desired_col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            offset: 0,
            desired_col: 0,
        }
    }

    /// Pull the offset back inside `[0, len]`.
    pub fn clamp(&mut self, len: usize) {
        self.offset = self.offset.min(len);
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
