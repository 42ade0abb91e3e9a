/// The visible window of a document: first line/column shown plus size.
///
/// Columns and `width` are display cells, so a wide char spans two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top_line: usize,
    pub left_col: usize,
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            top_line: 0,
            left_col: 0,
            width,
            height,
        }
    }

    /// Scroll as little as possible so that `(line, col)` is visible.
    pub fn scroll_to(&mut self, line: usize, col: usize) {
        if self.height > 0 {
            if line < self.top_line {
                self.top_line = line;
            } else if line >= self.top_line + self.height {
                self.top_line = line + 1 - self.height;
            }
        }
        if self.width > 0 {
            if col < self.left_col {
                self.left_col = col;
            } else if col >= self.left_col + self.width {
                self.left_col = col + 1 - self.width;
            }
        }
    }

    pub fn contains(&self, line: usize, col: usize) -> bool {
        line >= self.top_line
            && line < self.top_line + self.height
            && col >= self.left_col
            && col < self.left_col + self.width
    }
}
