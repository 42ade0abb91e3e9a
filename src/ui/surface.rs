// ui/surface.rs - Terminal surface contract used by views

use ratatui::{Frame, style::Style};
use unicode_width::UnicodeWidthChar;

/// Something views can paint cells onto.
///
/// Coordinates are absolute surface cells. Writes outside `size()` are dropped.
pub trait Surface {
    fn size(&self) -> (u16, u16);

    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style);

    /// Place the visible cursor indicator.
    fn set_cursor(&mut self, x: u16, y: u16);
}

/// Paints into a ratatui frame; the terminal flushes it at the end of `Terminal::draw`.
pub struct FrameSurface<'a, 'f> {
    frame: &'a mut Frame<'f>,
}

impl<'a, 'f> FrameSurface<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self { frame }
    }
}

impl Surface for FrameSurface<'_, '_> {
    fn size(&self) -> (u16, u16) {
        let area = self.frame.size();
        (area.width, area.height)
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style) {
        let area = self.frame.size();
        if x < area.right() && y < area.bottom() && x >= area.x && y >= area.y {
            self.frame
                .buffer_mut()
                .get_mut(x, y)
                .set_char(ch)
                .set_style(style);
        }
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.frame.set_cursor(x, y);
    }
}

/// In-memory surface for headless rendering and tests.
#[derive(Debug, Clone)]
pub struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<(char, Style)>,
    cursor: Option<(u16, u16)>,
}

impl CellGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![(' ', Style::default()); width as usize * height as usize],
            cursor: None,
        }
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<(char, Style)> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// The characters of row `y`, trailing blanks included. Like a terminal,
    /// the cells covered by the right half of a wide char are skipped.
    pub fn row_text(&self, y: u16) -> String {
        let mut text = String::new();
        let mut x = 0;
        while let Some((ch, _)) = self.cell(x, y) {
            text.push(ch);
            x += UnicodeWidthChar::width(ch).unwrap_or(1).max(1) as u16;
        }
        text
    }

    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.cells.fill((' ', Style::default()));
        self.cursor = None;
    }

    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl Surface for CellGrid {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = (ch, style);
        }
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some((x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_grid_drops_out_of_bounds_writes() {
        let mut grid = CellGrid::new(3, 2);
        grid.set_cell(1, 1, 'x', Style::default());
        grid.set_cell(3, 0, 'y', Style::default());
        grid.set_cell(0, 2, 'z', Style::default());
        assert_eq!(grid.row_text(0), "   ");
        assert_eq!(grid.row_text(1), " x ");
        assert_eq!(grid.cell(3, 0), None);
    }

    #[test]
    fn test_row_text_skips_wide_char_continuation() {
        let mut grid = CellGrid::new(5, 1);
        grid.set_cell(0, 0, '日', Style::default());
        grid.set_cell(2, 0, 'x', Style::default());
        assert_eq!(grid.row_text(0), "日x  ");
    }

    #[test]
    fn test_cell_grid_clear() {
        let mut grid = CellGrid::new(2, 1);
        grid.set_cell(0, 0, 'a', Style::default());
        grid.set_cursor(1, 0);
        grid.clear();
        assert_eq!(grid.row_text(0), "  ");
        assert_eq!(grid.cursor(), None);
    }
}
