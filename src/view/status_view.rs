// view/status_view.rs - One-line status strip

use ratatui::style::Style;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::LineSeparator;
use crate::ui::surface::Surface;
use crate::ui::theme::Theme;
use crate::view::{SizeHint, View};

/// Metadata shown in the status line. Line and column are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub line: usize,
    pub column: usize,
    pub cursor: usize,
    pub len: usize,
    pub separator: LineSeparator,
}

impl Status {
    pub fn format(&self) -> String {
        format!(
            " {}:{} | {}/{} | {}",
            self.line + 1,
            self.column + 1,
            self.cursor,
            self.len,
            self.separator.label()
        )
    }
}

/// Anything that can describe itself in the status line.
pub trait StatusSource {
    fn status(&self) -> Status;
}

impl<T: StatusSource + ?Sized> StatusSource for Rc<RefCell<T>> {
    fn status(&self) -> Status {
        self.borrow().status()
    }
}

/// Read-only renderable that always occupies exactly one row.
pub struct StatusView<S: StatusSource> {
    source: S,
    width: u16,
    height: u16,
    style: Style,
}

impl<S: StatusSource> StatusView<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            width: 0,
            height: 0,
            style: Theme::default().status_bar_style(),
        }
    }

    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.style = theme.status_bar_style();
        self
    }
}

impl<S: StatusSource> View for StatusView<S> {
    fn draw(&mut self, surface: &mut dyn Surface, x: u16, y: u16) {
        if self.height == 0 {
            return;
        }
        let text = self.source.status().format();
        let written = super::put_str(surface, x, y, self.width, &text, self.style);
        for cx in written..self.width {
            surface.set_cell(x.saturating_add(cx), y, ' ', self.style);
        }
    }

    fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn set_height(&mut self, height: u16) {
        self.height = height.min(1);
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::Fixed(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::surface::CellGrid;

    struct Fixed(Status);

    impl StatusSource for Fixed {
        fn status(&self) -> Status {
            self.0
        }
    }

    fn status() -> Status {
        Status {
            line: 2,
            column: 4,
            cursor: 17,
            len: 20,
            separator: LineSeparator::Lf,
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(status().format(), " 3:5 | 17/20 | LF");
    }

    #[test]
    fn test_draw_pads_to_width() {
        let mut view = StatusView::new(Fixed(status()));
        view.set_width(20);
        view.set_height(1);
        let mut grid = CellGrid::new(20, 1);
        view.draw(&mut grid, 0, 0);
        assert_eq!(grid.row_text(0), " 3:5 | 17/20 | LF   ");
        let (_, style) = grid.cell(19, 0).unwrap();
        assert_eq!(style, Theme::default().status_bar_style());
    }

    #[test]
    fn test_draw_truncates() {
        let mut view = StatusView::new(Fixed(status()));
        view.set_width(6);
        view.set_height(1);
        let mut grid = CellGrid::new(10, 1);
        view.draw(&mut grid, 0, 0);
        assert_eq!(grid.row_text(0), " 3:5 |    ");
    }

    #[test]
    fn test_never_taller_than_one_row() {
        let mut view = StatusView::new(Fixed(status()));
        view.set_height(5);
        assert_eq!(view.height(), 1);
        assert_eq!(view.size_hint(), SizeHint::Fixed(1));
    }

    #[test]
    fn test_zero_height_draws_nothing() {
        let mut view = StatusView::new(Fixed(status()));
        view.set_width(4);
        let mut grid = CellGrid::new(4, 1);
        view.draw(&mut grid, 0, 0);
        assert_eq!(grid.row_text(0), "    ");
    }
}
