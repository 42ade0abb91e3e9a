// view/mod.rs - Drawable views and their layout container

pub mod document_view;
pub mod stack_view;
pub mod status_view;

pub use document_view::{DocumentView, DocumentViewEvent, DocumentViewEventKind};
pub use stack_view::StackView;
pub use status_view::{Status, StatusSource, StatusView};

use crate::ui::surface::Surface;
use std::cell::RefCell;
use std::rc::Rc;
use unicode_width::UnicodeWidthChar;

/// How much vertical space a view wants from its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeHint {
    /// Take a share of whatever is left.
    Fill,
    /// Exactly this many rows.
    Fixed(u16),
}

/// A rectangle-bounded renderable.
pub trait View {
    /// Paint the view with its top-left corner at `(x, y)`.
    fn draw(&mut self, surface: &mut dyn Surface, x: u16, y: u16);

    fn set_width(&mut self, width: u16);

    fn set_height(&mut self, height: u16);

    fn width(&self) -> u16;

    fn height(&self) -> u16;

    fn size_hint(&self) -> SizeHint {
        SizeHint::Fill
    }
}

/// Views shared between the layout and the event loop on the UI thread.
impl<V: View + ?Sized> View for Rc<RefCell<V>> {
    fn draw(&mut self, surface: &mut dyn Surface, x: u16, y: u16) {
        self.borrow_mut().draw(surface, x, y);
    }

    fn set_width(&mut self, width: u16) {
        self.borrow_mut().set_width(width);
    }

    fn set_height(&mut self, height: u16) {
        self.borrow_mut().set_height(height);
    }

    fn width(&self) -> u16 {
        self.borrow().width()
    }

    fn height(&self) -> u16 {
        self.borrow().height()
    }

    fn size_hint(&self) -> SizeHint {
        self.borrow().size_hint()
    }
}

/// Terminal cells taken by `ch`. A tab is painted as one blank; combining
/// marks and control characters take none.
pub(crate) fn char_width(ch: char) -> usize {
    if ch == '\t' {
        1
    } else {
        UnicodeWidthChar::width(ch).unwrap_or(0)
    }
}

/// Write `text` on one row starting at `(x, y)`, clipped to `width` cells.
/// A wide char that would not fit whole is not painted. Returns the number of
/// cells used.
pub(crate) fn put_str(
    surface: &mut dyn Surface,
    x: u16,
    y: u16,
    width: u16,
    text: &str,
    style: ratatui::style::Style,
) -> u16 {
    let mut written: u16 = 0;
    for ch in text.chars() {
        let cells = char_width(ch) as u16;
        if cells == 0 {
            continue;
        }
        if written + cells > width {
            break;
        }
        surface.set_cell(x.saturating_add(written), y, ch, style);
        written += cells;
    }
    written
}
