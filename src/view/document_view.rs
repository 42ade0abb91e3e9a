// view/document_view.rs - Cursor and viewport over a Document

use ratatui::style::Style;

use crate::config::LineSeparator;
use crate::cursor::Cursor;
use crate::document::{Document, DocumentEvent, DocumentEventKind};
use crate::event_bus::{Event, EventBus, SubscriptionId};
use crate::ui::surface::Surface;
use crate::ui::theme::Theme;
use crate::view::status_view::{Status, StatusSource};
use crate::view::{SizeHint, View, char_width};
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentViewEventKind {
    Insert,
    Delete,
    CursorMoved,
}

/// Published after the view has applied an edit or moved its cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentViewEvent {
    Insert { cursor: usize },
    Delete { cursor: usize },
    CursorMoved { cursor: usize },
}

impl Event for DocumentViewEvent {
    type Kind = DocumentViewEventKind;

    fn kind(&self) -> DocumentViewEventKind {
        match self {
            DocumentViewEvent::Insert { .. } => DocumentViewEventKind::Insert,
            DocumentViewEvent::Delete { .. } => DocumentViewEventKind::Delete,
            DocumentViewEvent::CursorMoved { .. } => DocumentViewEventKind::CursorMoved,
        }
    }
}

/// Editing front end for one Document.
///
/// Every edit goes through the cursor, which always satisfies
/// `0 <= cursor <= document.len_chars()`. Out-of-range conditions are
/// absorbed as no-ops, so no keystroke can fail.
pub struct DocumentView {
    document: Document,
    cursor: Cursor,
    viewport: Viewport,
    line_separator: LineSeparator,
    events: EventBus<DocumentViewEvent>,
    text_style: Style,
    filler_style: Style,
}

impl DocumentView {
    pub fn new(document: Document, line_separator: LineSeparator) -> Self {
        let theme = Theme::default();
        Self {
            document,
            cursor: Cursor::new(),
            viewport: Viewport::new(0, 0),
            line_separator,
            events: EventBus::new(),
            text_style: theme.text_style(),
            filler_style: theme.filler_style(),
        }
    }

    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.text_style = theme.text_style();
        self.filler_style = theme.filler_style();
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> usize {
        self.cursor.offset
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn line_separator(&self) -> LineSeparator {
        self.line_separator
    }

    /// Zero-based `(line, column)` of the cursor, column counted in chars.
    pub fn cursor_position(&self) -> (usize, usize) {
        let line = self.document.char_to_line(self.cursor.offset);
        let col = self.cursor.offset - self.document.line_to_char(line);
        (line, col)
    }

    pub fn subscribe<F>(&mut self, kind: DocumentViewEventKind, callback: F) -> SubscriptionId
    where
        F: FnMut(&DocumentViewEvent) + 'static,
    {
        self.events.subscribe(kind, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Listen to the underlying document's mutations.
    pub fn subscribe_document<F>(&mut self, kind: DocumentEventKind, callback: F) -> SubscriptionId
    where
        F: FnMut(&DocumentEvent) + 'static,
    {
        self.document.subscribe(kind, callback)
    }

    pub fn unsubscribe_document(&mut self, id: SubscriptionId) -> bool {
        self.document.unsubscribe(id)
    }

    /// Insert `ch` at the cursor and move past it.
    pub fn insert(&mut self, ch: char) {
        self.cursor.clamp(self.document.len_chars());
        match self.document.insert(self.cursor.offset, ch) {
            Ok(()) => {
                self.cursor.offset += 1;
                self.remember_column();
                self.events.publish(&DocumentViewEvent::Insert {
                    cursor: self.cursor.offset,
                });
            }
            Err(err) => log::warn!("insert refused: {}", err),
        }
    }

    /// Insert each char of `text` in order; one document event per char.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.insert(ch);
        }
    }

    pub fn insert_line_separator(&mut self) {
        self.insert_str(self.line_separator.as_str());
    }

    /// Backspace: remove the char before the cursor. No-op at offset 0.
    pub fn delete(&mut self) {
        self.cursor.clamp(self.document.len_chars());
        if self.cursor.offset == 0 {
            return;
        }
        match self.document.delete(self.cursor.offset - 1) {
            Ok(_) => {
                self.cursor.offset -= 1;
                self.remember_column();
                self.events.publish(&DocumentViewEvent::Delete {
                    cursor: self.cursor.offset,
                });
            }
            Err(err) => log::warn!("delete refused: {}", err),
        }
    }

    /// Remove the char under the cursor. No-op at the end of the document.
    pub fn delete_forward(&mut self) {
        self.cursor.clamp(self.document.len_chars());
        if self.cursor.offset >= self.document.len_chars() {
            return;
        }
        match self.document.delete(self.cursor.offset) {
            Ok(_) => {
                self.remember_column();
                self.events.publish(&DocumentViewEvent::Delete {
                    cursor: self.cursor.offset,
                });
            }
            Err(err) => log::warn!("delete refused: {}", err),
        }
    }

    /// Move by `delta` chars, clamped to `[0, len]`.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.document.len_chars();
        let target = if delta < 0 {
            self.cursor.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.cursor.offset.saturating_add(delta as usize).min(len)
        };
        self.set_cursor(target, true);
    }

    pub fn move_left(&mut self) {
        let target = self.document.prev_grapheme_boundary(self.cursor.offset);
        self.set_cursor(target, true);
    }

    pub fn move_right(&mut self) {
        let target = self.document.next_grapheme_boundary(self.cursor.offset);
        self.set_cursor(target, true);
    }

    pub fn move_up(&mut self) {
        let (line, _) = self.cursor_position();
        if line > 0 {
            self.move_to_line(line - 1);
        }
    }

    pub fn move_down(&mut self) {
        let (line, _) = self.cursor_position();
        if line + 1 < self.document.line_count() {
            self.move_to_line(line + 1);
        }
    }

    pub fn move_line_start(&mut self) {
        let (line, _) = self.cursor_position();
        let target = self.document.line_to_char(line);
        self.set_cursor(target, true);
    }

    pub fn move_line_end(&mut self) {
        let (line, _) = self.cursor_position();
        let target = self.document.line_to_char(line) + self.document.line_len(line);
        self.set_cursor(target, true);
    }

    fn move_to_line(&mut self, line: usize) {
        let col = self.cursor.desired_col.min(self.document.line_len(line));
        let target = self.document.line_to_char(line) + col;
        self.set_cursor(target, false);
    }

    fn set_cursor(&mut self, offset: usize, remember_column: bool) {
        let offset = offset.min(self.document.len_chars());
        if offset == self.cursor.offset {
            return;
        }
        self.cursor.offset = offset;
        if remember_column {
            self.remember_column();
        }
        self.events
            .publish(&DocumentViewEvent::CursorMoved { cursor: offset });
    }

    fn remember_column(&mut self) {
        self.cursor.desired_col = self.cursor_position().1;
    }

    // Paint the part of `text` between `left_col` and the right edge, in
    // display cells. A wide char cut by either edge is left blank.
    fn draw_line(&self, surface: &mut dyn Surface, x: u16, y: u16, text: &str) {
        let left = self.viewport.left_col;
        let right = left + self.viewport.width;
        let mut cell = 0;
        for ch in text.chars() {
            let cells = char_width(ch);
            if cells == 0 {
                continue;
            }
            if cell >= right {
                break;
            }
            if cell >= left && cell + cells <= right {
                let ch = if ch == '\t' { ' ' } else { ch };
                surface.set_cell(x.saturating_add((cell - left) as u16), y, ch, self.text_style);
            }
            cell += cells;
        }
    }
}

impl StatusSource for DocumentView {
    fn status(&self) -> Status {
        let (line, column) = self.cursor_position();
        Status {
            line,
            column,
            cursor: self.cursor.offset,
            len: self.document.len_chars(),
            separator: self.line_separator,
        }
    }
}

impl View for DocumentView {
    fn draw(&mut self, surface: &mut dyn Surface, x: u16, y: u16) {
        let (line, col) = self.cursor_position();
        let cursor_cells: usize = self
            .document
            .line_text(line)
            .map(|text| text.chars().take(col).map(char_width).sum())
            .unwrap_or(0);
        // Scroll rather than lose the cursor indicator off-screen.
        self.viewport.scroll_to(line, cursor_cells);

        let width = self.viewport.width as u16;
        for row in 0..self.viewport.height as u16 {
            let sy = y.saturating_add(row);
            for cx in 0..width {
                surface.set_cell(x.saturating_add(cx), sy, ' ', self.text_style);
            }

            let line_idx = self.viewport.top_line + row as usize;
            match self.document.line_text(line_idx) {
                Some(text) => self.draw_line(surface, x, sy, &text),
                None => {
                    if width > 0 {
                        surface.set_cell(x, sy, '~', self.filler_style);
                    }
                }
            }
        }

        if self.viewport.width > 0 && self.viewport.height > 0 {
            let cx = (cursor_cells - self.viewport.left_col) as u16;
            let cy = (line - self.viewport.top_line) as u16;
            surface.set_cursor(x.saturating_add(cx), y.saturating_add(cy));
        }
    }

    fn set_width(&mut self, width: u16) {
        self.viewport.width = width as usize;
    }

    fn set_height(&mut self, height: u16) {
        self.viewport.height = height as usize;
    }

    fn width(&self) -> u16 {
        self.viewport.width as u16
    }

    fn height(&self) -> u16 {
        self.viewport.height as u16
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::Fill
    }
}
