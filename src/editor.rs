// src/editor.rs - Editing session: layout, command dispatch and the event loop

use crossterm::event::{Event, KeyEvent};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;
use thiserror::Error;

use crate::command::Command;
use crate::config::SkConfig;
use crate::document::{Document, DocumentEventKind};
use crate::input::key_to_command;
use crate::ui::surface::Surface;
use crate::ui::theme::Theme;
use crate::view::{DocumentView, DocumentViewEventKind, StackView, StatusView, View};

#[derive(Debug, Error)]
pub enum EditorError {
    /// The input source failed; the session cannot continue.
    #[error("fatal input error: {0}")]
    Input(#[source] std::io::Error),
    #[error("terminal error: {0}")]
    Terminal(#[source] std::io::Error),
}

/// One editing session over a single document.
///
/// The layout is a stack of the document view (taking the free rows) above a
/// one-row status line. Document and view events mark the frame dirty; the
/// loop repaints once per handled event.
pub struct Editor {
    root: StackView,
    document_view: Rc<RefCell<DocumentView>>,
    dirty: Rc<Cell<bool>>,
}

impl Editor {
    pub fn new(config: &SkConfig, theme: &Theme, width: u16, height: u16) -> Self {
        Self::with_document(Document::new(), config, theme, width, height)
    }

    pub fn with_document(
        document: Document,
        config: &SkConfig,
        theme: &Theme,
        width: u16,
        height: u16,
    ) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let mut view = DocumentView::new(document, config.line_separator).with_theme(theme);

        for kind in [DocumentEventKind::Insert, DocumentEventKind::Delete] {
            let dirty = dirty.clone();
            view.subscribe_document(kind, move |_| dirty.set(true));
        }
        {
            let dirty = dirty.clone();
            view.subscribe(DocumentViewEventKind::CursorMoved, move |_| dirty.set(true));
        }

        let document_view = Rc::new(RefCell::new(view));
        let status = StatusView::new(document_view.clone()).with_theme(theme);

        let mut root = StackView::new();
        root.set_width(width);
        root.set_height(height);
        root.add(Box::new(document_view.clone()));
        root.add(Box::new(status));

        Self {
            root,
            document_view,
            dirty,
        }
    }

    pub fn document_view(&self) -> Ref<'_, DocumentView> {
        self.document_view.borrow()
    }

    pub fn root(&self) -> &StackView {
        &self.root
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty.get()
    }

    /// Apply a command. Returns true when the session should end.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        log::trace!("command {:?}", cmd);
        let mut view = self.document_view.borrow_mut();
        match cmd {
            Command::Quit => return true,
            Command::InsertChar(c) => view.insert(c),
            Command::InsertLineSeparator => view.insert_line_separator(),
            Command::DeleteBackward => view.delete(),
            Command::DeleteForward => view.delete_forward(),
            Command::MoveLeft => view.move_left(),
            Command::MoveRight => view.move_right(),
            Command::MoveUp => view.move_up(),
            Command::MoveDown => view.move_down(),
            Command::MoveLineStart => view.move_line_start(),
            Command::MoveLineEnd => view.move_line_end(),
        }
        false
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) -> bool {
        match key_to_command(key_event) {
            Some(cmd) => self.execute_command(cmd),
            None => false,
        }
    }

    /// Returns true when the session should end.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key_event) => self.handle_key(key_event),
            Event::Resize(cols, rows) => {
                self.resize(cols, rows);
                false
            }
            _ => false,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        log::debug!("resize to {}x{}", width, height);
        self.root.set_width(width);
        self.root.set_height(height);
        self.dirty.set(true);
    }

    /// Paint the whole layout onto `surface`.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        self.root.draw(surface, 0, 0);
        self.dirty.set(false);
    }

    /// Block on input, handle, render, repeat.
    ///
    /// `draw` paints and flushes the layout. The loop ends on Quit or when the
    /// input source runs dry; an input error ends it with `EditorError::Input`.
    pub fn run<D, I>(&mut self, mut draw: D, events: I) -> Result<(), EditorError>
    where
        D: FnMut(&mut dyn View) -> std::io::Result<()>,
        I: IntoIterator<Item = std::io::Result<Event>>,
    {
        let mut events = events.into_iter();
        loop {
            if self.dirty.get() {
                draw(&mut self.root).map_err(EditorError::Terminal)?;
                self.dirty.set(false);
            }

            let event = match events.next() {
                Some(event) => event.map_err(EditorError::Input)?,
                None => return Ok(()),
            };
            if self.handle_event(event) {
                log::info!("quit requested");
                return Ok(());
            }
        }
    }
}
