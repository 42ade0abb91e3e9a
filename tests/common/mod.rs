// Common test utilities for driving an editor headlessly

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use sk::config::{LineSeparator, SkConfig};
use sk::editor::Editor;
use sk::ui::Theme;

/// Key event builders
pub mod keys {
    use super::*;

    #[allow(dead_code)]
    pub fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[allow(dead_code)]
    pub fn ch(c: char) -> Event {
        key(KeyCode::Char(c))
    }

    #[allow(dead_code)]
    pub fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    /// One character event per char of `text`.
    #[allow(dead_code)]
    pub fn typed(text: &str) -> Vec<Event> {
        text.chars().map(ch).collect()
    }
}

/// Create an editor of the given size using `separator` for Enter
#[allow(dead_code)]
pub fn editor_with(separator: LineSeparator, width: u16, height: u16) -> Editor {
    let config = SkConfig {
        line_separator: separator,
    };
    Editor::new(&config, &Theme::default(), width, height)
}

/// Feed events until one requests quit; returns whether quit was requested
#[allow(dead_code)]
pub fn feed(editor: &mut Editor, events: impl IntoIterator<Item = Event>) -> bool {
    for event in events {
        if editor.handle_event(event) {
            return true;
        }
    }
    false
}

/// Content and cursor of the editor's document
#[allow(dead_code)]
pub fn snapshot(editor: &Editor) -> (String, usize) {
    let view = editor.document_view();
    (view.document().to_string(), view.cursor())
}
