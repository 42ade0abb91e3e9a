// src/document.rs - The editable text, sole owner of content

use crate::event_bus::{Event, EventBus, SubscriptionId};
use ropey::Rope;
use std::fmt;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("index {index} out of range for document of length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("cannot delete from an empty document")]
    EmptyDocument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentEventKind {
    Insert,
    Delete,
}

/// Published after a mutation has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEvent {
    Insert { index: usize, ch: char },
    /// `ch` is the character that was removed.
    Delete { index: usize, ch: char },
}

impl Event for DocumentEvent {
    type Kind = DocumentEventKind;

    fn kind(&self) -> DocumentEventKind {
        match self {
            DocumentEvent::Insert { .. } => DocumentEventKind::Insert,
            DocumentEvent::Delete { .. } => DocumentEventKind::Delete,
        }
    }
}

/// Characters ropey treats as line breaks.
pub fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// A sequence of Unicode scalar values addressed by char index.
pub struct Document {
    rope: Rope,
    events: EventBus<DocumentEvent>,
}

impl Document {
    pub fn new() -> Self {
        Self::from_text("")
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            events: EventBus::new(),
        }
    }

    /// Insert `ch` before the character at `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, ch: char) -> Result<(), DocumentError> {
        let len = self.len_chars();
        if index > len {
            return Err(DocumentError::OutOfRange { index, len });
        }
        self.rope.insert_char(index, ch);
        log::trace!("document insert {:?} at {}", ch, index);
        self.events.publish(&DocumentEvent::Insert { index, ch });
        Ok(())
    }

    /// Remove the character at `index` and return it.
    pub fn delete(&mut self, index: usize) -> Result<char, DocumentError> {
        let len = self.len_chars();
        if len == 0 {
            return Err(DocumentError::EmptyDocument);
        }
        if index >= len {
            return Err(DocumentError::OutOfRange { index, len });
        }
        let ch = self.rope.char(index);
        self.rope.remove(index..index + 1);
        log::trace!("document delete {:?} at {}", ch, index);
        self.events.publish(&DocumentEvent::Delete { index, ch });
        Ok(ch)
    }

    pub fn subscribe<F>(&mut self, kind: DocumentEventKind, callback: F) -> SubscriptionId
    where
        F: FnMut(&DocumentEvent) + 'static,
    {
        self.events.subscribe(kind, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        if index < self.len_chars() {
            Some(self.rope.char(index))
        } else {
            None
        }
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Number of lines, counting the empty line after a trailing break.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Text of a line without its line break.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.line_count() {
            return None;
        }
        let text = self.rope.line(line).to_string();
        Some(text.trim_end_matches(is_line_break).to_string())
    }

    /// Length of a line in chars, excluding its line break.
    pub fn line_len(&self, line: usize) -> usize {
        self.line_text(line).map(|l| l.chars().count()).unwrap_or(0)
    }

    /// Line containing `index`; indices past the end map to the last line.
    pub fn char_to_line(&self, index: usize) -> usize {
        self.rope.char_to_line(index.min(self.len_chars()))
    }

    /// First char index of `line`; lines past the end map to the document length.
    pub fn line_to_char(&self, line: usize) -> usize {
        if line >= self.line_count() {
            return self.len_chars();
        }
        self.rope.line_to_char(line)
    }

    /// The grapheme boundary after `index`, or the document length.
    pub fn next_grapheme_boundary(&self, index: usize) -> usize {
        let len = self.len_chars();
        if index >= len {
            return len;
        }
        let line = self.rope.char_to_line(index);
        let start = self.rope.line_to_char(line);
        let rel = index - start;
        self.grapheme_boundaries(line)
            .into_iter()
            .find(|&b| b > rel)
            .map(|b| start + b)
            .unwrap_or(len)
    }

    /// The grapheme boundary before `index`, or 0.
    pub fn prev_grapheme_boundary(&self, index: usize) -> usize {
        let index = index.min(self.len_chars());
        if index == 0 {
            return 0;
        }
        // The previous char's line also covers a cursor sitting at a line start.
        let line = self.rope.char_to_line(index - 1);
        let start = self.rope.line_to_char(line);
        let rel = index - start;
        self.grapheme_boundaries(line)
            .into_iter()
            .rev()
            .find(|&b| b < rel)
            .map(|b| start + b)
            .unwrap_or(start)
    }

    // Char offsets of grapheme boundaries within a line, line break included.
    fn grapheme_boundaries(&self, line: usize) -> Vec<usize> {
        let text = self.rope.line(line).to_string();
        let mut offsets = vec![0];
        let mut acc = 0;
        for grapheme in text.graphemes(true) {
            acc += grapheme.chars().count();
            offsets.push(acc);
        }
        offsets
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("content", &self.to_string())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_insert_and_read_back() {
        let mut doc = Document::new();
        doc.insert(0, 'a').unwrap();
        doc.insert(1, 'c').unwrap();
        doc.insert(1, 'b').unwrap();
        assert_eq!(doc.to_string(), "abc");
        assert_eq!(doc.char_at(1), Some('b'));
        assert_eq!(doc.len_chars(), 3);
    }

    #[test]
    fn test_multibyte_chars_are_atomic() {
        let mut doc = Document::from_text("héllo");
        assert_eq!(doc.len_chars(), 5);
        assert_eq!(doc.delete(1), Ok('é'));
        doc.insert(1, '日').unwrap();
        assert_eq!(doc.to_string(), "h日llo");
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut doc = Document::from_text("ab");
        assert_eq!(
            doc.insert(3, 'x'),
            Err(DocumentError::OutOfRange { index: 3, len: 2 })
        );
        assert_eq!(doc.to_string(), "ab");
    }

    #[test]
    fn test_delete_errors() {
        let mut doc = Document::new();
        assert_eq!(doc.delete(0), Err(DocumentError::EmptyDocument));

        let mut doc = Document::from_text("a");
        assert_eq!(
            doc.delete(1),
            Err(DocumentError::OutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_events_carry_payload() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut doc = Document::new();
        for kind in [DocumentEventKind::Insert, DocumentEventKind::Delete] {
            let s = seen.clone();
            doc.subscribe(kind, move |ev| s.borrow_mut().push(*ev));
        }

        doc.insert(0, 'x').unwrap();
        doc.delete(0).unwrap();
        assert_eq!(
            *seen.borrow(),
            vec![
                DocumentEvent::Insert { index: 0, ch: 'x' },
                DocumentEvent::Delete { index: 0, ch: 'x' },
            ]
        );
    }

    #[test]
    fn test_insert_subscribers_run_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut doc = Document::new();
        let a = order.clone();
        doc.subscribe(DocumentEventKind::Insert, move |_| a.borrow_mut().push("a"));
        let b = order.clone();
        doc.subscribe(DocumentEventKind::Insert, move |_| b.borrow_mut().push("b"));

        doc.insert(0, 'x').unwrap();
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_failed_mutation_publishes_nothing() {
        let count = Rc::new(RefCell::new(0));
        let mut doc = Document::new();
        let c = count.clone();
        doc.subscribe(DocumentEventKind::Delete, move |_| *c.borrow_mut() += 1);

        assert!(doc.delete(0).is_err());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_subscriber_sees_mutation_applied() {
        // Listeners run after the content changed.
        let mut doc = Document::new();
        let seen = Rc::new(RefCell::new(None));
        let s = seen.clone();
        doc.subscribe(DocumentEventKind::Insert, move |ev| {
            *s.borrow_mut() = Some(*ev);
        });
        doc.insert(0, 'q').unwrap();
        assert_eq!(doc.char_at(0), Some('q'));
        assert!(seen.borrow().is_some());
    }

    #[test]
    fn test_lines() {
        let doc = Document::from_text("ab\r\ncd\n");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_text(0).as_deref(), Some("ab"));
        assert_eq!(doc.line_text(1).as_deref(), Some("cd"));
        assert_eq!(doc.line_text(2).as_deref(), Some(""));
        assert_eq!(doc.line_text(3), None);
        assert_eq!(doc.line_len(0), 2);
        assert_eq!(doc.line_to_char(1), 4);
        assert_eq!(doc.char_to_line(4), 1);
        assert_eq!(doc.char_to_line(100), 2);
        assert_eq!(doc.line_to_char(10), doc.len_chars());
    }

    #[test]
    fn test_grapheme_boundaries_skip_combining_marks() {
        // "e" + combining acute accent is one grapheme of two chars.
        let doc = Document::from_text("ae\u{301}b");
        assert_eq!(doc.next_grapheme_boundary(1), 3);
        assert_eq!(doc.prev_grapheme_boundary(3), 1);
        assert_eq!(doc.next_grapheme_boundary(3), 4);
        assert_eq!(doc.next_grapheme_boundary(4), 4);
        assert_eq!(doc.prev_grapheme_boundary(0), 0);
    }

    #[test]
    fn test_grapheme_boundaries_treat_crlf_as_one() {
        let doc = Document::from_text("a\r\nb");
        assert_eq!(doc.next_grapheme_boundary(1), 3);
        assert_eq!(doc.prev_grapheme_boundary(3), 1);
    }

    proptest! {
        #[test]
        fn insert_places_char_and_grows_by_one(
            text in "[a-z\\n日é]{0,30}",
            pos in 0usize..40,
            ch in any::<char>()
        ) {
            let mut doc = Document::from_text(&text);
            let len = doc.len_chars();
            let index = pos.min(len);
            doc.insert(index, ch).unwrap();
            prop_assert_eq!(doc.char_at(index), Some(ch));
            prop_assert_eq!(doc.len_chars(), len + 1);
        }

        #[test]
        fn delete_then_reinsert_restores_content(
            text in "[a-z \\n日é]{1,30}",
            pos in 0usize..30
        ) {
            let mut doc = Document::from_text(&text);
            let index = pos % doc.len_chars();
            let ch = doc.delete(index).unwrap();
            doc.insert(index, ch).unwrap();
            prop_assert_eq!(doc.to_string(), text);
        }
    }
}
