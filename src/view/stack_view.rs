// view/stack_view.rs - Vertical layout container

use crate::ui::surface::Surface;
use crate::view::{SizeHint, View};

/// Lays children out top to bottom, each a full-width strip.
///
/// Fixed-size children claim their rows first, in insertion order; the rows
/// left over are shared equally by `Fill` children, the earliest ones taking
/// any remainder. Allocated heights never sum past the container height.
pub struct StackView {
    children: Vec<Box<dyn View>>,
    allocations: Vec<u16>,
    width: u16,
    height: u16,
}

impl StackView {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            allocations: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    pub fn add(&mut self, mut view: Box<dyn View>) {
        view.set_width(self.width);
        self.children.push(view);
        self.layout();
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Heights given to each child, in insertion order.
    pub fn allocations(&self) -> &[u16] {
        &self.allocations
    }

    fn layout(&mut self) {
        let mut remaining = self.height;
        let mut allocations = vec![0u16; self.children.len()];
        let mut fill = Vec::new();

        for (i, child) in self.children.iter().enumerate() {
            match child.size_hint() {
                SizeHint::Fixed(rows) => {
                    let rows = rows.min(remaining);
                    allocations[i] = rows;
                    remaining -= rows;
                }
                SizeHint::Fill => fill.push(i),
            }
        }

        if !fill.is_empty() {
            let count = fill.len() as u16;
            let share = remaining / count;
            let extra = remaining % count;
            for (n, &i) in fill.iter().enumerate() {
                allocations[i] = share + u16::from((n as u16) < extra);
            }
        }

        for (child, &rows) in self.children.iter_mut().zip(&allocations) {
            child.set_height(rows);
        }
        log::debug!("stack layout {}x{} -> {:?}", self.width, self.height, allocations);
        self.allocations = allocations;
    }
}

impl Default for StackView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for StackView {
    fn draw(&mut self, surface: &mut dyn Surface, x: u16, y: u16) {
        let mut offset = y;
        for (child, &rows) in self.children.iter_mut().zip(&self.allocations) {
            if rows > 0 {
                child.draw(surface, x, offset);
            }
            offset = offset.saturating_add(rows);
        }
    }

    fn set_width(&mut self, width: u16) {
        self.width = width;
        for child in &mut self.children {
            child.set_width(width);
        }
    }

    fn set_height(&mut self, height: u16) {
        self.height = height;
        self.layout();
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }
}
