// File: crates/chartlet-core/src/queue.rs
// Summary: Ordered buffer of deferred draw commands, drained once per frame.

use crate::geometry::Vec2;
use crate::types::Color;

/// Horizontal anchoring of a label relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Line list in pixel space; even length, one segment per pair.
    Segments { points: Vec<Vec2>, color: Color },
    Quad { position: Vec2, size: Vec2, color: Color },
    /// `position` is the baseline anchor; `size` is the line height in pixels.
    Label { text: String, position: Vec2, size: f32, color: Color, align: TextAlign },
}

#[derive(Clone, Debug, Default)]
pub struct DrawQueue {
    commands: Vec<DrawCommand>,
}

impl DrawQueue {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.commands.len() }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Enqueue a line list. Fewer than two points or a dangling odd point are dropped.
    pub fn push_segments(&mut self, mut points: Vec<Vec2>, color: Color) {
        if points.len() % 2 == 1 {
            points.pop();
        }
        if points.len() < 2 {
            return;
        }
        self.commands.push(DrawCommand::Segments { points, color });
    }

    pub fn push_quad(&mut self, position: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Quad { position, size, color });
    }

    pub fn push_label(&mut self, text: impl Into<String>, position: Vec2, size: f32, color: Color, align: TextAlign) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Label { text, position, size, color, align });
    }

    /// Hand out every command in insertion order, leaving the queue empty.
    pub fn drain(&mut self) -> std::vec::Drain<'_, DrawCommand> {
        self.commands.drain(..)
    }

    pub fn clear(&mut self) { self.commands.clear(); }
}
