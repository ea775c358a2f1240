//! Layer - A single compositable region

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::Color;

use super::LayerId;

/// A single layer in the compositor
pub struct Layer {
    /// Unique identifier
    pub id: LayerId,
    /// Z-order (higher = in front)
    pub z_index: i32,
    /// Screen position and size
    pub bounds: Rect,
    /// Whether the layer is composited
    pub visible: bool,
    /// Render buffer in layer-local coordinates
    pub buffer: Buffer,
}

impl Layer {
    /// Create a new layer at `bounds`
    pub fn new(id: LayerId, bounds: Rect, z_index: i32) -> Self {
        Self {
            id,
            z_index,
            bounds,
            visible: true,
            buffer: Buffer::empty(local_area(bounds)),
        }
    }

    /// Move and resize; the buffer is cleared when the size changes
    pub fn place(&mut self, bounds: Rect) {
        if bounds.width != self.bounds.width || bounds.height != self.bounds.height {
            self.buffer = Buffer::empty(local_area(bounds));
        }
        self.bounds = bounds;
    }

    /// Whether a cell lets lower layers show through
    ///
    /// Blank cells with no background are holes; a blank cell with a
    /// background color is opaque.
    pub fn is_transparent(cell: &Cell) -> bool {
        cell.symbol() == " " && cell.bg == Color::Reset
    }
}

fn local_area(bounds: Rect) -> Rect {
    Rect::new(0, 0, bounds.width, bounds.height)
}
