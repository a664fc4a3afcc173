// Tool settings the UI changes between pointer events.
// Read at the moment each event is handled; never versioned or undone.

use crate::types::Rgba;
use std::fmt;

pub const BRUSH_WIDTH_RANGE: (u32, u32) = (1, 20);
pub const SHAPE_SIZE_RANGE: (u32, u32) = (10, 200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeKind::Rectangle => "RECT",
            ShapeKind::Circle => "CIRCLE",
            ShapeKind::Triangle => "TRIANGLE",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolConfig {
    brush_color: Rgba,
    brush_width: u32,
    background_color: Rgba,
    eraser_active: bool,
    shape: Option<ShapeKind>, // armed for exactly one stamp
    shape_size: u32,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            brush_color: Rgba::BLACK,
            brush_width: 5,
            background_color: Rgba::WHITE,
            eraser_active: false,
            shape: None,
            shape_size: 50,
        }
    }
}

impl ToolConfig {
    pub fn brush_color(&self) -> Rgba {
        self.brush_color
    }

    pub fn brush_width(&self) -> u32 {
        self.brush_width
    }

    pub fn background_color(&self) -> Rgba {
        self.background_color
    }

    pub fn eraser_active(&self) -> bool {
        self.eraser_active
    }

    pub fn shape(&self) -> Option<ShapeKind> {
        self.shape
    }

    pub fn shape_size(&self) -> u32 {
        self.shape_size
    }

    /// Color strokes actually lay down: the background while erasing.
    pub fn paint_color(&self) -> Rgba {
        if self.eraser_active { self.background_color } else { self.brush_color }
    }

    pub fn set_brush_color(&mut self, color: Rgba) {
        self.brush_color = color;
    }

    /// Clamped to 1..=20.
    pub fn set_brush_width(&mut self, width: u32) {
        self.brush_width = width.clamp(BRUSH_WIDTH_RANGE.0, BRUSH_WIDTH_RANGE.1);
    }

    /// Only the session calls this, since a new background also resets the canvas.
    pub(crate) fn set_background_color(&mut self, color: Rgba) {
        self.background_color = color;
    }

    pub fn set_eraser(&mut self, on: bool) {
        self.eraser_active = on;
    }

    pub fn toggle_eraser(&mut self) -> bool {
        self.eraser_active = !self.eraser_active;
        self.eraser_active
    }

    /// Arm a shape for the next pointer-down (None goes back to freehand).
    pub fn select_shape(&mut self, kind: Option<ShapeKind>) {
        self.shape = kind;
    }

    /// Hand out the armed shape and revert to freehand.
    pub fn take_shape(&mut self) -> Option<ShapeKind> {
        self.shape.take()
    }

    /// Clamped to 10..=200.
    pub fn set_shape_size(&mut self, size: u32) {
        self.shape_size = size.clamp(SHAPE_SIZE_RANGE.0, SHAPE_SIZE_RANGE.1);
    }
}
