// Toolbar actions, decoupled from whatever key or button triggers them.

use crate::session::Session;
use crate::tool::ShapeKind;
use crate::types::Rgba;
use tracing::debug;

/// Colors reachable from the number keys and the background cycle.
pub const PALETTE: [Rgba; 8] = [
    Rgba::rgb(0x00, 0x00, 0x00), // black
    Rgba::rgb(0xFF, 0xFF, 0xFF), // white
    Rgba::rgb(0xE5, 0x39, 0x35), // red
    Rgba::rgb(0xFB, 0x8C, 0x00), // orange
    Rgba::rgb(0xFD, 0xD8, 0x35), // yellow
    Rgba::rgb(0x43, 0xA0, 0x47), // green
    Rgba::rgb(0x1E, 0x88, 0xE5), // blue
    Rgba::rgb(0x8E, 0x24, 0xAA), // purple
];

pub const SHAPE_SIZE_STEP: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Undo,
    Clear,
    ToggleEraser,
    SelectShape(ShapeKind),
    BrushWidthBy(i32),
    ShapeSizeBy(i32),
    BrushColor(usize), // palette index
    NextBackground,
}

pub fn apply(session: &mut Session, cmd: Command) {
    debug!(?cmd, "command");
    match cmd {
        Command::Undo => {
            session.undo();
        }
        Command::Clear => session.clear(),
        Command::ToggleEraser => {
            session.toggle_eraser();
        }
        Command::SelectShape(kind) => session.select_shape(Some(kind)),
        Command::BrushWidthBy(d) => {
            let w = session.tools().brush_width().saturating_add_signed(d);
            session.tools_mut().set_brush_width(w);
        }
        Command::ShapeSizeBy(d) => {
            let s = session.tools().shape_size().saturating_add_signed(d);
            session.tools_mut().set_shape_size(s);
        }
        Command::BrushColor(i) => {
            if let Some(&c) = PALETTE.get(i) {
                session.tools_mut().set_brush_color(c);
            }
        }
        Command::NextBackground => {
            let current = session.tools().background_color();
            session.set_background(next_background(current));
        }
    }
}

/// Palette entry after `current`; the first one when `current` is not in the palette.
fn next_background(current: Rgba) -> Rgba {
    match PALETTE.iter().position(|&c| c == current) {
        Some(i) => PALETTE[(i + 1) % PALETTE.len()],
        None => PALETTE[0],
    }
}
