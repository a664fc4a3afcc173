// Pointer input → paint operations.
// `route` applies one event to the session; `PointerTracker` turns the
// window's per-frame mouse polling into those discrete events.

use crate::session::Session;
use crate::types::Point;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Leave,
}

/// Apply one pointer event. Tool settings are read right now, not cached.
pub fn route(session: &mut Session, event: PointerEvent) {
    trace!(?event, "pointer");
    match event {
        PointerEvent::Down(at) => {
            if let Some(kind) = session.tools_mut().take_shape() {
                // Shapes always fill with the brush color, eraser or not.
                let size = session.tools().shape_size() as f32;
                let color = session.tools().brush_color();
                session.surface_mut().stamp_shape(kind, at, size, color);
                session.capture();
            } else {
                session.surface_mut().begin_stroke(at);
            }
        }
        PointerEvent::Move(to) => {
            let color = session.tools().paint_color();
            let width = session.tools().brush_width() as f32;
            // No-op unless a stroke was begun.
            session.surface_mut().extend_stroke(to, color, width);
        }
        PointerEvent::Up | PointerEvent::Leave => {
            if session.surface_mut().end_stroke() {
                session.capture();
            }
        }
    }
}

/// Edge detector over polled mouse state.
/// Visual: makes a held button behave like browser mousedown/move/up/leave.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_pos: Option<Point>,
    was_down: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `pos` is None while the cursor is outside the canvas.
    pub fn update(&mut self, pos: Option<Point>, down: bool) -> Vec<PointerEvent> {
        let mut out = Vec::new();
        match (self.last_pos, pos) {
            (Some(_), None) => out.push(PointerEvent::Leave),
            (_, Some(p)) => {
                if down && !self.was_down {
                    out.push(PointerEvent::Down(p));
                } else if down && self.last_pos != Some(p) {
                    out.push(PointerEvent::Move(p));
                } else if !down && self.was_down {
                    out.push(PointerEvent::Up);
                }
            }
            (None, None) => {
                if !down && self.was_down {
                    out.push(PointerEvent::Up);
                }
            }
        }
        self.last_pos = pos;
        self.was_down = down;
        out
    }
}
