// One drawing session: the canvas, its undo history and the tool settings.
// The window loop and the input router both work through this object.

use crate::error::Error;
use crate::history::History;
use crate::snapshot::Snapshot;
use crate::surface::Surface;
use crate::tool::{ShapeKind, ToolConfig};
use crate::types::{check_canvas_size, FrameBuffer, Rgba};
use tracing::{info, warn};

pub struct Session {
    surface: Surface,
    history: History<Snapshot>,
    tools: ToolConfig,
    history_limit: Option<usize>,
}

impl Session {
    /// Canvas filled with the tools' background, history seeded with that blank state.
    /// Fails on an empty or oversized canvas, or when that first snapshot cannot be taken.
    pub fn new(
        width: usize,
        height: usize,
        tools: ToolConfig,
        history_limit: Option<usize>,
    ) -> Result<Self, Error> {
        check_canvas_size(width, height)?;
        let surface = Surface::new(width, height, tools.background_color());
        let first = surface.capture_snapshot()?;
        let mut session = Self { surface, history: History::new(), tools, history_limit };
        session.history = session.fresh_history();
        session.history.push(first);
        info!(width, height, background = %session.tools.background_color(), "session started");
        Ok(session)
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub(crate) fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn buffer(&self) -> &FrameBuffer {
        self.surface.buffer()
    }

    pub fn history(&self) -> &History<Snapshot> {
        &self.history
    }

    pub fn tools(&self) -> &ToolConfig {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolConfig {
        &mut self.tools
    }

    fn fresh_history(&self) -> History<Snapshot> {
        match self.history_limit {
            Some(cap) => History::with_capacity(cap),
            None => History::new(),
        }
    }

    /// Push the current canvas. Called after every completed mutation.
    pub(crate) fn capture(&mut self) {
        match self.surface.capture_snapshot() {
            Ok(snap) => self.history.push(snap),
            Err(e) => warn!(error = %e, "snapshot capture failed; change is not undoable"),
        }
    }

    /// Step back to the previous canvas. False when there is nothing to undo.
    /// The cursor only moves once the restore has succeeded.
    pub fn undo(&mut self) -> bool {
        let Some(snap) = self.history.peek_undo().cloned() else {
            return false;
        };
        // A stroke still in progress would keep painting over the restored canvas.
        self.surface.end_stroke();
        match self.surface.restore_snapshot(&snap) {
            Ok(()) => {
                self.history.undo();
                true
            }
            Err(e) => {
                warn!(error = %e, "undo restore failed");
                false
            }
        }
    }

    /// Fill with the background and record it.
    pub fn clear(&mut self) {
        self.surface.end_stroke();
        self.surface.clear(self.tools.background_color());
        self.capture();
    }

    pub fn toggle_eraser(&mut self) -> bool {
        self.tools.toggle_eraser()
    }

    pub fn select_shape(&mut self, kind: Option<ShapeKind>) {
        self.tools.select_shape(kind);
    }

    /// New background: the canvas is re-created in that color and the
    /// history restarts from it, so earlier drawing cannot be undone back.
    pub fn set_background(&mut self, color: Rgba) {
        self.tools.set_background_color(color);
        let (w, h) = (self.surface.width(), self.surface.height());
        self.surface.initialize(w, h, color);
        self.history = self.fresh_history();
        self.capture();
        info!(background = %color, "background changed; history reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    const RED: Rgba = Rgba::rgb(255, 0, 0);
    const BLUE: Rgba = Rgba::rgb(0, 0, 255);

    fn session() -> Session {
        Session::new(64, 48, ToolConfig::default(), None).unwrap()
    }

    fn scribble(s: &mut Session, y: f32) {
        let (color, width) = (s.tools().paint_color(), s.tools().brush_width() as f32);
        s.surface_mut().begin_stroke(Point::new(4.0, y));
        s.surface_mut().extend_stroke(Point::new(60.0, y), color, width);
        if s.surface_mut().end_stroke() {
            s.capture();
        }
    }

    #[test]
    fn new_session_has_one_blank_entry() {
        let s = session();
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history().cursor(), Some(0));
        assert_eq!(s.buffer(), &FrameBuffer::filled(64, 48, Rgba::WHITE));
    }

    #[test]
    fn empty_or_oversized_canvas_is_refused() {
        for (w, h) in [(0, 10), (10, 0), (usize::MAX, 2)] {
            assert!(matches!(
                Session::new(w, h, ToolConfig::default(), None),
                Err(Error::CanvasSize { .. })
            ));
        }
    }

    #[test]
    fn failed_restore_leaves_canvas_and_cursor_alone() {
        let mut s = session();
        let wrong_size = Surface::new(10, 10, RED).capture_snapshot().unwrap();
        s.history.push(wrong_size);
        scribble(&mut s, 20.0);
        let drawn = s.buffer().clone();
        assert_eq!(s.history().cursor(), Some(2));

        assert!(!s.undo());
        assert_eq!(s.history().cursor(), Some(2));
        assert_eq!(s.history().len(), 3);
        assert_eq!(s.buffer(), &drawn);
    }

    #[test]
    fn undo_walks_back_and_stops_at_blank() {
        let mut s = session();
        scribble(&mut s, 10.0);
        let after_first = s.buffer().clone();
        scribble(&mut s, 30.0);
        assert_eq!(s.history().len(), 3);

        assert!(s.undo());
        assert_eq!(s.buffer(), &after_first);
        assert!(s.undo());
        assert_eq!(s.buffer(), &FrameBuffer::filled(64, 48, Rgba::WHITE));
        assert!(!s.undo());
        assert_eq!(s.history().cursor(), Some(0));
    }

    #[test]
    fn clear_is_recorded_and_undoable() {
        let mut s = session();
        s.tools_mut().set_brush_color(RED);
        scribble(&mut s, 10.0);
        let drawn = s.buffer().clone();
        s.clear();
        assert_eq!(s.buffer(), &FrameBuffer::filled(64, 48, Rgba::WHITE));
        assert_eq!(s.history().len(), 3);
        assert!(s.undo());
        assert_eq!(s.buffer(), &drawn);
    }

    #[test]
    fn background_change_resets_canvas_and_history() {
        let mut s = session();
        s.tools_mut().set_brush_color(RED);
        scribble(&mut s, 20.0);
        s.set_background(BLUE);
        assert_eq!(s.buffer(), &FrameBuffer::filled(64, 48, BLUE));
        assert_eq!(s.history().len(), 1);
        assert!(!s.undo());
        assert_eq!(s.buffer(), &FrameBuffer::filled(64, 48, BLUE));
        assert_eq!(s.tools().background_color(), BLUE);
    }

    #[test]
    fn history_limit_survives_background_change() {
        let mut s = Session::new(16, 16, ToolConfig::default(), Some(2)).unwrap();
        for y in [2.0, 6.0, 10.0] {
            scribble(&mut s, y);
        }
        assert_eq!(s.history().len(), 2);
        s.set_background(BLUE);
        for y in [2.0, 6.0, 10.0] {
            scribble(&mut s, y);
        }
        assert_eq!(s.history().len(), 2);
    }
}
