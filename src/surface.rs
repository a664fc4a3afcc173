// The canvas: one pixel buffer plus the stroke currently being drawn.
// Visual expectation: everything you see under the HUD strip is this buffer.

use crate::error::Error;
use crate::raster::{fill_all, fill_capsule, fill_disc, fill_rect, fill_triangle};
use crate::snapshot::Snapshot;
use crate::tool::ShapeKind;
use crate::types::{FrameBuffer, Point, Rgba};

/// Paint state of the stroke in progress.
#[derive(Debug, Clone, Copy)]
struct Stroke {
    last: Point,
    color: Option<Rgba>, // None until the first segment lands
    width: f32,
}

pub struct Surface {
    fb: FrameBuffer,
    stroke: Option<Stroke>,
}

impl Surface {
    /// A fresh canvas filled with `background`.
    pub fn new(width: usize, height: usize, background: Rgba) -> Self {
        Self { fb: FrameBuffer::filled(width, height, background), stroke: None }
    }

    /// Reallocate and fill with `background`; any stroke in progress is dropped.
    /// Visual: the whole canvas turns the new background color.
    pub fn initialize(&mut self, width: usize, height: usize, background: Rgba) {
        self.fb = FrameBuffer::filled(width, height, background);
        self.stroke = None;
    }

    pub fn width(&self) -> usize {
        self.fb.width
    }

    pub fn height(&self) -> usize {
        self.fb.height
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.fb
    }

    #[cfg(test)]
    pub fn stroke_in_progress(&self) -> bool {
        self.stroke.is_some()
    }

    /// Color and width of the last segment of the stroke in progress.
    pub fn stroke_style(&self) -> Option<(Rgba, f32)> {
        self.stroke.and_then(|s| s.color.map(|c| (c, s.width)))
    }

    /// Remember where the path starts. Nothing is painted yet.
    pub fn begin_stroke(&mut self, at: Point) {
        self.stroke = Some(Stroke { last: at, color: None, width: 0.0 });
    }

    /// Paint a round-capped segment from the last point to `to`.
    /// Ignored when no stroke was begun (button never pressed, or pointer left).
    pub fn extend_stroke(&mut self, to: Point, color: Rgba, width: f32) {
        let Some(stroke) = self.stroke.as_mut() else {
            return;
        };
        fill_capsule(&mut self.fb, stroke.last, to, width, color);
        stroke.last = to;
        stroke.color = Some(color);
        stroke.width = width;
    }

    /// Finish the path. True when a stroke was actually in progress,
    /// which is the caller's cue to capture history.
    pub fn end_stroke(&mut self) -> bool {
        self.stroke.take().is_some()
    }

    /// Filled shape centered on `center`; `size` is the side / diameter / base width.
    pub fn stamp_shape(&mut self, kind: ShapeKind, center: Point, size: f32, color: Rgba) {
        // A negative size would flip the triangle instead of collapsing it.
        if !(size > 0.0) {
            return;
        }
        let half = size / 2.0;
        match kind {
            ShapeKind::Rectangle => {
                fill_rect(&mut self.fb, center.x - half, center.y - half, size, size, color)
            }
            ShapeKind::Circle => fill_disc(&mut self.fb, center, half, color),
            ShapeKind::Triangle => fill_triangle(
                &mut self.fb,
                Point::new(center.x, center.y - half),
                Point::new(center.x - half, center.y + half),
                Point::new(center.x + half, center.y + half),
                color,
            ),
        }
    }

    /// Fill everything with the background (opaque, not transparent).
    pub fn clear(&mut self, background: Rgba) {
        fill_all(&mut self.fb, background);
    }

    pub fn capture_snapshot(&self) -> Result<Snapshot, Error> {
        Snapshot::encode(&self.fb)
    }

    /// Replace the buffer with the snapshot's pixels; anything drawn since is gone.
    /// The decode finishes before this returns, so the next event sees the restored canvas.
    pub fn restore_snapshot(&mut self, snap: &Snapshot) -> Result<(), Error> {
        if snap.width() != self.fb.width || snap.height() != self.fb.height {
            return Err(Error::SnapshotSize {
                got_w: snap.width(),
                got_h: snap.height(),
                want_w: self.fb.width,
                want_h: self.fb.height,
            });
        }
        self.fb = snap.decode()?;
        Ok(())
    }
}
