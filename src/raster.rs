// Software fill primitives for the canvas.
// Every primitive samples pixel centers (x+0.5, y+0.5) and clips to the buffer,
// so geometry partly (or fully) off-canvas is fine and zero sizes draw nothing.

use crate::types::{FrameBuffer, Point, Rgba};

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill every pixel of the buffer.
pub fn fill_all(fb: &mut FrameBuffer, color: Rgba) {
    let c = color.to_u32();
    for px in &mut fb.pixels {
        *px = c;
    }
}

/// Integer pixel range whose centers can fall inside [lo, hi], clipped to [0, limit).
#[inline]
fn span(lo: f32, hi: f32, limit: usize) -> std::ops::Range<i32> {
    let start = (lo - 0.5).ceil().max(0.0) as i32;
    let end = ((hi - 0.5).floor() + 1.0).min(limit as f32).max(0.0) as i32;
    start..end.max(start)
}

/// Run `inside` over the pixel centers of a bounding box and paint the hits.
fn fill_where<F>(fb: &mut FrameBuffer, min: Point, max: Point, color: Rgba, inside: F)
where
    F: Fn(f32, f32) -> bool,
{
    let c = color.to_u32();
    let xs = span(min.x, max.x, fb.width);
    for y in span(min.y, max.y, fb.height) {
        let py = y as f32 + 0.5;
        let row = y as usize * fb.width;
        for x in xs.clone() {
            if inside(x as f32 + 0.5, py) {
                fb.pixels[row + x as usize] = c;
            }
        }
    }
}

/// Axis-aligned rectangle covering [x, x+w) × [y, y+h).
/// Visual: a solid block; nothing when w or h is not positive.
pub fn fill_rect(fb: &mut FrameBuffer, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
    if !(w > 0.0 && h > 0.0) {
        return;
    }
    let (x1, y1) = (x + w, y + h);
    fill_where(fb, Point::new(x, y), Point::new(x1, y1), color, |px, py| {
        px >= x && px < x1 && py >= y && py < y1
    });
}

/// Solid disc of the given radius around `center`.
pub fn fill_disc(fb: &mut FrameBuffer, center: Point, radius: f32, color: Rgba) {
    if !(radius > 0.0) {
        return;
    }
    let r2 = radius * radius;
    let min = Point::new(center.x - radius, center.y - radius);
    let max = Point::new(center.x + radius, center.y + radius);
    fill_where(fb, min, max, color, |px, py| {
        let (dx, dy) = (px - center.x, py - center.y);
        dx * dx + dy * dy <= r2
    });
}

/// Solid triangle (either winding).
/// Visual: a filled wedge; collinear corners leave the canvas untouched.
pub fn fill_triangle(fb: &mut FrameBuffer, a: Point, b: Point, c: Point, color: Rgba) {
    // Signed doubled area; its sign tells us the winding.
    let area = edge(a, b, c.x, c.y);
    if area == 0.0 || !area.is_finite() {
        return;
    }
    let min = Point::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y));
    let max = Point::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y));
    let s = area.signum();
    fill_where(fb, min, max, color, |px, py| {
        edge(a, b, px, py) * s >= 0.0 && edge(b, c, px, py) * s >= 0.0 && edge(c, a, px, py) * s >= 0.0
    });
}

#[inline]
fn edge(a: Point, b: Point, px: f32, py: f32) -> f32 {
    (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
}

/// Round-capped thick segment from `a` to `b` (a "capsule").
/// Visual: one piece of a brush stroke; a == b gives a round dot.
pub fn fill_capsule(fb: &mut FrameBuffer, a: Point, b: Point, width: f32, color: Rgba) {
    if !(width > 0.0) {
        return;
    }
    let r = width / 2.0;
    let r2 = r * r;
    let (vx, vy) = (b.x - a.x, b.y - a.y);
    let len2 = vx * vx + vy * vy;
    let min = Point::new(a.x.min(b.x) - r, a.y.min(b.y) - r);
    let max = Point::new(a.x.max(b.x) + r, a.y.max(b.y) + r);
    fill_where(fb, min, max, color, |px, py| {
        // Closest point on the segment, then distance test.
        let (wx, wy) = (px - a.x, py - a.y);
        let t = if len2 > 0.0 { ((wx * vx + wy * vy) / len2).clamp(0.0, 1.0) } else { 0.0 };
        let (dx, dy) = (wx - t * vx, wy - t * vy);
        dx * dx + dy * dy <= r2
    });
}
