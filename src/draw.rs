// Window + HUD drawing.
// Visual effects provided here:
// 1) A window that shows the canvas.
// 2) A crosshair that follows your mouse, sized to the active tool.
// 3) A tiny 5x7 bitmap font for the tool status strip along the top.

use crate::commands::{Command, PALETTE, SHAPE_SIZE_STEP};
use crate::error::Error;
use crate::raster::{fill_rect, put_pixel};
use crate::session::Session;
use crate::tool::{ShapeKind, ToolConfig};
use crate::types::{FrameBuffer, Point, Rgba};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub const HUD_HEIGHT: usize = 22;

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the canvas.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in window pixels; None while the cursor is outside the window.
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(x, y))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Toolbar actions for keys pressed since the last frame.
    pub fn commands(&self) -> Vec<Command> {
        self.window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .filter_map(command_for_key)
            .collect()
    }
}

/// Key bindings. Held keys do not repeat.
pub fn command_for_key(key: Key) -> Option<Command> {
    let cmd = match key {
        Key::Z | Key::U => Command::Undo,
        Key::X => Command::Clear,
        Key::E => Command::ToggleEraser,
        Key::R => Command::SelectShape(ShapeKind::Rectangle),
        Key::C => Command::SelectShape(ShapeKind::Circle),
        Key::T => Command::SelectShape(ShapeKind::Triangle),
        Key::LeftBracket => Command::BrushWidthBy(-1),
        Key::RightBracket => Command::BrushWidthBy(1),
        Key::Minus => Command::ShapeSizeBy(-SHAPE_SIZE_STEP),
        Key::Equal => Command::ShapeSizeBy(SHAPE_SIZE_STEP),
        Key::B => Command::NextBackground,
        Key::Key1 => Command::BrushColor(0),
        Key::Key2 => Command::BrushColor(1),
        Key::Key3 => Command::BrushColor(2),
        Key::Key4 => Command::BrushColor(3),
        Key::Key5 => Command::BrushColor(4),
        Key::Key6 => Command::BrushColor(5),
        Key::Key7 => Command::BrushColor(6),
        Key::Key8 => Command::BrushColor(7),
        _ => return None,
    };
    Some(cmd)
}

/* ---------- Overlay: crosshair + status strip ---------- */

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0, x1, y1) = (x0, y0, x1, y1);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Draw a crosshair centered at (cx,cy) with a gap as wide as the tool.
/// Visual: a "+" whose arms start at the brush edge (or the shape edge when one is armed).
pub fn draw_crosshair(fb: &mut FrameBuffer, cx: i32, cy: i32, gap: i32, color: u32) {
    let arm = 6;
    draw_line(fb, cx - gap - arm, cy, cx - gap, cy, color);
    draw_line(fb, cx + gap, cy, cx + gap + arm, cy, color);
    draw_line(fb, cx, cy - gap - arm, cx, cy - gap, color);
    draw_line(fb, cx, cy + gap, cx, cy + gap + arm, color);
    put_pixel(fb, cx, cy, color);
}

/// Crosshair gap for the current tool: half the stamp size or half the brush width.
pub fn tool_radius(tools: &ToolConfig) -> i32 {
    match tools.shape() {
        Some(_) => (tools.shape_size() / 2) as i32,
        None => (tools.brush_width() / 2).max(2) as i32,
    }
}

/// Status text shown in the strip.
pub fn hud_text(tools: &ToolConfig, undo_steps: usize) -> String {
    let mode = if tools.eraser_active() { "ERASER" } else { "BRUSH" };
    let shape = match tools.shape() {
        Some(kind) => kind.to_string(),
        None => "FREE".to_string(),
    };
    format!(
        "{mode} W:{} | SHAPE:{shape} {} | UNDO:{undo_steps} | E R C T Z X B 1-8",
        tools.brush_width(),
        tools.shape_size(),
    )
}

/// Paint the strip: dark bar, brush + background swatches, then the status text.
/// Visual: a thin toolbar above the canvas.
pub fn draw_hud(fb: &mut FrameBuffer, tools: &ToolConfig, undo_steps: usize) {
    let bar = Rgba::rgb(0x20, 0x20, 0x20);
    fill_rect(fb, 0.0, 0.0, fb.width as f32, HUD_HEIGHT as f32, bar);

    // Swatches: brush color, then background color, each with a light frame.
    let frame = Rgba::rgb(0xC0, 0xC0, 0xC0);
    for (i, color) in [tools.brush_color(), tools.background_color()].into_iter().enumerate() {
        let x = 4.0 + i as f32 * 18.0;
        fill_rect(fb, x, 3.0, 16.0, 16.0, frame);
        fill_rect(fb, x + 1.0, 4.0, 14.0, 14.0, color);
    }

    let text = hud_text(tools, undo_steps);
    draw_text_5x7(fb, 44, 8, &text, 0x00_FF_FF_FF);
}

/// Window position → canvas position. The strip sits above the canvas, so
/// hovering it counts as being outside the canvas.
pub fn to_canvas(p: Point) -> Option<Point> {
    let top = HUD_HEIGHT as f32;
    if p.y < top { None } else { Some(Point::new(p.x, p.y - top)) }
}

/// Build the frame: strip on top, canvas below, crosshair at the window-space mouse.
/// Visual: exactly what the window shows this frame.
pub fn compose(screen: &mut FrameBuffer, session: &Session, mouse: Option<Point>) {
    let canvas = session.buffer();
    let tools = session.tools();
    let w = canvas.width.min(screen.width);
    let rows = canvas.height.min(screen.height.saturating_sub(HUD_HEIGHT));
    for y in 0..rows {
        let src = y * canvas.width;
        let dst = (y + HUD_HEIGHT) * screen.width;
        screen.pixels[dst..dst + w].copy_from_slice(&canvas.pixels[src..src + w]);
    }

    draw_hud(screen, tools, session.history().cursor().unwrap_or(0));

    if let Some(m) = mouse.filter(|&m| to_canvas(m).is_some()) {
        // Mid-stroke the crosshair follows the segment being painted, not the toolbar.
        let (color, radius) = match session.surface().stroke_style() {
            Some((color, width)) => (color, ((width / 2.0) as i32).max(2)),
            None if tools.shape().is_some() => (tools.brush_color(), tool_radius(tools)),
            None => (tools.paint_color(), tool_radius(tools)),
        };
        // Contrast against whatever is under the cursor: invert the ink.
        draw_crosshair(screen, m.x as i32, m.y as i32, radius, color.to_u32() ^ 0x00_FF_FF_FF);
    }
}

/* ---------- 5x7 bitmap font (uppercase, digits, a little punctuation) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        // Punctuation: space, vertical bar, colon, dot, dash
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
/// Visual: a tiny glyph with a 1-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (dx, dy, c) in [(1, 1, 0x00000000), (0, 0, color)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        put_pixel(fb, x + rx as i32 + dx, y + ry as i32 + dy, c);
                    }
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs, 6 pixels per character.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

/// Number-key swatch colors, for the help text in the log.
pub fn palette_legend() -> String {
    PALETTE
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}={c}", i + 1))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_hud_character_has_a_glyph() {
        let mut tools = ToolConfig::default();
        for kind in [None, Some(ShapeKind::Rectangle), Some(ShapeKind::Circle), Some(ShapeKind::Triangle)] {
            tools.select_shape(kind);
            tools.toggle_eraser();
            let text = hud_text(&tools, 12);
            for ch in text.chars() {
                assert!(glyph5x7(ch).is_some(), "missing glyph {ch:?} in {text:?}");
            }
        }
    }

    #[test]
    fn hud_reports_tool_state() {
        let mut tools = ToolConfig::default();
        tools.select_shape(Some(ShapeKind::Circle));
        let text = hud_text(&tools, 3);
        assert!(text.starts_with("BRUSH W:5"));
        assert!(text.contains("SHAPE:CIRCLE 50"));
        assert!(text.contains("UNDO:3"));
    }

    #[test]
    fn hud_stays_inside_the_strip() {
        let mut fb = FrameBuffer::filled(80, 60, Rgba::WHITE);
        draw_hud(&mut fb, &ToolConfig::default(), 0);
        for y in HUD_HEIGHT..60 {
            for x in 0..80 {
                assert_eq!(fb.get(x, y), Some(Rgba::WHITE), "({x},{y})");
            }
        }
    }

    #[test]
    fn canvas_sits_below_the_strip() {
        assert_eq!(to_canvas(Point::new(5.0, 3.0)), None);
        assert_eq!(
            to_canvas(Point::new(5.0, HUD_HEIGHT as f32 + 7.0)),
            Some(Point::new(5.0, 7.0))
        );

        let mut session = Session::new(40, 30, ToolConfig::default(), None).unwrap();
        session.set_background(Rgba::rgb(9, 9, 9));
        let mut screen = FrameBuffer::filled(40, 30 + HUD_HEIGHT, Rgba::WHITE);
        compose(&mut screen, &session, None);
        assert_eq!(screen.get(0, HUD_HEIGHT), Some(Rgba::rgb(9, 9, 9)));
        assert_eq!(screen.get(39, 29 + HUD_HEIGHT), Some(Rgba::rgb(9, 9, 9)));
        assert_eq!(screen.get(0, 0), Some(Rgba::rgb(0x20, 0x20, 0x20)));
    }

    #[test]
    fn crosshair_follows_the_stroke_being_painted() {
        const RED: Rgba = Rgba::rgb(255, 0, 0);
        let mut session = Session::new(40, 30, ToolConfig::default(), None).unwrap();
        session.set_background(Rgba::rgb(9, 9, 9));
        let mut screen = FrameBuffer::filled(40, 30 + HUD_HEIGHT, Rgba::WHITE);
        let mouse = Some(Point::new(20.0, HUD_HEIGHT as f32 + 10.0));
        let center = (20, HUD_HEIGHT + 10);

        // Idle: inverted brush color (black brush -> white ink).
        compose(&mut screen, &session, mouse);
        assert_eq!(screen.get(center.0, center.1), Some(Rgba::WHITE));

        // Stroking in red while the toolbar already says blue: the stroke wins.
        session.surface_mut().begin_stroke(Point::new(2.0, 2.0));
        session.surface_mut().extend_stroke(Point::new(8.0, 2.0), RED, 4.0);
        session.tools_mut().set_brush_color(Rgba::rgb(0, 0, 255));
        compose(&mut screen, &session, mouse);
        let ink = Rgba::from_u32(RED.to_u32() ^ 0x00_FF_FF_FF);
        assert_eq!(screen.get(center.0, center.1), Some(ink));
        // Gap is half the stroke width; the arm starts right past it.
        assert_eq!(screen.get(center.0 + 2, center.1), Some(ink));
    }

    #[test]
    fn key_bindings() {
        assert_eq!(command_for_key(Key::Z), Some(Command::Undo));
        assert_eq!(command_for_key(Key::C), Some(Command::SelectShape(ShapeKind::Circle)));
        assert_eq!(command_for_key(Key::Key8), Some(Command::BrushColor(7)));
        assert_eq!(command_for_key(Key::Q), None);
    }

    #[test]
    fn crosshair_is_clipped() {
        let mut fb = FrameBuffer::filled(10, 10, Rgba::WHITE);
        draw_crosshair(&mut fb, 0, 0, 3, 0);
        draw_crosshair(&mut fb, 50, -50, 3, 0);
        assert_eq!(fb.get(0, 0), Some(Rgba::from_u32(0)));
    }
}
