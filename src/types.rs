// Core value types shared by the surface, the history and the window.

use crate::error::Error;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// 8-bit RGBA color.
/// Visual: the exact shade a brush, shape or background paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Pack as 0xAARRGGBB (minifb reads the low 24 bits).
    #[inline]
    pub fn to_u32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub fn from_u32(px: u32) -> Self {
        Self {
            a: ((px >> 24) & 0xFF) as u8,
            r: ((px >> 16) & 0xFF) as u8,
            g: ((px >> 8) & 0xFF) as u8,
            b: (px & 0xFF) as u8,
        }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    /// Accepts `#rgb` and `#rrggbb` (what an HTML color input hands out).
    fn from_str(s: &str) -> Result<Self, Error> {
        let bad = || Error::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(bad)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| bad());
        match hex.len() {
            3 => {
                // "#abc" means "#aabbcc"
                let mut out = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = channel(&c.to_string())?;
                    out[i] = v * 17;
                }
                Ok(Rgba::rgb(out[0], out[1], out[2]))
            }
            6 => Ok(Rgba::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(bad()),
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Error> {
        s.parse()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Surface-local pointer position. Pixel (x,y) is sampled at its center (x+0.5, y+0.5).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Largest canvas we allocate (8192 x 8192 pixels).
pub const MAX_CANVAS_AREA: usize = 1 << 26;

/// Both sides non-zero and the pixel count within MAX_CANVAS_AREA.
pub fn check_canvas_size(width: usize, height: usize) -> Result<(), Error> {
    match width.checked_mul(height) {
        Some(area) if width > 0 && height > 0 && area <= MAX_CANVAS_AREA => Ok(()),
        _ => Err(Error::CanvasSize { width, height }),
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the canvas is on screen (pixels)
    pub height: usize,     // how tall the canvas is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0xAARRGGBB
}

impl FrameBuffer {
    /// A buffer filled edge to edge with one color.
    pub fn filled(width: usize, height: usize, color: Rgba) -> Self {
        Self { width, height, pixels: vec![color.to_u32(); width * height] }
    }

    /// Color at (x,y); None outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Rgba::from_u32(self.pixels[y * self.width + x]))
    }
}

impl fmt::Debug for FrameBuffer {
    // Printing every pixel is useless in test failures.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#ff0000".parse::<Rgba>().unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!("#0000FF".parse::<Rgba>().unwrap(), Rgba::rgb(0, 0, 255));
        assert_eq!("#fa0".parse::<Rgba>().unwrap(), Rgba::rgb(0xFF, 0xAA, 0x00));
    }

    #[test]
    fn rejects_malformed_hex() {
        for s in ["ff0000", "#ff00", "#gg0000", "#ff00000", "", "#"] {
            assert!(matches!(s.parse::<Rgba>(), Err(Error::InvalidColor(_))), "{s:?}");
        }
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgba::rgb(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
    }

    #[test]
    fn pack_unpack_keeps_channels() {
        let c = Rgba { r: 1, g: 2, b: 3, a: 4 };
        assert_eq!(c.to_u32(), 0x04_01_02_03);
        assert_eq!(Rgba::from_u32(c.to_u32()), c);
    }

    #[test]
    fn canvas_size_limits() {
        assert!(check_canvas_size(1024, 720).is_ok());
        assert!(check_canvas_size(8192, 8192).is_ok());
        for (w, h) in [(0, 10), (10, 0), (0, 0), (8193, 8192), (usize::MAX, 2)] {
            assert!(
                matches!(check_canvas_size(w, h), Err(Error::CanvasSize { width, height }) if width == w && height == h),
                "{w}x{h}"
            );
        }
    }

    #[test]
    fn filled_buffer_reads_back() {
        let fb = FrameBuffer::filled(3, 2, Rgba::WHITE);
        assert_eq!(fb.pixels.len(), 6);
        assert_eq!(fb.get(2, 1), Some(Rgba::WHITE));
        assert_eq!(fb.get(3, 0), None);
    }
}
