// Full-canvas snapshots for undo.
// A snapshot is the whole buffer encoded as PNG, the desktop twin of a canvas data URL.

use crate::error::Error;
use crate::types::{FrameBuffer, Rgba};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::sync::Arc;

/// Immutable encoded copy of the canvas at one instant.
/// Clones share the same bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: usize,
    height: usize,
    png: Arc<[u8]>,
}

impl Snapshot {
    /// Encode the full buffer.
    pub fn encode(fb: &FrameBuffer) -> Result<Self, Error> {
        let mut rgba = Vec::with_capacity(fb.pixels.len() * 4);
        for &px in &fb.pixels {
            let c = Rgba::from_u32(px);
            rgba.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        // The length always matches width*height*4, so this never returns None.
        let img = RgbaImage::from_raw(fb.width as u32, fb.height as u32, rgba)
            .ok_or(Error::SnapshotSize {
                got_w: fb.width,
                got_h: fb.height,
                want_w: fb.width,
                want_h: fb.height,
            })?;

        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(Error::SnapshotEncode)?;

        Ok(Self { width: fb.width, height: fb.height, png: png.into() })
    }

    /// Decode back into a fresh buffer.
    pub fn decode(&self) -> Result<FrameBuffer, Error> {
        let img = image::load_from_memory_with_format(&self.png, ImageFormat::Png)
            .map_err(Error::SnapshotDecode)?
            .to_rgba8();

        let (w, h) = (img.width() as usize, img.height() as usize);
        if w != self.width || h != self.height {
            return Err(Error::SnapshotSize { got_w: w, got_h: h, want_w: self.width, want_h: self.height });
        }

        let pixels = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                Rgba { r, g, b, a }.to_u32()
            })
            .collect();
        Ok(FrameBuffer { width: w, height: h, pixels })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Encoded size in bytes.
    pub fn byte_len(&self) -> usize {
        self.png.len()
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Snapshot({}x{}, {} bytes)", self.width, self.height, self.png.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::fill_rect;

    #[test]
    fn decode_gives_back_the_captured_pixels() {
        let mut fb = FrameBuffer::filled(32, 16, Rgba::WHITE);
        fill_rect(&mut fb, 4.0, 4.0, 8.0, 8.0, Rgba::rgb(12, 200, 99));
        let snap = Snapshot::encode(&fb).unwrap();
        assert_eq!((snap.width(), snap.height()), (32, 16));
        assert_eq!(snap.decode().unwrap(), fb);
    }

    #[test]
    fn snapshot_is_independent_of_later_edits() {
        let mut fb = FrameBuffer::filled(8, 8, Rgba::WHITE);
        let snap = Snapshot::encode(&fb).unwrap();
        fill_rect(&mut fb, 0.0, 0.0, 8.0, 8.0, Rgba::BLACK);
        assert_eq!(snap.decode().unwrap(), FrameBuffer::filled(8, 8, Rgba::WHITE));
    }

    #[test]
    fn flat_canvas_compresses() {
        let fb = FrameBuffer::filled(256, 256, Rgba::WHITE);
        let snap = Snapshot::encode(&fb).unwrap();
        assert!(snap.byte_len() < 256 * 256 * 4 / 10, "{snap:?}");
    }
}
