// Startup settings, read best-effort from a small JSON file.
// Missing file = defaults; a file that exists but does not parse is an error.

use crate::error::Error;
use crate::tool::ToolConfig;
use crate::types::{check_canvas_size, Rgba};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "SKETCHPAD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "sketchpad.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub width: usize,
    pub height: usize,
    pub brush_color: Rgba,
    pub brush_width: u32,
    pub background_color: Rgba,
    pub eraser: bool,
    pub shape_size: u32,
    /// Oldest snapshots are dropped beyond this many; unbounded when absent.
    pub history_limit: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let tools = ToolConfig::default();
        Self {
            width: 1024,
            height: 720,
            brush_color: tools.brush_color(),
            brush_width: tools.brush_width(),
            background_color: tools.background_color(),
            eraser: tools.eraser_active(),
            shape_size: tools.shape_size(),
            history_limit: None,
        }
    }
}

impl AppConfig {
    /// `$SKETCHPAD_CONFIG`, else `sketchpad.json` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        match std::fs::read(path) {
            Ok(bytes) => Self::from_json(&bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let cfg: Self = serde_json::from_slice(bytes)?;
        check_canvas_size(cfg.width, cfg.height)?;
        Ok(cfg)
    }

    /// Initial tool state; out-of-range sizes are clamped like the UI would.
    pub fn tools(&self) -> ToolConfig {
        let mut t = ToolConfig::default();
        t.set_brush_color(self.brush_color);
        t.set_brush_width(self.brush_width);
        t.set_background_color(self.background_color);
        t.set_eraser(self.eraser);
        t.set_shape_size(self.shape_size);
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_default() {
        assert_eq!(AppConfig::from_json(b"").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_json(b"{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let cfg = AppConfig::from_json(
            br##"{ "width": 640, "background_color": "#00f", "history_limit": 32 }"##,
        )
        .unwrap();
        assert_eq!(cfg.width, 640);
        assert_eq!(cfg.height, 720);
        assert_eq!(cfg.background_color, Rgba::rgb(0, 0, 255));
        assert_eq!(cfg.history_limit, Some(32));
        assert_eq!(cfg.brush_color, Rgba::BLACK);
    }

    #[test]
    fn tools_are_clamped() {
        let cfg = AppConfig::from_json(br#"{ "brush_width": 80, "shape_size": 1, "eraser": true }"#).unwrap();
        let t = cfg.tools();
        assert_eq!(t.brush_width(), 20);
        assert_eq!(t.shape_size(), 10);
        assert!(t.eraser_active());
    }

    #[test]
    fn bad_color_or_key_is_an_error() {
        assert!(matches!(
            AppConfig::from_json(br#"{ "brush_color": "red" }"#),
            Err(Error::ConfigParse(_))
        ));
        assert!(matches!(
            AppConfig::from_json(br##"{ "brush_colour": "#000" }"##),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn empty_or_oversized_canvas_is_rejected() {
        for json in [
            br#"{ "width": 0 }"#.as_slice(),
            br#"{ "height": 0 }"#.as_slice(),
            br#"{ "width": 100000, "height": 100000 }"#.as_slice(),
            br#"{ "width": 18446744073709551615, "height": 2 }"#.as_slice(),
        ] {
            assert!(
                matches!(AppConfig::from_json(json), Err(Error::CanvasSize { .. })),
                "{}",
                String::from_utf8_lossy(json)
            );
        }
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("sketchpad-no-such-config.json");
        assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::default());
    }
}
