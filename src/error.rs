// One error type for the whole app.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("Snapshot encode failed")]
    SnapshotEncode(#[source] image::ImageError), // PNG encode of the canvas failed
    #[error("Snapshot decode failed")]
    SnapshotDecode(#[source] image::ImageError), // PNG decode during undo failed
    #[error("Snapshot is {got_w}x{got_h}, surface is {want_w}x{want_h}")]
    SnapshotSize {
        got_w: usize,
        got_h: usize,
        want_w: usize,
        want_h: usize,
    },
    #[error("Canvas size {width}x{height} is empty or too large")]
    CanvasSize { width: usize, height: usize }, // Zero side, or more pixels than we allocate
    #[error("Invalid color {0:?} (expected #rgb or #rrggbb)")]
    InvalidColor(String),
    #[error("Config io error: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
