// Freehand raster sketchpad: brush, eraser, shape stamps and snapshot undo.
// The window loop lives in main.rs; everything it drives is here.

pub mod commands;
pub mod config;
pub mod draw;
pub mod error;
pub mod history;
pub mod input;
pub mod raster;
pub mod session;
pub mod snapshot;
pub mod surface;
pub mod tool;
pub mod types;
