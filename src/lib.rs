//! Standalone fishbone (Ishikawa) diagram viewer built with Rust and egui.
//!
//! This library provides the GUI application logic: it renders the
//! diagram to SVG via the embedded `fishview-ishikawa` crate, rasterizes
//! the SVG to an egui texture via usvg/resvg, and displays it in a native
//! window.

pub mod app;

pub(crate) mod svg_texture;

pub use app::{FishboneViewerApp, APP_TITLE_PREFIX};
