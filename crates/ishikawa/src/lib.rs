//! fishview-ishikawa: Native fishbone (Ishikawa) diagram renderer.
//!
//! This crate renders a cause-and-effect diagram — a horizontal spine
//! ending in a "problem" head, with category branches alternating above
//! and below the spine and leaf-level cause annotations fanned out along
//! each branch — as a pure-Rust library. It computes the layout from a
//! [`Diagram`] and renders the result to SVG.
//!
//! The primary entry point is [`render_fishbone_to_svg()`], which takes a
//! diagram and rendering options and returns an SVG string. The pipeline
//! phases ([`layout`], [`render_svg`]) are also exposed for testing and
//! debugging.

pub mod geo;
pub mod layout;
pub mod model;
pub mod slots;
pub mod svg_render;
pub mod text;
pub mod theme;

pub use geo::{FontOffset, Point, Rect};
pub use layout::{BranchLayout, CauseLayout, FishboneLayout, FishboneWarning, Frame, LayoutError};
pub use model::{Category, Diagram, MAX_CATEGORIES};
pub use slots::{Side, Slot, Zone};
pub use theme::Theme;

// ---------------------------------------------------------------------------
// Public API types
// ---------------------------------------------------------------------------

/// Rendering options passed from the host application.
pub struct RenderOptions {
    /// Dark mode (true) or light mode (false). Default: false, matching
    /// the classic white-figure look.
    pub dark_mode: bool,
    /// Font family for labels. Default: "Arial, Helvetica, sans-serif".
    pub font_family: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_family: "Arial, Helvetica, sans-serif".into(),
        }
    }
}

/// Result of rendering, including the SVG and any non-fatal warnings.
pub struct RenderResult {
    pub svg: String,
    pub warnings: Vec<FishboneWarning>,
}

/// Top-level error from render_fishbone_to_svg()
#[derive(Debug, thiserror::Error)]
pub enum FishboneError {
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

// ---------------------------------------------------------------------------
// Public pipeline API
// ---------------------------------------------------------------------------

/// Full pipeline: diagram → SVG string.
pub fn render_fishbone_to_svg(
    diagram: &Diagram,
    options: &RenderOptions,
) -> Result<RenderResult, FishboneError> {
    // Phase 1: Layout
    let positioned = layout(diagram)?;

    // Phase 2: Render SVG
    let svg = render_svg(&positioned, options);

    Ok(RenderResult {
        svg,
        warnings: positioned.warnings,
    })
}

/// Phase 1: Compute branch and cause geometry from the diagram.
pub fn layout(diagram: &Diagram) -> Result<FishboneLayout, LayoutError> {
    layout::layout(diagram)
}

/// Phase 2: Render a positioned diagram to SVG.
pub fn render_svg(positioned: &FishboneLayout, options: &RenderOptions) -> String {
    svg_render::render(positioned, options)
}

// ---------------------------------------------------------------------------
// End-to-end tests
// ---------------------------------------------------------------------------
