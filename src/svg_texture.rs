//! SVG rasterization for the viewer.
//!
//! Pure function: SVG string → RGBA bytes via usvg/resvg. The diagram is
//! static and rendered one-shot, so rasterization runs synchronously on
//! the UI thread; it only re-runs when the panel width bucket or theme
//! changes.

use std::sync::Arc;

/// Maximum rasterized dimension (width or height) in pixels.
const MAX_RASTER_SIDE: u32 = 4096;
/// Rasterization supersample factor for crisp text and clean lines.
const SUPERSAMPLE: f32 = 2.0;

/// Output of `rasterize_svg`, before GPU upload.
pub(crate) struct RasterOutput {
    pub rgba: Vec<u8>,
    /// Raster dimensions in actual pixels (for texture upload).
    pub raster_size: [usize; 2],
    /// Display dimensions in logical pixels (for UI layout).
    pub display_size: [u32; 2],
}

/// Quantize a width value to 32-pixel buckets to avoid re-rasterizing
/// when the panel width changes by a few pixels during resize.
pub(crate) fn bucket_width(width: f32) -> u32 {
    let bucket = (width / 32.0).round() as u32;
    bucket * 32
}

/// Rasterize an SVG string, scaled to fit the given width bucket.
pub(crate) fn rasterize_svg(
    fontdb: &Arc<usvg::fontdb::Database>,
    svg: &str,
    width_bucket: u32,
) -> Result<RasterOutput, String> {
    // Parse SVG using the shared fontdb with system fonts loaded.
    let opt = usvg::Options {
        fontdb: Arc::clone(fontdb),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opt)
        .map_err(|e| format!("SVG parse error: {}", e))?;

    let size = tree.size().to_int_size();
    let (w, h) = (size.width().max(1), size.height().max(1));

    // Scale the diagram to the available width.
    let scale = if width_bucket > 0 {
        (width_bucket as f32 / w as f32).clamp(0.1, 4.0)
    } else {
        1.0
    };

    let display_w = (w as f32 * scale).round().max(1.0) as u32;
    let display_h = (h as f32 * scale).round().max(1.0) as u32;

    // Raster dimensions: supersample for crisp text and thin lines.
    let raster_scale = scale * SUPERSAMPLE;
    let mut raster_w = (w as f32 * raster_scale).round().max(1.0) as u32;
    let mut raster_h = (h as f32 * raster_scale).round().max(1.0) as u32;

    if raster_w > MAX_RASTER_SIDE || raster_h > MAX_RASTER_SIDE {
        let clamp_scale = (MAX_RASTER_SIDE as f32 / raster_w as f32)
            .min(MAX_RASTER_SIDE as f32 / raster_h as f32);
        raster_w = (raster_w as f32 * clamp_scale).round().max(1.0) as u32;
        raster_h = (raster_h as f32 * clamp_scale).round().max(1.0) as u32;
    }

    // The diagram SVG includes a background fill, so no separate fill needed.
    let mut pixmap = tiny_skia::Pixmap::new(raster_w, raster_h)
        .ok_or_else(|| "Pixmap allocation failed".to_string())?;
    let transform = tiny_skia::Transform::from_scale(
        raster_w as f32 / w as f32,
        raster_h as f32 / h as f32,
    );
    let mut pmut = pixmap.as_mut();
    resvg::render(&tree, transform, &mut pmut);

    Ok(RasterOutput {
        rgba: pixmap.data().to_vec(),
        raster_size: [raster_w as usize, raster_h as usize],
        display_size: [display_w, display_h],
    })
}
