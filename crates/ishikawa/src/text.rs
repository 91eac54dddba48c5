//! Heuristic text measurement for label sizing.
//!
//! Uses an average character width for proportional fonts. This doesn't
//! need to be pixel-perfect — it only sizes the category boxes and clips
//! arrow starts; the final glyphs are laid out by whatever renders the SVG.

/// Average character width multiplier for proportional fonts.
const CHAR_WIDTH_FACTOR: f64 = 0.55;

/// Line height multiplier.
const LINE_HEIGHT_FACTOR: f64 = 1.4;

/// Estimated (width, height) in pixels of a single-line label.
pub fn measure_label(text: &str, font_size: f64) -> (f64, f64) {
    if text.is_empty() {
        return (0.0, 0.0);
    }
    let width = text.chars().count() as f64 * font_size * CHAR_WIDTH_FACTOR;
    (width, font_size * LINE_HEIGHT_FACTOR)
}
