//! Default colors and dark/light themes for fishbone rendering.

/// An RGB color, formatted as a hex string for SVG attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Format as SVG color string (e.g., "#1f77b4").
    pub fn to_svg_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Theme with default colors for fishbone rendering.
pub struct Theme {
    /// Fill for the spine, head, tail, and category boxes.
    pub spine: Color,
    /// Diagram background.
    pub background: Color,
    /// Cause label color.
    pub font_color: Color,
    /// Text color inside filled boxes (category labels, problem head).
    pub box_font_color: Color,
    /// Arrow stroke.
    pub arrow_color: Color,
    /// Category/problem label font size in pixels.
    pub category_font_size: f64,
    /// Cause label font size in pixels.
    pub cause_font_size: f64,
    /// Arrow stroke width.
    pub stroke_width: f64,
    /// Spine stroke width.
    pub spine_width: f64,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            spine: Color(0x1F, 0x77, 0xB4),
            background: Color(0x00, 0x00, 0x00),
            font_color: Color(0xE0, 0xE0, 0xE0),
            box_font_color: Color(0xFF, 0xFF, 0xFF),
            arrow_color: Color(0x88, 0x88, 0x88),
            category_font_size: 14.0,
            cause_font_size: 12.5,
            stroke_width: 1.5,
            spine_width: 3.0,
        }
    }

    pub fn light() -> Self {
        Self {
            spine: Color(0x1F, 0x77, 0xB4),
            background: Color(0xFF, 0xFF, 0xFF),
            font_color: Color(0x17, 0x17, 0x17),
            box_font_color: Color(0xFF, 0xFF, 0xFF),
            arrow_color: Color(0x33, 0x33, 0x33),
            category_font_size: 14.0,
            cause_font_size: 12.5,
            stroke_width: 1.5,
            spine_width: 3.0,
        }
    }

    /// Select theme based on dark_mode flag.
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
