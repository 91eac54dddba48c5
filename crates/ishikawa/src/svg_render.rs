//! SVG output generation for fishbone diagrams.
//!
//! Maps the [-5, 5] × [-5, 5] data space onto a 1000 × 600 viewport
//! (y flipped) and emits layers back to front:
//!
//! 1. Background rectangle
//! 2. Frame: tail triangle, spine, head half-disc
//! 3. Branch and cause arrows
//! 4. All labels (topmost — always readable)

use crate::geo::{FontOffset, Point, Rect};
use crate::layout::{BranchLayout, CauseLayout, FishboneLayout};
use crate::text::measure_label;
use crate::theme::Theme;
use crate::RenderOptions;

/// Viewport size in pixels. The wide 10 × 6 aspect means the two axes
/// scale differently, so circular shapes render elliptical.
const VIEW_WIDTH: f64 = 1000.0;
const VIEW_HEIGHT: f64 = 600.0;

/// Pixels per data unit on each axis (data spans [-5, 5] both ways).
const X_SCALE: f64 = VIEW_WIDTH / 10.0;
const Y_SCALE: f64 = VIEW_HEIGHT / 10.0;

/// Box padding around category labels, in font units.
const BOX_PAD: f64 = 0.8;

/// Round a coordinate to 2 decimal places for clean SVG output.
fn c(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Map a data-space point to viewport pixels (y flipped).
fn px(p: Point) -> (f64, f64) {
    ((p.x + 5.0) * X_SCALE, (5.0 - p.y) * Y_SCALE)
}

/// Apply a font-relative offset to a pixel position. FontOffset dy is
/// measured upward, so it subtracts in screen space.
fn offset_px(pos: (f64, f64), offset: FontOffset, font_size: f64) -> (f64, f64) {
    (
        pos.0 + offset.dx * font_size,
        pos.1 - offset.dy * font_size,
    )
}

/// Render a positioned fishbone to an SVG string.
pub fn render(layout: &FishboneLayout, options: &RenderOptions) -> String {
    let theme = Theme::for_mode(options.dark_mode);
    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
        VIEW_WIDTH, VIEW_HEIGHT
    ));

    // Layer 1: Background
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        VIEW_WIDTH,
        VIEW_HEIGHT,
        theme.background.to_svg_string()
    ));

    // Layer 2: Frame
    render_frame(layout, &theme, &mut svg);

    // Layer 3: Arrows
    for branch in &layout.branches {
        render_branch_arrows(branch, &theme, options, &mut svg);
    }

    // Layer 4: Labels
    render_labels(layout, &theme, options, &mut svg);

    svg.push_str("</svg>\n");
    svg
}

/// Tail triangle, spine line, head half-disc.
fn render_frame(layout: &FishboneLayout, theme: &Theme, svg: &mut String) {
    let frame = &layout.frame;
    let fill = theme.spine.to_svg_string();

    let points: Vec<String> = frame
        .tail
        .iter()
        .map(|p| {
            let (x, y) = px(*p);
            format!("{},{}", c(x), c(y))
        })
        .collect();
    svg.push_str(&format!(
        "  <polygon points=\"{}\" fill=\"{}\"/>\n",
        points.join(" "),
        fill
    ));

    let (x1, y1) = px(frame.spine.0);
    let (x2, y2) = px(frame.spine.1);
    svg.push_str(&format!(
        "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
        c(x1),
        c(y1),
        c(x2),
        c(y2),
        fill,
        theme.spine_width
    ));

    svg.push_str(&format!("  {}\n", head_path(frame.head_center, frame.head_radius, &fill)));
}

/// The head half-disc: the right half of an ellipse (the data-space circle
/// stretched by the anisotropic axis scales), from the top point through
/// the rightmost point to the bottom point, closed along the flat side.
fn head_path(center: Point, radius: f64, fill: &str) -> String {
    let (cx, cy) = px(center);
    let rx = radius * X_SCALE;
    let ry = radius * Y_SCALE;
    format!(
        "<path d=\"M {} {} A {} {} 0 0 1 {} {} Z\" fill=\"{}\"/>",
        c(cx),
        c(cy - ry),
        c(rx),
        c(ry),
        c(cx),
        c(cy + ry),
        fill
    )
}

/// Estimated box around a category label (text plus padding).
fn category_box(branch: &BranchLayout, theme: &Theme) -> ((f64, f64), Rect) {
    let pos = offset_px(px(branch.anchor), branch.text_offset, theme.category_font_size);
    let (w, h) = measure_label(&branch.name.to_uppercase(), theme.category_font_size);
    let pad = BOX_PAD * theme.category_font_size;
    let rect = Rect::new(pos.0 - w / 2.0 - pad, pos.1 - h / 2.0 - pad, w + pad * 2.0, h + pad * 2.0);
    (pos, rect)
}

/// Estimated box around a cause label (bare text, small clip margin).
fn cause_box(cause: &CauseLayout, theme: &Theme) -> ((f64, f64), Rect) {
    let pos = offset_px(px(cause.anchor), cause.text_offset, theme.cause_font_size);
    let (w, h) = measure_label(&cause.label, theme.cause_font_size);
    let rect = Rect::new(pos.0 - w / 2.0 - 2.0, pos.1 - h / 2.0 - 2.0, w + 4.0, h + 4.0);
    (pos, rect)
}

/// One branch's arrows: category label box → spine anchor, then each cause
/// label → its own anchor.
fn render_branch_arrows(
    branch: &BranchLayout,
    theme: &Theme,
    _options: &RenderOptions,
    svg: &mut String,
) {
    let color = theme.arrow_color.to_svg_string();

    let (_, box_rect) = category_box(branch, theme);
    render_arrow(svg, &box_rect, px(branch.anchor), &color, theme.stroke_width);

    for cause in &branch.causes {
        let (_, rect) = cause_box(cause, theme);
        render_arrow(svg, &rect, px(cause.anchor), &color, theme.stroke_width);
    }
}

/// A single annotation arrow: shaft from the label box boundary to the
/// anchor, plus a filled triangular head at the anchor.
fn render_arrow(svg: &mut String, from: &Rect, tip: (f64, f64), color: &str, stroke_width: f64) {
    let start = clip_to_rect(from, tip);
    svg.push_str(&format!(
        "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
        c(start.0),
        c(start.1),
        c(tip.0),
        c(tip.1),
        color,
        stroke_width
    ));

    let size = stroke_width * 5.0;
    let (t, l, r) = arrowhead(tip, start, size);
    svg.push_str(&format!(
        "  <polygon points=\"{},{} {},{} {},{}\" fill=\"{}\"/>\n",
        c(t.0),
        c(t.1),
        c(l.0),
        c(l.1),
        c(r.0),
        c(r.1),
        color
    ));
}

/// Triangle arrowhead vertices: the tip plus two base corners set back
/// along the shaft direction.
fn arrowhead(tip: (f64, f64), from: (f64, f64), size: f64) -> ((f64, f64), (f64, f64), (f64, f64)) {
    let dx = tip.0 - from.0;
    let dy = tip.1 - from.1;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-6 {
        return (tip, tip, tip);
    }
    let ux = dx / len;
    let uy = dy / len;
    let base = (tip.0 - ux * size, tip.1 - uy * size);
    let half = size * 0.4;
    (
        tip,
        (base.0 - uy * half, base.1 + ux * half),
        (base.0 + uy * half, base.1 - ux * half),
    )
}

/// Intersection of the ray from the rect center toward `toward` with the
/// rect boundary. Degenerate direction falls back to the top edge.
fn clip_to_rect(rect: &Rect, toward: (f64, f64)) -> (f64, f64) {
    let (cx, cy) = rect.center();
    let dx = toward.0 - cx;
    let dy = toward.1 - cy;
    if dx.abs() < 1e-10 && dy.abs() < 1e-10 {
        return (cx, rect.y);
    }
    let hw = rect.width / 2.0;
    let hh = rect.height / 2.0;
    let tx = if dx.abs() > 1e-10 { hw / dx.abs() } else { f64::INFINITY };
    let ty = if dy.abs() > 1e-10 { hh / dy.abs() } else { f64::INFINITY };
    let t = tx.min(ty);
    (cx + dx * t, cy + dy * t)
}

/// All labels: problem head text, boxed category labels, cause labels.
fn render_labels(layout: &FishboneLayout, theme: &Theme, options: &RenderOptions, svg: &mut String) {
    let font_family = &options.font_family;
    let box_fill = theme.spine.to_svg_string();
    let box_font = theme.box_font_color.to_svg_string();

    // Problem text inside the head, left-anchored like the original.
    let (hx, hy) = px(layout.frame.head_label);
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" \
         fill=\"{}\" font-weight=\"bold\" dominant-baseline=\"central\">{}</text>\n",
        c(hx),
        c(hy),
        font_family,
        theme.category_font_size,
        box_font,
        xml_escape(&layout.problem.to_uppercase()),
    ));

    for branch in &layout.branches {
        let (pos, rect) = category_box(branch, theme);
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            c(rect.x),
            c(rect.y),
            c(rect.width),
            c(rect.height),
            box_fill
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" \
             fill=\"{}\" font-weight=\"bold\" text-anchor=\"middle\" \
             dominant-baseline=\"central\">{}</text>\n",
            c(pos.0),
            c(pos.1),
            font_family,
            theme.category_font_size,
            box_font,
            xml_escape(&branch.name.to_uppercase()),
        ));

        let cause_fill = theme.font_color.to_svg_string();
        for cause in &branch.causes {
            let (pos, _) = cause_box(cause, theme);
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" \
                 fill=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>\n",
                c(pos.0),
                c(pos.1),
                font_family,
                theme.cause_font_size,
                cause_fill,
                xml_escape(&cause.label),
            ));
        }
    }
}

/// XML-escape a string for safe inclusion in SVG.
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;
    use crate::model::{Category, Diagram};

    fn render_default() -> String {
        let positioned = layout(&Diagram::default()).unwrap();
        render(&positioned, &RenderOptions::default())
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(xml_escape("\"hi\""), "&quot;hi&quot;");
    }

    #[test]
    fn test_px_mapping() {
        assert_eq!(px(Point::new(0.0, 0.0)), (500.0, 300.0));
        assert_eq!(px(Point::new(4.0, 0.0)), (900.0, 300.0));
        assert_eq!(px(Point::new(-5.0, 5.0)), (0.0, 0.0));
    }

    #[test]
    fn test_offset_px_flips_y() {
        let pos = offset_px((100.0, 100.0), FontOffset::new(-9.0, -0.3), 10.0);
        assert!((pos.0 - 10.0).abs() < 1e-9);
        assert!((pos.1 - 103.0).abs() < 1e-9);
    }

    #[test]
    fn test_clip_to_rect_right() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let p = clip_to_rect(&rect, (200.0, 50.0));
        assert!((p.0 - 100.0).abs() < 1e-9);
        assert!((p.1 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_clip_to_rect_degenerate() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(clip_to_rect(&rect, (50.0, 50.0)), (50.0, 0.0));
    }

    #[test]
    fn test_arrowhead_points_back_from_tip() {
        let (t, l, r) = arrowhead((10.0, 0.0), (0.0, 0.0), 5.0);
        assert_eq!(t, (10.0, 0.0));
        assert!((l.0 - 5.0).abs() < 1e-9 && (r.0 - 5.0).abs() < 1e-9);
        assert!((l.1 + r.1).abs() < 1e-9, "base corners mirror across the shaft");
    }

    #[test]
    fn test_envelope_and_background() {
        let svg = render_default();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("<rect x=\"0\" y=\"0\""));
    }

    #[test]
    fn test_frame_elements_present() {
        let svg = render_default();
        // Tail polygon, spine line, head arc.
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("<line"));
        assert!(svg.contains(" A 100 60 "), "head should be an elliptical arc");
    }

    #[test]
    fn test_category_labels_uppercased() {
        let svg = render_default();
        for name in ["METHOD", "MACHINE", "MATERIAL", "MEASUREMENT", "ENVIRONMENT", "PEOPLE"] {
            assert!(svg.contains(&format!(">{name}</text>")), "missing {name}");
        }
        assert!(svg.contains(">PROBLEM</text>"));
    }

    #[test]
    fn test_text_element_count() {
        // 6 category labels + 15 causes + 1 problem head.
        let svg = render_default();
        assert_eq!(svg.matches("<text").count(), 22);
    }

    #[test]
    fn test_empty_cause_list_renders_category_only() {
        let diagram = Diagram::new("P", vec![Category::new("Method", &[])]);
        let positioned = layout(&diagram).unwrap();
        let svg = render(&positioned, &RenderOptions::default());
        assert!(svg.contains(">METHOD</text>"));
        // Problem + category label only.
        assert_eq!(svg.matches("<text").count(), 2);
    }

    #[test]
    fn test_dark_mode_changes_background() {
        let positioned = layout(&Diagram::default()).unwrap();
        let light = render(&positioned, &RenderOptions::default());
        let dark = render(
            &positioned,
            &RenderOptions {
                dark_mode: true,
                ..Default::default()
            },
        );
        assert!(light.contains("fill=\"#ffffff\""));
        assert!(dark.contains("fill=\"#000000\""));
    }

    #[test]
    fn test_special_chars_escaped() {
        let diagram = Diagram::new("P", vec![Category::new("M&M", &["a < b"])]);
        let positioned = layout(&diagram).unwrap();
        let svg = render(&positioned, &RenderOptions::default());
        assert!(svg.contains("M&amp;M"));
        assert!(svg.contains("a &lt; b"));
    }
}
