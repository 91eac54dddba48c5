//! Fishbone conformance suite — structural invariant checker.
//!
//! Renders diagrams through the full `render_fishbone_to_svg()` pipeline,
//! extracts element positions from the resulting SVG text, and checks
//! structural invariants:
//!
//! 1. **labels_on_correct_side** — every category and cause label sits on
//!    its branch's side of the spine.
//! 2. **category_boxes_not_overlapping** — the six category boxes must not
//!    overlap each other.
//! 3. **element_counts** — one arrow per annotation, one tail triangle,
//!    one spine.
//! 4. **frame_envelope** — the background spans the whole viewport and
//!    every label lands inside it.

use fishview_ishikawa::{render_fishbone_to_svg, Diagram, RenderOptions};

/// Spine y in viewport pixels: data y = 0 on a 600px-tall, [-5, 5] view.
const SPINE_Y: f64 = 300.0;

// ---------------------------------------------------------------------------
// Minimal SVG scraping helpers
// ---------------------------------------------------------------------------

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
struct Aabb {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Aabb {
    /// True if `self` strictly overlaps `other` (more than a 0.5 px sliver).
    fn overlaps(&self, other: &Aabb) -> bool {
        let eps = 0.5;
        self.x + eps < other.x + other.w
            && other.x + eps < self.x + self.w
            && self.y + eps < other.y + other.h
            && other.y + eps < self.y + self.h
    }
}

/// A positioned text element.
#[derive(Debug)]
struct TextEl {
    x: f64,
    y: f64,
    content: String,
}

/// Pull a numeric attribute out of an element's opening tag.
fn attr(tag: &str, name: &str) -> Option<f64> {
    let needle = format!("{name}=\"");
    let start = tag.find(&needle)? + needle.len();
    let end = start + tag[start..].find('"')?;
    tag[start..end].parse().ok()
}

/// Every opening tag of the given element name, e.g. "<line".
fn tags<'a>(svg: &'a str, open: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut rest = svg;
    while let Some(pos) = rest.find(open) {
        let tag = &rest[pos..];
        let end = tag.find('>').map(|i| i + 1).unwrap_or(tag.len());
        out.push(&tag[..end]);
        rest = &rest[pos + end..];
    }
    out
}

fn texts(svg: &str) -> Vec<TextEl> {
    let mut out = Vec::new();
    let mut rest = svg;
    while let Some(pos) = rest.find("<text") {
        let tag = &rest[pos..];
        let open_end = tag.find('>').expect("unterminated <text>");
        let close = tag.find("</text>").expect("missing </text>");
        out.push(TextEl {
            x: attr(&tag[..open_end + 1], "x").expect("text without x"),
            y: attr(&tag[..open_end + 1], "y").expect("text without y"),
            content: tag[open_end + 1..close].to_string(),
        });
        rest = &rest[pos + close..];
    }
    out
}

fn rects(svg: &str) -> Vec<Aabb> {
    tags(svg, "<rect")
        .iter()
        .map(|tag| Aabb {
            x: attr(tag, "x").expect("rect without x"),
            y: attr(tag, "y").expect("rect without y"),
            w: attr(tag, "width").expect("rect without width"),
            h: attr(tag, "height").expect("rect without height"),
        })
        .collect()
}

fn render_default() -> String {
    render_fishbone_to_svg(&Diagram::default(), &RenderOptions::default())
        .expect("default diagram should render")
        .svg
}

fn find<'a>(elements: &'a [TextEl], content: &str) -> &'a TextEl {
    elements
        .iter()
        .find(|t| t.content == content)
        .unwrap_or_else(|| panic!("label '{content}' not found"))
}

// ---------------------------------------------------------------------------
// Invariants
// ---------------------------------------------------------------------------

#[test]
fn labels_on_correct_side() {
    let svg = render_default();
    let elements = texts(&svg);

    // Even-index categories above the spine (smaller y in SVG space),
    // odd-index below — and every cause follows its category.
    let above = [
        ("METHOD", vec!["Time consumption", "Cost", "Procedures", "Inefficient process"]),
        ("MATERIAL", vec!["Poor-quality input", "Raw materials", "Supplier", "Shortage"]),
        ("ENVIRONMENT", vec!["Bad conditions"]),
    ];
    let below = [
        ("MACHINE", vec!["Faulty equipment", "Compatibility"]),
        ("MEASUREMENT", vec!["Calibration", "Performance", "Wrong measurements"]),
        ("PEOPLE", vec!["Lack of training", "Managers", "Labor shortage", "Skills"]),
    ];

    for (category, causes) in &above {
        assert!(find(&elements, category).y < SPINE_Y, "{category} should sit above the spine");
        for cause in causes {
            assert!(find(&elements, cause).y < SPINE_Y, "{cause} should sit above the spine");
        }
    }
    for (category, causes) in &below {
        assert!(find(&elements, category).y > SPINE_Y, "{category} should sit below the spine");
        for cause in causes {
            assert!(find(&elements, cause).y > SPINE_Y, "{cause} should sit below the spine");
        }
    }
}

#[test]
fn category_boxes_not_overlapping() {
    let svg = render_default();
    let rects = rects(&svg);
    // First rect is the background; the rest are category boxes.
    let boxes = &rects[1..];
    assert_eq!(boxes.len(), 6, "expected one box per category");

    for i in 0..boxes.len() {
        for j in i + 1..boxes.len() {
            assert!(
                !boxes[i].overlaps(&boxes[j]),
                "category boxes {i} and {j} overlap: {:?} vs {:?}",
                boxes[i],
                boxes[j]
            );
        }
    }
}

#[test]
fn element_counts() {
    let svg = render_default();

    // 21 annotations (6 categories + 15 causes): one shaft line and one
    // arrowhead polygon each, plus the spine line and the tail triangle.
    assert_eq!(tags(&svg, "<line").len(), 22, "spine + 21 arrow shafts");
    assert_eq!(tags(&svg, "<polygon").len(), 22, "tail + 21 arrowheads");
    // 6 categories + 15 causes + problem head.
    assert_eq!(texts(&svg).len(), 22);
    // Head half-disc is the only path.
    assert_eq!(tags(&svg, "<path").len(), 1);
}

#[test]
fn frame_envelope() {
    let svg = render_default();
    let rects = rects(&svg);
    let background = rects[0];
    assert_eq!((background.x, background.y), (0.0, 0.0));
    assert_eq!((background.w, background.h), (1000.0, 600.0));

    for text in texts(&svg) {
        assert!(
            text.x >= 0.0 && text.x <= background.w && text.y >= 0.0 && text.y <= background.h,
            "label '{}' at ({}, {}) escapes the viewport",
            text.content,
            text.x,
            text.y
        );
    }
}

#[test]
fn partial_diagram_keeps_frame() {
    // Two categories leave four slots empty but the frame is unchanged.
    let mut diagram = Diagram::default();
    diagram.categories.truncate(2);
    let svg = render_fishbone_to_svg(&diagram, &RenderOptions::default())
        .expect("partial diagram should render")
        .svg;

    assert_eq!(tags(&svg, "<path").len(), 1, "head still drawn");
    let elements = texts(&svg);
    assert!(elements.iter().any(|t| t.content == "METHOD"));
    assert!(elements.iter().any(|t| t.content == "MACHINE"));
    assert!(!elements.iter().any(|t| t.content == "MATERIAL"));
}
