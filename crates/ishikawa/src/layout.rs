//! Layout engine for fishbone diagrams.
//!
//! Pure geometry: consumes a [`Diagram`] and produces a [`FishboneLayout`]
//! with every anchor and label offset resolved in data coordinates. No
//! drawing happens here; the SVG renderer consumes the result.

use thiserror::Error;

use crate::geo::{FontOffset, Point};
use crate::model::{Diagram, MAX_CATEGORIES};
use crate::slots::{slot, Side};

/// Layout failure.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("a fishbone holds at most {MAX_CATEGORIES} categories, got {0}")]
    TooManyCategories(usize),
}

/// Non-fatal layout condition (e.g. a category with no causes).
#[derive(Debug)]
pub struct FishboneWarning {
    pub message: String,
}

/// Fixed frame geometry: spine, head and tail, sized for the full
/// six-slot grid.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Spine endpoints, tail side first.
    pub spine: (Point, Point),
    pub head_center: Point,
    /// Head half-disc radius in data units.
    pub head_radius: f64,
    /// Where the problem text starts inside the head.
    pub head_label: Point,
    /// Tail triangle vertices.
    pub tail: [Point; 3],
}

impl Frame {
    pub fn standard() -> Self {
        Frame {
            spine: (Point::new(-4.1, 0.0), Point::new(4.0, 0.0)),
            head_center: Point::new(4.0, 0.0),
            head_radius: 1.0,
            head_label: Point::new(4.1, -0.05),
            tail: [
                Point::new(-4.8, 0.8),
                Point::new(-4.8, -0.8),
                Point::new(-4.0, -0.01),
            ],
        }
    }
}

/// One positioned branch: the category annotation plus its causes.
#[derive(Clone, Debug)]
pub struct BranchLayout {
    pub name: String,
    pub side: Side,
    /// Branch arrow tip on the spine.
    pub anchor: Point,
    /// Category label displacement from the anchor, in font units.
    pub text_offset: FontOffset,
    pub causes: Vec<CauseLayout>,
}

/// One positioned cause annotation.
#[derive(Clone, Debug)]
pub struct CauseLayout {
    pub label: String,
    pub anchor: Point,
    /// Label displacement from the anchor, in font units.
    pub text_offset: FontOffset,
}

/// The fully positioned diagram.
#[derive(Debug)]
pub struct FishboneLayout {
    pub frame: Frame,
    /// Problem text drawn in the head.
    pub problem: String,
    pub branches: Vec<BranchLayout>,
    pub warnings: Vec<FishboneWarning>,
}

/// Compute the layout for a diagram.
///
/// Fewer than six categories leaves the remaining slots empty; more than
/// six is rejected before any geometry is computed.
pub fn layout(diagram: &Diagram) -> Result<FishboneLayout, LayoutError> {
    if diagram.categories.len() > MAX_CATEGORIES {
        return Err(LayoutError::TooManyCategories(diagram.categories.len()));
    }

    let mut warnings = Vec::new();
    let mut branches = Vec::with_capacity(diagram.categories.len());

    for (index, category) in diagram.categories.iter().enumerate() {
        let slot = slot(index);
        if category.causes.is_empty() {
            warnings.push(FishboneWarning {
                message: format!("category '{}' has no causes", category.name),
            });
        }
        branches.push(BranchLayout {
            name: category.name.clone(),
            side: slot.side,
            anchor: slot.cat_arrow(),
            text_offset: slot.cat_text_offset(),
            causes: cause_layouts(index, &category.causes),
        });
    }

    Ok(FishboneLayout {
        frame: Frame::standard(),
        problem: diagram.problem.clone(),
        branches,
        warnings,
    })
}

/// Position one branch's causes.
///
/// A lone cause takes the slot's dedicated `single_cause` point. Several
/// causes start at the cascade base and walk a fixed step per cause, so
/// the arrows fan out diagonally without overlapping.
fn cause_layouts(index: usize, causes: &[String]) -> Vec<CauseLayout> {
    let slot = slot(index);

    if causes.len() == 1 {
        return vec![CauseLayout {
            label: causes[0].clone(),
            anchor: slot.single_cause(),
            text_offset: crate::slots::CAUSE_TEXT_OFFSET,
        }];
    }

    let (step_x, step_y) = slot.cause_step();
    let mut anchor = slot.cause_base();
    let mut out = Vec::with_capacity(causes.len());
    for (i, cause) in causes.iter().enumerate() {
        if i > 0 {
            anchor = anchor.translated(step_x, step_y);
        }
        out.push(CauseLayout {
            label: cause.clone(),
            anchor,
            text_offset: crate::slots::CAUSE_TEXT_OFFSET,
        });
    }
    out
}
