//! The fixed slot table mapping a category's index to its place around
//! the spine.
//!
//! Six slots form a 3×2 grid: three horizontal zones (head, middle, tail)
//! each holding one branch above and one below the spine. The table makes
//! the assignment an explicit lookup instead of index-parity arithmetic.

use crate::geo::{FontOffset, Point};

/// Horizontal step between consecutive cause anchors in a cascade.
pub const CAUSE_STEP_X: f64 = -0.22;
/// Vertical step magnitude between consecutive cause anchors; the sign
/// follows the slot side.
pub const CAUSE_STEP_Y: f64 = 0.5;
/// |y| of the first cause anchor when a branch has several causes.
pub const CAUSE_BASE_Y: f64 = 2.0;
/// |y| of the dedicated anchor used when a branch has exactly one cause.
/// Kept between the spine and the cascade base so the lone label clears
/// the branch arrow.
pub const SINGLE_CAUSE_Y: f64 = 1.4;

/// Category label displacement from its spine anchor, in font units.
/// Negative dx angles every label toward the tail.
pub const CAT_TEXT_DX: f64 = -15.0;
pub const CAT_TEXT_DY: f64 = 16.0;

/// Cause label displacement from its anchor, in font units. Shared by
/// every cause on both sides of the spine.
pub const CAUSE_TEXT_OFFSET: FontOffset = FontOffset { dx: -9.0, dy: -0.3 };

/// Which side of the spine a branch grows on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
}

impl Side {
    /// Sign applied to vertical magnitudes: +1 above the spine, -1 below.
    pub fn sign(self) -> f64 {
        match self {
            Side::Above => 1.0,
            Side::Below => -1.0,
        }
    }
}

/// Horizontal zone along the spine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Head,
    Middle,
    Tail,
}

impl Zone {
    /// X of the branch arrow tip on the spine.
    pub fn cat_arrow_x(self) -> f64 {
        match self {
            Zone::Head => 3.5,
            Zone::Middle => 1.0,
            Zone::Tail => -1.6,
        }
    }

    /// X of the dedicated single-cause anchor.
    pub fn single_cause_x(self) -> f64 {
        match self {
            Zone::Head => 3.2,
            Zone::Middle => 0.7,
            Zone::Tail => -1.9,
        }
    }

    /// X of the first anchor of a multi-cause cascade.
    pub fn cause_base_x(self) -> f64 {
        match self {
            Zone::Head => 2.5,
            Zone::Middle => 0.0,
            Zone::Tail => -2.6,
        }
    }
}

/// One of the six fixed branch positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub side: Side,
    pub zone: Zone,
}

/// The slot table. Even indices sit above the spine, odd below; index
/// pairs fill the zones from head to tail.
const SLOTS: [Slot; 6] = [
    Slot { side: Side::Above, zone: Zone::Head },
    Slot { side: Side::Below, zone: Zone::Head },
    Slot { side: Side::Above, zone: Zone::Middle },
    Slot { side: Side::Below, zone: Zone::Middle },
    Slot { side: Side::Above, zone: Zone::Tail },
    Slot { side: Side::Below, zone: Zone::Tail },
];

/// Look up the slot for a category index. The layout engine validates the
/// index range before calling.
pub fn slot(index: usize) -> Slot {
    SLOTS[index]
}

impl Slot {
    /// Branch arrow tip, always on the spine.
    pub fn cat_arrow(&self) -> Point {
        Point::new(self.zone.cat_arrow_x(), 0.0)
    }

    /// Category label displacement from the arrow tip, in font units.
    pub fn cat_text_offset(&self) -> FontOffset {
        FontOffset::new(CAT_TEXT_DX, self.side.sign() * CAT_TEXT_DY)
    }

    /// Anchor used when the branch has exactly one cause.
    pub fn single_cause(&self) -> Point {
        Point::new(self.zone.single_cause_x(), self.side.sign() * SINGLE_CAUSE_Y)
    }

    /// First anchor of a multi-cause cascade.
    pub fn cause_base(&self) -> Point {
        Point::new(self.zone.cause_base_x(), self.side.sign() * CAUSE_BASE_Y)
    }

    /// Displacement from one cause anchor to the next.
    pub fn cause_step(&self) -> (f64, f64) {
        (CAUSE_STEP_X, self.side.sign() * CAUSE_STEP_Y)
    }
}
