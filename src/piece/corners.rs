//! Named corner indices and the fixed index tables built on them.
//!
//! Every piece stores its top ring first and its bottom ring second, in the
//! same ring order: start-right, finish-right, finish-left, start-left, with a
//! curve piece's extra outer-wall midpoint inserted between the two corners of
//! its outer side. Triangles and hull faces wind counter-clockwise when viewed
//! from outside the piece.

/// Position of a corner along the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Station {
    Start,
    Mid,
    Finish,
}

/// Side of the path a corner sits on, facing the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Whether a corner is on the running surface or underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Top,
    Bottom,
}

/// Where a corner lives on the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub station: Station,
    pub side: Side,
    pub level: Level,
}

const fn slot(station: Station, side: Side, level: Level) -> Slot {
    Slot {
        station,
        side,
        level,
    }
}

/// Corner slots and index tables for one piece variant.
#[derive(Debug)]
pub struct CornerLayout {
    /// Slot of every corner, by corner index.
    pub slots: &'static [Slot],
    /// Render triangles over the corner indices.
    pub triangles: &'static [[u32; 3]],
    /// Corner indices of the 8 structural corners, in hull vertex order.
    pub structural: [usize; 8],
}

/// Hull faces over the 8 structural corners (start-right-top, finish-right-top,
/// finish-left-top, start-left-top, then the same four on the bottom).
pub const HULL_FACES: [[u32; 4]; 6] = [
    [0, 3, 7, 4], // start cap
    [1, 5, 6, 2], // finish cap
    [2, 6, 7, 3], // left wall
    [0, 4, 5, 1], // right wall
    [0, 1, 2, 3], // top
    [4, 7, 6, 5], // bottom
];

pub mod straight {
    use super::{slot, CornerLayout, Level, Side, Slot, Station};

    pub const START_RIGHT_TOP: usize = 0;
    pub const FINISH_RIGHT_TOP: usize = 1;
    pub const FINISH_LEFT_TOP: usize = 2;
    pub const START_LEFT_TOP: usize = 3;
    pub const START_RIGHT_BOTTOM: usize = 4;
    pub const FINISH_RIGHT_BOTTOM: usize = 5;
    pub const FINISH_LEFT_BOTTOM: usize = 6;
    pub const START_LEFT_BOTTOM: usize = 7;

    pub const COUNT: usize = 8;

    const SLOTS: [Slot; COUNT] = [
        slot(Station::Start, Side::Right, Level::Top),
        slot(Station::Finish, Side::Right, Level::Top),
        slot(Station::Finish, Side::Left, Level::Top),
        slot(Station::Start, Side::Left, Level::Top),
        slot(Station::Start, Side::Right, Level::Bottom),
        slot(Station::Finish, Side::Right, Level::Bottom),
        slot(Station::Finish, Side::Left, Level::Bottom),
        slot(Station::Start, Side::Left, Level::Bottom),
    ];

    const TRIANGLES: [[u32; 3]; 8] = [
        [0, 2, 3],
        [0, 1, 2],
        [4, 7, 6],
        [4, 6, 5],
        [0, 5, 1],
        [0, 4, 5],
        [3, 6, 7],
        [3, 2, 6],
    ];

    pub const LAYOUT: CornerLayout = CornerLayout {
        slots: &SLOTS,
        triangles: &TRIANGLES,
        structural: [0, 1, 2, 3, 4, 5, 6, 7],
    };
}

/// Clockwise curve: the left side is the outer wall.
pub mod curve_right {
    use super::{slot, CornerLayout, Level, Side, Slot, Station};

    pub const START_RIGHT_TOP: usize = 0;
    pub const FINISH_RIGHT_TOP: usize = 1;
    pub const FINISH_LEFT_TOP: usize = 2;
    pub const MID_LEFT_TOP: usize = 3;
    pub const START_LEFT_TOP: usize = 4;
    pub const START_RIGHT_BOTTOM: usize = 5;
    pub const FINISH_RIGHT_BOTTOM: usize = 6;
    pub const FINISH_LEFT_BOTTOM: usize = 7;
    pub const MID_LEFT_BOTTOM: usize = 8;
    pub const START_LEFT_BOTTOM: usize = 9;

    pub const COUNT: usize = 10;

    const SLOTS: [Slot; COUNT] = [
        slot(Station::Start, Side::Right, Level::Top),
        slot(Station::Finish, Side::Right, Level::Top),
        slot(Station::Finish, Side::Left, Level::Top),
        slot(Station::Mid, Side::Left, Level::Top),
        slot(Station::Start, Side::Left, Level::Top),
        slot(Station::Start, Side::Right, Level::Bottom),
        slot(Station::Finish, Side::Right, Level::Bottom),
        slot(Station::Finish, Side::Left, Level::Bottom),
        slot(Station::Mid, Side::Left, Level::Bottom),
        slot(Station::Start, Side::Left, Level::Bottom),
    ];

    const TRIANGLES: [[u32; 3]; 10] = [
        [0, 3, 4],
        [0, 1, 3],
        [1, 2, 3],
        [5, 9, 8],
        [5, 8, 6],
        [6, 8, 7],
        [0, 5, 1],
        [1, 5, 6],
        [2, 9, 4],
        [2, 7, 9],
    ];

    pub const LAYOUT: CornerLayout = CornerLayout {
        slots: &SLOTS,
        triangles: &TRIANGLES,
        structural: [0, 1, 2, 4, 5, 6, 7, 9],
    };
}

/// Counter-clockwise curve: the right side is the outer wall.
pub mod curve_left {
    use super::{slot, CornerLayout, Level, Side, Slot, Station};

    pub const START_RIGHT_TOP: usize = 0;
    pub const MID_RIGHT_TOP: usize = 1;
    pub const FINISH_RIGHT_TOP: usize = 2;
    pub const FINISH_LEFT_TOP: usize = 3;
    pub const START_LEFT_TOP: usize = 4;
    pub const START_RIGHT_BOTTOM: usize = 5;
    pub const MID_RIGHT_BOTTOM: usize = 6;
    pub const FINISH_RIGHT_BOTTOM: usize = 7;
    pub const FINISH_LEFT_BOTTOM: usize = 8;
    pub const START_LEFT_BOTTOM: usize = 9;

    pub const COUNT: usize = 10;

    const SLOTS: [Slot; COUNT] = [
        slot(Station::Start, Side::Right, Level::Top),
        slot(Station::Mid, Side::Right, Level::Top),
        slot(Station::Finish, Side::Right, Level::Top),
        slot(Station::Finish, Side::Left, Level::Top),
        slot(Station::Start, Side::Left, Level::Top),
        slot(Station::Start, Side::Right, Level::Bottom),
        slot(Station::Mid, Side::Right, Level::Bottom),
        slot(Station::Finish, Side::Right, Level::Bottom),
        slot(Station::Finish, Side::Left, Level::Bottom),
        slot(Station::Start, Side::Left, Level::Bottom),
    ];

    const TRIANGLES: [[u32; 3]; 10] = [
        [0, 1, 4],
        [1, 3, 4],
        [1, 2, 3],
        [5, 9, 6],
        [6, 9, 8],
        [6, 8, 7],
        [0, 5, 2],
        [2, 5, 7],
        [3, 9, 4],
        [3, 8, 9],
    ];

    pub const LAYOUT: CornerLayout = CornerLayout {
        slots: &SLOTS,
        triangles: &TRIANGLES,
        structural: [0, 2, 3, 4, 5, 7, 8, 9],
    };
}
