use smallvec::SmallVec;
use std::convert::From;

/// The location of one cell on a rectangular grid.
///
/// `x` grows eastwards, `y` grows southwards, `(0, 0)` is the north west
/// corner.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    #[inline]
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [
        CompassPrimary::North,
        CompassPrimary::East,
        CompassPrimary::South,
        CompassPrimary::West,
    ];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    /// The coordinate one step away in this direction.
    /// Returns None if the coordinate is not representable.
    pub fn offset(self, coord: Cartesian2DCoordinate) -> Option<Cartesian2DCoordinate> {
        let Cartesian2DCoordinate { x, y } = coord;
        match self {
            CompassPrimary::North => {
                if y > 0 {
                    Some(Cartesian2DCoordinate::new(x, y - 1))
                } else {
                    None
                }
            }
            CompassPrimary::East => Some(Cartesian2DCoordinate::new(x + 1, y)),
            CompassPrimary::South => Some(Cartesian2DCoordinate::new(x, y + 1)),
            CompassPrimary::West => {
                if x > 0 {
                    Some(Cartesian2DCoordinate::new(x - 1, y))
                } else {
                    None
                }
            }
        }
    }
}

/// The direction leading from `from` to `to`, when the two coordinates are
/// grid-adjacent. None for any other pair, including `from == to`.
pub fn direction_between(
    from: Cartesian2DCoordinate,
    to: Cartesian2DCoordinate,
) -> Option<CompassPrimary> {
    if from.x == to.x && to.y + 1 == from.y {
        Some(CompassPrimary::North)
    } else if from.y == to.y && from.x + 1 == to.x {
        Some(CompassPrimary::East)
    } else if from.x == to.x && from.y + 1 == to.y {
        Some(CompassPrimary::South)
    } else if from.y == to.y && to.x + 1 == from.x {
        Some(CompassPrimary::West)
    } else {
        None
    }
}

// A cell has at most 4 neighbours, so these collections never leave the
// stack.
pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;
pub type DirectionSmallVec = SmallVec<[CompassPrimary; 4]>;
