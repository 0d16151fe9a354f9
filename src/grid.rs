//! The shared maze data model: a rectangular grid of `u8` bitmask cells.
//!
//! The low four bits of a cell record open passages to the four compass
//! neighbours; a passage is always written to both of its endpoints, so the
//! grid stays symmetric by construction. The next two bits are transient
//! construction flags used by randomised Prim's and are invisible through
//! the passage accessors.

use crate::cells::{Cartesian2DCoordinate, CompassPrimary, CoordinateSmallVec};
use crate::errors::*;
use crate::units::{Height, Width};
use error_chain::bail;
use itertools::Itertools;
use rand::{Rng, XorShiftRng};
use std::fmt;

pub const PASSAGE_NORTH: u8 = 1 << 0;
pub const PASSAGE_EAST: u8 = 1 << 1;
pub const PASSAGE_SOUTH: u8 = 1 << 2;
pub const PASSAGE_WEST: u8 = 1 << 3;

/// The four passage bits: everything a consumer of a finished maze may read.
pub const PASSAGE_MASK: u8 = PASSAGE_NORTH | PASSAGE_EAST | PASSAGE_SOUTH | PASSAGE_WEST;

const IN_FLAG: u8 = 1 << 4;
const FRONTIER_FLAG: u8 = 1 << 5;

pub fn passage_bit(direction: CompassPrimary) -> u8 {
    match direction {
        CompassPrimary::North => PASSAGE_NORTH,
        CompassPrimary::East => PASSAGE_EAST,
        CompassPrimary::South => PASSAGE_SOUTH,
        CompassPrimary::West => PASSAGE_WEST,
    }
}

/// A `width x height` grid of bitmask cells stored in row-major order.
///
/// One generation call exclusively owns and mutates one `Grid`; once the
/// algorithm returns, the grid is only read.
#[derive(Clone, Eq, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: {}x{}, cells: {:?}", self.width, self.height, self.cells)
    }
}

impl Grid {
    /// A grid with no passages. Fails fast with `InvalidDimension` when
    /// either side is zero, before any cell storage is touched.
    pub fn new(width: Width, height: Height) -> Result<Grid> {
        let (Width(w), Height(h)) = (width, height);
        if w == 0 || h == 0 {
            bail!(ErrorKind::InvalidDimension(w, h));
        }
        Ok(Grid {
            width: w,
            height: h,
            cells: vec![0; w * h],
        })
    }

    #[inline]
    pub fn width(&self) -> Width {
        Width(self.width)
    }

    #[inline]
    pub fn height(&self) -> Height {
        Height(self.height)
    }

    /// Total cell count.
    #[inline]
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_in_bounds(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.width && (coord.y as usize) < self.height
    }

    #[inline]
    fn index(&self, coord: Cartesian2DCoordinate) -> usize {
        debug_assert!(self.is_in_bounds(coord));
        coord.y as usize * self.width + coord.x as usize
    }

    /// The four passage bits of a cell. Construction flags never show here.
    #[inline]
    pub fn passage_bits(&self, coord: Cartesian2DCoordinate) -> u8 {
        self.cells[self.index(coord)] & PASSAGE_MASK
    }

    /// Is there an open passage from `coord` towards `direction`?
    #[inline]
    pub fn is_passage(&self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> bool {
        self.is_in_bounds(coord) && self.cells[self.index(coord)] & passage_bit(direction) != 0
    }

    /// The in-bounds neighbour of `coord`, if there is one in that direction.
    pub fn neighbour_at_direction(
        &self,
        coord: Cartesian2DCoordinate,
        direction: CompassPrimary,
    ) -> Option<Cartesian2DCoordinate> {
        direction.offset(coord).filter(|&c| self.is_in_bounds(c))
    }

    /// All in-bounds neighbours of `coord`, linked or not.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|&direction| self.neighbour_at_direction(coord, direction))
            .collect()
    }

    /// Open the passage between `coord` and its neighbour in `direction`,
    /// recording it on both endpoints. Returns the neighbour, or None
    /// (leaving the grid untouched) when the step would leave the grid.
    pub fn carve_passage(
        &mut self,
        coord: Cartesian2DCoordinate,
        direction: CompassPrimary,
    ) -> Option<Cartesian2DCoordinate> {
        let neighbour = self.neighbour_at_direction(coord, direction)?;
        let here = self.index(coord);
        self.cells[here] |= passage_bit(direction);
        let there = self.index(neighbour);
        self.cells[there] |= passage_bit(direction.opposite());
        Some(neighbour)
    }

    /// Close the passage between `coord` and its neighbour in `direction`
    /// on both endpoints. A no-op at the grid boundary.
    pub fn remove_passage(&mut self, coord: Cartesian2DCoordinate, direction: CompassPrimary) {
        if let Some(neighbour) = self.neighbour_at_direction(coord, direction) {
            let here = self.index(coord);
            self.cells[here] &= !passage_bit(direction);
            let there = self.index(neighbour);
            self.cells[there] &= !passage_bit(direction.opposite());
        }
    }

    /// Carve every in-bounds passage: the starting state for wall-adding
    /// algorithms such as recursive division.
    pub fn open_all_passages(&mut self) {
        for y in 0..self.height as u32 {
            for x in 0..self.width as u32 {
                let coord = Cartesian2DCoordinate::new(x, y);
                self.carve_passage(coord, CompassPrimary::East);
                self.carve_passage(coord, CompassPrimary::South);
            }
        }
    }

    /// Count of undirected passages. Every passage is recorded on both of
    /// its endpoints, so counting only the East and South bits counts each
    /// passage exactly once.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|&cell| (cell & (PASSAGE_EAST | PASSAGE_SOUTH)).count_ones() as usize)
            .sum()
    }

    /// Row-major iteration over every cell coordinate.
    pub fn iter(&self) -> impl Iterator<Item = Cartesian2DCoordinate> {
        let (w, h) = (self.width as u32, self.height as u32);
        (0..h)
            .cartesian_product(0..w)
            .map(|(y, x)| Cartesian2DCoordinate::new(x, y))
    }

    pub fn random_cell(&self, rng: &mut XorShiftRng) -> Cartesian2DCoordinate {
        let x = rng.gen_range(0, self.width as u32);
        let y = rng.gen_range(0, self.height as u32);
        Cartesian2DCoordinate::new(x, y)
    }

    // Construction-time scratch flags. Only randomised Prim's uses these;
    // membership tests are O(1) reads of the cell byte.

    #[inline]
    pub fn mark_in(&mut self, coord: Cartesian2DCoordinate) {
        let i = self.index(coord);
        self.cells[i] |= IN_FLAG;
    }

    #[inline]
    pub fn is_in(&self, coord: Cartesian2DCoordinate) -> bool {
        self.is_in_bounds(coord) && self.cells[self.index(coord)] & IN_FLAG != 0
    }

    #[inline]
    pub fn mark_frontier(&mut self, coord: Cartesian2DCoordinate) {
        let i = self.index(coord);
        self.cells[i] |= FRONTIER_FLAG;
    }

    #[inline]
    pub fn is_frontier(&self, coord: Cartesian2DCoordinate) -> bool {
        self.is_in_bounds(coord) && self.cells[self.index(coord)] & FRONTIER_FLAG != 0
    }

    /// Strip every construction flag, leaving only passage bits.
    pub fn clear_construction_flags(&mut self) {
        for cell in &mut self.cells {
            *cell &= PASSAGE_MASK;
        }
    }
}
