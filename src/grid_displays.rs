//! Plain text rendering of a maze grid.
//!
//! Each cell becomes two characters: its body (`_` when the south wall is
//! closed) and a joint to its eastern neighbour (`|` for a closed east
//! wall). The northern boundary is a leading row of underscores; a
//! `w x h` maze renders as `h + 1` lines, each body line `2w + 1`
//! characters wide.

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::grid::Grid;
use std::fmt;

/// Render the maze as text, optionally overwriting one cell's body with a
/// marker character (used to show the current cell while animating).
pub fn render_text(grid: &Grid, marker: Option<(Cartesian2DCoordinate, char)>) -> String {
    let (width, height) = (grid.width().0, grid.height().0);
    let columns = 2 * width + 1;
    let mut output = String::with_capacity((columns + 1) * (height + 1));

    output.push(' ');
    for _ in 0..(2 * width - 1) {
        output.push('_');
    }
    output.push('\n');

    for y in 0..height {
        output.push('|');
        for x in 0..width {
            let cell = Cartesian2DCoordinate::new(x as u32, y as u32);
            let south_open = grid.is_passage(cell, CompassPrimary::South);

            match marker {
                Some((marked, character)) if marked == cell => output.push(character),
                _ => output.push(if south_open { ' ' } else { '_' }),
            }

            if grid.is_passage(cell, CompassPrimary::East) {
                // An open joint still shows the floor if both cells beside
                // it have closed south walls.
                let east = CompassPrimary::East.offset(cell).expect("in bounds");
                let floor_below_joint =
                    !south_open && !grid.is_passage(east, CompassPrimary::South);
                output.push(if floor_below_joint { '_' } else { ' ' });
            } else {
                output.push('|');
            }
        }
        output.push('\n');
    }

    output
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self, None))
    }
}
