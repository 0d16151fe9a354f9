//! Rasterising a maze grid to an RGB image.
//!
//! The image is a lattice of cell squares separated by wall strips: a
//! `w x h` maze with cell size `c` and wall size `s` spans
//! `w * (c + s) + s` by `h * (c + s) + s` pixels. The whole canvas starts
//! as wall colour and every cell body plus every open east/south wall strip
//! is painted over in passage colour.

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{CellPixels, WallPixels};
use image::{Rgb, RgbImage};
use std::path::Path;

const DARK_GRAY: Rgb<u8> = Rgb {
    data: [0xa9, 0xa9, 0xa9],
};
const WHITE: Rgb<u8> = Rgb {
    data: [0xff, 0xff, 0xff],
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub cell_pixels: CellPixels,
    pub wall_pixels: WallPixels,
    pub wall_colour: Rgb<u8>,
    pub passage_colour: Rgb<u8>,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            cell_pixels: CellPixels(10),
            wall_pixels: WallPixels(1),
            wall_colour: DARK_GRAY,
            passage_colour: WHITE,
        }
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn new() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }

    pub fn cell_pixels(mut self, cell_pixels: CellPixels) -> RenderOptionsBuilder {
        self.options.cell_pixels = cell_pixels;
        self
    }

    pub fn wall_pixels(mut self, wall_pixels: WallPixels) -> RenderOptionsBuilder {
        self.options.wall_pixels = wall_pixels;
        self
    }

    pub fn wall_colour(mut self, colour: Rgb<u8>) -> RenderOptionsBuilder {
        self.options.wall_colour = colour;
        self
    }

    pub fn passage_colour(mut self, colour: Rgb<u8>) -> RenderOptionsBuilder {
        self.options.passage_colour = colour;
        self
    }

    pub fn build(self) -> RenderOptions {
        self.options
    }
}

pub fn render_image(grid: &Grid, options: &RenderOptions) -> RgbImage {
    let (width, height) = (grid.width().0 as u32, grid.height().0 as u32);
    let (CellPixels(cell), WallPixels(wall)) = (options.cell_pixels, options.wall_pixels);
    let step = cell + wall;

    let mut image = RgbImage::from_pixel(
        width * step + wall,
        height * step + wall,
        options.wall_colour,
    );

    for coord in grid.iter() {
        let cell_x = coord.x * step + wall;
        let cell_y = coord.y * step + wall;

        fill_rect(&mut image, cell_x, cell_y, cell, cell, options.passage_colour);
        if grid.is_passage(coord, CompassPrimary::East) {
            fill_rect(
                &mut image,
                cell_x + cell,
                cell_y,
                wall,
                cell,
                options.passage_colour,
            );
        }
        if grid.is_passage(coord, CompassPrimary::South) {
            fill_rect(
                &mut image,
                cell_x,
                cell_y + cell,
                cell,
                wall,
                options.passage_colour,
            );
        }
    }

    image
}

/// Render the maze and write it to `path`, with the image format chosen
/// from the file extension.
pub fn save_image<P: AsRef<Path>>(grid: &Grid, options: &RenderOptions, path: P) -> Result<()> {
    render_image(grid, options).save(path)?;
    Ok(())
}

fn fill_rect(image: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, colour: Rgb<u8>) {
    for dy in 0..height {
        for dx in 0..width {
            image.put_pixel(x + dx, y + dy, colour);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Height, Width};

    fn unit_options() -> RenderOptions {
        RenderOptionsBuilder::new()
            .cell_pixels(CellPixels(1))
            .wall_pixels(WallPixels(1))
            .build()
    }

    #[test]
    fn image_dimensions_cover_cells_and_walls() {
        let grid = Grid::new(Width(4), Height(3)).unwrap();
        let image = render_image(&grid, &RenderOptions::default());
        assert_eq!(image.dimensions(), (4 * 11 + 1, 3 * 11 + 1));
    }

    #[test]
    fn walled_cell_is_surrounded_by_wall_pixels() {
        let grid = Grid::new(Width(1), Height(1)).unwrap();
        let image = render_image(&grid, &unit_options());

        assert_eq!(image.dimensions(), (3, 3));
        for (x, y, pixel) in image.enumerate_pixels() {
            let expected = if (x, y) == (1, 1) { WHITE } else { DARK_GRAY };
            assert_eq!(*pixel, expected, "pixel at ({}, {})", x, y);
        }
    }

    #[test]
    fn open_passages_paint_through_the_wall_strip() {
        let mut grid = Grid::new(Width(2), Height(1)).unwrap();
        grid.carve_passage(Cartesian2DCoordinate::new(0, 0), CompassPrimary::East);
        let image = render_image(&grid, &unit_options());

        // 5 x 3 image: both cell bodies and the strip between them open.
        assert_eq!(image.dimensions(), (5, 3));
        assert_eq!(*image.get_pixel(1, 1), WHITE);
        assert_eq!(*image.get_pixel(2, 1), WHITE);
        assert_eq!(*image.get_pixel(3, 1), WHITE);
        assert_eq!(*image.get_pixel(2, 0), DARK_GRAY);
        assert_eq!(*image.get_pixel(2, 2), DARK_GRAY);
    }

    #[test]
    fn custom_colours_are_used() {
        let red = Rgb { data: [0xff, 0, 0] };
        let blue = Rgb { data: [0, 0, 0xff] };
        let options = RenderOptionsBuilder::new()
            .cell_pixels(CellPixels(1))
            .wall_pixels(WallPixels(1))
            .wall_colour(red)
            .passage_colour(blue)
            .build();

        let grid = Grid::new(Width(1), Height(1)).unwrap();
        let image = render_image(&grid, &options);
        assert_eq!(*image.get_pixel(0, 0), red);
        assert_eq!(*image.get_pixel(1, 1), blue);
    }
}
