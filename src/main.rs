use docopt::Docopt;
use perfect_mazes::{
    cells::Cartesian2DCoordinate,
    generators::{self, Algorithm, GenerationControl},
    grid::Grid,
    grid_displays, renderers,
    units::{CellPixels, Height, WallPixels, Width},
};
use serde_derive::Deserialize;
use std::{fs::File, io, io::prelude::*, thread, time::Duration};

const USAGE: &str = "Perfect mazes

Usage:
    maze_driver -h | --help
    maze_driver (backtracker|division|hunt-kill|prims) [--grid-width=<w> --grid-height=<h>] [--seed=<n>] [--text-out=<path>] [--image-out=<path> --cell-pixels=<n> --wall-pixels=<n>] [--animate --step-delay=<ms>]

Options:
    -h --help            Show this screen.
    --grid-width=<w>     The grid width in a w*h grid [default: 20].
    --grid-height=<h>    The grid height in a w*h grid [default: 20].
    --seed=<n>           Seed for the maze's random number stream. Random when omitted.
    --text-out=<path>    Write the textual rendering to a file instead of stdout.
    --image-out=<path>   Output file path for an image rendering of the maze. PNG by extension.
    --cell-pixels=<n>    Pixel size of one cell in the image rendering [default: 10].
    --wall-pixels=<n>    Pixel size of one wall in the image rendering [default: 1].
    --animate            Redraw the maze in the terminal after every generation step.
    --step-delay=<ms>    Milliseconds to pause between animation steps [default: 25].
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_backtracker: bool,
    cmd_division: bool,
    cmd_hunt_kill: bool,
    cmd_prims: bool,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_text_out: String,
    flag_image_out: String,
    flag_cell_pixels: u32,
    flag_wall_pixels: u32,
    flag_animate: bool,
    flag_step_delay: u64,
}

// Driver-local error type that wraps the library's and docopt's.
mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::perfect_mazes::errors::Error, ::perfect_mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let algorithm = selected_algorithm(&args);
    let (width, height) = (Width(args.flag_grid_width), Height(args.flag_grid_height));
    let seed = args.flag_seed.unwrap_or_else(rand::random::<u64>);

    let step_delay = Duration::from_millis(args.flag_step_delay);
    let mut animate = |grid: &Grid, current: Cartesian2DCoordinate| {
        print!("\x1b[2J\x1b[H");
        print!("{}", grid_displays::render_text(grid, Some((current, 'X'))));
        thread::sleep(step_delay);
    };

    let mut control = GenerationControl::new();
    if args.flag_animate {
        control = control.with_observer(&mut animate);
    }

    let maze_grid =
        generators::generate_with_control(algorithm, width, height, seed, &mut control)?;
    println!("{}x{} - Seed: {}", args.flag_grid_width, args.flag_grid_height, seed);

    if args.flag_text_out.is_empty() {
        print!("{}", maze_grid);
    } else {
        write_text_to_file(&maze_grid.to_string(), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_image_out.is_empty() {
        let render_options = renderers::RenderOptionsBuilder::new()
            .cell_pixels(CellPixels(args.flag_cell_pixels))
            .wall_pixels(WallPixels(args.flag_wall_pixels))
            .build();
        renderers::save_image(&maze_grid, &render_options, &args.flag_image_out)
            .chain_err(|| format!("Failed to write maze image to {}", args.flag_image_out))?;
    }

    Ok(())
}

fn selected_algorithm(maze_args: &MazeArgs) -> Algorithm {
    if maze_args.cmd_backtracker {
        Algorithm::RecursiveBacktracker
    } else if maze_args.cmd_division {
        Algorithm::RecursiveDivision
    } else if maze_args.cmd_hunt_kill {
        Algorithm::HuntAndKill
    } else {
        Algorithm::RandomisedPrims
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
