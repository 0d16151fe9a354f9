//! The four perfect maze construction algorithms.
//!
//! Every generator runs single threaded over one exclusively owned `Grid`,
//! drawing all randomness from one `XorShiftRng` seeded at call start, so a
//! `(algorithm, width, height, seed)` tuple always reproduces the same maze.
//! The recursive formulations of the backtracker and of division are
//! reworked onto explicit stacks so deep mazes cannot exhaust the call
//! stack.

use crate::cells::{
    direction_between, Cartesian2DCoordinate, CompassPrimary, CoordinateSmallVec,
    DirectionSmallVec,
};
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{Height, Width};
use error_chain::bail;
use rand::{Rng, SeedableRng, XorShiftRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Selects one of the four generation algorithms.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Algorithm {
    RecursiveBacktracker,
    RecursiveDivision,
    HuntAndKill,
    RandomisedPrims,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::RecursiveBacktracker,
        Algorithm::RecursiveDivision,
        Algorithm::HuntAndKill,
        Algorithm::RandomisedPrims,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::RecursiveBacktracker => "recursive backtracker",
            Algorithm::RecursiveDivision => "recursive division",
            Algorithm::HuntAndKill => "hunt and kill",
            Algorithm::RandomisedPrims => "randomised prims",
        }
    }
}

/// Cooperative cancellation handle for a generation run.
///
/// Clone it, hand one copy to `GenerationControl` and keep the other; the
/// generators poll it at every carving step and give up with the
/// `Cancelled` error once it fires.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Step observer: called after every structural mutation with the grid and
/// the cell just affected. Animation delays belong in the observer, never
/// in the generator.
pub type StepObserver<'a> = dyn FnMut(&Grid, Cartesian2DCoordinate) + 'a;

/// Optional per-run hooks: a step observer and a cancel token.
#[derive(Default)]
pub struct GenerationControl<'a> {
    observer: Option<&'a mut StepObserver<'a>>,
    cancel: Option<CancelToken>,
}

impl<'a> GenerationControl<'a> {
    pub fn new() -> GenerationControl<'a> {
        GenerationControl::default()
    }

    pub fn with_observer(mut self, observer: &'a mut StepObserver<'a>) -> GenerationControl<'a> {
        self.observer = Some(observer);
        self
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> GenerationControl<'a> {
        self.cancel = Some(token);
        self
    }

    /// One carving step happened at `current`: poll cancellation, then let
    /// the observer see the grid.
    fn step(&mut self, grid: &Grid, current: Cartesian2DCoordinate) -> Result<()> {
        if let Some(token) = &self.cancel {
            if token.is_cancelled() {
                bail!(ErrorKind::Cancelled);
            }
        }
        if let Some(observer) = self.observer.as_mut() {
            observer(grid, current);
        }
        Ok(())
    }
}

/// Generate a perfect maze. Same inputs, same maze.
pub fn generate(algorithm: Algorithm, width: Width, height: Height, seed: u64) -> Result<Grid> {
    generate_with_control(algorithm, width, height, seed, &mut GenerationControl::new())
}

/// As `generate`, with a step observer and/or cancel token attached.
pub fn generate_with_control(
    algorithm: Algorithm,
    width: Width,
    height: Height,
    seed: u64,
    control: &mut GenerationControl,
) -> Result<Grid> {
    let mut grid = Grid::new(width, height)?;
    let mut rng = seeded_rng(seed);
    match algorithm {
        Algorithm::RecursiveBacktracker => recursive_backtracker(&mut grid, &mut rng, control)?,
        Algorithm::RecursiveDivision => recursive_division(&mut grid, &mut rng, control)?,
        Algorithm::HuntAndKill => hunt_and_kill(&mut grid, &mut rng, control)?,
        Algorithm::RandomisedPrims => randomised_prims(&mut grid, &mut rng, control)?,
    }
    Ok(grid)
}

/// Expand a 64 bit seed into XorShift state with splitmix64, so that
/// neighbouring seeds still give unrelated streams. XorShift state must not
/// be all zero.
fn seeded_rng(seed: u64) -> XorShiftRng {
    let mut state = seed;
    let mut words = [0u32; 4];
    for word in words.iter_mut() {
        state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^= z >> 31;
        *word = z as u32;
    }
    if words == [0, 0, 0, 0] {
        words[0] = 1;
    }
    XorShiftRng::from_seed(words)
}

/// A fresh full permutation of the four directions.
fn shuffled_directions(rng: &mut XorShiftRng) -> [CompassPrimary; 4] {
    let mut directions = CompassPrimary::ALL;
    rng.shuffle(&mut directions);
    directions
}

/// Depth-first randomised spanning tree carver, starting at `(0, 0)`.
///
/// The classic recursion is replaced by an explicit stack of
/// `(cell, shuffled directions, cursor)` frames with identical visitation
/// order. A cell counts as visited once it has any passage bit set, which
/// is sound because carving is the only way a cell gains a bit.
pub fn recursive_backtracker(
    grid: &mut Grid,
    rng: &mut XorShiftRng,
    control: &mut GenerationControl,
) -> Result<()> {
    struct Frame {
        cell: Cartesian2DCoordinate,
        directions: [CompassPrimary; 4],
        tried: usize,
    }

    let start = Cartesian2DCoordinate::new(0, 0);
    let mut stack = vec![Frame {
        cell: start,
        directions: shuffled_directions(rng),
        tried: 0,
    }];

    while !stack.is_empty() {
        let top = stack.len() - 1;
        let next_move = {
            let frame = &mut stack[top];
            if frame.tried < frame.directions.len() {
                let direction = frame.directions[frame.tried];
                frame.tried += 1;
                Some((frame.cell, direction))
            } else {
                None
            }
        };

        let (cell, direction) = match next_move {
            Some(chosen) => chosen,
            None => {
                // Every direction tried: unwind to the previous cell.
                stack.pop();
                continue;
            }
        };

        if let Some(next) = grid.neighbour_at_direction(cell, direction) {
            if grid.passage_bits(next) == 0 {
                grid.carve_passage(cell, direction);
                control.step(grid, next)?;
                stack.push(Frame {
                    cell: next,
                    directions: shuffled_directions(rng),
                    tried: 0,
                });
            }
        }
    }

    Ok(())
}

/// Top-down randomised bisection: the inverse of carving.
///
/// The grid starts fully open and walls are inserted one region at a time,
/// each wall leaving exactly one gap, until no region is at least 2 cells
/// wide and tall. Degenerate (zero sized) regions fall out of the worklist
/// as ordinary base cases.
pub fn recursive_division(
    grid: &mut Grid,
    rng: &mut XorShiftRng,
    control: &mut GenerationControl,
) -> Result<()> {
    #[derive(Copy, Clone)]
    struct Region {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    }

    grid.open_all_passages();

    let (Width(grid_width), Height(grid_height)) = (grid.width(), grid.height());
    let mut regions = vec![Region {
        x: 0,
        y: 0,
        width: grid_width,
        height: grid_height,
    }];

    while let Some(region) = regions.pop() {
        if region.width < 2 || region.height < 2 {
            continue;
        }

        // Bisect across the longer axis, coin flip on a tie.
        let divide_horizontally = if region.width < region.height {
            true
        } else if region.width > region.height {
            false
        } else {
            rng.gen::<bool>()
        };

        if divide_horizontally {
            // Wall under row wall_y, spanning the region, one gap.
            let wall_y = region.y + rng.gen_range(0, region.height - 1);
            let gap_x = region.x + rng.gen_range(0, region.width);
            for x in region.x..(region.x + region.width) {
                if x == gap_x {
                    continue;
                }
                let cell = Cartesian2DCoordinate::new(x as u32, wall_y as u32);
                grid.remove_passage(cell, CompassPrimary::South);
                control.step(grid, cell)?;
            }

            let top_height = wall_y - region.y + 1;
            regions.push(Region {
                y: wall_y + 1,
                height: region.height - top_height,
                ..region
            });
            regions.push(Region {
                height: top_height,
                ..region
            });
        } else {
            // Wall east of column wall_x, spanning the region, one gap.
            let wall_x = region.x + rng.gen_range(0, region.width - 1);
            let gap_y = region.y + rng.gen_range(0, region.height);
            for y in region.y..(region.y + region.height) {
                if y == gap_y {
                    continue;
                }
                let cell = Cartesian2DCoordinate::new(wall_x as u32, y as u32);
                grid.remove_passage(cell, CompassPrimary::East);
                control.step(grid, cell)?;
            }

            let left_width = wall_x - region.x + 1;
            regions.push(Region {
                x: wall_x + 1,
                width: region.width - left_width,
                ..region
            });
            regions.push(Region {
                width: left_width,
                ..region
            });
        }
    }

    Ok(())
}

/// Random walk carver with a row-scan fallback, starting at a random cell.
///
/// Compared with the backtracker this produces longer, less branchy
/// corridors: a dead end does not unwind, it hunts for the first unvisited
/// cell bordering the existing maze and walks on from there.
pub fn hunt_and_kill(
    grid: &mut Grid,
    rng: &mut XorShiftRng,
    control: &mut GenerationControl,
) -> Result<()> {
    let mut hunt_start_row = 0;
    let mut current = grid.random_cell(rng);

    loop {
        if let Some(next) = walk(grid, rng, current) {
            control.step(grid, next)?;
            current = next;
        } else if let Some(restart) = hunt(grid, rng, &mut hunt_start_row) {
            control.step(grid, restart)?;
            current = restart;
        } else {
            // Hunt scanned to the end of the grid: every cell is visited.
            return Ok(());
        }
    }
}

/// One walk step: carve to the first unvisited in-bounds neighbour of a
/// fresh permutation of the four directions. None on a dead end.
fn walk(
    grid: &mut Grid,
    rng: &mut XorShiftRng,
    from: Cartesian2DCoordinate,
) -> Option<Cartesian2DCoordinate> {
    for &direction in shuffled_directions(rng).iter() {
        if let Some(next) = grid.neighbour_at_direction(from, direction) {
            if grid.passage_bits(next) == 0 {
                grid.carve_passage(from, direction);
                return Some(next);
            }
        }
    }
    None
}

/// Row-major scan for the first unvisited cell with at least one visited
/// neighbour; connects it to one such neighbour chosen uniformly.
///
/// `hunt_start_row` only ever advances, and only past fully visited leading
/// rows. That is sound because carving never clears a passage bit, so a
/// fully visited row can never regain unvisited cells.
fn hunt(
    grid: &mut Grid,
    rng: &mut XorShiftRng,
    hunt_start_row: &mut usize,
) -> Option<Cartesian2DCoordinate> {
    let (Width(width), Height(height)) = (grid.width(), grid.height());

    let mut y = *hunt_start_row;
    while y < height {
        let mut row_fully_visited = true;
        for x in 0..width {
            let cell = Cartesian2DCoordinate::new(x as u32, y as u32);
            if grid.passage_bits(cell) != 0 {
                continue;
            }
            row_fully_visited = false;

            let visited_neighbour_directions: DirectionSmallVec = CompassPrimary::ALL
                .iter()
                .cloned()
                .filter(|&direction| {
                    grid.neighbour_at_direction(cell, direction)
                        .map_or(false, |neighbour| grid.passage_bits(neighbour) != 0)
                })
                .collect();

            if visited_neighbour_directions.is_empty() {
                continue;
            }
            let pick = rng.gen_range(0, visited_neighbour_directions.len());
            grid.carve_passage(cell, visited_neighbour_directions[pick]);
            return Some(cell);
        }

        if row_fully_visited && y == *hunt_start_row {
            *hunt_start_row = y + 1;
        }
        y += 1;
    }

    None
}

/// Frontier-growth spanning tree builder (randomised Prim's).
///
/// The frontier is a plain vector removed from uniformly at random; the
/// Frontier cell flag gives the O(1) membership test that keeps a cell from
/// ever being queued twice. Construction flags are stripped before
/// returning.
pub fn randomised_prims(
    grid: &mut Grid,
    rng: &mut XorShiftRng,
    control: &mut GenerationControl,
) -> Result<()> {
    let mut frontier: Vec<Cartesian2DCoordinate> = Vec::new();

    let start = grid.random_cell(rng);
    absorb(grid, start, &mut frontier);

    while !frontier.is_empty() {
        let cell = frontier.swap_remove(rng.gen_range(0, frontier.len()));

        let in_neighbours: CoordinateSmallVec = grid
            .neighbours(cell)
            .iter()
            .cloned()
            .filter(|&neighbour| grid.is_in(neighbour))
            .collect();
        // A frontier cell borders the tree by construction.
        let neighbour = in_neighbours[rng.gen_range(0, in_neighbours.len())];
        let direction =
            direction_between(cell, neighbour).expect("in-neighbour is grid-adjacent");

        grid.carve_passage(cell, direction);
        absorb(grid, cell, &mut frontier);
        control.step(grid, cell)?;
    }

    grid.clear_construction_flags();
    Ok(())
}

/// Mark a cell as part of the tree and queue its outside neighbours.
/// A cell already flagged frontier or already absorbed is never re-queued.
fn absorb(grid: &mut Grid, cell: Cartesian2DCoordinate, frontier: &mut Vec<Cartesian2DCoordinate>) {
    grid.mark_in(cell);
    let neighbours = grid.neighbours(cell);
    for &neighbour in neighbours.iter() {
        if !grid.is_frontier(neighbour) && !grid.is_in(neighbour) {
            grid.mark_frontier(neighbour);
            frontier.push(neighbour);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};
    use std::collections::VecDeque;

    /// Union-find over row-major cell indices.
    struct DisjointSets {
        parent: Vec<usize>,
    }

    impl DisjointSets {
        fn new(size: usize) -> DisjointSets {
            DisjointSets {
                parent: (0..size).collect(),
            }
        }

        fn find(&mut self, i: usize) -> usize {
            if self.parent[i] != i {
                let root = self.find(self.parent[i]);
                self.parent[i] = root;
            }
            self.parent[i]
        }

        /// False when the two cells were already connected.
        fn union(&mut self, a: usize, b: usize) -> bool {
            let (root_a, root_b) = (self.find(a), self.find(b));
            if root_a == root_b {
                return false;
            }
            self.parent[root_a] = root_b;
            true
        }
    }

    /// Symmetry, spanning tree edge count, connectivity and acyclicity.
    fn assert_perfect_maze(grid: &Grid) {
        let (Width(width), Height(height)) = (grid.width(), grid.height());
        let size = width * height;
        let cell_index =
            |c: Cartesian2DCoordinate| c.y as usize * width + c.x as usize;

        for cell in grid.iter() {
            for &direction in CompassPrimary::ALL.iter() {
                let open_here = grid.is_passage(cell, direction);
                match grid.neighbour_at_direction(cell, direction) {
                    Some(neighbour) => assert_eq!(
                        open_here,
                        grid.is_passage(neighbour, direction.opposite()),
                        "asymmetric passage between {:?} and {:?}",
                        cell,
                        neighbour
                    ),
                    None => assert!(
                        !open_here,
                        "passage crosses the grid boundary at {:?}",
                        cell
                    ),
                }
            }
        }

        assert_eq!(grid.passage_count(), size - 1, "not a spanning tree");

        // Breadth-first reachability from (0, 0).
        let mut seen = vec![false; size];
        let mut queue = VecDeque::new();
        let origin = Cartesian2DCoordinate::new(0, 0);
        seen[cell_index(origin)] = true;
        queue.push_back(origin);
        let mut visited_count = 1;
        while let Some(cell) = queue.pop_front() {
            for &direction in CompassPrimary::ALL.iter() {
                if !grid.is_passage(cell, direction) {
                    continue;
                }
                let neighbour = grid
                    .neighbour_at_direction(cell, direction)
                    .expect("symmetry check rules out boundary passages");
                if !seen[cell_index(neighbour)] {
                    seen[cell_index(neighbour)] = true;
                    visited_count += 1;
                    queue.push_back(neighbour);
                }
            }
        }
        assert_eq!(visited_count, size, "grid is not fully connected");

        // No passage may join two already-connected cells.
        let mut sets = DisjointSets::new(size);
        for cell in grid.iter() {
            for &direction in [CompassPrimary::East, CompassPrimary::South].iter() {
                if grid.is_passage(cell, direction) {
                    let neighbour = grid.neighbour_at_direction(cell, direction).unwrap();
                    assert!(
                        sets.union(cell_index(cell), cell_index(neighbour)),
                        "cycle through {:?}",
                        cell
                    );
                }
            }
        }
    }

    fn generated(algorithm: Algorithm, width: usize, height: usize, seed: u64) -> Grid {
        generate(algorithm, Width(width), Height(height), seed).unwrap()
    }

    #[test]
    fn backtracker_2x2_carves_three_passages() {
        let grid = generated(Algorithm::RecursiveBacktracker, 2, 2, 1);
        assert_eq!(grid.passage_count(), 3);
        assert_perfect_maze(&grid);
    }

    #[test]
    fn division_4x4_leaves_fifteen_passages() {
        let grid = generated(Algorithm::RecursiveDivision, 4, 4, 7);
        assert_eq!(grid.passage_count(), 15);
        assert_perfect_maze(&grid);
    }

    #[test]
    fn hunt_and_kill_3x3_carves_eight_passages() {
        let grid = generated(Algorithm::HuntAndKill, 3, 3, 42);
        assert_eq!(grid.passage_count(), 8);
        assert_perfect_maze(&grid);
    }

    #[test]
    fn prims_5x5_carves_twenty_four_passages() {
        let grid = generated(Algorithm::RandomisedPrims, 5, 5, 99);
        assert_eq!(grid.passage_count(), 24);
        assert_perfect_maze(&grid);

        // Construction flags must be gone from the finished maze.
        let mut stripped = grid.clone();
        stripped.clear_construction_flags();
        assert_eq!(grid, stripped);
    }

    #[test]
    fn single_row_and_column_grids_are_corridors() {
        for &algorithm in Algorithm::ALL.iter() {
            for &(width, height) in &[(1, 1), (1, 8), (8, 1)] {
                let grid = generated(algorithm, width, height, 3);
                assert_perfect_maze(&grid);
                assert_eq!(
                    grid.passage_count(),
                    width * height - 1,
                    "{} on {}x{}",
                    algorithm.name(),
                    width,
                    height
                );
            }
        }
    }

    #[test]
    fn a_spread_of_dimensions_and_seeds() {
        for &algorithm in Algorithm::ALL.iter() {
            for &(width, height, seed) in
                &[(2, 2, 0), (5, 5, 99), (13, 7, 1234), (7, 13, 0xdead_beef)]
            {
                assert_perfect_maze(&generated(algorithm, width, height, seed));
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        for &algorithm in Algorithm::ALL.iter() {
            let first = generated(algorithm, 12, 9, 77);
            let second = generated(algorithm, 12, 9, 77);
            assert_eq!(first, second, "{} is not deterministic", algorithm.name());
        }
    }

    #[test]
    fn different_seeds_differ() {
        for &algorithm in Algorithm::ALL.iter() {
            let first = generated(algorithm, 12, 12, 1);
            let second = generated(algorithm, 12, 12, 2);
            assert_ne!(first, second, "{} ignored its seed", algorithm.name());
        }
    }

    #[test]
    fn observer_does_not_disturb_the_random_stream() {
        for &algorithm in Algorithm::ALL.iter() {
            let mut step_count = 0;
            let mut observer = |_: &Grid, _: Cartesian2DCoordinate| step_count += 1;
            let mut control = GenerationControl::new().with_observer(&mut observer);
            let observed =
                generate_with_control(algorithm, Width(6), Height(6), 5, &mut control).unwrap();

            assert!(step_count > 0);
            assert_eq!(observed, generated(algorithm, 6, 6, 5));
        }
    }

    #[test]
    fn observer_sees_every_carve_of_a_tree_builder() {
        // One observer call per passage for the carving algorithms
        // (division inserts walls, so its step count differs).
        for &algorithm in &[
            Algorithm::RecursiveBacktracker,
            Algorithm::HuntAndKill,
            Algorithm::RandomisedPrims,
        ] {
            let mut steps: Vec<Cartesian2DCoordinate> = Vec::new();
            let mut observer =
                |_: &Grid, current: Cartesian2DCoordinate| steps.push(current);
            let mut control = GenerationControl::new().with_observer(&mut observer);
            let grid =
                generate_with_control(algorithm, Width(4), Height(4), 21, &mut control).unwrap();

            assert_eq!(steps.len(), grid.size() - 1);
            assert!(steps.iter().all(|&c| grid.is_in_bounds(c)));
        }
    }

    #[test]
    fn cancelled_token_aborts_generation() {
        for &algorithm in Algorithm::ALL.iter() {
            let token = CancelToken::new();
            token.cancel();
            let mut control = GenerationControl::new().with_cancel_token(token);
            let result = generate_with_control(algorithm, Width(4), Height(4), 9, &mut control);

            let err = result.unwrap_err();
            match *err.kind() {
                ErrorKind::Cancelled => {}
                _ => panic!("unexpected error: {}", err),
            }
        }
    }

    #[test]
    fn cancelling_mid_run_stops_further_steps() {
        let token = CancelToken::new();
        let observers_token = token.clone();
        let mut step_count = 0;
        let mut observer = move |_: &Grid, _: Cartesian2DCoordinate| {
            step_count += 1;
            if step_count == 3 {
                observers_token.cancel();
            }
        };
        let mut control = GenerationControl::new()
            .with_observer(&mut observer)
            .with_cancel_token(token);
        let result = generate_with_control(
            Algorithm::RecursiveBacktracker,
            Width(16),
            Height(16),
            11,
            &mut control,
        );
        assert!(result.is_err());
    }

    #[test]
    fn invalid_dimensions_fail_before_any_step() {
        for &algorithm in Algorithm::ALL.iter() {
            let mut step_count = 0;
            let mut observer = |_: &Grid, _: Cartesian2DCoordinate| step_count += 1;
            let mut control = GenerationControl::new().with_observer(&mut observer);
            let result = generate_with_control(algorithm, Width(0), Height(5), 1, &mut control);

            let err = result.unwrap_err();
            match *err.kind() {
                ErrorKind::InvalidDimension(0, 5) => {}
                _ => panic!("unexpected error: {}", err),
            }
            assert_eq!(step_count, 0);
        }
    }

    #[test]
    fn hunt_start_row_advances_past_full_rows_and_never_retreats() {
        let mut grid = Grid::new(Width(3), Height(3)).unwrap();
        let mut rng = seeded_rng(8);

        // Row 0 fully carved, rows 1 and 2 untouched.
        grid.carve_passage(Cartesian2DCoordinate::new(0, 0), CompassPrimary::East);
        grid.carve_passage(Cartesian2DCoordinate::new(1, 0), CompassPrimary::East);

        let mut hunt_start_row = 0;
        let found = hunt(&mut grid, &mut rng, &mut hunt_start_row).unwrap();
        assert_eq!(found.y, 1);
        assert_eq!(hunt_start_row, 1);

        let mut last_row = hunt_start_row;
        while let Some(_) = hunt(&mut grid, &mut rng, &mut hunt_start_row) {
            assert!(hunt_start_row >= last_row);
            last_row = hunt_start_row;
        }

        // Nothing left to hunt: the start row has drained past every row.
        assert_eq!(hunt_start_row, 3);
        assert!(grid.iter().all(|c| grid.passage_bits(c) != 0));
    }

    fn arbitrary_algorithm(index: u8) -> Algorithm {
        Algorithm::ALL[(index % 4) as usize]
    }

    #[test]
    fn every_generated_maze_is_perfect() {
        fn prop(algorithm_index: u8, width: u8, height: u8, seed: u64) -> TestResult {
            let algorithm = arbitrary_algorithm(algorithm_index);
            let (width, height) = ((width % 12 + 1) as usize, (height % 12 + 1) as usize);
            assert_perfect_maze(&generated(algorithm, width, height, seed));
            TestResult::passed()
        }
        quickcheck(prop as fn(u8, u8, u8, u64) -> TestResult);
    }

    #[test]
    fn every_generation_is_deterministic() {
        fn prop(algorithm_index: u8, width: u8, height: u8, seed: u64) -> TestResult {
            let algorithm = arbitrary_algorithm(algorithm_index);
            let (width, height) = ((width % 12 + 1) as usize, (height % 12 + 1) as usize);
            TestResult::from_bool(
                generated(algorithm, width, height, seed)
                    == generated(algorithm, width, height, seed),
            )
        }
        quickcheck(prop as fn(u8, u8, u8, u64) -> TestResult);
    }
}
