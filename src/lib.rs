//! **perfect-mazes** is a perfect maze generation and rendering library.
//!
//! A perfect maze is a grid graph whose open passages form a spanning tree:
//! every cell is reachable from every other cell by exactly one route.
//! Four classical construction algorithms are provided — recursive
//! backtracking, recursive division, hunt-and-kill and randomised Prim's —
//! all driven by an explicit 64 bit seed so that the same inputs always
//! reproduce the same maze.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod renderers;
pub mod units;
