//! Unit newtypes so that widths, heights and pixel sizes cannot be swapped
//! silently at a call site.

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub usize);

/// Pixel size of one cell body when rasterising a maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CellPixels(pub u32);

/// Pixel size of one wall when rasterising a maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct WallPixels(pub u32);
