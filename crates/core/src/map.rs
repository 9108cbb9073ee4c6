//! Static tile map and wall queries.
//!
//! Tiles are stored row-major: `(col, row)` lives at `row * width + col`.
//! That convention is used everywhere a map cell is addressed (ray
//! sampling, movement collision, mini-map blit); mixing conventions would
//! silently transpose the world.

/// A single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
}

/// Immutable tile grid, bordered by walls on the perimeter.
///
/// The border means rays terminate without a separate bounds check in the
/// common case; out-of-range queries still answer `Wall` as a safety net.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

/// The reference 16x16 arena: solid border plus two interior wall runs.
const DEFAULT_MAP: &str = "\
################
#..............#
#..........#...#
#..........#...#
#..............#
#..............#
#..............#
#..............#
#..............#
#..............#
#..............#
#......#########
#..............#
#..............#
#..............#
################";

impl Map {
    /// Parse a map from newline-separated rows (`#` = wall, anything else
    /// open). Returns `None` for empty input or ragged rows.
    pub fn parse(source: &str) -> Option<Self> {
        let mut width = 0usize;
        let mut height = 0usize;
        let mut tiles = Vec::new();

        for line in source.lines() {
            if height == 0 {
                width = line.chars().count();
            } else if line.chars().count() != width {
                return None;
            }
            for ch in line.chars() {
                tiles.push(if ch == '#' { Tile::Wall } else { Tile::Open });
            }
            height += 1;
        }

        if width == 0 || height == 0 {
            return None;
        }

        Some(Self {
            width: width as i32,
            height: height as i32,
            tiles,
        })
    }

    /// The built-in 16x16 arena.
    pub fn default_map() -> Self {
        // DEFAULT_MAP is a well-formed constant; parse cannot fail.
        Self::parse(DEFAULT_MAP).unwrap()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.width && row >= 0 && row < self.height
    }

    /// Tile at `(col, row)`, or `None` when out of range.
    pub fn tile(&self, col: i32, row: i32) -> Option<Tile> {
        if !self.in_bounds(col, row) {
            return None;
        }
        Some(self.tiles[(row * self.width + col) as usize])
    }

    /// Wall query with blocked semantics: out-of-range counts as a wall so
    /// rays and movement terminate safely at the map edge.
    pub fn is_wall(&self, col: i32, row: i32) -> bool {
        match self.tile(col, row) {
            Some(tile) => tile == Tile::Wall,
            None => true,
        }
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::default_map()
    }
}
