//! The n×n×n board, its cells, and the 2D slice views used for win detection.
//!
//! Cells are stored in a flat vector indexed `[layer][row][column]`. The
//! geometric center `(n/2, n/2, n/2)` is reserved when the board is created
//! and can never be overwritten.

use std::fmt;

use thiserror::Error;

use crate::constants::{GLYPH_EMPTY, GLYPH_PLAYER_ONE, GLYPH_PLAYER_TWO, GLYPH_RESERVED};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opponent of this player.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Player::One => GLYPH_PLAYER_ONE,
            Player::Two => GLYPH_PLAYER_TWO,
        }
    }
}

/// Contents of a single board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    /// The permanently unplayable center. Never counts as a player's mark.
    Reserved,
    Occupied(Player),
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Occupied(p) => Some(p),
            Cell::Empty | Cell::Reserved => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => GLYPH_EMPTY,
            Cell::Reserved => GLYPH_RESERVED,
            Cell::Occupied(p) => p.glyph(),
        }
    }
}

/// A 1-based board coordinate, as typed by a player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub layer: usize,
    pub row: usize,
    pub column: usize,
}

impl Coord {
    pub fn new(layer: usize, row: usize, column: usize) -> Self {
        Self { layer, row, column }
    }

    /// Convert to 0-based `(layer, row, column)` indices, or `None` if any
    /// component lies outside `[1, size]`.
    fn to_index(self, size: usize) -> Option<(usize, usize, usize)> {
        let axis = |v: usize| (1..=size).contains(&v).then(|| v - 1);
        Some((axis(self.layer)?, axis(self.row)?, axis(self.column)?))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.layer, self.row, self.column)
    }
}

/// Why a placement was rejected. A rejected placement never changes the board.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("coordinates out of range")]
    OutOfBounds,
    #[error("cell is already occupied")]
    Occupied,
    #[error("cell is reserved")]
    Reserved,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given dimension with its center reserved.
    pub fn new(size: usize) -> Self {
        let mut board = Self {
            size,
            cells: vec![Cell::Empty; size * size * size],
        };
        if size > 0 {
            let mid = size / 2;
            let idx = board.idx(mid, mid, mid);
            board.cells[idx] = Cell::Reserved;
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The reserved center cell as a 1-based coordinate.
    pub fn center(&self) -> Coord {
        let mid = self.size / 2 + 1;
        Coord::new(mid, mid, mid)
    }

    fn idx(&self, layer: usize, row: usize, column: usize) -> usize {
        (layer * self.size + row) * self.size + column
    }

    /// Cell at 0-based indices. Callers guarantee the indices are in range.
    fn at(&self, layer: usize, row: usize, column: usize) -> Cell {
        self.cells[self.idx(layer, row, column)]
    }

    /// Cell at a 1-based coordinate, or `None` when out of range.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        let (l, r, c) = coord.to_index(self.size)?;
        Some(self.at(l, r, c))
    }

    /// Put `player`'s mark on an empty cell.
    ///
    /// Range and occupancy are both checked before anything is written.
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), MoveError> {
        let (l, r, c) = coord.to_index(self.size).ok_or(MoveError::OutOfBounds)?;
        let idx = self.idx(l, r, c);
        match self.cells[idx] {
            Cell::Empty => {
                self.cells[idx] = Cell::Occupied(player);
                Ok(())
            }
            Cell::Reserved => Err(MoveError::Reserved),
            Cell::Occupied(_) => Err(MoveError::Occupied),
        }
    }

    /// All cells in `[layer][row][column]` order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of non-empty cells, the reserved center included.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Coordinates of every empty cell, in `[layer][row][column]` order.
    pub fn empty_coords(&self) -> Vec<Coord> {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| Coord::new(i / (n * n) + 1, (i / n) % n + 1, i % n + 1))
            .collect()
    }

    /// The 2D slice that fixes `axis` at the 0-based `index`.
    pub fn slice(&self, axis: Axis, index: usize) -> Slice<'_> {
        assert!(index < self.size, "slice index {index} out of range");
        Slice {
            board: self,
            axis,
            index,
        }
    }
}

/// The axis held fixed by a family of slices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal layers: the (row × column) plane.
    Layer,
    /// Vertical, row fixed: the (layer × column) plane.
    Row,
    /// Vertical, column fixed: the (layer × row) plane.
    Column,
}

impl Axis {
    /// Families in the order win detection scans them.
    pub const ALL: [Axis; 3] = [Axis::Layer, Axis::Row, Axis::Column];
}

/// A square grid of cells that can be checked for a 2D win.
pub trait Grid {
    fn size(&self) -> usize;
    /// Cell at 0-based `(row, column)` of the grid.
    fn cell(&self, row: usize, column: usize) -> Cell;
}

/// A borrowed 2D cross-section of the board.
#[derive(Copy, Clone, Debug)]
pub struct Slice<'a> {
    board: &'a Board,
    axis: Axis,
    index: usize,
}

impl Slice<'_> {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Grid for Slice<'_> {
    fn size(&self) -> usize {
        self.board.size
    }

    fn cell(&self, i: usize, j: usize) -> Cell {
        match self.axis {
            Axis::Layer => self.board.at(self.index, i, j),
            Axis::Row => self.board.at(i, self.index, j),
            Axis::Column => self.board.at(i, j, self.index),
        }
    }
}

impl Grid for Vec<Vec<Cell>> {
    fn size(&self) -> usize {
        self.len()
    }

    fn cell(&self, row: usize, column: usize) -> Cell {
        self[row][column]
    }
}

/// The player owning every cell of a line, if one does.
///
/// Empty and reserved cells never own a line.
fn line_owner(mut line: impl Iterator<Item = Cell>) -> Option<Player> {
    let owner = line.next()?.player()?;
    line.all(|c| c == Cell::Occupied(owner)).then_some(owner)
}

/// Check a 2D grid for a complete row, column, or main diagonal.
///
/// Rows are scanned first, then columns, then the two main diagonals.
/// Off-center diagonals are not win lines.
pub fn has_2d_won<G: Grid + ?Sized>(grid: &G) -> bool {
    let n = grid.size();
    if n == 0 {
        return false;
    }

    // Horizontal
    if (0..n).any(|r| line_owner((0..n).map(|c| grid.cell(r, c))).is_some()) {
        return true;
    }

    // Vertical
    if (0..n).any(|c| line_owner((0..n).map(|r| grid.cell(r, c))).is_some()) {
        return true;
    }

    // Diagonals
    line_owner((0..n).map(|i| grid.cell(i, i))).is_some()
        || line_owner((0..n).map(|i| grid.cell(i, n - 1 - i))).is_some()
}

impl fmt::Display for Board {
    /// Layers are drawn side by side, each with its own column heading.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size;

        for layer in 0..n {
            write!(f, "\tL{}:", layer + 1)?;
            for column in 0..n {
                write!(f, " {:>2}", column + 1)?;
            }
        }
        writeln!(f)?;

        for row in 0..n {
            for layer in 0..n {
                write!(f, "\t{:>2}:", row + 1)?;
                for column in 0..n {
                    write!(f, "  {}", self.at(layer, row, column).glyph())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Vec<Vec<Cell>> {
        rows.iter()
            .map(|r| {
                r.chars()
                    .map(|ch| match ch {
                        'X' => Cell::Occupied(Player::One),
                        'O' => Cell::Occupied(Player::Two),
                        '#' => Cell::Reserved,
                        _ => Cell::Empty,
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_new_board_reserves_center() {
        for n in 1..=6 {
            let board = Board::new(n);
            assert_eq!(board.filled(), 1, "n={n}");
            assert_eq!(board.get(board.center()), Some(Cell::Reserved));
        }
    }

    #[test]
    fn test_center_of_even_board() {
        let board = Board::new(4);
        assert_eq!(board.center(), Coord::new(3, 3, 3));
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new(3);
        assert_eq!(board.get(Coord::new(0, 1, 1)), None);
        assert_eq!(board.get(Coord::new(1, 4, 1)), None);
        assert_eq!(board.get(Coord::new(3, 3, 3)), Some(Cell::Empty));
    }

    #[test]
    fn test_place_rejections() {
        let mut board = Board::new(3);
        assert_eq!(
            board.place(Coord::new(2, 2, 2), Player::One),
            Err(MoveError::Reserved)
        );
        assert_eq!(
            board.place(Coord::new(1, 1, 4), Player::One),
            Err(MoveError::OutOfBounds)
        );
        assert!(board.place(Coord::new(1, 1, 1), Player::Two).is_ok());
        assert_eq!(
            board.place(Coord::new(1, 1, 1), Player::One),
            Err(MoveError::Occupied)
        );
        assert_eq!(board.filled(), 2);
    }

    #[test]
    fn test_empty_coords_order() {
        let board = Board::new(3);
        let empty = board.empty_coords();
        assert_eq!(empty.len(), 26);
        assert_eq!(empty[0], Coord::new(1, 1, 1));
        assert_eq!(empty[25], Coord::new(3, 3, 3));
        assert!(!empty.contains(&board.center()));
    }

    #[test]
    fn test_slice_orientation() {
        let mut board = Board::new(3);
        board.place(Coord::new(1, 2, 3), Player::One).unwrap();

        // layer 0 plane: (row, column)
        assert_eq!(board.slice(Axis::Layer, 0).cell(1, 2), Cell::Occupied(Player::One));
        // row 1 plane: (layer, column)
        assert_eq!(board.slice(Axis::Row, 1).cell(0, 2), Cell::Occupied(Player::One));
        // column 2 plane: (layer, row)
        assert_eq!(board.slice(Axis::Column, 2).cell(0, 1), Cell::Occupied(Player::One));
    }

    #[test]
    fn test_2d_rows_columns_diagonals() {
        assert!(has_2d_won(&grid(&["XXX", "...", "..."])));
        assert!(has_2d_won(&grid(&["O..", "O..", "O.."])));
        assert!(has_2d_won(&grid(&["X..", ".X.", "..X"])));
        assert!(has_2d_won(&grid(&["..O", ".O.", "O.."])));
    }

    #[test]
    fn test_2d_no_win() {
        assert!(!has_2d_won(&grid(&["...", "...", "..."])));
        assert!(!has_2d_won(&grid(&["XXO", "OOX", "XOX"])));
        assert!(!has_2d_won(&grid(&["XX.", "...", "..."])));
    }

    #[test]
    fn test_2d_reserved_is_not_a_mark() {
        assert!(!has_2d_won(&grid(&["###", "...", "..."])));
        assert!(!has_2d_won(&grid(&["X..", ".#.", "..X"])));
    }

    #[test]
    fn test_2d_off_center_diagonal_is_not_a_line() {
        assert!(!has_2d_won(&grid(&[".X..", "..X.", "...X", "...."])));
    }

    #[test]
    fn test_display_shows_all_layers() {
        let board = Board::new(3);
        let text = board.to_string();
        assert!(text.contains("L1:"));
        assert!(text.contains("L3:"));
        assert_eq!(text.matches(GLYPH_RESERVED).count(), 1);
    }
}
