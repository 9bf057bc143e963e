//! Board module - the play field grid with its sentinel border
//!
//! The stored grid is (BOARD_HEIGHT + 2) x (BOARD_WIDTH + 2): row 0, the
//! bottom row, and the outer columns are permanent walls, so collision
//! checks are plain occupancy reads with no bounds branching.
//! Coordinates used by callers are interior-relative: (x, y) with x in
//! 0..BOARD_WIDTH (left to right) and y in 0..BOARD_HEIGHT (top to
//! bottom) maps to grid[y + 1][x + 1], and -1 / BOARD_WIDTH land on the
//! walls. Queries more than one step outside the interior are the
//! caller's responsibility to reject first.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Stored grid dimensions including the border
const GRID_WIDTH: usize = BOARD_WIDTH + 2;
const GRID_HEIGHT: usize = BOARD_HEIGHT + 2;

/// Most rows a single locked piece can complete at once
pub const MAX_CLEARED_ROWS: usize = 4;

/// The play field - bordered grid plus a row cursor that bounds scans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; GRID_WIDTH]; GRID_HEIGHT],
    /// Grid index of the lowest row such that it and every row above it
    /// are fully empty. Row scans only walk indices greater than this.
    /// BOARD_HEIGHT on an empty board, 0 when locked cells reach row 0.
    top_row: usize,
}

impl Board {
    /// Create a board with an empty interior
    pub fn new() -> Self {
        Self {
            grid: Self::empty_grid(),
            top_row: BOARD_HEIGHT,
        }
    }

    fn empty_grid() -> [[Cell; GRID_WIDTH]; GRID_HEIGHT] {
        let mut grid = [[Cell::Empty; GRID_WIDTH]; GRID_HEIGHT];
        grid[0] = [Cell::Wall; GRID_WIDTH];
        grid[GRID_HEIGHT - 1] = [Cell::Wall; GRID_WIDTH];
        for row in grid.iter_mut() {
            row[0] = Cell::Wall;
            row[GRID_WIDTH - 1] = Cell::Wall;
        }
        grid
    }

    /// Wipe the interior and reset the row cursor
    pub fn reset(&mut self) {
        self.grid = Self::empty_grid();
        self.top_row = BOARD_HEIGHT;
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Get cell at (x, y). Accepts the interior and the one-cell
    /// border; returns None beyond that.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        if !(-1..=BOARD_WIDTH as i8).contains(&x) || !(-1..=BOARD_HEIGHT as i8).contains(&y) {
            return None;
        }
        Some(self.grid[(y + 1) as usize][(x + 1) as usize])
    }

    /// Check occupancy at (x, y). Walls and locked blocks both count.
    ///
    /// Callers must stay within one step of the interior; the sentinel
    /// border absorbs exactly that much.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        debug_assert!(
            (-1..=BOARD_WIDTH as i8).contains(&x) && (-1..=BOARD_HEIGHT as i8).contains(&y),
            "occupancy query outside the bordered grid: ({x}, {y})"
        );
        self.grid[(y + 1) as usize][(x + 1) as usize].is_occupied()
    }

    /// Set one interior cell directly, rebuilding the row cursor.
    /// Returns false outside the interior. Intended for tests and
    /// benches; gameplay writes go through [`Board::lock_cells`].
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if !(0..BOARD_WIDTH as i8).contains(&x) || !(0..BOARD_HEIGHT as i8).contains(&y) {
            return false;
        }
        self.grid[(y + 1) as usize][(x + 1) as usize] = cell;
        self.recompute_top_row();
        true
    }

    /// Check if an interior row (0-based from the top) is completely
    /// filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT {
            return false;
        }
        self.grid_row_full(y + 1)
    }

    fn grid_row_full(&self, row: usize) -> bool {
        self.grid[row][1..=BOARD_WIDTH]
            .iter()
            .all(|cell| cell.is_occupied())
    }

    fn grid_row_empty(&self, row: usize) -> bool {
        self.grid[row][1..=BOARD_WIDTH]
            .iter()
            .all(|cell| *cell == Cell::Empty)
    }

    /// Write a settled piece's cells into the grid and advance the row
    /// cursor. Every target must be an empty interior cell; the piece
    /// was validated at its resting position before this call.
    pub fn lock_cells(&mut self, cells: &[(i8, i8); 4], kind: PieceKind) {
        for &(x, y) in cells {
            debug_assert!(
                !self.is_occupied(x, y),
                "locking into an occupied cell at ({x}, {y})"
            );
            self.grid[(y + 1) as usize][(x + 1) as usize] = Cell::Block(kind);
        }
        self.recompute_top_row();
    }

    fn recompute_top_row(&mut self) {
        self.top_row = BOARD_HEIGHT;
        for row in 1..=BOARD_HEIGHT {
            if !self.grid_row_empty(row) {
                self.top_row = row - 1;
                break;
            }
        }
    }

    /// Remove every full row, shifting the rows above each one down a
    /// step, in a single bottom-up pass bounded by the row cursor.
    ///
    /// Returns the cleared rows as interior indices counted before any
    /// shifting, bottom-most first. One lock completes at most
    /// [`MAX_CLEARED_ROWS`] rows; the buffer asserts that bound.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared = ArrayVec::new();

        // `row` walks grid rows bottom-up; `orig` names the row the
        // content under `row` occupied before any shifting. On a clear
        // the shifted-in replacement is re-examined at the same `row`,
        // so stacked full rows fall out in one pass.
        let mut row = BOARD_HEIGHT;
        let mut orig = BOARD_HEIGHT;
        while row > self.top_row {
            if self.grid_row_full(row) {
                cleared.push(orig - 1);
                for r in ((self.top_row + 1)..=row).rev() {
                    self.grid[r] = self.grid[r - 1];
                }
                self.top_row += 1;
            } else {
                row -= 1;
            }
            orig -= 1;
        }
        cleared
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Cell::Block(kind));
        }
    }

    #[test]
    fn test_new_board_interior_empty() {
        let board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                assert!(!board.is_occupied(x, y), "({x}, {y}) should be empty");
            }
        }
    }

    #[test]
    fn test_border_reads_as_occupied() {
        let board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            assert!(board.is_occupied(-1, y));
            assert!(board.is_occupied(BOARD_WIDTH as i8, y));
        }
        for x in -1..=BOARD_WIDTH as i8 {
            assert!(board.is_occupied(x, -1));
            assert!(board.is_occupied(x, BOARD_HEIGHT as i8));
        }
        assert_eq!(board.get(-1, 0), Some(Cell::Wall));
        assert_eq!(board.get(0, BOARD_HEIGHT as i8), Some(Cell::Wall));
        assert_eq!(board.get(-2, 0), None);
    }

    #[test]
    fn test_set_rejects_border() {
        let mut board = Board::new();
        assert!(!board.set(-1, 0, Cell::Block(PieceKind::I)));
        assert!(!board.set(0, BOARD_HEIGHT as i8, Cell::Block(PieceKind::I)));
        assert!(board.set(0, 0, Cell::Block(PieceKind::I)));
        assert_eq!(board.get(0, 0), Some(Cell::Block(PieceKind::I)));
    }

    #[test]
    fn test_lock_cells_tags_kind() {
        let mut board = Board::new();
        let cells = [(3, 19), (4, 19), (5, 19), (4, 18)];
        board.lock_cells(&cells, PieceKind::T);
        for &(x, y) in &cells {
            assert_eq!(board.get(x, y), Some(Cell::Block(PieceKind::T)));
        }
        assert!(!board.is_occupied(6, 19));
    }

    #[test]
    fn test_cursor_bounds_scan_after_lock() {
        let mut board = Board::new();
        assert_eq!(board.top_row, BOARD_HEIGHT);

        board.lock_cells(&[(0, 19), (1, 19), (2, 19), (3, 19)], PieceKind::I);
        // Interior row 19 is grid row 20; the cursor sits just above.
        assert_eq!(board.top_row, 19);

        board.lock_cells(&[(0, 10), (1, 10), (2, 10), (3, 10)], PieceKind::I);
        assert_eq!(board.top_row, 10);
    }

    #[test]
    fn test_reset_restores_cursor() {
        let mut board = Board::new();
        fill_row(&mut board, 2, PieceKind::S);
        assert_eq!(board.top_row, 2);

        board.reset();
        assert_eq!(board.top_row, BOARD_HEIGHT);
        assert!(!board.is_occupied(0, 2));

        // A clear right after the reset must still see new rows.
        fill_row(&mut board, 19, PieceKind::Z);
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19]);
    }

    #[test]
    fn test_clear_no_full_rows_is_noop() {
        let mut board = Board::new();
        board.set(0, 19, Cell::Block(PieceKind::J));
        board.set(5, 12, Cell::Block(PieceKind::L));
        let before = board.clone();

        assert!(board.clear_full_rows().is_empty());
        assert_eq!(board, before);
        // Idempotent on an already-compacted board.
        assert!(board.clear_full_rows().is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_single_row_shifts_above() {
        let mut board = Board::new();
        fill_row(&mut board, 19, PieceKind::O);
        board.set(4, 18, Cell::Block(PieceKind::T));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19]);
        assert_eq!(board.get(4, 19), Some(Cell::Block(PieceKind::T)));
        assert!(!board.is_occupied(4, 18));
    }

    #[test]
    fn test_clear_keeps_rows_below_fixed() {
        let mut board = Board::new();
        fill_row(&mut board, 15, PieceKind::O);
        board.set(7, 19, Cell::Block(PieceKind::J));
        board.set(2, 14, Cell::Block(PieceKind::S));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[15]);
        // Below the cleared row nothing moves; above shifts down one.
        assert_eq!(board.get(7, 19), Some(Cell::Block(PieceKind::J)));
        assert_eq!(board.get(2, 15), Some(Cell::Block(PieceKind::S)));
        assert!(!board.is_occupied(2, 14));
    }

    #[test]
    fn test_clear_four_stacked_rows_single_pass() {
        let mut board = Board::new();
        for y in 5..=8 {
            fill_row(&mut board, y, PieceKind::I);
        }
        board.set(3, 4, Cell::Block(PieceKind::T));
        board.set(9, 12, Cell::Block(PieceKind::L));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), 4);
        // Bottom-most first, counted as the rows stood before shifting.
        assert_eq!(cleared.as_slice(), &[8, 7, 6, 5]);

        // The marker above fell by four; the one below stayed put.
        assert_eq!(board.get(3, 8), Some(Cell::Block(PieceKind::T)));
        assert_eq!(board.get(9, 12), Some(Cell::Block(PieceKind::L)));
        for y in 0..8 {
            assert!(!board.is_occupied(3, y));
        }
    }

    #[test]
    fn test_clear_separated_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 10, PieceKind::Z);
        fill_row(&mut board, 16, PieceKind::S);
        board.set(0, 9, Cell::Block(PieceKind::T));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[16, 10]);
        assert_eq!(board.get(0, 11), Some(Cell::Block(PieceKind::T)));
    }
}
