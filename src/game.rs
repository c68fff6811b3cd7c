use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Board size constant
pub const BOARD_SIZE: usize = 8;

/// The eight compass directions a capture line can run in.
const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Black,
    White,
}

impl Tile {
    pub fn opponent(&self) -> Tile {
        match self {
            Tile::Black => Tile::White,
            Tile::White => Tile::Black,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Tile::Black => "Black",
            Tile::White => "White",
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    /// Corners can never be recaptured once taken.
    pub fn is_corner(&self) -> bool {
        (self.x == 0 || self.x == BOARD_SIZE - 1) && (self.y == 0 || self.y == BOARD_SIZE - 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("Illegal move for {tile} at {pos}")]
    IllegalMove { tile: Tile, pos: Position },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    pub fn count(&self, tile: Tile) -> u8 {
        match tile {
            Tile::Black => self.black,
            Tile::White => self.white,
        }
    }

    /// The side with more tiles, or `None` on a tie.
    pub fn leader(&self) -> Option<Tile> {
        if self.black > self.white {
            Some(Tile::Black)
        } else if self.white > self.black {
            Some(Tile::White)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    BlackWins,
    WhiteWins,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub score: Score,
    pub outcome: Outcome,
}

impl GameResult {
    pub fn from_score(score: Score) -> Self {
        let outcome = match score.leader() {
            Some(Tile::Black) => Outcome::BlackWins,
            Some(Tile::White) => Outcome::WhiteWins,
            None => Outcome::Tie,
        };
        GameResult { score, outcome }
    }
}

/// Display-only cell annotation produced by [`Board::annotate_legal_moves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hinted {
    Empty,
    Tile(Tile),
    Legal,
}

/// An 8x8 Reversi board. Cells are addressed as `(x, y)` with both
/// coordinates in `0..8`; `x` selects the column, `y` the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Tile>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Create a board already set up in the canonical starting position.
    pub fn standard_start() -> Self {
        let mut board = Board::new();
        board.reset();
        board
    }

    /// Clear the board and place the four starting tiles:
    /// (3,3) and (4,4) Black, (3,4) and (4,3) White.
    pub fn reset(&mut self) {
        self.cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        self.cells[3][3] = Some(Tile::Black);
        self.cells[4][4] = Some(Tile::Black);
        self.cells[3][4] = Some(Tile::White);
        self.cells[4][3] = Some(Tile::White);
    }

    pub fn get(&self, pos: Position) -> Option<Tile> {
        if pos.x < BOARD_SIZE && pos.y < BOARD_SIZE {
            self.cells[pos.x][pos.y]
        } else {
            None
        }
    }

    /// Test fixtures set up arbitrary layouts directly.
    #[cfg(test)]
    pub(crate) fn set(&mut self, pos: Position, cell: Option<Tile>) {
        self.cells[pos.x][pos.y] = cell;
    }

    fn in_bounds(x: i32, y: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
    }

    /// Compute the flip set for placing `tile` at `pos`.
    ///
    /// Returns `None` when the move is illegal: the target is off-board,
    /// occupied, or no direction captures anything. A direction captures
    /// only when a run of one or more opponent tiles is terminated by the
    /// mover's own tile; a run that hits the board edge or an empty cell
    /// contributes nothing.
    pub fn move_flips(&self, tile: Tile, pos: Position) -> Option<Vec<Position>> {
        if pos.x >= BOARD_SIZE || pos.y >= BOARD_SIZE || self.cells[pos.x][pos.y].is_some() {
            return None;
        }

        let opponent = tile.opponent();
        let mut flips = Vec::new();

        for &(dx, dy) in &DIRECTIONS {
            let mut x = pos.x as i32 + dx;
            let mut y = pos.y as i32 + dy;
            let mut line = Vec::new();

            while Self::in_bounds(x, y) && self.cells[x as usize][y as usize] == Some(opponent) {
                line.push(Position::new(x as usize, y as usize));
                x += dx;
                y += dy;
            }

            // The run counts only if it ends on the mover's own tile.
            if !line.is_empty()
                && Self::in_bounds(x, y)
                && self.cells[x as usize][y as usize] == Some(tile)
            {
                flips.extend(line);
            }
        }

        if flips.is_empty() { None } else { Some(flips) }
    }

    /// Enumerate all legal moves for `tile`, scanning cells in x-major
    /// then y order so the result is deterministic.
    pub fn legal_moves(&self, tile: Tile) -> Vec<Position> {
        let mut moves = Vec::new();

        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let pos = Position::new(x, y);
                if self.move_flips(tile, pos).is_some() {
                    moves.push(pos);
                }
            }
        }

        moves
    }

    /// Place `tile` at `pos` and flip every captured tile.
    ///
    /// Legality is recomputed here rather than trusting a previously
    /// computed flip set, so a stale check can never mutate the board.
    /// On failure the board is left untouched.
    pub fn apply_move(&mut self, tile: Tile, pos: Position) -> Result<Vec<Position>, GameError> {
        let flips = self
            .move_flips(tile, pos)
            .ok_or(GameError::IllegalMove { tile, pos })?;

        self.cells[pos.x][pos.y] = Some(tile);
        for p in &flips {
            self.cells[p.x][p.y] = Some(tile);
        }

        Ok(flips)
    }

    /// Count tiles per side with a linear scan.
    pub fn score(&self) -> Score {
        let mut black = 0;
        let mut white = 0;

        for column in &self.cells {
            for cell in column {
                match cell {
                    Some(Tile::Black) => black += 1,
                    Some(Tile::White) => white += 1,
                    None => {}
                }
            }
        }

        Score { black, white }
    }

    pub fn empty_count(&self) -> u8 {
        let score = self.score();
        (BOARD_SIZE * BOARD_SIZE) as u8 - score.black - score.white
    }

    /// Produce an annotated copy of the grid where every legal-move cell
    /// for `tile` is marked [`Hinted::Legal`]. Display-only; the engine
    /// never reads hints back.
    pub fn annotate_legal_moves(&self, tile: Tile) -> [[Hinted; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = self.hinted_grid();

        for pos in self.legal_moves(tile) {
            grid[pos.x][pos.y] = Hinted::Legal;
        }

        grid
    }

    fn hinted_grid(&self) -> [[Hinted; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[Hinted::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (x, column) in self.cells.iter().enumerate() {
            for (y, cell) in column.iter().enumerate() {
                if let Some(t) = cell {
                    grid[x][y] = Hinted::Tile(*t);
                }
            }
        }
        grid
    }

    /// Get a string representation of the board.
    pub fn display_board(&self) -> String {
        Self::render(self.hinted_grid())
    }

    /// Like [`Board::display_board`], with legal moves for `tile` shown as `*`.
    pub fn display_with_hints(&self, tile: Tile) -> String {
        Self::render(self.annotate_legal_moves(tile))
    }

    fn render(grid: [[Hinted; BOARD_SIZE]; BOARD_SIZE]) -> String {
        let mut result = String::new();
        result.push_str("   ");
        for x in 0..BOARD_SIZE {
            result.push_str(&format!("{:2} ", x));
        }
        result.push('\n');

        for y in 0..BOARD_SIZE {
            result.push_str(&format!("{:2} ", y));
            for column in &grid {
                let c = match column[y] {
                    Hinted::Tile(Tile::Black) => 'B',
                    Hinted::Tile(Tile::White) => 'W',
                    Hinted::Legal => '*',
                    Hinted::Empty => '.',
                };
                result.push_str(&format!(" {} ", c));
            }
            result.push('\n');
        }

        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard_start()
    }
}
