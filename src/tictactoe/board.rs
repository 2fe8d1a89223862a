//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

/// Fixed player lookup table: index 0 moves first in a standard game
pub const PLAYERS: [Player; 2] = [Player::X, Player::O];

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Index of this player in [`PLAYERS`]
    pub fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A 3x3 board, row-major, index 0 = top-left.
///
/// This type implements `Copy` since it's only 9 bytes. Whose turn it is
/// lives on the game-tree node, not the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

impl Board {
    /// Create a new empty board
    pub const fn empty() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Check if no empty cells remain
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a player's mark and return a new board
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, pos: usize, player: Player) -> Result<Board, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut new_board = *self;
        new_board.cells[pos] = player.to_cell();
        Ok(new_board)
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Helper: Count pieces on the board.
    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Helper: Parse 9 cells from a slice of characters.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 characters or any character is invalid.
    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    /// Create a board from a compact string representation.
    ///
    /// The string should contain 9 characters with `.` for empty cells;
    /// whitespace is filtered out.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string has fewer than 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts differ by more than 1
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let chars: Vec<char> = cleaned.chars().collect();
        let cells = Self::parse_cells(&chars, s)?;

        let count = Self::count_pieces(&cells);
        let diff = count.x as isize - count.o as isize;
        if diff.abs() > 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(Board { cells })
    }

    /// Get a compact string representation, `.` for empty cells
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Render the board as a 3x3 text grid.
    ///
    /// Each row is `a | b | c` with a space for empty cells, and a divider
    /// line of nine dashes separates the rows.
    pub fn render(&self) -> String {
        let cell = |pos: usize| match self.cells[pos] {
            Cell::Empty => ' ',
            c => c.to_char(),
        };

        let mut out = String::new();
        for row in 0..3 {
            if row > 0 {
                out.push_str("---------\n");
            }
            out.push_str(&format!(
                "{} | {} | {}\n",
                cell(3 * row),
                cell(3 * row + 1),
                cell(3 * row + 2)
            ));
        }
        out
    }

    /// Parse a board from the text grid produced by [`render`](Self::render).
    ///
    /// Divider lines are skipped; each remaining row must have the form
    /// `a | b | c`.
    ///
    /// # Errors
    ///
    /// Returns error if the text does not have exactly three cell rows or a
    /// row does not match the grid format.
    pub fn from_rendered(s: &str) -> Result<Self, crate::Error> {
        let rows: Vec<&str> = s
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('-'))
            .collect();

        if rows.len() != 3 {
            return Err(crate::Error::InvalidRenderedRows {
                got: rows.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (row_index, row) in rows.iter().enumerate() {
            let parts: Vec<&str> = row.split('|').collect();
            if parts.len() != 3 {
                return Err(crate::Error::InvalidRenderedRow {
                    row: row.to_string(),
                });
            }

            for (col_index, part) in parts.iter().enumerate() {
                let cell = match part.trim() {
                    "" => Cell::Empty,
                    one if one.len() == 1 => {
                        let c = one.chars().next().unwrap_or(' ');
                        Cell::from_char(c).ok_or_else(|| crate::Error::InvalidRenderedRow {
                            row: row.to_string(),
                        })?
                    }
                    _ => {
                        return Err(crate::Error::InvalidRenderedRow {
                            row: row.to_string(),
                        });
                    }
                };
                cells[3 * row_index + col_index] = cell;
            }
        }

        Ok(Board { cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
        }
        assert_eq!(board.empty_positions().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place() {
        let board = Board::empty();

        let board = board.place(4, Player::X).unwrap();
        assert_eq!(board.cells[4], Cell::X);

        // Move on occupied cell
        let result = board.place(4, Player::O);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("occupied"));

        // Out of bounds
        assert!(board.place(9, Player::O).is_err());
    }

    #[test]
    fn test_winner() {
        let board = Board::from_string("XXX.OO...").unwrap();
        assert!(board.has_won(Player::X));
        assert!(!board.has_won(Player::O));
        assert_eq!(board.winner(), Some(Player::X));

        let board = Board::from_string("XX..O....").unwrap();
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[2], Cell::X);

        // Too short
        assert!(Board::from_string("XO").is_err());

        // Invalid character
        assert!(Board::from_string("XOZ......").is_err());

        // Piece counts off by more than one
        assert!(Board::from_string("XXXX.....").is_err());
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("XO.X.O..X").unwrap();
        assert_eq!(board.encode(), "XO.X.O..X");
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_render_format() {
        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(
            board.render(),
            "X | O |  \n---------\n  |   |  \n---------\n  |   |  \n"
        );
    }

    #[test]
    fn test_render_roundtrip_empty() {
        let board = Board::empty();
        assert_eq!(Board::from_rendered(&board.render()).unwrap(), board);
    }

    #[test]
    fn test_render_roundtrip_midgame() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(Board::from_rendered(&board.render()).unwrap(), board);
    }

    #[test]
    fn test_render_roundtrip_full_draw() {
        // Full board with no winner, reached by actual play:
        // X0 O1 X2 O4 X3 O6 X5 O8 X7
        let board = Board::from_string("XOXXOXOXO").unwrap();
        assert_eq!(board.winner(), None);
        assert!(board.is_full());
        assert_eq!(Board::from_rendered(&board.render()).unwrap(), board);
    }

    #[test]
    fn test_from_rendered_rejects_garbage() {
        assert!(Board::from_rendered("not a board").is_err());
        assert!(Board::from_rendered("X | O\n---------\nX | O | X\nX | O | X\n").is_err());
    }

    #[test]
    fn test_player_parsing() {
        assert_eq!("X".parse::<Player>().unwrap(), Player::X);
        assert_eq!("o".parse::<Player>().unwrap(), Player::O);
        assert!("Q".parse::<Player>().is_err());
    }

    #[test]
    fn test_player_table() {
        assert_eq!(PLAYERS[0], Player::X);
        assert_eq!(PLAYERS[1], Player::O);
        assert_eq!(PLAYERS[Player::X.opponent().index()], Player::O);
    }
}
