use std::str::FromStr;

use anyhow::bail;
use itertools::{iproduct, Itertools};

use crate::core::{Board, GameStatus, PlayerMark};

/// A position on the board: row, then column, both in 0..=2.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct TTTMove(pub usize, pub usize);

impl std::fmt::Display for TTTMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// The 3x3 grid, row major. `None` is an empty cell.
///
/// The board is `Copy` and cheap to pass around, but the search mutates one
/// shared board via [`Self::place_mark`] and [`Self::clear_cell`] instead of
/// copying per ply.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct TTTBoard([[Option<PlayerMark>; 3]; 3]);

impl Board for TTTBoard {
    type Coordinate = TTTMove;

    fn valid_moves(&self) -> Vec<TTTMove> {
        self.empty_cells()
    }

    fn game_status(&self) -> GameStatus {
        if let Some(p) = self.winner() {
            GameStatus::Won(p)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::Undecided
        }
    }

    fn place_mark(&mut self, a: TTTMove, marker: PlayerMark) {
        let TTTMove(row, col) = a;
        if row > 2 || col > 2 {
            panic!("Bad input!")
        }
        if self.0[row][col].is_some() {
            panic!("There is already a marker there! Invalid move just played!")
        }
        self.0[row][col] = Some(marker);
    }

    fn current_player(&self) -> PlayerMark {
        if self.n_moves_made() % 2 == 0 {
            PlayerMark::Cross
        } else {
            PlayerMark::Naught
        }
    }
}

impl TTTBoard {
    /// Does `player` hold a full row, column, or diagonal?
    pub fn is_winner(&self, player: PlayerMark) -> bool {
        let p = Some(player);
        (0..3).any(|i| (0..3).all(|j| self.0[i][j] == p) || (0..3).all(|j| self.0[j][i] == p))
            || (0..3).all(|i| self.0[i][i] == p)
            || (0..3).all(|i| self.0[i][2 - i] == p)
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().flatten().all(|&q| q.is_some())
    }

    /// The game is over: someone won, or no cell is left to play.
    pub fn is_terminal(&self) -> bool {
        self.is_winner(PlayerMark::Cross) || self.is_winner(PlayerMark::Naught) || self.is_full()
    }

    /// All empty cells, in row-major order.
    ///
    /// The order is a contract: move selection breaks ties by taking the
    /// first best cell in this enumeration. Returned as a `Vec` since the
    /// search iterates it while mutating the board.
    pub fn empty_cells(&self) -> Vec<TTTMove> {
        iproduct!(0..3, 0..3)
            .filter(|&(row, col)| self.0[row][col].is_none())
            .map(|(row, col)| TTTMove(row, col))
            .collect()
    }

    /// Undo a placement, restoring the cell to empty.
    pub fn clear_cell(&mut self, a: TTTMove) {
        let TTTMove(row, col) = a;
        if self.0[row][col].is_none() {
            panic!("There is no marker to remove! Invalid undo!")
        }
        self.0[row][col] = None;
    }

    /// Is there a winner?
    pub fn winner(&self) -> Option<PlayerMark> {
        let naught_won = self.is_winner(PlayerMark::Naught);
        let cross_won = self.is_winner(PlayerMark::Cross);
        if naught_won && !cross_won {
            Some(PlayerMark::Naught)
        } else if !naught_won && cross_won {
            Some(PlayerMark::Cross)
        } else if !naught_won && !cross_won {
            None
        } else {
            panic!("Logic error. Both win!?")
        }
    }

    pub fn n_moves_made(&self) -> usize {
        self.0.iter().flatten().filter(|&q| q.is_some()).count()
    }
}

impl FromStr for TTTBoard {
    type Err = anyhow::Error;

    /// Parse a 9 character board literal, row major: 'x', 'o', or ' '.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 9 {
            bail!("A board literal must be exactly 9 characters, got {:?}", s);
        }
        let mut b = Self::default();
        for (num, c) in s.chars().enumerate() {
            let mv = TTTMove(num / 3, num % 3);
            match c {
                'x' => b.place_mark(mv, PlayerMark::Cross),
                'o' => b.place_mark(mv, PlayerMark::Naught),
                ' ' => {}
                _ => bail!("Invalid character {c:?} in board literal"),
            }
        }
        Ok(b)
    }
}

impl std::fmt::Display for TTTBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = |mark: &Option<PlayerMark>| match mark {
            None => ' ',
            Some(PlayerMark::Cross) => 'X',
            Some(PlayerMark::Naught) => 'O',
        };
        for row in &self.0 {
            writeln!(f, "{}", row.iter().map(m).join(" | "))?;
        }
        writeln!(f)
    }
}
