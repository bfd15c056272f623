use log::debug;

use crate::core::{Board as _, Player, PlayerMark};
use crate::game::tictactoe::{TTTBoard, TTTMove};

/// Exact value of a position, seen from the naughts (computer) side:
/// +1 a naughts win, -1 a crosses win, 0 a draw.
///
/// The search plays out every legal continuation on one shared board:
/// place a mark, recurse, clear the cell again before trying the next one.
/// Sibling calls never observe each other's tentative placement, so the
/// board is bit-identical before and after any call. `depth` only records
/// how far down we are; termination comes from terminal detection alone,
/// which is fine since the whole tree has at most 9 plies.
pub fn minimax(board: &mut TTTBoard, depth: usize, maximizing: bool) -> i32 {
    if board.is_winner(PlayerMark::Cross) {
        return -1;
    }
    if board.is_winner(PlayerMark::Naught) {
        return 1;
    }
    if board.is_full() {
        return 0;
    }
    if maximizing {
        let mut max_eval = i32::MIN;
        for mv in board.empty_cells() {
            board.place_mark(mv, PlayerMark::Naught);
            let eval = minimax(board, depth + 1, false);
            board.clear_cell(mv);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for mv in board.empty_cells() {
            board.place_mark(mv, PlayerMark::Cross);
            let eval = minimax(board, depth + 1, true);
            board.clear_cell(mv);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

/// The best move for naughts on a non-terminal board.
///
/// Each candidate is tried with `minimax(.., maximizing: false)`, since
/// naughts just moved and the next ply belongs to crosses. The comparison is
/// strict, so among equally good moves the first in row-major order wins.
///
/// Precondition: the board is non-terminal and has at least one empty cell.
pub fn find_best_move(board: &mut TTTBoard) -> TTTMove {
    let mut best_val = i32::MIN;
    let mut best_move = None;
    for mv in board.empty_cells() {
        board.place_mark(mv, PlayerMark::Naught);
        let move_val = minimax(board, 0, false);
        board.clear_cell(mv);
        if move_val > best_val {
            best_val = move_val;
            best_move = Some(mv);
        }
    }
    best_move.expect("At least one empty cell")
}

/// A [`Player`] that plays naughts perfectly by exhaustive minimax.
pub struct MinimaxAi;

impl MinimaxAi {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MinimaxAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Player<TTTBoard> for MinimaxAi {
    fn play(&mut self, b: &TTTBoard) -> TTTMove {
        let mut scratch = *b;
        let mv = find_best_move(&mut scratch);
        debug!("Minimax AI plays {}", mv);
        mv
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;
    use crate::core::Board as _;

    #[test]
    fn empty_board_is_a_forced_draw() {
        let mut b = TTTBoard::default();
        assert_eq!(minimax(&mut b, 0, true), 0);
    }

    #[test]
    fn opening_move_breaks_ties_row_major() {
        let mut b = TTTBoard::default();
        assert_eq!(find_best_move(&mut b), TTTMove(0, 0));
    }

    #[test]
    fn can_find_winning_move() {
        let mut b = TTTBoard::from_str("oo xx    ").unwrap();
        let mv = find_best_move(&mut b);
        assert_eq!(mv, TTTMove(0, 2));
        b.place_mark(mv, PlayerMark::Naught);
        assert!(b.is_winner(PlayerMark::Naught));
    }

    #[test]
    fn can_block_winning_move() {
        // Crosses threaten the top row; every other reply loses.
        let mut b = TTTBoard::from_str("xx  o    ").unwrap();
        assert_eq!(find_best_move(&mut b), TTTMove(0, 2));
    }

    #[test]
    fn search_leaves_the_board_untouched() {
        let b0 = TTTBoard::from_str("x   o  x ").unwrap();
        let mut b = b0;
        minimax(&mut b, 0, true);
        assert_eq!(b, b0);
        find_best_move(&mut b);
        assert_eq!(b, b0);
    }

    #[test]
    fn losing_positions_evaluate_to_minus_one() {
        // Crosses set up a double threat whatever naughts reply with.
        let mut b = TTTBoard::from_str("x  xo   x").unwrap();
        assert_eq!(minimax(&mut b, 0, true), -1);
    }
}
