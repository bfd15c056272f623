//! The core abstractions for this application
//!

use std::fmt::Display;

use log::debug;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub enum PlayerMark {
    Cross,
    Naught,
}

impl PlayerMark {
    pub fn other(&self) -> Self {
        match *self {
            Self::Cross => Self::Naught,
            Self::Naught => Self::Cross,
        }
    }
}

impl Display for PlayerMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cross => write!(f, "X"),
            Self::Naught => write!(f, "O"),
        }
    }
}

/// The Player trait is the struct that represents a player.
pub trait Player<B: Board> {
    /// The play function is the main mechanic for the AIs
    /// You observe the whole board through a reference, and can do whatever you like, and then you return an action representing where to play
    fn play(&mut self, b: &B) -> B::Coordinate;
}

pub trait Board: Display + Default {
    type Coordinate: Display + Copy;
    /// The coordinates where you are allowed to place your marker in this turn.
    fn valid_moves(&self) -> Vec<Self::Coordinate>;
    fn place_mark(&mut self, a: Self::Coordinate, marker: PlayerMark);
    fn game_status(&self) -> GameStatus;
    fn current_player(&self) -> PlayerMark;
    fn game_is_over(&self) -> bool {
        !matches!(self.game_status(), GameStatus::Undecided)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd)]
pub enum GameStatus {
    Undecided,
    Draw,
    Won(PlayerMark),
}

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd)]
pub enum GameEndStatus {
    Draw,
    Won(PlayerMark),
}

/// Run one game to completion. Crosses is the human side and moves first;
/// the endgame messages are worded accordingly.
pub fn run_game<B: Board>(
    mut crosses: Box<dyn Player<B>>,
    mut naughts: Box<dyn Player<B>>,
) -> GameEndStatus {
    let mut board = B::default();
    let mut current_player = PlayerMark::Cross;
    while !board.game_is_over() {
        let action = match current_player {
            PlayerMark::Cross => crosses.play(&board),
            PlayerMark::Naught => naughts.play(&board),
        };
        debug!("Player {} played {}", current_player, &action);
        board.place_mark(action, current_player);
        current_player = current_player.other();
    }
    print!("{}", &board);
    let winstatus = match board.game_status() {
        GameStatus::Won(PlayerMark::Cross) => {
            println!("You win!");
            GameEndStatus::Won(PlayerMark::Cross)
        }
        GameStatus::Won(PlayerMark::Naught) => {
            println!("Computer wins!");
            GameEndStatus::Won(PlayerMark::Naught)
        }
        GameStatus::Draw => {
            println!("It's a draw!");
            GameEndStatus::Draw
        }
        GameStatus::Undecided => unreachable!(),
    };
    debug!("Game ended with {:?}", winstatus);
    winstatus
}
