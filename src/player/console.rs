use std::io::{BufRead, Write};

use crate::core::{Board as _, Player, PlayerMark};
use crate::game::tictactoe::{TTTBoard, TTTMove};

/// A human at the terminal. All input validation lives here: the search
/// core assumes well-formed moves on vacant cells.
pub struct ConsolePlayer {
    pub name: String,
}

impl ConsolePlayer {
    pub fn new(mark: PlayerMark) -> Self {
        ConsolePlayer {
            name: match mark {
                PlayerMark::Cross => "X".into(),
                PlayerMark::Naught => "O".into(),
            },
        }
    }
}

/// Prompt until the user enters an integer in 0..=2.
fn read_coordinate(prompt: &str) -> usize {
    loop {
        print!("{prompt}");
        std::io::stdout().flush().expect("Could not flush stdout");
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .expect("Could not read line");
        let num = match line.trim().parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Input must be a number");
                continue;
            }
        };
        if num > 2 {
            eprintln!("Number not in range 0-2");
            continue;
        }
        return num;
    }
}

impl Player<TTTBoard> for ConsolePlayer {
    fn play(&mut self, b: &TTTBoard) -> TTTMove {
        println!("Time for {} to make a move", self.name);
        print!("{}", b);
        loop {
            let row = read_coordinate("Enter the row (0, 1, or 2): ");
            let col = read_coordinate("Enter the column (0, 1, or 2): ");
            let mv = TTTMove(row, col);
            if !b.valid_moves().contains(&mv) {
                println!("Cell already taken. Try again.");
                continue;
            }
            return mv;
        }
    }
}
