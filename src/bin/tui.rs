//! A console tic-tac-toe game against a perfect minimax opponent.
use clap::{Parser, ValueEnum};
use noughts::{
    core::{run_game, Player, PlayerMark},
    game::tictactoe::TTTBoard,
    player::{console::ConsolePlayer, minimax::MinimaxAi, random::RandomAi},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum PlayerType {
    Console,
    Random,
    Minimax,
}

/// A Tic-Tac-Toe game for the command line, with an unbeatable AI integrated!
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Player 1 type (plays X, moves first)
    #[arg(long, default_value = "console")]
    p1: PlayerType,

    /// Player 2 type (plays O)
    #[arg(long, default_value = "minimax")]
    p2: PlayerType,

    /// The seed for the random number generator (when used)
    #[arg(long)]
    seed: Option<u64>,
}

fn make_player(
    kind: PlayerType,
    mark: PlayerMark,
    seed: Option<u64>,
) -> anyhow::Result<Box<dyn Player<TTTBoard>>> {
    Ok(match kind {
        PlayerType::Console => Box::new(ConsolePlayer::new(mark)),
        PlayerType::Random => Box::new(RandomAi::new(mark, seed)),
        PlayerType::Minimax => {
            // The solver evaluates positions for the naughts side only.
            anyhow::ensure!(
                mark == PlayerMark::Naught,
                "the minimax player can only play O"
            );
            Box::new(MinimaxAi::new())
        }
    })
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new().env().init()?;
    let args = Args::parse();
    let p1 = make_player(args.p1, PlayerMark::Cross, args.seed)?;
    let p2 = make_player(args.p2, PlayerMark::Naught, args.seed.map(|s| s.wrapping_add(1)))?;
    run_game::<TTTBoard>(p1, p2);
    Ok(())
}
