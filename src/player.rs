pub mod console;
pub mod minimax;
pub mod random;

pub use console::ConsolePlayer;
pub use minimax::MinimaxAi;
pub use random::RandomAi;
