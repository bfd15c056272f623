pub mod core;
pub mod game;
pub mod player;
pub mod tree;
