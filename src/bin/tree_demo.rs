//! Alpha-beta pruning demo over a depth-3 binary tree.
use anyhow::anyhow;
use clap::Parser;
use noughts::tree::{TreeSearch, N_LEAVES};

/// Evaluate a complete depth-3 binary game tree with alpha-beta pruning.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The 8 leaf values of the tree, left to right
    #[arg(num_args = N_LEAVES, default_values_t = [3, 5, 6, 9, 1, 2, 0, -1], allow_negative_numbers = true)]
    values: Vec<i32>,
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new().env().init()?;
    let args = Args::parse();
    let values: [i32; N_LEAVES] = args
        .values
        .try_into()
        .map_err(|v: Vec<i32>| anyhow!("expected {} leaf values, got {}", N_LEAVES, v.len()))?;
    let mut search = TreeSearch::new();
    println!("The optimal value is : {}", search.optimal_value(&values));
    Ok(())
}
