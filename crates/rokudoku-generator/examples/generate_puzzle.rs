//! Example demonstrating Rokudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator`
//! - Generate one or more random puzzles
//! - Display the seed, problem, and solution of each puzzle
//! - Reproduce a specific puzzle from its seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Generate a batch of puzzles:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 5
//! ```
//!
//! Reproduce a puzzle from a previously printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-char-seed>
//! ```

use clap::Parser;
use rokudoku_core::{BLOCK_HEIGHT, BLOCK_WIDTH, DigitGrid, Position, SIZE};
use rokudoku_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to reproduce a specific puzzle (64 hexadecimal characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles to generate. Ignored when --seed is given.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::new();

    if let Some(seed) = args.seed {
        print_puzzle(&generator.generate_with_seed(seed));
        return;
    }

    for i in 0..args.count {
        if i > 0 {
            println!();
        }
        print_puzzle(&generator.generate());
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem:");
    print_grid(&puzzle.problem);
    println!();
    println!("Solution:");
    print_grid(&puzzle.solution);
}

fn print_grid(grid: &DigitGrid) {
    for y in 0..SIZE {
        if y > 0 && y % BLOCK_HEIGHT == 0 {
            println!();
        }
        print!("  ");
        for x in 0..SIZE {
            if x > 0 && x % BLOCK_WIDTH == 0 {
                print!(" ");
            }
            match grid.get(Position::new(x, y)) {
                Some(digit) => print!("{digit}"),
                None => print!("."),
            }
        }
        println!();
    }
}
