//! CLI entry point for the maze generator

use clap::Parser;
use tilemaze::io::cli::{BatchGenerator, Cli};

fn main() -> tilemaze::Result<()> {
    let cli = Cli::parse();
    let mut generator = BatchGenerator::new(cli);
    generator.run().map(|_| ())
}
