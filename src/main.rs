mod utils;
use anyhow::Result;
use clap::{Parser, Subcommand};
use utils::{
    board::{board, BoardArgs},
    groups::{groups, GroupsArgs},
    same::{same, SameArgs},
};
#[derive(Subcommand)]
enum Commands {
    /// Apply a union script and show the resulting groups
    #[clap(name = "groups")]
    Groups(GroupsArgs),
    /// Check whether two elements end up in the same group
    #[clap(name = "same")]
    Same(SameArgs),
    /// Draw a Zertz board
    #[clap(name = "board")]
    Board(BoardArgs),
}

#[derive(Parser)]
struct Args {
    #[clap(subcommand)]
    sub_command: Commands,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    match args.sub_command {
        Commands::Groups(args) => {
            groups(args)?;
        }
        Commands::Same(args) => {
            same(args)?;
        }
        Commands::Board(args) => {
            board(args)?;
        }
    }
    Ok(())
}
