use anyhow::{anyhow, Result};
use clap::Parser;
use zertz_board::board::{Board, BoardKind};

#[derive(Parser)]
pub struct BoardArgs {
    /// Input board file *.json. (standard 37-ring board if not present)
    input: Option<String>,
    /// Ring count of the full board drawn when no input is given.
    /// Supported sizes: 37, 61.
    #[clap(short, long, default_value_t = 37)]
    rings: usize,
    /// Print the board as JSON instead of drawing it.
    #[clap(short, long)]
    json: bool,
}

pub fn board(args: BoardArgs) -> Result<()> {
    let board = match args.input {
        Some(input) => {
            let input = std::path::Path::new(&input).with_extension("json");
            if !input.exists() {
                return Err(anyhow!("Input file does not exist"));
            }
            let json = std::fs::read_to_string(&input)?;
            Board::from_json(&json)?
        }
        None => Board::with_kind(BoardKind::try_from(args.rings)?),
    };
    if args.json {
        println!("{}", board.to_json());
    } else {
        print!("{}", board);
    }
    Ok(())
}
