use anyhow::{anyhow, Result};
use clap::Parser;
use zertz_board::partition::UnionScript;

#[derive(Parser)]
pub struct SameArgs {
    /// First element.
    a: String,
    /// Second element.
    b: String,
    /// Input union script *.json.
    #[clap(short, long)]
    input: String,
}

pub fn same(args: SameArgs) -> Result<()> {
    let input = std::path::Path::new(&args.input).with_extension("json");
    if !input.exists() {
        return Err(anyhow!("Input file does not exist"));
    }
    let json = std::fs::read_to_string(&input)?;
    let script = UnionScript::<String>::from_json(&json)?;
    let mut set = script.disjoint_set()?;
    for element in [&args.a, &args.b] {
        if !set.contains(element) {
            return Err(anyhow!("Unknown element: {}", element));
        }
    }
    println!("{}", set.same(&args.a, &args.b));
    Ok(())
}
