use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{info, warn};
use zertz_board::partition::UnionScript;

#[derive(Parser)]
pub struct GroupsArgs {
    /// Input union script *.json.
    input: String,
    /// Output file. (stdout if not present)
    /// Supported formats: md, json.
    #[clap(short, long)]
    output: Option<String>,
}

pub fn groups(args: GroupsArgs) -> Result<()> {
    let input = std::path::Path::new(&args.input).with_extension("json");
    if !input.exists() {
        return Err(anyhow!("Input file does not exist"));
    }
    let json = std::fs::read_to_string(&input)?;
    let script = UnionScript::<String>::from_json(&json)?;
    let outcome = script.apply()?;
    for (x, y) in &outcome.rejected {
        warn!("union of {} and {} skipped: unknown element", x, y);
    }
    let partition = outcome.partition;
    if let Some(output) = args.output {
        let path = std::path::Path::new(&output);
        let format = path.extension().and_then(|s| s.to_str()).unwrap_or("md");
        let path = path.with_extension(format);
        let folder = path
            .parent()
            .ok_or_else(|| anyhow!("Invalid output path"))?;
        std::fs::create_dir_all(folder)?;
        let content = match format {
            "md" => partition.to_markdown(
                "Groups",
                &format!(
                    "{} groups over {} elements from `{}`.",
                    partition.len(),
                    script.elements.len(),
                    input.display()
                ),
            ),
            "json" => partition.to_json(),
            _ => return Err(anyhow!("Invalid format")),
        };
        std::fs::write(&path, content)?;
        info!("{} created", path.display());
    } else {
        println!("{}", partition.to_mermaid());
    }
    Ok(())
}
