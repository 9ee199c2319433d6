use anyhow::Result;
use clap::Args;
use ohmscan_core::color::{color_table, HsvRange};

#[derive(Args)]
pub struct CodesArgs {}

pub fn run(_args: &CodesArgs) -> Result<()> {
    println!("{:>5}  {:<7}  {}", "Digit", "Color", "HSV ranges (H 0-180, S/V 0-255)");
    println!("{}", "-".repeat(60));

    for spec in color_table() {
        let ranges = spec
            .ranges
            .iter()
            .map(format_range)
            .collect::<Vec<_>>()
            .join("  |  ");
        println!("{:>5}  {:<7}  {}", spec.code.digit(), spec.code.name(), ranges);
    }

    Ok(())
}

fn format_range(range: &HsvRange) -> String {
    format!(
        "H {}-{} S {}-{} V {}-{}",
        range.lower[0], range.upper[0], range.lower[1], range.upper[1], range.lower[2], range.upper[2]
    )
}
