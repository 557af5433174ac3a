use anyhow::Result;
use tracing::info;
use two_sum::{config, find_pair_with_sum, telemetry};

fn main() -> Result<()> {
    telemetry::init()?;
    let config = config::get()?;

    let (i, j) = find_pair_with_sum(config.nums(), config.target())?;

    info!(i, j, "found pair");

    println!("Indices:");
    for index in [i, j] {
        println!("{index}");
    }

    Ok(())
}
