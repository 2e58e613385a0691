use std::env;

use anyhow::{Context, Result};
use calorie_counter::CalorieCounter;

fn main() -> Result<()> {
    let path = env::args().nth(1).context("missing input file path")?;

    let mut counter = CalorieCounter::new(path);
    counter.process()?;

    let total = counter
        .sum_of_largest_three()
        .context("no calorie groups in input")?;

    println!("{total}");

    Ok(())
}
