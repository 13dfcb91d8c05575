use std::io::{self, Read};

use anyhow::Result;
use calibration::total_calibration;

fn main() -> Result<()> {
    let stdin = io::stdin();

    let mut input = String::new();
    stdin.lock().read_to_string(&mut input)?;

    let total = total_calibration(&input, true);

    println!("{total}");

    Ok(())
}
