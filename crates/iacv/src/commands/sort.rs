use anstream::println;
use tracing::info;

use crate::commands::{InputError, parse_input};

type Result<T> = miette::Result<T, InputError>;

/// Sorts version strings ascending and prints one per line.
pub fn sort(versions: Vec<String>, lenient: bool) -> Result<()> {
    let mut parsed = parse_input(versions, lenient)?;
    parsed.sort();
    info!("sorted {} versions", parsed.len());
    for version in &parsed {
        println!("{version}");
    }
    Ok(())
}
