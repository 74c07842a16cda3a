use std::cmp::Ordering;

use anstream::println;
use iacv_version::{Version, VersionError};
use owo_colors::OwoColorize;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    Version(#[from] VersionError),
}

type Result<T> = miette::Result<T, Error>;

/// Compares two version strings and prints `<`, `=`, or `>`.
pub fn compare(left: &str, right: &str) -> Result<()> {
    let left: Version = left.parse()?;
    let right: Version = right.parse()?;
    println!(
        "{} {} {}",
        left,
        ordering_symbol(left.cmp(&right)).cyan(),
        right
    );
    Ok(())
}

fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}
