use anstream::println;
use owo_colors::OwoColorize;

use crate::commands::{InputError, parse_input};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("No parseable version strings were given")]
    Empty,
}

type Result<T> = miette::Result<T, Error>;

/// Prints the newest of the given versions.
pub fn latest(versions: Vec<String>, lenient: bool) -> Result<()> {
    let parsed = parse_input(versions, lenient)?;
    let newest = parsed.into_iter().max().ok_or(Error::Empty)?;
    println!("{}", newest.green());
    Ok(())
}
