use std::io::{self, Read};

use iacv_version::{Version, VersionError};
use tracing::warn;

pub mod check;
pub mod compare;
pub mod latest;
pub mod sort;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum InputError {
    #[error(transparent)]
    Version(#[from] VersionError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parses the given version strings, falling back to stdin lines when the
/// argument list is empty. In lenient mode unparseable entries are skipped
/// with a warning instead of aborting.
pub(crate) fn parse_input(
    versions: Vec<String>,
    lenient: bool,
) -> Result<Vec<Version>, InputError> {
    let raw = if versions.is_empty() {
        read_stdin()?
    } else {
        versions
    };

    let mut parsed = Vec::with_capacity(raw.len());
    for entry in raw {
        match entry.parse::<Version>() {
            Ok(version) => parsed.push(version),
            Err(error) if lenient => {
                warn!("skipping {entry:?}: {error} ({})", error.reason());
            }
            Err(error) => return Err(error.into()),
        }
    }
    Ok(parsed)
}

fn read_stdin() -> io::Result<Vec<String>> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
