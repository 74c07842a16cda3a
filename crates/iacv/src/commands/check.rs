use anstream::println;
use iacv_version::{Version, VersionError};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    Version(#[from] VersionError),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

type Result<T> = miette::Result<T, Error>;

// Struct for JSON output of the parsed shape
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct VersionReport<'a> {
    original: &'a str,
    segments: &'a [u64],
    original_segment_count: usize,
    pre_release: &'a str,
    build_metadata: &'a str,
    prerelease: bool,
}

impl<'a> VersionReport<'a> {
    fn new(version: &'a Version) -> Self {
        Self {
            original: version.as_str(),
            segments: version.segments(),
            original_segment_count: version.original_segment_count(),
            pre_release: version.pre_release(),
            build_metadata: version.build_metadata(),
            prerelease: version.is_prerelease(),
        }
    }
}

/// Parses a version string and reports its structure, or fails with the
/// structured parse error.
pub fn check(version: &str, format: OutputFormat) -> Result<()> {
    let version: Version = version.parse()?;
    let report = VersionReport::new(&version);

    match format {
        OutputFormat::Text => {
            let segments = report
                .segments
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(".");
            println!("{}", report.original.cyan());
            println!(
                "  segments: {segments} ({} in source)",
                report.original_segment_count
            );
            if report.prerelease {
                println!("  pre-release: {}", report.pre_release.yellow());
            }
            if !report.build_metadata.is_empty() {
                println!("  build metadata: {}", report.build_metadata);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
