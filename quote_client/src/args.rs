//! Command-line arguments for the quote client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::net::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, Endpoint};
use quote_common::provider::DEFAULT_MAX_ATTEMPTS;
use quote_common::tags::{Tag, TagParser};
use quote_common::{QuoteError, Result};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Random-quote endpoint, without query string.
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Topics to ask for, comma separated (default: technology,science,wisdom).
    #[clap(long, value_enum, value_delimiter = ',')]
    pub tags: Vec<Tag>,

    /// Path to a text file with more topics.
    /// Tags may be separated by commas, spaces, or new lines.
    #[clap(long)]
    pub tags_file: Option<String>,

    /// Seconds before a remote request is abandoned.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Remote requests per press before falling back to the built-in quotes.
    #[clap(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

impl Args {
    /// Request timeout; zero is raised to one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Endpoint built from `--base-url`, `--tags` and `--tags-file`.
    pub fn endpoint(&self) -> Result<Endpoint> {
        let mut tags = self.tags.clone();

        if let Some(raw) = &self.tags_file {
            let path = normalize_path(raw);
            if !path.is_file() {
                return Err(QuoteError::ParseTagsFile(format!(
                    "{} is not a file",
                    path.display()
                )));
            }
            let file = File::open(&path)?;
            for tag in Tag::parse_from_file(BufReader::new(file))? {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }

        Ok(Endpoint::new(&self.base_url, tags))
    }
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
