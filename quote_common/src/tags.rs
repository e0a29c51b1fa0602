//! Topical tags used to filter the remote random-quote query.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use strum_macros::{Display, EnumString};

use crate::error::QuoteError;

/// Tags requested when the user does not pick any.
pub const DEFAULT_TAGS: [Tag; 3] = [Tag::Technology, Tag::Science, Tag::Wisdom];

/// Trait providing file parsing for tags.
pub trait TagParser {
    /// Parses tags from a buffered reader.
    ///
    /// Tags may be separated by commas, whitespace or new lines. Lines starting
    /// with `#` are comments. Returns an error naming the first unknown tag.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Tag>, QuoteError>;
}

impl TagParser for Tag {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, QuoteError> {
        let mut tags = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(QuoteError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
                continue;
            }

            for token in trimmed_line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|t| !t.is_empty())
            {
                match token.parse::<Self>() {
                    Ok(tag) => {
                        if !tags.contains(&tag) {
                            tags.push(tag);
                        }
                    }
                    Err(e) => {
                        return Err(QuoteError::ParseTagsFile(format!("{}: {}", token, e)));
                    }
                }
            }
        }
        Ok(tags)
    }
}

/// Join tags into the comma-separated form the endpoint expects.
pub fn join_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Supported quote topics.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Tag {
    Technology,
    Science,
    Wisdom,
    Inspirational,
    Motivational,
    Life,
    Success,
    FamousQuotes,
    Happiness,
    Knowledge,
}
