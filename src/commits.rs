//! Commit normalization.
//!
//! Raw commit entries coming off the GitHub pagination cursor are projected
//! into flat [`CommitRecord`] rows: the author identity is lifted out of the
//! nested commit object and the message is truncated to its first line.

use chrono::{DateTime, Utc};
use octocrab::models::repos::RepoCommit;
use serde::Serialize;

/// Column headers of the commits table, in serialization order.
pub const COLUMNS: [&str; 5] = ["sha", "author", "email", "date", "message"];

/// A commit entry as returned by the GitHub API, before normalization.
/// The message still contains all of its lines.
#[derive(Debug, Clone)]
pub struct RawCommit {
    pub sha: String,
    pub author: String,
    pub email: String,
    pub date: DateTime<Utc>,
    pub message: String,
}

impl From<RepoCommit> for RawCommit {
    fn from(entry: RepoCommit) -> Self {
        let author = entry
            .commit
            .author
            .expect("commit entry missing author metadata");
        Self {
            sha: entry.sha,
            author: author.name,
            email: author.email,
            date: author.date.expect("commit entry missing author date"),
            message: entry.commit.message,
        }
    }
}

/// One row of the commits table. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitRecord {
    pub sha: String,
    pub author: String,
    pub email: String,
    pub date: DateTime<Utc>,
    /// First line of the original commit message.
    pub message: String,
}

impl From<RawCommit> for CommitRecord {
    fn from(raw: RawCommit) -> Self {
        Self {
            sha: raw.sha,
            author: raw.author,
            email: raw.email,
            date: raw.date,
            message: first_line(&raw.message).to_string(),
        }
    }
}

/// Returns the substring before the first line break.
/// Everything after and including the first `\n` or `\r` is discarded.
pub fn first_line(message: &str) -> &str {
    message.split(['\n', '\r']).next().unwrap_or(message)
}

/// Builds commit records from raw entries, preserving their order and
/// taking only the first `cap` entries when a cap is given.
pub fn collect_commits<I>(entries: I, cap: Option<usize>) -> Vec<CommitRecord>
where
    I: IntoIterator<Item = RawCommit>,
{
    entries
        .into_iter()
        .take(cap.unwrap_or(usize::MAX))
        .map(CommitRecord::from)
        .collect()
}
