//! Issue normalization.
//!
//! The GitHub issues listing interleaves pull requests with genuine issues.
//! Raw entries are projected into [`IssueRecord`] rows with pull requests
//! excluded and an `open_duration_days` field derived for closed issues.
//! The record cap counts only retained issues; pull requests encountered
//! while scanning do not consume the cap budget.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use octocrab::models;
use octocrab::models::issues::Issue;
use serde::Serialize;

/// Column headers of the issues table, in serialization order.
pub const COLUMNS: [&str; 9] = [
    "id",
    "number",
    "title",
    "user",
    "state",
    "created_at",
    "closed_at",
    "comments",
    "open_duration_days",
];

/// State filter for the issues listing, applied server-side by the API.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StateFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl From<StateFilter> for octocrab::params::State {
    fn from(filter: StateFilter) -> Self {
        match filter {
            StateFilter::All => Self::All,
            StateFilter::Open => Self::Open,
            StateFilter::Closed => Self::Closed,
        }
    }
}

/// State of a single issue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

/// An issue entry as returned by the GitHub API, before normalization.
/// Pull requests still appear here, flagged by `is_pull_request`.
#[derive(Debug, Clone)]
pub struct RawIssue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub user: String,
    pub state: IssueState,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub comments: u32,
    pub is_pull_request: bool,
}

impl From<Issue> for RawIssue {
    fn from(issue: Issue) -> Self {
        let state = match issue.state {
            models::IssueState::Closed => IssueState::Closed,
            _ => IssueState::Open,
        };
        Self {
            id: issue.id.into_inner(),
            number: issue.number,
            title: issue.title,
            user: issue.user.login,
            state,
            created_at: issue.created_at,
            closed_at: issue.closed_at,
            comments: issue.comments,
            is_pull_request: issue.pull_request.is_some(),
        }
    }
}

/// One row of the issues table. Immutable once built; never a pull request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueRecord {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub user: String,
    pub state: IssueState,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub comments: u32,
    /// Whole days between `created_at` and `closed_at`.
    /// Present iff the issue is closed.
    pub open_duration_days: Option<i64>,
}

impl From<RawIssue> for IssueRecord {
    fn from(raw: RawIssue) -> Self {
        let open_duration_days = raw
            .closed_at
            .map(|closed_at| open_duration_days(raw.created_at, closed_at));
        Self {
            id: raw.id,
            number: raw.number,
            title: raw.title,
            user: raw.user,
            state: raw.state,
            created_at: raw.created_at,
            closed_at: raw.closed_at,
            comments: raw.comments,
            open_duration_days,
        }
    }
}

/// Whole-day difference between the two timestamps.
/// Sub-day remainders truncate toward zero.
pub fn open_duration_days(created_at: DateTime<Utc>, closed_at: DateTime<Utc>) -> i64 {
    (closed_at - created_at).num_days()
}

/// Builds issue records from raw entries, preserving their order.
///
/// Pull requests are skipped without consuming the cap budget; the cap
/// applies to retained issues only.
pub fn collect_issues<I>(entries: I, cap: Option<usize>) -> Vec<IssueRecord>
where
    I: IntoIterator<Item = RawIssue>,
{
    entries
        .into_iter()
        .filter(|entry| !entry.is_pull_request)
        .take(cap.unwrap_or(usize::MAX))
        .map(IssueRecord::from)
        .collect()
}
