//! End-to-end table building: raw entries -> records -> CSV on disk.
//!
//! These tests exercise the public lib surface the way the CLI does,
//! without touching the network.

use chrono::{Duration, TimeZone, Utc};
use repo_miner::commits::{self, collect_commits, RawCommit};
use repo_miner::export::write_table;
use repo_miner::issues::{self, collect_issues, IssueState, RawIssue};

fn raw_commit(sha: &str, author: &str, email: &str, message: &str) -> RawCommit {
    RawCommit {
        sha: sha.to_string(),
        author: author.to_string(),
        email: email.to_string(),
        date: Utc.with_ymd_and_hms(2025, 10, 2, 12, 0, 0).unwrap(),
        message: message.to_string(),
    }
}

#[test]
fn test_commits_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commits.csv");

    let entries = vec![
        raw_commit("sha1", "Alice", "a@example.com", "Initial commit\nDetails"),
        raw_commit("sha2", "Bob", "b@example.com", "Bug fix"),
    ];
    let records = collect_commits(entries, None);

    let written = write_table(&path, &commits::COLUMNS, &records).unwrap();
    assert_eq!(written, 2);

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "sha,author,email,date,message");
    assert!(lines[1].ends_with("Initial commit"));
    assert!(lines[2].ends_with("Bug fix"));
}

#[test]
fn test_issues_to_csv_excludes_pull_requests() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("issues.csv");

    let now = Utc.with_ymd_and_hms(2025, 10, 20, 12, 0, 0).unwrap();
    let entries = vec![
        RawIssue {
            id: 1,
            number: 101,
            title: "Issue A".to_string(),
            user: "alice".to_string(),
            state: IssueState::Open,
            created_at: Utc.with_ymd_and_hms(2025, 10, 2, 0, 0, 0).unwrap(),
            closed_at: None,
            comments: 0,
            is_pull_request: false,
        },
        RawIssue {
            id: 2,
            number: 102,
            title: "PR A".to_string(),
            user: "bob".to_string(),
            state: IssueState::Closed,
            created_at: now - Duration::days(2),
            closed_at: Some(now - Duration::days(1)),
            comments: 2,
            is_pull_request: true,
        },
        RawIssue {
            id: 3,
            number: 103,
            title: "Issue B".to_string(),
            user: "bob".to_string(),
            state: IssueState::Closed,
            created_at: now - Duration::days(2),
            closed_at: Some(now),
            comments: 2,
            is_pull_request: false,
        },
    ];
    let records = collect_issues(entries, None);

    let written = write_table(&path, &issues::COLUMNS, &records).unwrap();
    assert_eq!(written, 2);

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "id,number,title,user,state,created_at,closed_at,comments,open_duration_days"
    );

    // The open issue has empty closed_at and open_duration_days cells.
    assert_eq!(
        lines[1],
        "1,101,Issue A,alice,open,2025-10-02T00:00:00Z,,0,"
    );

    // The closed issue carries its derived duration; the pull request is gone.
    assert_eq!(lines.len(), 3);
    assert!(lines[2].starts_with("3,103,Issue B,bob,closed,"));
    assert!(lines[2].ends_with(",2,2"));
}

#[test]
fn test_empty_tables_keep_headers() {
    let dir = tempfile::tempdir().unwrap();

    let commits_path = dir.path().join("commits.csv");
    let written = write_table(&commits_path, &commits::COLUMNS, &collect_commits(vec![], None)).unwrap();
    assert_eq!(written, 0);
    let contents = std::fs::read_to_string(&commits_path).unwrap();
    assert_eq!(contents.trim_end(), "sha,author,email,date,message");

    let issues_path = dir.path().join("issues.csv");
    let written = write_table(&issues_path, &issues::COLUMNS, &collect_issues(vec![], None)).unwrap();
    assert_eq!(written, 0);
    let contents = std::fs::read_to_string(&issues_path).unwrap();
    assert_eq!(
        contents.trim_end(),
        "id,number,title,user,state,created_at,closed_at,comments,open_duration_days"
    );
}
