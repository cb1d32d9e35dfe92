//! GitHub API client.
//!
//! Wraps an [`Octocrab`] instance and exposes the two fetch operations.
//! Pagination is sequential: each page is awaited before the next one is
//! requested, and the loop stops early once the record cap is satisfied.
//! Nothing is retried; failures map straight into [`FetchError`].

use crate::commits::{collect_commits, CommitRecord, RawCommit};
use crate::config::{AppConfig, RepoId};
use crate::error::FetchError;
use crate::issues::{collect_issues, IssueRecord, RawIssue, StateFilter};
use octocrab::Octocrab;

pub struct GitHubClient {
    octocrab: Octocrab,
    per_page: u8,
    max_pages: Option<u32>,
}

impl GitHubClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(token) = &config.github_token {
            builder = builder.personal_token(token.clone());
        }

        Ok(Self {
            octocrab: builder.build()?,
            per_page: config.per_page,
            max_pages: config.max_api_pages,
        })
    }

    /// Fetches commits for a repository in the API's native reverse-chronological
    /// order and normalizes them into records.
    ///
    /// With a cap, only the first `cap` commits of that order are returned.
    pub async fn fetch_commits(
        &self,
        repo: &RepoId,
        cap: Option<usize>,
    ) -> Result<Vec<CommitRecord>, FetchError> {
        let mut entries: Vec<RawCommit> = Vec::new();

        let mut page = self
            .octocrab
            .repos(repo.owner.clone(), repo.repo.clone())
            .list_commits()
            .per_page(self.per_page)
            .send()
            .await?;

        let mut page_count = 1;

        loop {
            entries.extend(
                std::mem::take(&mut page.items)
                    .into_iter()
                    .map(RawCommit::from),
            );
            tracing::debug!(repo = %repo, page = page_count, total = entries.len(), "fetched commit page");

            if cap.is_some_and(|c| entries.len() >= c) {
                break;
            }
            if self.hit_page_limit(repo, page_count) {
                break;
            }

            match self.octocrab.get_page(&page.next).await? {
                Some(next_page) => {
                    page = next_page;
                    page_count += 1;
                }
                None => break,
            }
        }

        Ok(collect_commits(entries, cap))
    }

    /// Fetches issues for a repository, filtered server-side by state, and
    /// normalizes them into records with pull requests excluded.
    ///
    /// The cap counts retained issues only, so pagination continues past
    /// pull-request entries until enough true issues have been seen.
    pub async fn fetch_issues(
        &self,
        repo: &RepoId,
        state: StateFilter,
        cap: Option<usize>,
    ) -> Result<Vec<IssueRecord>, FetchError> {
        let mut entries: Vec<RawIssue> = Vec::new();
        let mut retained = 0usize;

        let mut page = self
            .octocrab
            .issues(repo.owner.clone(), repo.repo.clone())
            .list()
            .state(state.into())
            .per_page(self.per_page)
            .send()
            .await?;

        let mut page_count = 1;

        loop {
            for raw in std::mem::take(&mut page.items).into_iter().map(RawIssue::from) {
                if !raw.is_pull_request {
                    retained += 1;
                }
                entries.push(raw);
            }
            tracing::debug!(repo = %repo, page = page_count, issues = retained, "fetched issue page");

            if cap.is_some_and(|c| retained >= c) {
                break;
            }
            if self.hit_page_limit(repo, page_count) {
                break;
            }

            match self.octocrab.get_page(&page.next).await? {
                Some(next_page) => {
                    page = next_page;
                    page_count += 1;
                }
                None => break,
            }
        }

        Ok(collect_issues(entries, cap))
    }

    fn hit_page_limit(&self, repo: &RepoId, page_count: u32) -> bool {
        match self.max_pages {
            Some(max_pages) if page_count >= max_pages => {
                tracing::warn!(
                    "Hit MAX_API_PAGES ({}) for repo {} before the collection was exhausted. Data may be incomplete.",
                    max_pages,
                    repo
                );
                true
            }
            _ => false,
        }
    }
}
