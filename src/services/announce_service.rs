//! Announce Service
//!
//! One fetch → diff → announce → persist cycle. Issues arrive newest first
//! and are processed oldest first so announcements land on the timeline in
//! creation order.
//!
//! An issue is recorded as seen *before* its announcement is attempted. A
//! failed post therefore still marks the issue seen and it is never retried:
//! the bot prefers missing an announcement over posting one twice.

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::{Issue, RunMode, RunSummary};
use crate::domain::ports::{Announcer, InsertOutcome, IssueSource, SeenIssueStore};
use crate::services::StatusFormatter;

pub struct AnnounceService {
    source: Arc<dyn IssueSource>,
    announcer: Arc<dyn Announcer>,
    formatter: StatusFormatter,
    mode: RunMode,
}

impl AnnounceService {
    pub fn new(
        source: Arc<dyn IssueSource>,
        announcer: Arc<dyn Announcer>,
        formatter: StatusFormatter,
        mode: RunMode,
    ) -> Self {
        Self {
            source,
            announcer,
            formatter,
            mode,
        }
    }

    /// Run a full cycle against `store`.
    ///
    /// Fetch failures and a failing final persist are returned as errors.
    /// Per-issue store and announcement failures are logged and counted in
    /// the summary instead.
    #[instrument(skip(self, store), fields(mode = self.mode.as_str()))]
    pub async fn run(&self, store: &mut dyn SeenIssueStore) -> DomainResult<RunSummary> {
        let issues = self.source.fetch().await?;
        info!(count = issues.len(), "fetched issues");
        self.process(issues, store).await
    }

    /// Diff `issues` (newest first) against `store` and announce the new ones.
    pub async fn process(
        &self,
        issues: Vec<Issue>,
        store: &mut dyn SeenIssueStore,
    ) -> DomainResult<RunSummary> {
        let mut summary = RunSummary {
            fetched: issues.len(),
            ..RunSummary::default()
        };

        for issue in issues.iter().rev() {
            if self.mode.records() {
                self.record_and_announce(issue, store, &mut summary).await;
            } else {
                self.preview(issue, store, &mut summary).await;
            }
        }

        if self.mode.records() {
            store.persist().await?;
        }

        info!(
            fetched = summary.fetched,
            new = summary.new,
            announced = summary.announced,
            already_seen = summary.already_seen,
            failed = summary.failed,
            "run complete"
        );
        Ok(summary)
    }

    async fn record_and_announce(
        &self,
        issue: &Issue,
        store: &mut dyn SeenIssueStore,
        summary: &mut RunSummary,
    ) {
        match store.insert(issue).await {
            Ok(InsertOutcome::Inserted) => summary.new += 1,
            Ok(InsertOutcome::AlreadyPresent) => {
                debug!(issue_id = issue.id, number = issue.number, "already announced");
                summary.already_seen += 1;
                return;
            }
            Err(e) => {
                error!(issue_id = issue.id, number = issue.number, error = %e, "failed to record issue");
                summary.failed += 1;
                return;
            }
        }

        let status = self.formatter.format(issue);
        if !self.mode.posts() {
            info!(issue_id = issue.id, %status, "recorded without posting");
            return;
        }

        match self.announcer.post(&status).await {
            Ok(()) => {
                info!(issue_id = issue.id, %status, "announced issue");
                summary.announced += 1;
            }
            Err(e) => {
                warn!(issue_id = issue.id, %status, error = %e, "failed to announce issue");
                summary.failed += 1;
            }
        }
    }

    async fn preview(&self, issue: &Issue, store: &dyn SeenIssueStore, summary: &mut RunSummary) {
        match store.contains(issue.id).await {
            Ok(true) => summary.already_seen += 1,
            Ok(false) => {
                summary.new += 1;
                let status = self.formatter.format(issue);
                info!(issue_id = issue.id, %status, "dry run: would announce");
            }
            Err(e) => {
                error!(issue_id = issue.id, error = %e, "failed to check issue");
                summary.failed += 1;
            }
        }
    }
}
