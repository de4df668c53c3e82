//! In-memory issue store.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use time::OffsetDateTime;

use super::model::{CreateIssue, Issue, IssueStatus, UpdateIssue};

/// Concurrent in-memory issue store.
///
/// Ids start at 1 and are never reused within a process. All state is
/// process-local; nothing is persisted.
#[derive(Debug)]
pub struct IssueStore {
    issues: DashMap<u64, Issue>,
    next_id: AtomicU64,
}

impl IssueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            issues: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Insert a new issue and return it with its assigned id.
    pub fn create(&self, create: CreateIssue) -> Issue {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let now = OffsetDateTime::now_utc();

        let issue = Issue {
            id,
            title: create.title,
            description: create.description,
            status: create.status,
            created_at: now,
            updated_at: now,
        };

        self.issues.insert(id, issue.clone());
        issue
    }

    /// Snapshot of all issues in ascending id order, optionally filtered
    /// by status.
    pub fn list(&self, status: Option<IssueStatus>) -> Vec<Issue> {
        let mut issues: Vec<Issue> = self
            .issues
            .iter()
            .filter(|entry| status.map_or(true, |s| entry.status == s))
            .map(|entry| entry.value().clone())
            .collect();

        issues.sort_by_key(|issue| issue.id);
        issues
    }

    /// Look up one issue by id.
    pub fn get(&self, id: u64) -> Option<Issue> {
        self.issues.get(&id).map(|entry| entry.value().clone())
    }

    /// Apply a partial update, bumping `updated_at`. Returns the updated
    /// issue, or `None` if the id is unknown.
    pub fn update(&self, id: u64, update: UpdateIssue) -> Option<Issue> {
        let mut entry = self.issues.get_mut(&id)?;

        if let Some(title) = update.title {
            entry.title = title;
        }
        if let Some(description) = update.description {
            entry.description = Some(description);
        }
        if let Some(status) = update.status {
            entry.status = status;
        }
        entry.updated_at = OffsetDateTime::now_utc();

        Some(entry.value().clone())
    }

    /// Remove an issue. Returns whether it existed.
    pub fn delete(&self, id: u64) -> bool {
        self.issues.remove(&id).is_some()
    }

    /// Number of stored issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether the store holds no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Default for IssueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str) -> CreateIssue {
        CreateIssue {
            title: title.to_string(),
            description: None,
            status: IssueStatus::Open,
        }
    }

    #[test]
    fn create_assigns_monotonic_ids_from_one() {
        let store = IssueStore::new();
        let a = store.create(sample("a"));
        let b = store.create(sample("b"));

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn list_is_sorted_and_filterable() {
        let store = IssueStore::new();
        store.create(sample("a"));
        let b = store.create(sample("b"));
        store.update(
            b.id,
            UpdateIssue {
                status: Some(IssueStatus::Closed),
                ..UpdateIssue::default()
            },
        );

        let all = store.list(None);
        assert_eq!(all.len(), 2);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));

        let closed = store.list(Some(IssueStatus::Closed));
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].id, b.id);
    }

    #[test]
    fn update_is_partial_and_bumps_updated_at() {
        let store = IssueStore::new();
        let issue = store.create(sample("original"));

        let updated = store
            .update(
                issue.id,
                UpdateIssue {
                    title: Some("renamed".to_string()),
                    ..UpdateIssue::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.status, IssueStatus::Open);
        assert!(updated.updated_at >= issue.updated_at);
    }

    #[test]
    fn update_unknown_id_returns_none() {
        let store = IssueStore::new();
        assert!(store.update(99, UpdateIssue::default()).is_none());
    }

    #[test]
    fn delete_removes_and_reports_absence() {
        let store = IssueStore::new();
        let issue = store.create(sample("a"));

        assert!(store.delete(issue.id));
        assert!(!store.delete(issue.id));
        assert!(store.get(issue.id).is_none());
        assert!(store.is_empty());
    }
}
