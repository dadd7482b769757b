//! SQLite implementation of the SeenIssueStore.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::adapters::sqlite::parse_datetime;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Issue, SeenRecord};
use crate::domain::ports::{InsertOutcome, SeenIssueStore};

/// SQLite extended result codes for PRIMARY KEY and UNIQUE violations.
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";

pub struct SqliteSeenIssueRepository {
    pool: SqlitePool,
}

impl SqliteSeenIssueRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_duplicate_key(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_unique_violation()
                || matches!(
                    db_err.code().as_deref(),
                    Some(SQLITE_CONSTRAINT_PRIMARYKEY | SQLITE_CONSTRAINT_UNIQUE)
                )
        }
        _ => false,
    }
}

#[async_trait]
impl SeenIssueStore for SqliteSeenIssueRepository {
    async fn contains(&self, id: i64) -> DomainResult<bool> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM seen_issues WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    async fn insert(&mut self, issue: &Issue) -> DomainResult<InsertOutcome> {
        let result = sqlx::query("INSERT INTO seen_issues (id, number) VALUES (?, ?)")
            .bind(issue.id)
            .bind(issue.number)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) if is_duplicate_key(&e) => Ok(InsertOutcome::AlreadyPresent),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&mut self) -> DomainResult<()> {
        // Every insert is committed on its own.
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<SeenRecord>> {
        let rows: Vec<SeenIssueRow> =
            sqlx::query_as("SELECT id, number, created_at FROM seen_issues ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}

#[derive(sqlx::FromRow)]
struct SeenIssueRow {
    id: i64,
    number: i64,
    created_at: String,
}

impl TryFrom<SeenIssueRow> for SeenRecord {
    type Error = DomainError;

    fn try_from(row: SeenIssueRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            number: row.number,
            created_at: Some(parse_datetime(&row.created_at)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::create_store_test_pool;

    async fn setup() -> SqliteSeenIssueRepository {
        let pool = create_store_test_pool().await.unwrap();
        SqliteSeenIssueRepository::new(pool)
    }

    #[tokio::test]
    async fn test_insert_then_contains() {
        let mut repo = setup().await;
        let issue = Issue::new(5, 42, "fix parser crash", "https://x/42");

        assert!(!repo.contains(5).await.unwrap());
        assert_eq!(repo.insert(&issue).await.unwrap(), InsertOutcome::Inserted);
        assert!(repo.contains(5).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_already_present() {
        let mut repo = setup().await;
        let issue = Issue::new(5, 42, "fix parser crash", "https://x/42");

        repo.insert(&issue).await.unwrap();
        let outcome = repo.insert(&issue).await.unwrap();

        assert_eq!(outcome, InsertOutcome::AlreadyPresent);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_is_ordered_and_timestamped() {
        let mut repo = setup().await;
        for id in [30, 10, 20] {
            repo.insert(&Issue::new(id, id / 10, "t", "https://x")).await.unwrap();
        }

        let records = repo.list().await.unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
        assert_eq!(records[0].number, 1);
        assert!(records.iter().all(|r| r.created_at.is_some()));
    }

    #[tokio::test]
    async fn test_other_database_errors_propagate() {
        let mut repo = setup().await;
        sqlx::query("DROP TABLE seen_issues").execute(repo.pool()).await.unwrap();

        let result = repo.insert(&Issue::new(1, 1, "t", "https://x/1")).await;
        assert!(matches!(result, Err(DomainError::DatabaseError(_))));
    }
}
