//! Mistake repository
//!
//! All queries are parameterized; the repository borrows the pool and holds
//! no state of its own.

use sqlx::PgPool;

use crate::models::{Mistake, NewMistake};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Mistake repository
pub struct MistakeRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MistakeRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every mistake in ascending id order.
    ///
    /// An empty table yields an empty vec. A NULL `category` column maps to
    /// the empty string on the wire.
    pub async fn list_all(&self) -> Result<Vec<Mistake>, DbError> {
        let mistakes = sqlx::query_as::<_, Mistake>(
            "SELECT id, title, description, COALESCE(category, '') AS category \
             FROM mistakes ORDER BY id ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(mistakes)
    }

    /// Insert a mistake and return it with the freshly assigned id.
    ///
    /// Callers validate before insert, so the NOT NULL constraints on
    /// `title` and `description` never fire in practice.
    pub async fn create(&self, new: NewMistake) -> Result<Mistake, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO mistakes (title, description, category) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.category)
        .fetch_one(self.pool)
        .await?;

        Ok(Mistake {
            id,
            title: new.title,
            description: new.description,
            category: new.category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations;
    use sqlx::postgres::PgPoolOptions;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("pool creation failed");
        migrations::ensure_schema(&pool)
            .await
            .expect("schema bootstrap failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_assigns_fresh_id_and_list_includes_record() {
        let pool = test_pool().await;
        let repo = MistakeRepo::new(&pool);

        let before: Vec<i32> = repo
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();

        let created = repo
            .create(NewMistake {
                title: "Off-by-one".into(),
                description: "Loop bound error".into(),
                category: "bug".into(),
            })
            .await
            .unwrap();

        assert!(created.id > 0);
        assert!(!before.contains(&created.id));

        let after = repo.list_all().await.unwrap();
        let found = after
            .iter()
            .find(|m| m.id == created.id)
            .expect("created record missing from list");
        assert_eq!(found.title, "Off-by-one");
        assert_eq!(found.description, "Loop bound error");
        assert_eq!(found.category, "bug");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_orders_by_ascending_id() {
        let pool = test_pool().await;
        let repo = MistakeRepo::new(&pool);

        for title in ["first", "second", "third"] {
            repo.create(NewMistake {
                title: title.into(),
                description: "ordering check".into(),
                category: String::new(),
            })
            .await
            .unwrap();
        }

        let ids: Vec<i32> = repo
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn null_category_lists_as_empty_string() {
        let pool = test_pool().await;

        sqlx::query(
            "INSERT INTO mistakes (title, description) \
             VALUES ('no category', 'row with NULL category')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let listed = MistakeRepo::new(&pool).list_all().await.unwrap();
        let found = listed
            .iter()
            .rev()
            .find(|m| m.title == "no category")
            .unwrap();
        assert_eq!(found.category, "");
    }
}
