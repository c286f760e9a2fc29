// ABOUTME: Todo storage layer using SQLite
// ABOUTME: Handles CRUD operations plus filtered count and windowed scan

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use thiserror::Error;
use tracing::debug;

use crate::filter::{Param, TodoFilter};
use crate::types::{Todo, TodoCreateInput, TodoUpdateInput};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub struct TodoStorage {
    pool: SqlitePool,
}

impl TodoStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new todo and return the stored record
    pub async fn create(&self, input: TodoCreateInput) -> Result<Todo, StorageError> {
        debug!("Creating todo (task: {})", input.task);

        let now = Utc::now();

        let result = sqlx::query("INSERT INTO todos (task, completed, created_at) VALUES (?, ?, ?)")
            .bind(&input.task)
            .bind(input.completed)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let id = result.last_insert_rowid();

        // Insert and re-fetch are two statements; a concurrent delete in
        // between surfaces here as a Database error.
        self.get(id)
            .await?
            .ok_or_else(|| StorageError::Database(format!("todo {} missing after insert", id)))
    }

    /// Get a single todo by id
    pub async fn get(&self, id: i64) -> Result<Option<Todo>, StorageError> {
        debug!("Fetching todo: {}", id);

        let row = sqlx::query("SELECT * FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        match row {
            Some(r) => Ok(Some(row_to_todo(&r)?)),
            None => Ok(None),
        }
    }

    /// Apply the supplied fields to a todo, stamping updated_at
    pub async fn update(
        &self,
        id: i64,
        input: TodoUpdateInput,
    ) -> Result<Option<Todo>, StorageError> {
        debug!("Updating todo: {}", id);

        // Build update query dynamically based on provided fields
        let mut query_parts = Vec::new();

        if input.task.is_some() {
            query_parts.push("task = ?");
        }
        if input.completed.is_some() {
            query_parts.push("completed = ?");
        }
        query_parts.push("updated_at = ?");

        let query_str = format!("UPDATE todos SET {} WHERE id = ?", query_parts.join(", "));
        let mut query = sqlx::query(&query_str);

        // Bind parameters in the same order
        if let Some(task) = input.task {
            query = query.bind(task);
        }
        if let Some(completed) = input.completed {
            query = query.bind(completed);
        }
        query = query.bind(Utc::now()).bind(id);

        let result = query
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get(id).await
    }

    /// Delete a todo, returning its pre-delete snapshot
    pub async fn delete(&self, id: i64) -> Result<Option<Todo>, StorageError> {
        debug!("Deleting todo: {}", id);

        let Some(snapshot) = self.get(id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(Some(snapshot))
    }

    /// Count todos matching the filter
    pub async fn count(&self, filter: &TodoFilter) -> Result<i64, StorageError> {
        let sql = format!("SELECT COUNT(*) FROM todos{}", filter.where_clause());

        let mut query = sqlx::query_scalar(&sql);
        for predicate in filter.predicates() {
            query = match predicate.param() {
                Param::Text(value) => query.bind(value),
                Param::Bool(value) => query.bind(value),
            };
        }

        let count: i64 = query
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(count)
    }

    /// Windowed, newest-first read of todos matching the filter
    pub async fn scan(
        &self,
        filter: &TodoFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Todo>, StorageError> {
        debug!("Scanning todos (limit: {}, offset: {})", limit, offset);

        // id breaks ties between rows created in the same instant
        let sql = format!(
            "SELECT * FROM todos{} ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
            filter.where_clause()
        );

        let mut query = sqlx::query(&sql);
        for predicate in filter.predicates() {
            query = match predicate.param() {
                Param::Text(value) => query.bind(value),
                Param::Bool(value) => query.bind(value),
            };
        }
        query = query.bind(limit).bind(offset);

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_todo).collect()
    }
}

/// Convert a database row to a Todo
fn row_to_todo(row: &sqlx::sqlite::SqliteRow) -> Result<Todo, StorageError> {
    Ok(Todo {
        id: row.try_get("id").map_err(StorageError::Sqlx)?,
        task: row.try_get("task").map_err(StorageError::Sqlx)?,
        completed: row.try_get("completed").map_err(StorageError::Sqlx)?,
        created_at: row.try_get("created_at").map_err(StorageError::Sqlx)?,
        updated_at: row.try_get("updated_at").map_err(StorageError::Sqlx)?,
    })
}
