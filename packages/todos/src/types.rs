// ABOUTME: Todo type definitions
// ABOUTME: The persisted record plus create/update input structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One todo record as persisted in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Null until the first update, then the time of the latest update
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields for creating a todo
#[derive(Debug, Clone, Deserialize)]
pub struct TodoCreateInput {
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

/// Fields for a partial update; only the supplied fields are applied
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoUpdateInput {
    pub task: Option<String>,
    pub completed: Option<bool>,
}
