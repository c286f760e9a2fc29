// ABOUTME: HTTP request handlers for todo operations
// ABOUTME: CRUD endpoints plus the filtered, paginated list query

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use todos::pagination::PaginationParams;
use todos::query::ListQuery;
use todos::types::{Todo, TodoCreateInput, TodoUpdateInput};
use todos::DbState;

use crate::error::ApiError;

/// Filter query parameters for the list endpoint
#[derive(Debug, Deserialize)]
pub struct ListTodosParams {
    pub search: Option<String>,
    pub completed: Option<String>,
}

/// List todos with optional filters and pagination
pub async fn list_todos(
    State(db): State<DbState>,
    Query(filters): Query<ListTodosParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    info!(
        "Listing todos (search: {:?}, completed: {:?}, page: {})",
        filters.search,
        filters.completed,
        pagination.page()
    );

    let query = ListQuery {
        search: filters.search,
        completed: filters.completed,
        pagination,
    };

    let page = query.run(&db.todos).await?;
    Ok(Json(page))
}

/// Get a single todo by ID
pub async fn get_todo(
    State(db): State<DbState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, ApiError> {
    info!("Getting todo: {}", id);

    let todo = db.todos.get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(todo))
}

/// Request body for creating a todo
#[derive(Deserialize)]
pub struct CreateTodoRequest {
    pub task: Option<String>,
    pub completed: Option<bool>,
}

/// Create a new todo
pub async fn create_todo(
    State(db): State<DbState>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let task = request.task.as_deref().unwrap_or("").trim().to_string();
    if task.is_empty() {
        return Err(ApiError::Validation("Task must not be empty".to_string()));
    }

    info!("Creating todo (task: {})", task);

    let input = TodoCreateInput {
        task,
        completed: request.completed.unwrap_or(false),
    };

    let todo = db.todos.create(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Request body for updating a todo
#[derive(Deserialize)]
pub struct UpdateTodoRequest {
    pub task: Option<String>,
    pub completed: Option<bool>,
}

/// Update an existing todo
pub async fn update_todo(
    State(db): State<DbState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    if request.task.is_none() && request.completed.is_none() {
        return Err(ApiError::Validation(
            "Provide at least one of task or completed to update".to_string(),
        ));
    }

    let task = match request.task {
        Some(task) => {
            let task = task.trim().to_string();
            if task.is_empty() {
                return Err(ApiError::Validation("Task must not be empty".to_string()));
            }
            Some(task)
        }
        None => None,
    };

    info!("Updating todo: {}", id);

    let input = TodoUpdateInput {
        task,
        completed: request.completed,
    };

    let todo = db.todos.update(id, input).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(todo))
}

/// Response body for a successful delete
#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted: Todo,
}

/// Delete a todo, returning its prior state
pub async fn delete_todo(
    State(db): State<DbState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    info!("Deleting todo: {}", id);

    let deleted = db.todos.delete(id).await?.ok_or(ApiError::NotFound)?;

    Ok(Json(DeleteResponse {
        message: "Todo deleted successfully".to_string(),
        deleted,
    }))
}

/// Fallback for unmatched routes
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
