// ABOUTME: Integration tests for the todo storage layer
// ABOUTME: Exercises CRUD semantics, timestamps, and filtered count/scan

#[cfg(test)]
mod tests {
    use crate::db::{DatabaseLocation, DbState};
    use crate::filter::TodoFilter;
    use crate::storage::TodoStorage;
    use crate::types::{TodoCreateInput, TodoUpdateInput};
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    async fn setup_storage() -> TodoStorage {
        // Create in-memory database
        let options = SqliteConnectOptions::from_str(":memory:")
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();

        // Run migrations
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();

        TodoStorage::new(pool)
    }

    fn create_input(task: &str, completed: bool) -> TodoCreateInput {
        TodoCreateInput {
            task: task.to_string(),
            completed,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let storage = setup_storage().await;

        let todo = storage.create(create_input("buy milk", false)).await.unwrap();

        assert!(todo.id > 0);
        assert_eq!(todo.task, "buy milk");
        assert!(!todo.completed);
        assert!(todo.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let storage = setup_storage().await;

        let first = storage.create(create_input("first", false)).await.unwrap();
        let second = storage.create(create_input("second", true)).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let storage = setup_storage().await;

        let result = storage.get(999).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_completed_only_leaves_task_untouched() {
        let storage = setup_storage().await;

        let created = storage.create(create_input("wash car", false)).await.unwrap();

        let input = TodoUpdateInput {
            task: None,
            completed: Some(true),
        };
        let updated = storage.update(created.id, input).await.unwrap().unwrap();

        assert_eq!(updated.task, "wash car");
        assert!(updated.completed);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_task_only() {
        let storage = setup_storage().await;

        let created = storage.create(create_input("wash car", true)).await.unwrap();

        let input = TodoUpdateInput {
            task: Some("wash bike".to_string()),
            completed: None,
        };
        let updated = storage.update(created.id, input).await.unwrap().unwrap();

        assert_eq!(updated.task, "wash bike");
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let storage = setup_storage().await;

        let input = TodoUpdateInput {
            task: None,
            completed: Some(true),
        };
        let result = storage.update(999, input).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_snapshot_and_removes_row() {
        let storage = setup_storage().await;

        let created = storage.create(create_input("buy milk", false)).await.unwrap();

        let deleted = storage.delete(created.id).await.unwrap().unwrap();
        assert_eq!(deleted, created);

        let after = storage.get(created.id).await.unwrap();
        assert!(after.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_none() {
        let storage = setup_storage().await;

        let result = storage.delete(999).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_count_with_filters() {
        let storage = setup_storage().await;

        storage.create(create_input("wash car", false)).await.unwrap();
        storage.create(create_input("buy milk", true)).await.unwrap();
        storage.create(create_input("buy bread", false)).await.unwrap();

        let all = storage.count(&TodoFilter::new()).await.unwrap();
        assert_eq!(all, 3);

        let completed = storage
            .count(&TodoFilter::new().completed(true))
            .await
            .unwrap();
        assert_eq!(completed, 1);

        let buying = storage
            .count(&TodoFilter::new().task_contains("buy"))
            .await
            .unwrap();
        assert_eq!(buying, 2);

        let both = storage
            .count(&TodoFilter::new().task_contains("buy").completed(false))
            .await
            .unwrap();
        assert_eq!(both, 1);
    }

    #[tokio::test]
    async fn test_scan_orders_newest_first() {
        let storage = setup_storage().await;

        let first = storage.create(create_input("first", false)).await.unwrap();
        let second = storage.create(create_input("second", false)).await.unwrap();
        let third = storage.create(create_input("third", false)).await.unwrap();

        let todos = storage.scan(&TodoFilter::new(), 10, 0).await.unwrap();

        let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[tokio::test]
    async fn test_scan_windows_with_limit_and_offset() {
        let storage = setup_storage().await;

        for n in 1..=5 {
            storage
                .create(create_input(&format!("task {}", n), false))
                .await
                .unwrap();
        }

        let window = storage.scan(&TodoFilter::new(), 2, 2).await.unwrap();

        assert_eq!(window.len(), 2);
        assert_eq!(window[0].task, "task 3");
        assert_eq!(window[1].task, "task 2");
    }

    #[tokio::test]
    async fn test_scan_applies_filter() {
        let storage = setup_storage().await;

        storage.create(create_input("wash car", false)).await.unwrap();
        storage.create(create_input("buy milk", true)).await.unwrap();

        let completed = storage
            .scan(&TodoFilter::new().completed(true), 10, 0)
            .await
            .unwrap();

        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].task, "buy milk");
    }

    #[tokio::test]
    async fn test_file_backed_database_roundtrip() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("todos.db");

        let db = DbState::init(&DatabaseLocation::File(path.clone()))
            .await
            .unwrap();

        let created = db
            .todos
            .create(TodoCreateInput {
                task: "persisted".to_string(),
                completed: false,
            })
            .await
            .unwrap();

        let fetched = db.todos.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        db.close().await;
        assert!(path.exists());
    }
}
