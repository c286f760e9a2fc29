// ABOUTME: Todo record store and paginated query service
// ABOUTME: Domain types, SQLite storage, filter predicates, and the list query flow

pub mod db;
pub mod filter;
pub mod pagination;
pub mod query;
pub mod storage;
pub mod types;

mod storage_tests;

pub use db::{DatabaseLocation, DbState};
pub use filter::{Predicate, TodoFilter};
pub use query::{ListQuery, QueryError, TodoPage};
pub use storage::{StorageError, TodoStorage};
pub use types::{Todo, TodoCreateInput, TodoUpdateInput};
