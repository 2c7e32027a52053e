use async_trait::async_trait;

use super::todo::{Todo, TodoId, UpdateTodo};

/// Raw access to the todo store. Inputs arrive already validated and trimmed
/// by the service layer; the repository maintains the invariants of the
/// collection itself (unique ids, monotonic counter, insertion order).
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn list(&self) -> anyhow::Result<Vec<Todo>>;
    async fn get(&self, id: TodoId) -> anyhow::Result<Option<Todo>>;
    /// Assigns the next id, appends, and returns the stored todo.
    async fn insert(&self, title: String, description: String) -> anyhow::Result<Todo>;
    /// Applies the provided fields to the matching todo and stamps
    /// `updated_at`. Returns `None` when the id does not exist.
    async fn update(&self, id: TodoId, changes: UpdateTodo) -> anyhow::Result<Option<Todo>>;
    /// Removes and returns the matching todo, preserving the order of the rest.
    async fn remove(&self, id: TodoId) -> anyhow::Result<Option<Todo>>;
}
