use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    repository::TodoRepository,
    todo::{Todo, TodoId, UpdateTodo},
};

struct Store {
    // Insertion order is creation order; delete keeps the rest in place.
    items: Vec<Todo>,
    next_id: u64,
}

/// Process-memory todo store. A single mutex serializes all five operations,
/// which is what keeps the id counter monotonic and the ordering stable when
/// the runtime schedules handlers on multiple worker threads. Contents are
/// discarded at shutdown.
#[derive(Clone)]
pub struct InMemoryTodoRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(Store { items: Vec::new(), next_id: 1 })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>> {
        self.store.lock().map_err(|_| anyhow!("todo store mutex poisoned"))
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>> {
        Ok(self.lock()?.items.clone())
    }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>> {
        Ok(self.lock()?.items.iter().find(|t| t.id == id).cloned())
    }

    async fn insert(&self, title: String, description: String) -> Result<Todo> {
        let mut store = self.lock()?;
        let id = TodoId(store.next_id);
        store.next_id += 1;
        let todo = Todo {
            id,
            title,
            description,
            completed: false,
            created_at: Utc::now(),
            updated_at: None,
        };
        store.items.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: TodoId, changes: UpdateTodo) -> Result<Option<Todo>> {
        let mut store = self.lock()?;
        let Some(todo) = store.items.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        if let Some(title) = changes.title {
            todo.title = title;
        }
        if let Some(description) = changes.description {
            todo.description = description;
        }
        if let Some(completed) = changes.completed {
            todo.completed = completed;
        }
        // Stamped even when no field was provided.
        todo.updated_at = Some(Utc::now());
        Ok(Some(todo.clone()))
    }

    async fn remove(&self, id: TodoId) -> Result<Option<Todo>> {
        let mut store = self.lock()?;
        let Some(index) = store.items.iter().position(|t| t.id == id) else {
            return Ok(None);
        };
        Ok(Some(store.items.remove(index)))
    }
}
