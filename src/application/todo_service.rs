use async_trait::async_trait;

use crate::domain::error::TodoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo};

type Result<T> = std::result::Result<T, TodoError>;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Todo>>;
    async fn get(&self, id: TodoId) -> Result<Todo>;
    async fn create(&self, input: CreateTodo) -> Result<Todo>;
    async fn update(&self, id: TodoId, input: UpdateTodo) -> Result<Todo>;
    async fn delete(&self, id: TodoId) -> Result<Todo>;
}

/// Validates and normalizes inputs before the store is touched, so a rejected
/// request never leaves a partial mutation behind.
#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn list(&self) -> Result<Vec<Todo>> {
        Ok(self.repo.list().await?)
    }

    async fn get(&self, id: TodoId) -> Result<Todo> {
        self.repo.get(id).await?.ok_or(TodoError::NotFound)
    }

    async fn create(&self, input: CreateTodo) -> Result<Todo> {
        // Missing title and whitespace-only title fail identically.
        let title = match input.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_owned(),
            _ => return Err(TodoError::InvalidArgument(TodoError::TITLE_REQUIRED)),
        };
        let description = input
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_owned();
        Ok(self.repo.insert(title, description).await?)
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> Result<Todo> {
        // An unknown id is reported before any field validation.
        if self.repo.get(id).await?.is_none() {
            return Err(TodoError::NotFound);
        }
        let title = match input.title.as_deref().map(str::trim) {
            Some("") => return Err(TodoError::InvalidArgument(TodoError::TITLE_EMPTY)),
            Some(t) => Some(t.to_owned()),
            None => None,
        };
        // A provided-but-empty description is a deliberate clear; only an
        // absent field leaves the stored value alone.
        let description = input.description.as_deref().map(|d| d.trim().to_owned());
        let changes = UpdateTodo { title, description, completed: input.completed };
        self.repo.update(id, changes).await?.ok_or(TodoError::NotFound)
    }

    async fn delete(&self, id: TodoId) -> Result<Todo> {
        self.repo.remove(id).await?.ok_or(TodoError::NotFound)
    }
}
