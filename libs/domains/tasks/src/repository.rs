use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, TaskFilter, UpdateTask};

/// Repository trait for Task persistence
///
/// This trait defines the data access interface for tasks.
/// Implementations can use different storage backends (in-memory,
/// PostgreSQL).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task; the implementation assigns the id
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// Get a task by ID
    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>>;

    /// List tasks in primary-key order with offset/limit
    async fn list(&self, filter: TaskFilter) -> TaskResult<Vec<Task>>;

    /// Apply a partial update to an existing task
    async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task>;

    /// Delete a task by ID; returns whether a record was removed
    async fn delete(&self, id: Uuid) -> TaskResult<bool>;
}

/// In-memory implementation of TaskRepository
///
/// The store lives for the process lifetime and resets on restart. Reads
/// take a shared lock, mutations an exclusive one, so same-id writes
/// serialize instead of racing.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let task = Task {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            completed: input.completed,
        };

        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id, task.clone());

        tracing::info!(task_id = %task.id, "Created task");
        Ok(task)
    }

    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn list(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        let tasks = self.tasks.read().await;

        let mut result: Vec<Task> = tasks.values().cloned().collect();

        // UUIDv7 ids are time-ordered, so id order equals insertion order
        result.sort_by(|a, b| a.id.cmp(&b.id));

        let result: Vec<Task> = result
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect();

        Ok(result)
    }

    async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task> {
        let mut tasks = self.tasks.write().await;

        let task = tasks.get_mut(&id).ok_or(TaskError::NotFound(id))?;
        task.apply_update(input);
        let updated = task.clone();

        tracing::info!(task_id = %id, "Updated task");
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> TaskResult<bool> {
        let mut tasks = self.tasks.write().await;

        if tasks.remove(&id).is_some() {
            tracing::info!(task_id = %id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
