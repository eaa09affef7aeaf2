use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, TaskFilter, UpdateTask, MAX_PAGE_SIZE};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task with validation
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: Uuid) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// List tasks; the limit is clamped to [`MAX_PAGE_SIZE`]
    pub async fn list_tasks(&self, mut filter: TaskFilter) -> TaskResult<Vec<Task>> {
        filter.limit = filter.limit.min(MAX_PAGE_SIZE);
        self.repository.list(filter).await
    }

    /// Apply a partial update to a task
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update_task(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a task; a second delete of the same id fails with NotFound
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: Uuid) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTaskRepository;

    #[tokio::test]
    async fn test_create_rejects_empty_title_without_touching_repository() {
        let mut repo = MockTaskRepository::new();
        repo.expect_create().never();

        let service = TaskService::new(repo);
        let result = service
            .create_task(CreateTask {
                title: String::new(),
                description: None,
                completed: false,
            })
            .await;

        assert!(matches!(result, Err(TaskError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_missing_task_is_not_found() {
        let id = Uuid::now_v7();
        let mut repo = MockTaskRepository::new();
        repo.expect_get_by_id()
            .withf(move |got| *got == id)
            .returning(|_| Ok(None));

        let service = TaskService::new(repo);
        let result = service.get_task(id).await;

        assert!(matches!(result, Err(TaskError::NotFound(e)) if e == id));
    }

    #[tokio::test]
    async fn test_list_clamps_limit_to_max_page_size() {
        let mut repo = MockTaskRepository::new();
        repo.expect_list()
            .withf(|filter| filter.limit == MAX_PAGE_SIZE && filter.offset == 3)
            .returning(|_| Ok(vec![]));

        let service = TaskService::new(repo);
        service
            .list_tasks(TaskFilter {
                offset: 3,
                limit: 5000,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_task_is_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = TaskService::new(repo);
        let result = service.delete_task(Uuid::now_v7()).await;

        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }
}
