use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use uuid::Uuid;

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{CreateTask, Task, TaskFilter, UpdateTask},
    repository::TaskRepository,
};

pub struct PgTaskRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let active_model: entity::ActiveModel = input.into();

        let model = self.base.insert(active_model).await?;

        tracing::info!(task_id = %model.id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(|m| m.into()))
    }

    async fn list(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .limit(filter.limit)
            .offset(filter.offset)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task> {
        // Fetch existing task
        let model = self
            .base
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        // Apply the patch on the domain model
        let mut task: Task = model.into();
        task.apply_update(input);

        // Convert back to ActiveModel for update; the id is never touched
        let active_model = entity::ActiveModel {
            id: Set(task.id),
            title: Set(task.title),
            description: Set(task.description),
            completed: Set(task.completed),
        };

        let updated_model = self.base.update(active_model).await?;

        tracing::info!(task_id = %id, "Updated task");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: Uuid) -> TaskResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(task_id = %id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
