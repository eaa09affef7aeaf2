//! Generic repository base for UUID-keyed SeaORM entities.
//!
//! Domain repositories wrap a [`BaseRepository`] for the single-row
//! operations (insert, find by id, update, delete by id) and drop down to
//! `EntityTrait` queries for anything richer (filters, ordering,
//! pagination).

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait,
};
use std::marker::PhantomData;
use uuid::Uuid;

/// Shared single-row CRUD operations over one entity.
///
/// # Example
/// ```ignore
/// use database::BaseRepository;
///
/// struct PgTaskRepository {
///     base: BaseRepository<entity::Entity>,
/// }
/// ```
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    entity: PhantomData<E>,
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// The underlying connection, for queries the base does not cover.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Insert a new row and return the persisted model.
    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(&self.db).await
    }

    /// Fetch one row by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(<E::PrimaryKey as PrimaryKeyTrait>::ValueType::from(id))
            .one(&self.db)
            .await
    }

    /// Update an existing row and return the model as stored.
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(&self.db).await
    }

    /// Delete one row by primary key, returning the number of rows removed.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = E::delete_by_id(<E::PrimaryKey as PrimaryKeyTrait>::ValueType::from(id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
