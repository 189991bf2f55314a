use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, PrimaryKeyTrait, Select,
};

use super::error::{DaoEntity, DaoLayerError, DaoResult};

type DaoModel<E> = <E as EntityTrait>::Model;
type DaoActiveModel<E> = <E as EntityTrait>::ActiveModel;

/// Single-table operations shared by every DAO. Tables are keyed by an
/// auto-incremented `i32`.
#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    DaoModel<Self::Entity>:
        FromQueryResult + IntoActiveModel<DaoActiveModel<Self::Entity>> + Send + Sync,
    DaoActiveModel<Self::Entity>:
        ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<i32> + Send + Sync,
{
    type Entity: EntityTrait + Send + Sync;
    const ENTITY: DaoEntity;

    fn new(db: &DatabaseConnection) -> Self;

    fn db(&self) -> &DatabaseConnection;

    async fn find_optional(&self, id: i32) -> DaoResult<Option<DaoModel<Self::Entity>>> {
        Self::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn find_by_id(&self, id: i32) -> DaoResult<DaoModel<Self::Entity>> {
        self.find_optional(id)
            .await?
            .ok_or(DaoLayerError::NotFound {
                entity: Self::ENTITY,
                id,
            })
    }

    async fn list(
        &self,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<Vec<DaoModel<Self::Entity>>> {
        apply(Self::Entity::find())
            .all(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn update<F>(&self, id: i32, apply: F) -> DaoResult<DaoModel<Self::Entity>>
    where
        F: for<'a> FnOnce(&'a mut DaoActiveModel<Self::Entity>) + Send,
    {
        let model = self.find_by_id(id).await?;
        let mut active = model.into_active_model();
        apply(&mut active);
        active.update(self.db()).await.map_err(DaoLayerError::Db)
    }
}
