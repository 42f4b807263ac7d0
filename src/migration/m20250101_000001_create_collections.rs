use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

use crate::entity::{Favorites, Meals, Orders, PaymentHistory, Requests, Reviews, Users};

/// One table per collection, derived from the entity definitions so the same
/// migration runs on Postgres and SQLite. Uniqueness of user emails and
/// favorite pairs is left to the application.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());
        create_collection(manager, &schema, Meals).await?;
        create_collection(manager, &schema, Users).await?;
        create_collection(manager, &schema, Reviews).await?;
        create_collection(manager, &schema, Favorites).await?;
        create_collection(manager, &schema, Orders).await?;
        create_collection(manager, &schema, Requests).await?;
        create_collection(manager, &schema, PaymentHistory).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_collection(manager, PaymentHistory).await?;
        drop_collection(manager, Requests).await?;
        drop_collection(manager, Orders).await?;
        drop_collection(manager, Favorites).await?;
        drop_collection(manager, Reviews).await?;
        drop_collection(manager, Users).await?;
        drop_collection(manager, Meals).await?;
        Ok(())
    }
}

async fn create_collection<E>(
    manager: &SchemaManager<'_>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    manager
        .create_table(schema.create_table_from_entity(entity).if_not_exists().to_owned())
        .await?;

    for mut index in schema.create_index_from_entity(entity) {
        manager
            .create_index(index.if_not_exists().to_owned())
            .await?;
    }

    Ok(())
}

async fn drop_collection<E>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    manager
        .drop_table(Table::drop().table(entity).if_exists().to_owned())
        .await
}
