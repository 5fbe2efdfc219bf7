use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Snowflakes are stored as text to keep the full u64 range
        manager
            .create_table(
                Table::create()
                    .table(StarMessage::Table)
                    .if_not_exists()
                    .col(string(StarMessage::OriginalId).primary_key())
                    .col(string(StarMessage::RepostedId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_star_message_reposted_id")
                    .table(StarMessage::Table)
                    .col(StarMessage::RepostedId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_star_message_reposted_id")
                    .table(StarMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StarMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StarMessage {
    Table,
    OriginalId,
    RepostedId,
}
