use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite only supports one ADD COLUMN per statement
        manager
            .alter_table(
                Table::alter()
                    .table(CandidateHomes::Table)
                    .add_column(ColumnDef::new(CandidateHomes::SentToClientId).uuid())
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(CandidateHomes::Table)
                    .add_column(ColumnDef::new(CandidateHomes::SentAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(CandidateHomes::Table)
                    .drop_column(CandidateHomes::SentAt)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(CandidateHomes::Table)
                    .drop_column(CandidateHomes::SentToClientId)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum CandidateHomes {
    Table,
    SentToClientId,
    SentAt,
}
