//! Migration to create trainings table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trainings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trainings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Trainings::UserId).integer().null())
                    .col(
                        ColumnDef::new(Trainings::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Trainings::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Trainings::ActivityType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Trainings::Distance).double().not_null())
                    .col(ColumnDef::new(Trainings::AverageSpeed).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trainings_user")
                            .from(Trainings::Table, Trainings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trainings_user_id")
                    .table(Trainings::Table)
                    .col(Trainings::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trainings_activity_type")
                    .table(Trainings::Table)
                    .col(Trainings::ActivityType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trainings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Trainings {
    Table,
    Id,
    UserId,
    StartTime,
    EndTime,
    ActivityType,
    Distance,
    AverageSpeed,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
