use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Handover {
    Table,
    Id,
    ProjectId,
    HandoverType,
    HandoverTo,
    HandoverDate,
    HandoverContent,
    TechnicalRequirements,
    Notes,
    IsCompleted,
}

#[derive(DeriveIden)]
enum ProgressLog {
    Table,
    Id,
    ProjectId,
    LogDate,
    ActivityType,
    Content,
    NextAction,
    CreatedBy,
}

#[derive(DeriveIden)]
enum EngineerHandoff {
    Table,
    Id,
    ProjectId,
    EngineerName,
    HandoffDate,
    TechnicalScope,
    CurrentStatus,
    ClientRequirements,
    Timeline,
    Budget,
    SpecialNotes,
    IsAccepted,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Handover::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Handover::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Handover::ProjectId).integer().not_null())
                    .col(
                        ColumnDef::new(Handover::HandoverType)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Handover::HandoverTo)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Handover::HandoverDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("now()")),
                    )
                    .col(ColumnDef::new(Handover::HandoverContent).text().not_null())
                    .col(ColumnDef::new(Handover::TechnicalRequirements).text())
                    .col(ColumnDef::new(Handover::Notes).text())
                    .col(
                        ColumnDef::new(Handover::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_handover_project")
                            .from(Handover::Table, Handover::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_handover_project")
                    .table(Handover::Table)
                    .col(Handover::ProjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_handover_date")
                    .table(Handover::Table)
                    .col(Handover::HandoverDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProgressLog::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProgressLog::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProgressLog::ProjectId).integer().not_null())
                    .col(
                        ColumnDef::new(ProgressLog::LogDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("now()")),
                    )
                    .col(
                        ColumnDef::new(ProgressLog::ActivityType)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProgressLog::Content).text().not_null())
                    .col(ColumnDef::new(ProgressLog::NextAction).text())
                    .col(
                        ColumnDef::new(ProgressLog::CreatedBy)
                            .string_len(100)
                            .not_null()
                            .default("担当者"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_progress_log_project")
                            .from(ProgressLog::Table, ProgressLog::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_progress_log_project")
                    .table(ProgressLog::Table)
                    .col(ProgressLog::ProjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_progress_log_date")
                    .table(ProgressLog::Table)
                    .col(ProgressLog::LogDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EngineerHandoff::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EngineerHandoff::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EngineerHandoff::ProjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EngineerHandoff::EngineerName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EngineerHandoff::HandoffDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("now()")),
                    )
                    .col(
                        ColumnDef::new(EngineerHandoff::TechnicalScope)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EngineerHandoff::CurrentStatus)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EngineerHandoff::ClientRequirements)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EngineerHandoff::Timeline).text())
                    .col(ColumnDef::new(EngineerHandoff::Budget).big_integer())
                    .col(ColumnDef::new(EngineerHandoff::SpecialNotes).text())
                    .col(
                        ColumnDef::new(EngineerHandoff::IsAccepted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_engineer_handoff_project")
                            .from(EngineerHandoff::Table, EngineerHandoff::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_engineer_handoff_project")
                    .table(EngineerHandoff::Table)
                    .col(EngineerHandoff::ProjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_engineer_handoff_accepted")
                    .table(EngineerHandoff::Table)
                    .col(EngineerHandoff::IsAccepted)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EngineerHandoff::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProgressLog::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Handover::Table).to_owned())
            .await?;
        Ok(())
    }
}
