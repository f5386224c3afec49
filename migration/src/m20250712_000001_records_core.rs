use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Client {
    Table,
    Id,
    CompanyName,
    ContactPerson,
    Email,
    Phone,
    Industry,
    CompanySize,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
    ClientId,
    Title,
    Status,
    ConsultationContent,
    ProposalContent,
    EstimatedAmount,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProjectStatusEnum {
    #[sea_orm(iden = "project_status")]
    Table,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

const PROJECT_STATUS_VALUES: &[&str] = &[
    "inquiry",
    "hearing",
    "proposal",
    "quotation",
    "negotiation",
    "handover",
    "in_progress",
    "completed",
    "on_hold",
    "lost",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let create_enum_sql = format!(
            "DO $$ BEGIN IF NOT EXISTS (SELECT 1 FROM pg_type WHERE typname = 'project_status') THEN CREATE TYPE project_status AS ENUM ({}); END IF; END $$;",
            PROJECT_STATUS_VALUES
                .iter()
                .map(|v| format!("'{}'", v))
                .collect::<Vec<_>>()
                .join(", ")
        );
        manager
            .get_connection()
            .execute_unprepared(&create_enum_sql)
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Client::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Client::CompanyName)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Client::ContactPerson)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Client::Email).string_len(320))
                    .col(ColumnDef::new(Client::Phone).string_len(20))
                    .col(ColumnDef::new(Client::Industry).string_len(100))
                    .col(ColumnDef::new(Client::CompanySize).string_len(50))
                    .col(
                        ColumnDef::new(Client::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("now()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_client_company_name")
                    .table(Client::Table)
                    .col(Client::CompanyName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Project::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Project::ClientId).integer().not_null())
                    .col(ColumnDef::new(Project::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Project::Status)
                            .custom(ProjectStatusEnum::Table)
                            .not_null()
                            .default(Expr::cust("'inquiry'::project_status")),
                    )
                    .col(ColumnDef::new(Project::ConsultationContent).text())
                    .col(ColumnDef::new(Project::ProposalContent).text())
                    .col(ColumnDef::new(Project::EstimatedAmount).big_integer())
                    .col(ColumnDef::new(Project::StartDate).date())
                    .col(ColumnDef::new(Project::EndDate).date())
                    .col(
                        ColumnDef::new(Project::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("now()")),
                    )
                    .col(
                        ColumnDef::new(Project::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("now()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_client")
                            .from(Project::Table, Project::ClientId)
                            .to(Client::Table, Client::Id)
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
                    .name("idx_project_client")
                    .table(Project::Table)
                    .col(Project::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_project_status")
                    .table(Project::Table)
                    .col(Project::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_project_created_at")
                    .table(Project::Table)
                    .col(Project::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await?;
        manager
            .get_connection()
            .execute_unprepared("DROP TYPE IF EXISTS project_status;")
            .await?;
        Ok(())
    }
}
