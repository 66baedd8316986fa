use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlacklistEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlacklistEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlacklistEntries::Name).string())
                    .col(ColumnDef::new(BlacklistEntries::Phone).string().unique_key())
                    .col(ColumnDef::new(BlacklistEntries::Instagram).string())
                    .col(ColumnDef::new(BlacklistEntries::Reason).string().not_null())
                    .col(
                        ColumnDef::new(BlacklistEntries::CreatedBy)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlacklistEntries::UpdatedBy)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlacklistEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlacklistEntries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BlacklistEntries::Table, BlacklistEntries::CreatedBy)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BlacklistEntries::Table, BlacklistEntries::UpdatedBy)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlacklistEntries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BlacklistEntries {
    Table,
    Id,
    Name,
    Phone,
    Instagram,
    Reason,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
