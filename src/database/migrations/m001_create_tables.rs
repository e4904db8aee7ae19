use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::DisplayName).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null().default("USER"))
                    .col(ColumnDef::new(Users::IsActive).boolean().not_null().default(true))
                    .col(ColumnDef::new(Users::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Branches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Branches::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Branches::Name).string().not_null())
                    .col(ColumnDef::new(Branches::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // No unique index on (branch_id, user_id): repeated links are allowed
        manager
            .create_table(
                Table::create()
                    .table(BranchReps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BranchReps::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BranchReps::BranchId).integer().not_null())
                    .col(ColumnDef::new(BranchReps::UserId).integer().not_null())
                    .col(ColumnDef::new(BranchReps::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_branch_reps_branch_id")
                            .from(BranchReps::Table, BranchReps::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_branch_reps_user_id")
                            .from(BranchReps::Table, BranchReps::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_branch_reps_branch_id")
                    .table(BranchReps::Table)
                    .col(BranchReps::BranchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserSessions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserSessions::SessionId).string().not_null().unique_key())
                    .col(ColumnDef::new(UserSessions::UserId).integer().not_null())
                    .col(ColumnDef::new(UserSessions::IsActive).boolean().not_null().default(true))
                    .col(ColumnDef::new(UserSessions::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(UserSessions::ExpiresAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_sessions_user_id")
                            .from(UserSessions::Table, UserSessions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserSessions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(BranchReps::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Branches::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    DisplayName,
    Role,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Branches {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum BranchReps {
    Table,
    Id,
    BranchId,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UserSessions {
    Table,
    Id,
    SessionId,
    UserId,
    IsActive,
    CreatedAt,
    ExpiresAt,
}
