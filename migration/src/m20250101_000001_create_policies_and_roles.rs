use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Policies
        manager
            .create_table(
                Table::create()
                    .table(Policies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Policies::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Policies::PolicyName).string_len(100).not_null().unique_key())
                    .col(ColumnDef::new(Policies::Category).string_len(100).null())
                    .col(ColumnDef::new(Policies::Action).string_len(20).null())
                    .col(ColumnDef::new(Policies::Deleted).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Policies::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(Policies::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        // (category, action) identifies a policy
        manager
            .create_index(
                Index::create()
                    .name("_category_action_unq")
                    .table(Policies::Table)
                    .col(Policies::Category)
                    .col(Policies::Action)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 2. Roles
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Roles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Roles::Role).string_len(50).not_null().unique_key())
                    .col(ColumnDef::new(Roles::Deleted).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Roles::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(Roles::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Roles::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Policies::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Policies {
    Table,
    Id,
    PolicyName,
    Category,
    Action,
    Deleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Roles {
    Table,
    Id,
    Role,
    Deleted,
    CreatedAt,
    UpdatedAt,
}
