//! Migration to create the calculations table holding one row per completed
//! calculator request.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Calculations::Table)
                    .if_not_exists()
                    .col(pk_auto(Calculations::Id))
                    .col(string(Calculations::Operation).not_null())
                    .col(double(Calculations::Num1).not_null())
                    .col(double_null(Calculations::Num2))
                    .col(double(Calculations::Result).not_null())
                    .col(
                        timestamp_with_time_zone(Calculations::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for browsing history by insertion time
        manager
            .create_index(
                Index::create()
                    .name("idx_calculations_created_at")
                    .table(Calculations::Table)
                    .col(Calculations::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Calculations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Calculations {
    Table,
    Id,
    Operation,
    Num1,
    Num2,
    Result,
    CreatedAt,
}
