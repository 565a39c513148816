use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .col(
                        ColumnDef::new(Products::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Products::Amount)
                            .decimal_len(16, 8)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Products::Quantity)
                            .decimal_len(16, 8)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Products::Title).string_len(1000).not_null())
                    .col(ColumnDef::new(Products::Date).timestamp().not_null())
                    .col(ColumnDef::new(Products::Description).text())
                    .col(ColumnDef::new(Products::Image).string_len(100))
                    .col(ColumnDef::new(Products::StoreId).big_integer())
                    .col(
                        ColumnDef::new(Products::Status)
                            .string_len(1000)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Products::Table, Products::StoreId)
                            .to(crate::Stores::Table, crate::Stores::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub(crate) enum Products {
    Table,
    Id,
    Amount,
    Quantity,
    Title,
    Date,
    Description,
    Image,
    StoreId,
    Status,
}
