use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .col(
                        ColumnDef::new(Invoices::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Invoices::Amount)
                            .decimal_len(16, 8)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Invoices::Status)
                            .string_len(1000)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Invoices::Date).timestamp().not_null())
                    .col(
                        ColumnDef::new(Invoices::BitcoinAddress)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Invoices::BitcoinUrl)
                            .string_len(255)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invoices::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub(crate) enum Invoices {
    Table,
    Id,
    Amount,
    Status,
    Date,
    BitcoinAddress,
    BitcoinUrl,
}
