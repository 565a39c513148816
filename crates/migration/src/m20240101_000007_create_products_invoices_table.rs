use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductsInvoices::Table)
                    .col(
                        ColumnDef::new(ProductsInvoices::ProductId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductsInvoices::InvoiceId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ProductsInvoices::ProductId)
                            .col(ProductsInvoices::InvoiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProductsInvoices::Table, ProductsInvoices::ProductId)
                            .to(crate::Products::Table, crate::Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProductsInvoices::Table, ProductsInvoices::InvoiceId)
                            .to(crate::Invoices::Table, crate::Invoices::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductsInvoices::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub(crate) enum ProductsInvoices {
    Table,
    ProductId,
    InvoiceId,
}
