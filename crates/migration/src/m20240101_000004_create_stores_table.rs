use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stores::Table)
                    .col(
                        ColumnDef::new(Stores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Stores::Name)
                            .string_len(1000)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Stores::Domain)
                            .string_len(1000)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Stores::Template).string_len(1000))
                    .col(
                        ColumnDef::new(Stores::Email)
                            .string_len(1000)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Stores::WalletId).big_integer())
                    .col(ColumnDef::new(Stores::EmailHost).string_len(1000))
                    .col(ColumnDef::new(Stores::EmailPassword).string_len(1000))
                    .col(ColumnDef::new(Stores::EmailPort).integer())
                    .col(ColumnDef::new(Stores::EmailUseSsl).boolean())
                    .col(ColumnDef::new(Stores::EmailUser).string_len(1000))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Stores::Table, Stores::WalletId)
                            .to(crate::Wallets::Table, crate::Wallets::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stores::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub(crate) enum Stores {
    Table,
    Id,
    Name,
    Domain,
    Template,
    Email,
    WalletId,
    EmailHost,
    EmailPassword,
    EmailPort,
    EmailUseSsl,
    EmailUser,
}
