pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::{cli, sea_orm, MigratorTrait};

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_tokens_table;
mod m20240101_000003_create_wallets_table;
mod m20240101_000004_create_stores_table;
mod m20240101_000005_create_products_table;
mod m20240101_000006_create_invoices_table;
mod m20240101_000007_create_products_invoices_table;

pub(crate) use m20240101_000001_create_users_table::Users;
pub(crate) use m20240101_000003_create_wallets_table::Wallets;
pub(crate) use m20240101_000004_create_stores_table::Stores;
pub(crate) use m20240101_000005_create_products_table::Products;
pub(crate) use m20240101_000006_create_invoices_table::Invoices;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_tokens_table::Migration),
            Box::new(m20240101_000003_create_wallets_table::Migration),
            Box::new(m20240101_000004_create_stores_table::Migration),
            Box::new(m20240101_000005_create_products_table::Migration),
            Box::new(m20240101_000006_create_invoices_table::Migration),
            Box::new(m20240101_000007_create_products_invoices_table::Migration),
        ]
    }
}
