//! Merchant storefront.
//!
//! A store links the products it sells to the wallet that funds its
//! invoices and carries the outbound email settings used for customer
//! notifications. Stores survive the deletion of their wallet with the
//! reference nulled.

use sea_orm::entity::prelude::*;

/// Store model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub domain: String,
    pub template: Option<String>,
    pub email: String,
    pub wallet_id: Option<i64>,
    pub email_host: Option<String>,
    pub email_password: Option<String>,
    pub email_port: Option<i32>,
    pub email_use_ssl: Option<bool>,
    pub email_user: Option<String>,
}

/// Store model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wallet::Entity",
        from = "Column::WalletId",
        to = "super::wallet::Column::Id"
    )]
    Wallet,

    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::wallet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wallet.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
