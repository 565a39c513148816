//! Payment request issued for one or more products.
//!
//! The receiving address and payment URI are allocated by the wallet
//! daemon exactly once, when the invoice is created; nothing in the
//! update pathway touches them afterwards. Product associations live in
//! the join table and follow replace semantics on every update.

use sea_orm::entity::prelude::*;

/// Invoice model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Requested amount, 8 decimal places.
    #[sea_orm(column_type = "Decimal(Some((16, 8)))")]
    pub amount: Decimal,

    pub status: String,
    pub date: TimeDateTime,

    /// Receiving address derived by the wallet daemon.
    pub bitcoin_address: String,

    /// Payment URI handed out to the payer.
    pub bitcoin_url: String,
}

/// Invoice model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_invoice::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_invoice::Relation::Invoice.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
