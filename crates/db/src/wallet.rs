//! Crypto wallet.
//!
//! A wallet is identified by its extended public key; the wallet daemon
//! derives a fresh receiving address from it for every payment request.
//! The balance column is a cache refreshed from the daemon, not a source
//! of truth.

use sea_orm::entity::prelude::*;

/// Wallet model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Unique human-readable wallet name.
    pub name: String,

    /// Extended public key the daemon derives addresses from.
    pub xpub: String,

    /// Cached on-chain balance, 8 decimal places.
    #[sea_orm(column_type = "Decimal(Some((16, 8)))")]
    pub balance: Decimal,

    /// Owning user, detached when the user is deleted.
    pub user_id: Option<i64>,
}

/// Wallet model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,

    #[sea_orm(has_many = "super::store::Entity")]
    Stores,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
