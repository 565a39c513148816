//! Sellable item belonging to a store.

use sea_orm::entity::prelude::*;

/// Product model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Unit price, 8 decimal places.
    #[sea_orm(column_type = "Decimal(Some((16, 8)))")]
    pub amount: Decimal,

    /// Stock on hand.
    #[sea_orm(column_type = "Decimal(Some((16, 8)))")]
    pub quantity: Decimal,

    pub title: String,
    pub date: TimeDateTime,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image: Option<String>,
    pub store_id: Option<i64>,
    pub status: String,
}

/// Product model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::StoreId",
        to = "super::store::Column::Id"
    )]
    Store,
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_invoice::Relation::Invoice.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_invoice::Relation::Product.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
