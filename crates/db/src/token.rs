//! User API token.
//!
//! An API token is passed to the server to identify the user that
//! executes a request.
//!
//! Token keys are [`KEY_LENGTH`] hexadecimal characters derived from 20
//! random bytes; uniqueness rests on the key space alone and is never
//! checked against existing rows.

use rand::RngCore;
use sea_orm::{entity::prelude::*, ActiveValue};
use time::{OffsetDateTime, PrimitiveDateTime};

pub const KEY_LENGTH: usize = 40;

/// API token model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tokens")]
pub struct Model {
    /// Unique token identifier.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Owning user identifier.
    pub user_id: i64,

    /// Token key string value.
    pub key: String,

    /// Token creation timestamp.
    pub created: TimeDateTime,
}

/// API token model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Generate a new API token for the provided user identifier.
///
/// This function returns both an [`ActiveModel`] of a token and its
/// key string value.
///
/// ## Example
///
/// ```
/// use db::token::{KEY_LENGTH, generate_token};
///
/// let (_, key) = generate_token(1);
/// assert_eq!(key.len(), KEY_LENGTH);
/// assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_token(user_id: i64) -> (ActiveModel, String) {
    let mut bytes = [0u8; KEY_LENGTH / 2];
    rand::thread_rng().fill_bytes(&mut bytes);
    let key = hex::encode(bytes);

    let now = OffsetDateTime::now_utc();

    let created = PrimitiveDateTime::new(now.date(), now.time());

    (
        ActiveModel {
            user_id: ActiveValue::Set(user_id),
            key: ActiveValue::Set(key.clone()),
            created: ActiveValue::Set(created),
            ..Default::default()
        },
        key,
    )
}
