//! API token issuance.

use db::{token, user, DatabaseConnection, DbErr, EntityTrait};

/// Issue a fresh API token for the provided user.
///
/// The key relies on its entropy for uniqueness; no lookup against
/// existing tokens is performed.
pub async fn issue(db: &DatabaseConnection, user: &user::Model) -> Result<token::Model, DbErr> {
    let (active_model, _) = token::generate_token(user.id);

    token::Entity::insert(active_model)
        .exec_with_returning(db)
        .await
}
