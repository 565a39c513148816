pub mod invoice;
pub mod product;
pub mod product_invoice;
pub mod store;
pub mod token;
pub mod user;
pub mod wallet;

pub use sea_orm::{
    prelude::Decimal, sea_query, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    Database, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, TransactionError, TransactionTrait,
};
pub use time::{OffsetDateTime, PrimitiveDateTime};

pub trait TransactionErrorExt<T, E> {
    /// Convert transaction [`Result`] into a [`Result`] with
    /// a custom error.
    fn into_raw_result(self) -> Result<T, E>;
}

impl<T, E> TransactionErrorExt<T, E> for Result<T, TransactionError<E>>
where
    E: std::error::Error + From<DbErr>,
{
    fn into_raw_result(self) -> Result<T, E> {
        match self {
            Ok(val) => Ok(val),
            Err(TransactionError::Connection(err)) => Err(err.into()),
            Err(TransactionError::Transaction(err)) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbErr, TransactionError};

    use crate::TransactionErrorExt;

    #[test]
    fn transaction_errors_are_flattened() {
        let connection: Result<(), _> = Err(TransactionError::Connection::<DbErr>(
            DbErr::Custom(String::from("connection lost")),
        ));
        let transaction: Result<(), _> = Err(TransactionError::Transaction(DbErr::Custom(
            String::from("constraint violated"),
        )));

        assert!(matches!(
            connection.into_raw_result(),
            Err(DbErr::Custom(msg)) if msg == "connection lost"
        ));
        assert!(matches!(
            transaction.into_raw_result(),
            Err(DbErr::Custom(msg)) if msg == "constraint violated"
        ));
    }
}
