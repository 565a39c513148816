//! Invoice lifecycle.
//!
//! Creation resolves the funding wallet through the first product's store,
//! asks the wallet daemon for a receiving address, and only then writes the
//! invoice row. Updates synchronize the product associations with replace
//! semantics before touching any plain column.

use axum::http::StatusCode;
use axum_derive_error::ErrorResponse;
use common::rpc::{RpcError, WalletRpc};
use db::{
    invoice, product, product_invoice, store, wallet, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, Decimal, EntityTrait, OffsetDateTime, PrimitiveDateTime,
    QueryFilter, TransactionErrorExt, TransactionTrait,
};
use derive_more::{Display, Error, From};
use serde::Deserialize;

/// Invoice creation errors.
#[derive(ErrorResponse, Display, From, Error)]
pub enum InvoiceCreationError {
    DatabaseError(DbErr),

    /// The wallet daemon was unreachable or rejected the payment request.
    Rpc(RpcError),

    #[status(StatusCode::UNPROCESSABLE_ENTITY)]
    #[display(fmt = "Products list empty")]
    EmptyProducts,

    #[status(StatusCode::UNPROCESSABLE_ENTITY)]
    #[display(fmt = "Product {} doesn't exist!", _0)]
    #[from(ignore)]
    MissingProduct(#[error(not(source))] i64),

    #[status(StatusCode::UNPROCESSABLE_ENTITY)]
    #[display(fmt = "Store {} doesn't exist!", _0)]
    #[from(ignore)]
    MissingStore(#[error(not(source))] i64),

    #[status(StatusCode::UNPROCESSABLE_ENTITY)]
    #[display(fmt = "No wallet linked")]
    NoWalletLinked,
}

/// Invoice update errors.
#[derive(ErrorResponse, Display, From, Error)]
pub enum InvoiceUpdateError {
    DatabaseError(DbErr),

    #[status(StatusCode::UNPROCESSABLE_ENTITY)]
    #[display(fmt = "Invoice {} doesn't exist!", _0)]
    #[from(ignore)]
    MissingInvoice(#[error(not(source))] i64),
}

/// Invoice creation request.
#[derive(Debug, Deserialize)]
pub struct CreateInvoice {
    /// Requested amount.
    pub amount: Decimal,

    /// Initial invoice status.
    #[serde(default = "default_status")]
    pub status: String,

    /// Products covered by the invoice. The first one resolves the
    /// funding store and wallet.
    pub products: Vec<i64>,
}

fn default_status() -> String {
    String::from("active")
}

/// Invoice update request.
///
/// `products` distinguishes an absent field from an empty list: `None`
/// leaves the associations untouched, while `Some(vec![])` wipes them.
#[derive(Debug, Default, Deserialize)]
pub struct InvoiceUpdate {
    #[serde(default)]
    pub amount: Option<Decimal>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub products: Option<Vec<i64>>,
}

/// Create an invoice, returning it together with the xpub that funds it.
///
/// The store and wallet are resolved through the first product in the
/// request only; remaining products join the invoice without any store
/// membership check. The wallet daemon call is made exactly once, before
/// any row is written, so a failed call leaves no partial invoice behind.
pub async fn create(
    db: &DatabaseConnection,
    wallet_rpc: &WalletRpc,
    request: CreateInvoice,
) -> Result<(invoice::Model, String), InvoiceCreationError> {
    let Some(&first_product_id) = request.products.first() else {
        return Err(InvoiceCreationError::EmptyProducts);
    };

    let product = product::Entity::find_by_id(first_product_id)
        .one(db)
        .await?
        .ok_or(InvoiceCreationError::MissingProduct(first_product_id))?;

    let store = match product.store_id {
        Some(store_id) => store::Entity::find_by_id(store_id).one(db).await?,
        None => None,
    };

    let store = store.ok_or_else(|| {
        InvoiceCreationError::MissingStore(product.store_id.unwrap_or_default())
    })?;

    let wallet = match store.wallet_id {
        Some(wallet_id) => wallet::Entity::find_by_id(wallet_id).one(db).await?,
        None => None,
    };

    let wallet = wallet.ok_or(InvoiceCreationError::NoWalletLinked)?;

    let payment = wallet_rpc
        .add_request(&wallet.xpub, request.amount, product.description.as_deref())
        .await?;

    let now = OffsetDateTime::now_utc();
    let date = PrimitiveDateTime::new(now.date(), now.time());

    let xpub = wallet.xpub;

    db.transaction(|txn| {
        Box::pin(async move {
            let invoice = invoice::Entity::insert(invoice::ActiveModel {
                amount: ActiveValue::Set(request.amount),
                status: ActiveValue::Set(request.status),
                date: ActiveValue::Set(date),
                bitcoin_address: ActiveValue::Set(payment.address),
                bitcoin_url: ActiveValue::Set(payment.uri),
                ..Default::default()
            })
            .exec_with_returning(txn)
            .await?;

            replace_product_associations(txn, invoice.id, &request.products).await?;

            Ok((invoice, xpub))
        })
    })
    .await
    .into_raw_result()
}

/// Update an invoice's plain columns and, when requested, its product set.
///
/// Both steps commit together. The receiving address and payment URI are
/// never updatable.
pub async fn update(
    db: &DatabaseConnection,
    invoice_id: i64,
    update: InvoiceUpdate,
) -> Result<invoice::Model, InvoiceUpdateError> {
    db.transaction(|txn| {
        Box::pin(async move {
            let invoice = invoice::Entity::find_by_id(invoice_id)
                .one(txn)
                .await?
                .ok_or(InvoiceUpdateError::MissingInvoice(invoice_id))?;

            if let Some(products) = &update.products {
                replace_product_associations(txn, invoice.id, products).await?;
            }

            Ok(apply_column_update(txn, invoice, update).await?)
        })
    })
    .await
    .into_raw_result()
}

/// Replace every product association of an invoice with the provided set.
///
/// Partial additions are unsupported: callers resupply the complete
/// desired set, and an empty one drops all associations.
async fn replace_product_associations<C: ConnectionTrait>(
    conn: &C,
    invoice_id: i64,
    products: &[i64],
) -> Result<(), DbErr> {
    product_invoice::Entity::delete_many()
        .filter(product_invoice::Column::InvoiceId.eq(invoice_id))
        .exec(conn)
        .await?;

    for &product_id in products {
        product_invoice::Entity::insert(product_invoice::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            invoice_id: ActiveValue::Set(invoice_id),
        })
        .exec_without_returning(conn)
        .await?;
    }

    Ok(())
}

/// Write the remaining plain-column changes of an update request.
async fn apply_column_update<C: ConnectionTrait>(
    conn: &C,
    invoice: invoice::Model,
    update: InvoiceUpdate,
) -> Result<invoice::Model, DbErr> {
    let mut active: invoice::ActiveModel = invoice.clone().into();
    let mut changed = false;

    if let Some(amount) = update.amount {
        active.amount = ActiveValue::Set(amount);
        changed = true;
    }

    if let Some(status) = update.status {
        active.status = ActiveValue::Set(status);
        changed = true;
    }

    if !changed {
        return Ok(invoice);
    }

    invoice::Entity::update(active).exec(conn).await
}

#[cfg(test)]
mod tests {
    use common::{config, rpc::WalletRpc};
    use db::{
        invoice, product, product_invoice, store, wallet, ActiveValue, ColumnTrait,
        DatabaseConnection, Decimal, EntityTrait, ModelTrait, OffsetDateTime, PrimitiveDateTime,
        QueryFilter,
    };

    use crate::testing::{create_database, spawn_wallet_daemon, STUB_ADDRESS, STUB_URI};

    use super::{
        create, update, CreateInvoice, InvoiceCreationError, InvoiceUpdate, InvoiceUpdateError,
    };

    const XPUB: &str = "zpub6rFR7y4Q2AijBEqTUquhVz398htDFrtymD9xYYfG1m4wAcvPhXNfE3EfH1r1ADqtfSdVCToUG868RvUUkgDKf31mGDtKsAYz2oz2AGutZYs";

    fn now() -> PrimitiveDateTime {
        let now = OffsetDateTime::now_utc();

        PrimitiveDateTime::new(now.date(), now.time())
    }

    async fn wallet_rpc() -> WalletRpc {
        WalletRpc::new(config::Wallet {
            url: spawn_wallet_daemon().await,
            user: String::from("electrum"),
            password: String::from("electrumz"),
        })
    }

    async fn create_wallet(db: &DatabaseConnection) -> wallet::Model {
        wallet::Entity::insert(wallet::ActiveModel {
            name: ActiveValue::Set(String::from("shop wallet")),
            xpub: ActiveValue::Set(String::from(XPUB)),
            balance: ActiveValue::Set(Decimal::ZERO),
            user_id: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(db)
        .await
        .expect("unable to create wallet")
    }

    async fn create_store(db: &DatabaseConnection, wallet_id: Option<i64>) -> store::Model {
        store::Entity::insert(store::ActiveModel {
            name: ActiveValue::Set(String::from("mug shop")),
            domain: ActiveValue::Set(String::from("mugs.example.com")),
            email: ActiveValue::Set(String::from("sales@mugs.example.com")),
            wallet_id: ActiveValue::Set(wallet_id),
            ..Default::default()
        })
        .exec_with_returning(db)
        .await
        .expect("unable to create store")
    }

    async fn create_product(db: &DatabaseConnection, store_id: Option<i64>) -> product::Model {
        product::Entity::insert(product::ActiveModel {
            amount: ActiveValue::Set(Decimal::new(25, 2)),
            quantity: ActiveValue::Set(Decimal::new(10, 0)),
            title: ActiveValue::Set(String::from("enamel mug")),
            date: ActiveValue::Set(now()),
            description: ActiveValue::Set(Some(String::from("a mug for enamel enjoyers"))),
            store_id: ActiveValue::Set(store_id),
            status: ActiveValue::Set(String::from("active")),
            ..Default::default()
        })
        .exec_with_returning(db)
        .await
        .expect("unable to create product")
    }

    async fn create_catalog(db: &DatabaseConnection) -> product::Model {
        let wallet = create_wallet(db).await;
        let store = create_store(db, Some(wallet.id)).await;

        create_product(db, Some(store.id)).await
    }

    async fn invoice_count(db: &DatabaseConnection) -> usize {
        invoice::Entity::find()
            .all(db)
            .await
            .expect("unable to query invoices")
            .len()
    }

    async fn associated_product_ids(db: &DatabaseConnection, invoice_id: i64) -> Vec<i64> {
        let mut ids: Vec<i64> = product_invoice::Entity::find()
            .filter(product_invoice::Column::InvoiceId.eq(invoice_id))
            .all(db)
            .await
            .expect("unable to query join rows")
            .into_iter()
            .map(|row| row.product_id)
            .collect();

        ids.sort_unstable();

        ids
    }

    #[tokio::test]
    async fn empty_product_list_is_rejected() {
        let db = create_database().await;

        let error = create(
            &db,
            &wallet_rpc().await,
            CreateInvoice {
                amount: Decimal::new(5, 1),
                status: String::from("active"),
                products: vec![],
            },
        )
        .await
        .expect_err("invoice without products was created");

        assert!(matches!(error, InvoiceCreationError::EmptyProducts));
        assert_eq!(error.to_string(), "Products list empty");
        assert_eq!(invoice_count(&db).await, 0);
    }

    #[tokio::test]
    async fn unknown_product_is_rejected() {
        let db = create_database().await;

        let error = create(
            &db,
            &wallet_rpc().await,
            CreateInvoice {
                amount: Decimal::new(5, 1),
                status: String::from("active"),
                products: vec![42],
            },
        )
        .await
        .expect_err("invoice for an unknown product was created");

        assert!(matches!(error, InvoiceCreationError::MissingProduct(42)));
        assert_eq!(error.to_string(), "Product 42 doesn't exist!");
        assert_eq!(invoice_count(&db).await, 0);
    }

    #[tokio::test]
    async fn product_without_store_is_rejected() {
        let db = create_database().await;

        let product = create_product(&db, None).await;

        let error = create(
            &db,
            &wallet_rpc().await,
            CreateInvoice {
                amount: Decimal::new(5, 1),
                status: String::from("active"),
                products: vec![product.id],
            },
        )
        .await
        .expect_err("invoice for a detached product was created");

        assert!(matches!(error, InvoiceCreationError::MissingStore(_)));
        assert_eq!(invoice_count(&db).await, 0);
    }

    #[tokio::test]
    async fn store_without_wallet_is_rejected() {
        let db = create_database().await;

        let store = create_store(&db, None).await;
        let product = create_product(&db, Some(store.id)).await;

        let error = create(
            &db,
            &wallet_rpc().await,
            CreateInvoice {
                amount: Decimal::new(5, 1),
                status: String::from("active"),
                products: vec![product.id],
            },
        )
        .await
        .expect_err("invoice without a funding wallet was created");

        assert!(matches!(error, InvoiceCreationError::NoWalletLinked));
        assert_eq!(error.to_string(), "No wallet linked");
        assert_eq!(invoice_count(&db).await, 0);
    }

    #[tokio::test]
    async fn successful_creation_stores_daemon_values() {
        let db = create_database().await;

        let product = create_catalog(&db).await;

        let (invoice, xpub) = create(
            &db,
            &wallet_rpc().await,
            CreateInvoice {
                amount: Decimal::new(5, 1),
                status: String::from("active"),
                products: vec![product.id],
            },
        )
        .await
        .expect("unable to create invoice");

        assert_eq!(xpub, XPUB);
        assert_eq!(invoice.amount, Decimal::new(5, 1));
        assert_eq!(invoice.status, "active");
        assert_eq!(invoice.bitcoin_address, STUB_ADDRESS);
        assert_eq!(invoice.bitcoin_url, STUB_URI);
        assert_eq!(invoice_count(&db).await, 1);
        assert_eq!(associated_product_ids(&db, invoice.id).await, vec![product.id]);

        let related = invoice
            .find_related(product::Entity)
            .all(&db)
            .await
            .expect("unable to query related products");

        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, product.id);
    }

    #[tokio::test]
    async fn update_replaces_product_set() {
        let db = create_database().await;

        let first = create_catalog(&db).await;
        let second = create_product(&db, first.store_id).await;

        let (invoice, _) = create(
            &db,
            &wallet_rpc().await,
            CreateInvoice {
                amount: Decimal::new(5, 1),
                status: String::from("active"),
                products: vec![first.id, second.id],
            },
        )
        .await
        .expect("unable to create invoice");

        assert_eq!(
            associated_product_ids(&db, invoice.id).await,
            vec![first.id, second.id]
        );

        let updated = update(
            &db,
            invoice.id,
            InvoiceUpdate {
                status: Some(String::from("paid")),
                products: Some(vec![second.id]),
                ..Default::default()
            },
        )
        .await
        .expect("unable to update invoice");

        assert_eq!(updated.status, "paid");
        assert_eq!(updated.bitcoin_address, invoice.bitcoin_address);
        assert_eq!(associated_product_ids(&db, invoice.id).await, vec![second.id]);
    }

    #[tokio::test]
    async fn update_with_empty_set_wipes_associations() {
        let db = create_database().await;

        let first = create_catalog(&db).await;
        let second = create_product(&db, first.store_id).await;

        let (invoice, _) = create(
            &db,
            &wallet_rpc().await,
            CreateInvoice {
                amount: Decimal::new(5, 1),
                status: String::from("active"),
                products: vec![first.id, second.id],
            },
        )
        .await
        .expect("unable to create invoice");

        update(
            &db,
            invoice.id,
            InvoiceUpdate {
                products: Some(vec![]),
                ..Default::default()
            },
        )
        .await
        .expect("unable to update invoice");

        assert_eq!(associated_product_ids(&db, invoice.id).await, Vec::<i64>::new());
    }

    #[tokio::test]
    async fn update_without_products_keeps_associations() {
        let db = create_database().await;

        let first = create_catalog(&db).await;
        let second = create_product(&db, first.store_id).await;

        let (invoice, _) = create(
            &db,
            &wallet_rpc().await,
            CreateInvoice {
                amount: Decimal::new(5, 1),
                status: String::from("active"),
                products: vec![first.id, second.id],
            },
        )
        .await
        .expect("unable to create invoice");

        let updated = update(
            &db,
            invoice.id,
            InvoiceUpdate {
                amount: Some(Decimal::new(75, 2)),
                ..Default::default()
            },
        )
        .await
        .expect("unable to update invoice");

        assert_eq!(updated.amount, Decimal::new(75, 2));
        assert_eq!(
            associated_product_ids(&db, invoice.id).await,
            vec![first.id, second.id]
        );
    }

    #[tokio::test]
    async fn updating_unknown_invoice_is_rejected() {
        let db = create_database().await;

        let error = update(&db, 42, InvoiceUpdate::default())
            .await
            .expect_err("unknown invoice was updated");

        assert!(matches!(error, InvoiceUpdateError::MissingInvoice(42)));
        assert_eq!(error.to_string(), "Invoice 42 doesn't exist!");
    }
}
