use axum::{routing::post, Json, Router};
use db::{Database, DatabaseConnection};
use migration::MigratorTrait;
use serde_json::{json, Value};

/// Receiving address the stub daemon hands out.
pub(crate) const STUB_ADDRESS: &str = "bc1qw4s6qyqvqqmxvm8qlz2xp9dmy9wtpyknqquy69";

/// Payment URI the stub daemon hands out.
pub(crate) const STUB_URI: &str =
    "bitcoin:bc1qw4s6qyqvqqmxvm8qlz2xp9dmy9wtpyknqquy69?amount=0.5";

pub(crate) async fn create_database() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("unable to create test database");

    migration::Migrator::up(&db, None)
        .await
        .expect("unable to run migrations");

    db
}

/// Start a wallet daemon stand-in on an ephemeral port and return its URL.
///
/// The stub answers every `add_request` call with [`STUB_ADDRESS`] and
/// [`STUB_URI`].
pub(crate) async fn spawn_wallet_daemon() -> String {
    let router = Router::new().route("/", post(add_request));

    let server = axum::Server::bind(&"127.0.0.1:0".parse().expect("unable to parse address"))
        .serve(router.into_make_service());

    let url = format!("http://{}", server.local_addr());

    tokio::spawn(server);

    url
}

async fn add_request(Json(request): Json<Value>) -> Json<Value> {
    Json(json!({
        "id": request["id"],
        "error": null,
        "result": {
            "address": STUB_ADDRESS,
            "URI": STUB_URI,
        }
    }))
}
