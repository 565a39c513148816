//! Wallet daemon RPC utilities.
//!
//! This module provides a client for the external wallet daemon, which owns
//! address derivation and blockchain watching for every extended public key
//! registered with it.
//!
//! The daemon speaks JSON-RPC 2.0 over HTTP with basic authentication, and
//! every call carries the xpub it should operate on, so a single daemon
//! instance serves any number of wallets.

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use derive_more::{Display, Error, From};

use crate::config;

/// Wallet daemon RPC errors.
#[derive(Debug, Display, Error, From)]
pub enum RpcError {
    /// HTTP-level failure: daemon unreachable, auth rejected, malformed body.
    Transport(reqwest::Error),

    /// The daemon processed the request and returned an error object.
    #[display(fmt = "wallet daemon error {}: {}", "_0.code", "_0.message")]
    Call(#[error(not(source))] RpcCallError),

    #[display(fmt = "wallet daemon returned neither result nor error")]
    MalformedResponse,
}

/// Error object of a JSON-RPC response.
#[derive(Debug, Deserialize)]
pub struct RpcCallError {
    pub code: i64,
    pub message: String,
}

/// Payment request allocated by the wallet daemon.
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    /// Fresh receiving address derived from the xpub.
    pub address: String,

    /// Payment URI for the requested amount.
    #[serde(rename = "URI")]
    pub uri: String,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcCallError>,
}

/// Wallet daemon client.
pub struct WalletRpc {
    config: config::Wallet,
    client: Client,
}

impl WalletRpc {
    pub fn new(config: config::Wallet) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Allocate a payment request for `amount` against the provided xpub.
    ///
    /// The optional description ends up as the memo attached to the
    /// receiving address. One attempt is made per call.
    pub async fn add_request(
        &self,
        xpub: &str,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<PaymentRequest, RpcError> {
        let mut params = json!({
            "amount": amount,
            "xpub": xpub,
        });

        if let Some(memo) = description {
            params["memo"] = json!(memo);
        }

        let response: RpcResponse<PaymentRequest> = self
            .client
            .post(&self.config.url)
            .basic_auth(&self.config.user, Some(&self.config.password))
            .json(&json!({
                "id": 0,
                "jsonrpc": "2.0",
                "method": "add_request",
                "params": params,
            }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(RpcError::Call(error));
        }

        response.result.ok_or(RpcError::MalformedResponse)
    }
}
