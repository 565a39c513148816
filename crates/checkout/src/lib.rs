//! Checkout operations of the storefront: API token issuance and the
//! invoice lifecycle backed by the external wallet daemon.
//!
//! This crate owns no HTTP routes. Every operation returns an error type
//! that renders into a response with the appropriate status code, so the
//! surrounding web framework only needs to bubble it up.

pub mod invoices;
pub mod tokens;

#[cfg(test)]
mod testing;
