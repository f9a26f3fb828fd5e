//! PayPal order-completion reconciliation.
//!
//! Given a local payment record and a previously authorized access token, this
//! crate synchronizes the provider's order total with any last-moment local
//! changes, captures the remote order, fetches the authoritative remote
//! snapshot, and writes a normalized status plus shipping address back onto
//! the local payment and order.
//!
//! Token acquisition, persistence, and the request-dispatch framework that
//! invokes the flow are collaborator boundaries (see [`providers`]), not part
//! of this crate.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod clients;
pub mod config;
pub mod errors;
pub mod events;
pub mod models;
pub mod providers;
pub mod services;
