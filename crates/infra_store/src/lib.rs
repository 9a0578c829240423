//! Flat-File Persistence Layer
//!
//! This crate provides durable storage for the fund registry: the full
//! record set lives in one JSON object on disk, loaded into memory at
//! startup and rewritten wholesale after every mutation.
//!
//! # Ownership
//!
//! `FundStore` is the single owner of both the in-memory mapping and the
//! backing file. Handlers receive a shared reference through application
//! state; nothing else touches the file.
//!
//! # Durability model
//!
//! There are no transactions and no write-ahead log. Every mutation
//! serializes the whole mapping and atomically replaces the file before
//! the call returns, so the file always mirrors the last successful
//! mutation.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{FundStore, FUND_FILE};
