//! Fund Registry Domain
//!
//! This crate defines the investment fund entity managed by the registry,
//! its strongly-typed identifier, and the projection used both for HTTP
//! responses and for the persisted record set.
//!
//! # Key Concepts
//!
//! - **Fund**: an investment fund's metadata plus its performance figure
//! - **FundId**: server-generated UUID identifying a fund for its lifetime
//! - **Projection**: the seven-field wire shape shared by the API and the
//!   backing file, kept separate from the entity so the two can evolve
//!   independently

pub mod fund;
pub mod identifier;
pub mod projection;

pub use fund::Fund;
pub use identifier::FundId;
pub use projection::FundProjection;
