//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types
//! - `wire.rs`: Raw serde structs matching venue responses
//! - `convert.rs`: `From` conversions wire → domain
//! - `state.rs`: State containers with update methods (for feed-driven data)
//! - `client.rs`: Sub-client with HTTP methods

pub mod order;
pub mod orderbook;
pub mod quote;
pub mod venue;
