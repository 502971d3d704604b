//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Rich domain types and the pure logic over them
//! - `wire.rs` — Raw serde structs matching the feed
//! - `convert.rs` — `TryFrom` conversions with validation
//! - `state.rs` — App-owned state containers with update methods
//! - `client.rs` — Sub-client with feed-backed methods

pub mod price;
pub mod swap;
pub mod token;
