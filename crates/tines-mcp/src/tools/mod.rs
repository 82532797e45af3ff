//! MCP tool implementations and parameter types.
//!
//! Parameter structs derive `Deserialize + JsonSchema` for MCP tool
//! registration; the per-domain modules hold async functions taking the
//! shared [`tines_client::TinesClient`] and returning JSON strings.

pub mod actions;
pub mod helpers;
pub mod notes;
pub mod params;
pub mod stories;

pub use params::*;
