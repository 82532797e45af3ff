//! Tines MCP Server library.
//!
//! Provides the [`server::TinesMcpServer`] MCP server handler and the tool
//! parameter types. Used by the `tines-mcp` binary and available for
//! integration testing.

pub mod server;
pub mod tools;

pub use server::TinesMcpServer;
