//! # tines-client
//!
//! Typed client for the Tines REST API.
//!
//! The crate is a thin request-translation layer: configuration is read once
//! at startup, every operation maps to a single authenticated HTTP call, and
//! responses are returned as raw JSON documents owned by the remote platform.
//!
//! Structure:
//! - [`config`] — immutable configuration loaded from the environment
//! - [`error`] — the client error taxonomy
//! - [`transport`] — the [`ApiTransport`] seam and its reqwest implementation
//! - [`types`] — typed request shaping (action kinds, query builders)
//! - [`client`] — the [`TinesClient`] operation surface

pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::{filter_stories_by_name, TinesClient};
pub use config::TinesConfig;
pub use error::{ClientError, ClientResult};
pub use transport::{ApiTransport, HttpTransport};

/// HTTP verb type used across the transport seam.
pub use reqwest::Method;
