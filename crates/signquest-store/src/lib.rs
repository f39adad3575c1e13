//! signquest-store: Profile store integrations.
//!
//! Implements the `ProfileStore` trait over HTTP, plus an offline store for
//! local play and a mock for tests, and loads the game configuration that
//! chooses between them.

pub mod config;
pub mod http;
pub mod mock;
pub mod offline;

pub use config::{create_store, load_config, SignquestConfig, StoreConfig};
pub use signquest_core::error::StoreError;
