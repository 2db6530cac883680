//! forge_client - client SDK and CLI for the Forge rendering service.

pub mod cli;
pub mod client;
pub mod error;

pub use client::ForgeClient;
pub use error::{ClientError, Result};
