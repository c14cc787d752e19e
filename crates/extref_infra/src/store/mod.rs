//! Durable storage backends for the token-store port.

pub mod file;

pub use file::FileTokenStore;
