#![forbid(unsafe_code)]

pub mod keyspace;
pub mod provider;
pub mod scope;
pub mod settlement;
