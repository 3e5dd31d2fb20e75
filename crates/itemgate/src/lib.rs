//! itemgate - read, create, update and delete movie items through an HTTP
//! proxy in front of a key-value store.
//!
//! The pure request handling lives in `itemgate_core`. This crate wires it
//! to configuration, a storage backend and the HTTP or Lambda front ends.

pub mod app;
pub mod config;
pub mod handlers;
pub mod lambda_handler;
pub mod state;
pub mod storage;
