//! Functional core for itemgate.
//!
//! Everything in this crate is pure except for the calls made through the
//! [`storage::ItemStore`] trait, which the imperative shell provides.

pub mod gateway;
pub mod item;
pub mod proxy;
pub mod storage;
