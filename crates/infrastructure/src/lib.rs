//! Docprobe Infrastructure - Transport adapters
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer.

pub mod adapters;

pub use adapters::{ReqwestExchange, TransportError};
