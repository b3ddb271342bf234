//! Port adapters backed by third-party clients.

mod reqwest_exchange;

pub use reqwest_exchange::{ReqwestExchange, TransportError};
