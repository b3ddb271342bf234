//! Ports (interfaces) implemented by the infrastructure layer.

mod exchange;

pub use exchange::{Exchange, ExchangeOutcome, WireResponse};
