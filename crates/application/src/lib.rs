//! Docprobe Application - Validation use cases and ports
//!
//! This crate orchestrates the domain model: capturing a normalized
//! response from a transport attempt and comparing it against the
//! documented expectation. Transport implementations live in the
//! infrastructure layer behind the [`ports::Exchange`] port.

pub mod ports;
pub mod use_cases;

pub use ports::{Exchange, ExchangeOutcome, WireResponse};
pub use use_cases::{CaptureResponse, ValidateResponse, ValidationReport};
