//! Docprobe Domain - Core validation types
//!
//! This crate defines the domain model for the Docprobe response validator.
//! All types here are pure Rust with no I/O dependencies.

pub mod response;
pub mod validation;

pub use response::{Header, Headers, HttpResponse};
pub use validation::{ResponseComparator, ValidationError, ValidationErrorCode, ValidationOutcome};
