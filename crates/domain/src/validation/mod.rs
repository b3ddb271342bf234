//! Response validation types and comparison logic.

mod comparator;
mod error;

pub use comparator::ResponseComparator;
pub use error::{ValidationError, ValidationErrorCode, ValidationOutcome};
