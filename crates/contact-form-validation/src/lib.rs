//! Contact Form Validation
//!
//! Pure validation predicates for the contact form fields. Each predicate
//! inspects a single value in isolation; error messages are assembled by the
//! form controller, not here.

pub mod email;
pub mod string;

// Re-export all validators
pub use email::*;
pub use string::*;
