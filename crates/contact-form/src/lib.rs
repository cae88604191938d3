// Contact Form - validation-and-state core with Maud rendering
// Owns field state, runs the per-field rule table, and renders the view

pub mod controller;
pub mod errors;
pub mod field;
pub mod view;

// Re-export Maud for callers that compose the form into a page
pub use maud::{html as maud, Markup, DOCTYPE};

// Re-export core types
pub use controller::{FormController, FormState, SubmittedContact};
pub use errors::{FieldError, ValidationErrors};
pub use field::Field;
