// File: src/controller.rs
// Purpose: Form state ownership, rule table, and submit gating

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use contact_form_validation::{has_min_length, is_present, is_valid_email};

use crate::errors::{FieldError, ValidationErrors};
use crate::field::Field;

/// Minimum character count for the first-name field
const FIRST_NAME_MIN_LENGTH: usize = 5;

/// Snapshot of field values captured at the moment of an error-free submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

/// Form field state, owned exclusively by [`FormController`]
///
/// Error slots exist only for fields that have been evaluated: a field is
/// evaluated when it changes through [`FormController::set_field`], and every
/// rule-bearing field is evaluated on submit. Untouched fields show no error
/// even when empty.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    first_name: String,
    last_name: String,
    email: String,
    message: String,
    errors: HashMap<Field, String>,
    submitted: Option<SubmittedContact>,
}

impl FormState {
    /// Current value of a field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Error message for a field, if its slot holds one
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(|s| s.as_str())
    }

    /// Check if there are any visible errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Visible errors in the fixed listing order: firstName, lastName, email
    pub fn errors(&self) -> ValidationErrors {
        let errors = Field::ORDERED
            .into_iter()
            .filter_map(|field| {
                self.errors
                    .get(&field)
                    .map(|msg| FieldError::new(field, msg.clone()))
            })
            .collect();
        ValidationErrors::new(errors)
    }

    /// The most recent error-free submission, if any
    pub fn submitted(&self) -> Option<&SubmittedContact> {
        self.submitted.as_ref()
    }
}

/// Owns [`FormState`] and enforces the validation contract
///
/// One controller per mounted form; state is never process-wide, so multiple
/// form instances stay independent. The rendering layer reads back through
/// [`FormController::state`] after each mutation.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot for the rendering layer
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Update one field and re-evaluate its rule
    ///
    /// Inserts the field's error slot when the new value violates its rule,
    /// removes it when the value now satisfies the rule. No other field's
    /// slot is affected.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        trace!(field = field.name(), len = value.len(), "field updated");

        match field {
            Field::FirstName => self.state.first_name = value,
            Field::LastName => self.state.last_name = value,
            Field::Email => self.state.email = value,
            Field::Message => self.state.message = value,
        }

        self.evaluate(field);
    }

    /// Validate every rule-bearing field and capture a snapshot when clean
    ///
    /// On failure the previous snapshot is left untouched, and every error
    /// from the re-evaluation is visible at once.
    pub fn submit(&mut self) -> Result<SubmittedContact, ValidationErrors> {
        for field in Field::ORDERED {
            self.evaluate(field);
        }

        let errors = self.state.errors();
        if errors.has_errors() {
            debug!(error_count = errors.len(), "submit rejected");
            return Err(errors);
        }

        let contact = SubmittedContact {
            first_name: self.state.first_name.clone(),
            last_name: self.state.last_name.clone(),
            email: self.state.email.clone(),
            message: self.state.message.clone(),
        };
        self.state.submitted = Some(contact.clone());
        info!("submit accepted");
        Ok(contact)
    }

    /// Clear all field values, error slots, and the submitted snapshot
    pub fn reset(&mut self) {
        self.state = FormState::default();
    }

    /// Re-run one field's rule and update its error slot
    fn evaluate(&mut self, field: Field) {
        match Self::check(field, self.state.value(field)) {
            Some(message) => {
                self.state.errors.insert(field, message);
            }
            None => {
                self.state.errors.remove(&field);
            }
        }
    }

    /// The rule table. At most one message per field; the required check
    /// takes precedence over length and format checks.
    fn check(field: Field, value: &str) -> Option<String> {
        match field {
            Field::FirstName | Field::LastName | Field::Email if !is_present(value) => {
                Some(format!("{} is a required field", field.name()))
            }
            Field::FirstName if !has_min_length(value, FIRST_NAME_MIN_LENGTH) => Some(format!(
                "{} must have at least {} characters",
                field.name(),
                FIRST_NAME_MIN_LENGTH
            )),
            Field::Email if !is_valid_email(value) => {
                Some(format!("{} must be a valid email address", field.name()))
            }
            _ => None,
        }
    }
}
