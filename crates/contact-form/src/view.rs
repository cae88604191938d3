// File: src/view.rs
// Purpose: Maud rendering of the form, error annotations, and results region

use maud::{html, Markup};

use crate::controller::{FormController, FormState, SubmittedContact};
use crate::field::Field;

/// Render the full contact form from the controller's current state
///
/// Output contract consumed by the behavioral tests:
/// - a header containing "Contact Form"
/// - one labeled input per field, `label[for]` matching the input id
/// - one `data-testid="error"` annotation per visible error
/// - after a successful submit, a results region with one display element
///   per submitted value (the message element only when non-empty)
pub fn contact_form(form: &FormController) -> Markup {
    let state = form.state();
    html! {
        h1 { "Contact Form" }
        form {
            (text_input(state, Field::FirstName))
            (text_input(state, Field::LastName))
            (text_input(state, Field::Email))
            div {
                label for=(Field::Message.name()) { (Field::Message.label()) }
                textarea id=(Field::Message.name()) name=(Field::Message.name()) {
                    (state.value(Field::Message))
                }
            }
            button type="submit" { "Submit" }
        }
        @if let Some(contact) = state.submitted() {
            (submission_result(contact))
        }
    }
}

/// One labeled input with its error annotation, if any
fn text_input(state: &FormState, field: Field) -> Markup {
    html! {
        div {
            label for=(field.name()) { (field.label()) }
            input
                id=(field.name())
                name=(field.name())
                type=(input_type(field))
                value=(state.value(field));
            @if let Some(message) = state.error(field) {
                p data-testid="error" { (message) }
            }
        }
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        _ => "text",
    }
}

/// The results region shown after an error-free submit
fn submission_result(contact: &SubmittedContact) -> Markup {
    html! {
        section {
            h2 { "You Submitted:" }
            p data-testid="firstnameDisplay" {
                "First Name: " (contact.first_name)
            }
            p data-testid="lastnameDisplay" {
                "Last Name: " (contact.last_name)
            }
            p data-testid="emailDisplay" {
                "Email: " (contact.email)
            }
            @if !contact.message.is_empty() {
                p data-testid="messageDisplay" {
                    "Message: " (contact.message)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_associated_with_inputs() {
        let form = FormController::new();
        let html = contact_form(&form).into_string();

        for field in Field::ALL {
            assert!(html.contains(&format!("for=\"{}\"", field.name())));
            assert!(html.contains(&format!("id=\"{}\"", field.name())));
        }
    }

    #[test]
    fn test_inputs_echo_current_values() {
        let mut form = FormController::new();
        form.set_field(Field::FirstName, "zachary");
        let html = contact_form(&form).into_string();

        assert!(html.contains("value=\"zachary\""));
    }

    #[test]
    fn test_field_values_are_escaped() {
        let mut form = FormController::new();
        form.set_field(Field::FirstName, "<script>alert(1)</script>");
        let html = contact_form(&form).into_string();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_email_input_uses_email_type() {
        let form = FormController::new();
        let html = contact_form(&form).into_string();

        assert!(html.contains("type=\"email\""));
    }
}
