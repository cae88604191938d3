// File: src/field.rs
// Purpose: Field identifiers, wire names, and display labels

use serde::{Deserialize, Serialize};

/// One named text input tracked by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "lastName")]
    LastName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "message")]
    Message,
}

impl Field {
    /// Fields in the fixed order used for error listing.
    ///
    /// Message carries no validation rule, so it never appears here.
    pub const ORDERED: [Field; 3] = [Field::FirstName, Field::LastName, Field::Email];

    /// All fields, in declaration order
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// Wire name, as used in input `name` attributes and error messages
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Human-readable label for the associated `<label>` element
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Look up a field by its wire name
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(Field::FirstName.name(), "firstName");
        assert_eq!(Field::LastName.name(), "lastName");
        assert_eq!(Field::Email.name(), "email");
        assert_eq!(Field::Message.name(), "message");
    }

    #[test]
    fn test_from_name_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("phone"), None);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Field::FirstName).unwrap();
        assert_eq!(json, "\"firstName\"");

        let field: Field = serde_json::from_str("\"lastName\"").unwrap();
        assert_eq!(field, Field::LastName);
    }
}
