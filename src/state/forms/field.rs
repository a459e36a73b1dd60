//! Registration form field descriptors

use serde::{Deserialize, Serialize};

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Digits only (the age input)
    Numeric,
    /// Boolean toggle
    Checkbox,
}

/// Identifies one field of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    Age,
    Nickname,
    Terms,
}

impl FieldId {
    /// All fields in the order they are rendered and focused
    pub const ALL: [FieldId; 6] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Age,
        FieldId::Nickname,
        FieldId::Terms,
    ];

    /// Name used in the submitted payload
    pub fn name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Age => "age",
            Self::Nickname => "nickname",
            Self::Terms => "terms",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Age => FieldKind::Numeric,
            Self::Terms => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    /// Whether the field must be filled before submission
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Nickname)
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FullName => "John Doe...",
            Self::Email => "john@email.com...",
            Self::Phone => "612 345 678...",
            Self::Age => "18...",
            Self::Nickname => "johndoefc...",
            Self::Terms => "",
        }
    }

    /// Position of the field in [`FieldId::ALL`]
    pub fn index(self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::Age => 3,
            Self::Nickname => 4,
            Self::Terms => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A value merged into the form by [`crate::state::RegistrationWorkflow::update_field`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Toggle(value)
    }
}

/// Lowest age the age input suggests
pub const MIN_AGE: u8 = 14;
/// Highest age the age input suggests
pub const MAX_AGE: u8 = 99;
/// The age input never holds more digits than this
const MAX_AGE_DIGITS: usize = 2;

/// Apply one typed character to an age value, keeping it numeric
///
/// Returns `false` when the character was refused.
pub fn push_age_digit(age: &mut String, c: char) -> bool {
    if !c.is_ascii_digit() || age.len() >= MAX_AGE_DIGITS {
        return false;
    }
    age.push(c);
    true
}

/// Whether an age value lies outside the suggested bounds
///
/// Purely advisory: the value is still accepted and submitted.
pub fn age_out_of_range(age: &str) -> bool {
    match age.parse::<u8>() {
        Ok(n) => !(MIN_AGE..=MAX_AGE).contains(&n),
        Err(_) => !age.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_id {
        use super::*;

        #[test]
        fn test_all_is_in_index_order() {
            for (i, id) in FieldId::ALL.iter().enumerate() {
                assert_eq!(id.index(), i);
                assert_eq!(FieldId::from_index(i), Some(*id));
            }
            assert_eq!(FieldId::from_index(6), None);
        }

        #[test]
        fn test_only_nickname_is_optional() {
            let optional: Vec<_> = FieldId::ALL
                .iter()
                .filter(|id| !id.is_required())
                .collect();
            assert_eq!(optional, vec![&FieldId::Nickname]);
        }

        #[test]
        fn test_kinds() {
            assert_eq!(FieldId::Age.kind(), FieldKind::Numeric);
            assert_eq!(FieldId::Terms.kind(), FieldKind::Checkbox);
            assert_eq!(FieldId::Email.kind(), FieldKind::Text);
        }

        #[test]
        fn test_wire_names_match_serde() {
            for id in FieldId::ALL {
                let json = serde_json::to_string(&id).unwrap();
                assert_eq!(json, format!("\"{}\"", id.name()));
            }
        }
    }

    mod age_input {
        use super::*;

        #[test]
        fn test_refuses_non_digits() {
            let mut age = String::new();
            assert!(!push_age_digit(&mut age, 'a'));
            assert!(!push_age_digit(&mut age, '-'));
            assert!(age.is_empty());
        }

        #[test]
        fn test_caps_length() {
            let mut age = String::new();
            assert!(push_age_digit(&mut age, '2'));
            assert!(push_age_digit(&mut age, '5'));
            assert!(!push_age_digit(&mut age, '0'));
            assert_eq!(age, "25");
        }

        #[test]
        fn test_range_is_advisory() {
            assert!(!age_out_of_range(""));
            assert!(!age_out_of_range("14"));
            assert!(!age_out_of_range("99"));
            assert!(age_out_of_range("13"));
            assert!(age_out_of_range("5"));
        }
    }
}
