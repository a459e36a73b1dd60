//! Registration form record, validation and focus handling

use super::field::{FieldId, FieldValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Values entered by the registrant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub nickname: String,
    pub terms: bool,
}

/// Required fields were missing at submit time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", names(.missing))]
pub struct ValidationError {
    pub missing: Vec<FieldId>,
}

fn names(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FormState {
    /// Text content of a text field (empty for the terms checkbox)
    pub fn text(&self, id: FieldId) -> &str {
        match id {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Age => &self.age,
            FieldId::Nickname => &self.nickname,
            FieldId::Terms => "",
        }
    }

    /// Merge a single field value
    ///
    /// A toggle sent to a text field (or text sent to terms) is ignored.
    pub fn set(&mut self, id: FieldId, value: FieldValue) {
        match (id, value) {
            (FieldId::Terms, FieldValue::Toggle(checked)) => self.terms = checked,
            (FieldId::Terms, FieldValue::Text(_)) => {
                tracing::warn!("ignoring text value for terms field");
            }
            (_, FieldValue::Toggle(_)) => {
                tracing::warn!("ignoring toggle value for {} field", id.name());
            }
            (FieldId::FullName, FieldValue::Text(s)) => self.full_name = s,
            (FieldId::Email, FieldValue::Text(s)) => self.email = s,
            (FieldId::Phone, FieldValue::Text(s)) => self.phone = s,
            (FieldId::Age, FieldValue::Text(s)) => self.age = s,
            (FieldId::Nickname, FieldValue::Text(s)) => self.nickname = s,
        }
    }

    fn is_filled(&self, id: FieldId) -> bool {
        match id {
            FieldId::Terms => self.terms,
            other => !self.text(other).is_empty(),
        }
    }

    /// Check that every required field is non-empty and terms are accepted
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<FieldId> = FieldId::ALL
            .into_iter()
            .filter(|id| id.is_required() && !self.is_filled(*id))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

/// Focusable controls inside the registration modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalFocus {
    Field(FieldId),
    Submit,
    Close,
}

impl Default for ModalFocus {
    fn default() -> Self {
        ModalFocus::Field(FieldId::FullName)
    }
}

impl ModalFocus {
    /// Number of focus stops (six fields, submit, close)
    const COUNT: usize = FieldId::ALL.len() + 2;

    fn index(self) -> usize {
        match self {
            Self::Field(id) => id.index(),
            Self::Submit => FieldId::ALL.len(),
            Self::Close => FieldId::ALL.len() + 1,
        }
    }

    fn from_index(index: usize) -> Self {
        match FieldId::from_index(index) {
            Some(id) => Self::Field(id),
            None if index == FieldId::ALL.len() => Self::Submit,
            None => Self::Close,
        }
    }

    /// Move focus forward, wrapping around
    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::COUNT)
    }

    /// Move focus backward, wrapping around
    pub fn prev(self) -> Self {
        let current = self.index();
        if current == 0 {
            Self::from_index(Self::COUNT - 1)
        } else {
            Self::from_index(current - 1)
        }
    }

    pub fn field(self) -> Option<FieldId> {
        match self {
            Self::Field(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> FormState {
        FormState {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "611222333".to_string(),
            age: "25".to_string(),
            nickname: String::new(),
            terms: true,
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_complete_form_is_valid_without_nickname() {
            assert!(complete_form().validate().is_ok());
        }

        #[test]
        fn test_empty_form_reports_every_required_field() {
            let err = FormState::default().validate().unwrap_err();
            assert_eq!(
                err.missing,
                vec![
                    FieldId::FullName,
                    FieldId::Email,
                    FieldId::Phone,
                    FieldId::Age,
                    FieldId::Terms,
                ]
            );
        }

        #[test]
        fn test_each_required_field_is_checked() {
            for id in FieldId::ALL.into_iter().filter(|id| id.is_required()) {
                let mut form = complete_form();
                match id {
                    FieldId::Terms => form.set(id, FieldValue::Toggle(false)),
                    _ => form.set(id, FieldValue::Text(String::new())),
                }
                let err = form.validate().unwrap_err();
                assert_eq!(err.missing, vec![id]);
            }
        }

        #[test]
        fn test_age_bounds_not_enforced() {
            let mut form = complete_form();
            form.age = "5".to_string();
            assert!(form.validate().is_ok());
        }

        #[test]
        fn test_error_message_lists_fields() {
            let err = ValidationError {
                missing: vec![FieldId::FullName, FieldId::Terms],
            };
            assert_eq!(err.to_string(), "missing required fields: fullName, terms");
        }
    }

    mod set {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_merges_one_field() {
            let mut form = complete_form();
            form.set(FieldId::Nickname, "janefc".into());
            assert_eq!(form.nickname, "janefc");
            assert_eq!(form.full_name, "Jane Doe");
        }

        #[test]
        fn test_mismatched_value_is_ignored() {
            let mut form = FormState::default();
            form.set(FieldId::Email, true.into());
            form.set(FieldId::Terms, "yes".into());
            assert_eq!(form, FormState::default());
        }

        #[test]
        fn test_payload_uses_camel_case() {
            let json = serde_json::to_value(complete_form()).unwrap();
            assert_eq!(json["fullName"], "Jane Doe");
            assert_eq!(json["terms"], true);
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_cycles_through_controls() {
            let mut focus = ModalFocus::default();
            for _ in 0..6 {
                focus = focus.next();
            }
            assert_eq!(focus, ModalFocus::Submit);
            assert_eq!(focus.next(), ModalFocus::Close);
            assert_eq!(focus.next().next(), ModalFocus::default());
        }

        #[test]
        fn test_prev_wraps_to_close() {
            assert_eq!(ModalFocus::default().prev(), ModalFocus::Close);
            assert_eq!(
                ModalFocus::Submit.prev(),
                ModalFocus::Field(FieldId::Terms)
            );
        }
    }
}
