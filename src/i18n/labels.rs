//! Display-text tree loaded from a locale file

use crate::state::FieldId;
use serde::{Deserialize, Serialize};

const DEFAULT_TITLE: &str = "Inscripción";
const DEFAULT_FULL_NAME: &str = "Nombre completo";
const DEFAULT_EMAIL: &str = "Correo electrónico";
const DEFAULT_PHONE: &str = "Teléfono";
const DEFAULT_AGE: &str = "Edad";
const DEFAULT_NICKNAME: &str = "Nickname en EA FC (opcional)";
const DEFAULT_TERMS: &str = "Acepto las bases del torneo";
const DEFAULT_SUBMIT: &str = "Pagar inscripción - 12€";
const DEFAULT_REGISTER: &str = "Registrarse";
const DEFAULT_SUCCESS: &str = "¡Inscripción completada! Revisa tu email para confirmación.";
const DEFAULT_ERROR: &str = "Error al procesar la inscripción. Inténtalo de nuevo.";

/// Complete label tree for one locale
///
/// Every part is optional so that partial locale files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub header: HeaderLabels,
    pub sections: Vec<Section>,
    pub registration: RegistrationLabels,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderLabels {
    pub title: String,
    /// Drawer entries; each id matches a [`Section`] id
    pub nav: Vec<NavEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
}

/// One block of landing page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Labels for the registration modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationLabels {
    pub title: Option<String>,
    pub fields: FieldLabels,
    pub success: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldLabels {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<String>,
    pub nickname: Option<String>,
    pub terms: Option<String>,
    pub submit: Option<String>,
}

/// Given label, or `default` when it is absent or empty
fn label_or<'a>(label: &'a Option<String>, default: &'a str) -> &'a str {
    label.as_deref().filter(|s| !s.is_empty()).unwrap_or(default)
}

impl RegistrationLabels {
    pub fn title(&self) -> &str {
        label_or(&self.title, DEFAULT_TITLE)
    }

    pub fn field(&self, id: FieldId) -> &str {
        let fields = &self.fields;
        let (label, default) = match id {
            FieldId::FullName => (&fields.full_name, DEFAULT_FULL_NAME),
            FieldId::Email => (&fields.email, DEFAULT_EMAIL),
            FieldId::Phone => (&fields.phone, DEFAULT_PHONE),
            FieldId::Age => (&fields.age, DEFAULT_AGE),
            FieldId::Nickname => (&fields.nickname, DEFAULT_NICKNAME),
            FieldId::Terms => (&fields.terms, DEFAULT_TERMS),
        };
        label_or(label, default)
    }

    /// Text of the submit button inside the modal
    pub fn submit(&self) -> &str {
        label_or(&self.fields.submit, DEFAULT_SUBMIT)
    }

    /// Text of the page button that opens the modal
    pub fn register(&self) -> &str {
        label_or(&self.fields.submit, DEFAULT_REGISTER)
    }

    pub fn success(&self) -> &str {
        label_or(&self.success, DEFAULT_SUCCESS)
    }

    pub fn error(&self) -> &str {
        label_or(&self.error, DEFAULT_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_labels_fall_back_to_defaults() {
        let labels = RegistrationLabels::default();
        assert_eq!(labels.title(), "Inscripción");
        assert_eq!(labels.field(FieldId::Age), "Edad");
        assert_eq!(labels.submit(), "Pagar inscripción - 12€");
        assert_eq!(labels.register(), "Registrarse");
        assert!(labels.success().starts_with("¡Inscripción completada!"));
        assert!(labels.error().starts_with("Error al procesar"));
    }

    #[test]
    fn test_partial_map_keeps_given_keys() {
        let json = r#"{"title": "Sign up", "fields": {"email": "Email"}}"#;
        let labels: RegistrationLabels = serde_json::from_str(json).unwrap();
        assert_eq!(labels.title(), "Sign up");
        assert_eq!(labels.field(FieldId::Email), "Email");
        assert_eq!(labels.field(FieldId::Phone), "Teléfono");
        assert_eq!(labels.error(), DEFAULT_ERROR);
    }

    #[test]
    fn test_empty_labels_fall_back_to_defaults() {
        let json = r#"{"title": "", "fields": {"age": "", "submit": ""}, "error": ""}"#;
        let labels: RegistrationLabels = serde_json::from_str(json).unwrap();
        assert_eq!(labels.title(), "Inscripción");
        assert_eq!(labels.field(FieldId::Age), "Edad");
        assert_eq!(labels.submit(), "Pagar inscripción - 12€");
        assert_eq!(labels.register(), "Registrarse");
        assert_eq!(labels.error(), DEFAULT_ERROR);
    }

    #[test]
    fn test_submit_label_is_shared_with_register_button() {
        let json = r#"{"fields": {"submit": "Pay entry - 12€"}}"#;
        let labels: RegistrationLabels = serde_json::from_str(json).unwrap();
        assert_eq!(labels.submit(), "Pay entry - 12€");
        assert_eq!(labels.register(), "Pay entry - 12€");
    }

    #[test]
    fn test_translation_without_registration_block() {
        let json = r#"{"header": {"title": "Cup", "nav": [{"id": "about", "label": "About"}]}}"#;
        let translation: Translation = serde_json::from_str(json).unwrap();
        assert_eq!(translation.header.nav.len(), 1);
        assert!(translation.sections.is_empty());
        assert_eq!(translation.registration.title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_field_labels_use_camel_case_keys() {
        let json = r#"{"fullName": "Full name"}"#;
        let fields: FieldLabels = serde_json::from_str(json).unwrap();
        assert_eq!(fields.full_name.as_deref(), Some("Full name"));
    }
}
