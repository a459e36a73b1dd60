//! Registration form domain layer

mod field;
mod form_state;

pub use field::{age_out_of_range, push_age_digit, FieldId, FieldKind, FieldValue};
pub use form_state::{FormState, ModalFocus, ValidationError};
