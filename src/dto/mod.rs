pub mod booking_dto;
pub mod catalog_dto;
pub mod employee_dto;
pub mod lead_dto;
pub mod request_dto;

use validator::{ValidationErrors, ValidationErrorsKind};

/// Create vs update, decided by the presence of initial data in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Update,
}

/// First human-readable message out of a validation result, the one the
/// notification shows. Field errors win over struct-level ones.
pub fn first_message(errors: &ValidationErrors) -> Option<String> {
    fn walk(errors: &ValidationErrors) -> Option<String> {
        for kind in errors.errors().values() {
            match kind {
                ValidationErrorsKind::Field(list) => {
                    for err in list {
                        if let Some(msg) = &err.message {
                            return Some(msg.to_string());
                        }
                        return Some(err.code.to_string());
                    }
                }
                ValidationErrorsKind::Struct(inner) => {
                    if let Some(msg) = walk(inner) {
                        return Some(msg);
                    }
                }
                ValidationErrorsKind::List(map) => {
                    for inner in map.values() {
                        if let Some(msg) = walk(inner) {
                            return Some(msg);
                        }
                    }
                }
            }
        }
        None
    }
    walk(errors)
}

/// True when the result carries a field or struct error with this code.
pub fn has_code(errors: &ValidationErrors, code: &str) -> bool {
    errors.errors().values().any(|kind| match kind {
        ValidationErrorsKind::Field(list) => list.iter().any(|e| e.code == code),
        ValidationErrorsKind::Struct(inner) => has_code(inner, code),
        ValidationErrorsKind::List(map) => map.values().any(|inner| has_code(inner, code)),
    })
}
