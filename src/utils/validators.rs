// ============================================================================
// VALIDATORS - Validación de campos del formulario de banquete
// ============================================================================
// Un único esquema declarativo (campo -> obligatorio + validador) que usan
// tanto la validación por tecla como la validación completa al enviar
// ============================================================================

use std::collections::BTreeMap;
use crate::models::{BanquetDraft, BanquetField};

pub const INVALID_NUMBER: &str = "Please enter a valid number.";
pub const INVALID_PINCODE: &str = "Please enter a valid 6-digit pincode.";
pub const MIN_ADDITIONAL_PHOTOS: usize = 2;
pub const NOT_ENOUGH_PHOTOS: &str = "Please select at least 2 additional photos.";

pub type Validator = fn(&str) -> Option<&'static str>;

/// Regla de un campo
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub field: BanquetField,
    pub required: bool,
    pub validator: Option<Validator>,
}

/// Solo dígitos decimales (o vacío)
pub fn numeric(value: &str) -> Option<&'static str> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        None
    } else {
        Some(INVALID_NUMBER)
    }
}

/// Exactamente 6 dígitos
pub fn pincode(value: &str) -> Option<&'static str> {
    if value.len() == 6 && value.chars().all(|c| c.is_ascii_digit()) {
        None
    } else {
        Some(INVALID_PINCODE)
    }
}

const fn rule(field: BanquetField, validator: Option<Validator>) -> FieldRule {
    FieldRule {
        field,
        required: true,
        validator,
    }
}

/// Esquema del formulario de banquete: los 18 campos son obligatorios
pub const BANQUET_SCHEMA: [FieldRule; 18] = [
    rule(BanquetField::PropertyName, None),
    rule(BanquetField::ParkingCapacity, Some(numeric)),
    rule(BanquetField::CateringPolicy, None),
    rule(BanquetField::DecorPolicy, None),
    rule(BanquetField::DjPolicy, None),
    rule(BanquetField::BanquetType, None),
    rule(BanquetField::FixedCapacity, Some(numeric)),
    rule(BanquetField::MaxCapacity, Some(numeric)),
    rule(BanquetField::PricePerRoom, Some(numeric)),
    rule(BanquetField::Space, Some(numeric)),
    rule(BanquetField::VegPrice, Some(numeric)),
    rule(BanquetField::NonvegPrice, Some(numeric)),
    rule(BanquetField::State, None),
    rule(BanquetField::City, None),
    rule(BanquetField::Pincode, Some(pincode)),
    rule(BanquetField::Address, None),
    rule(BanquetField::CoverPhoto, None),
    rule(BanquetField::AdditionalPhotos, None),
];

pub fn rule_for(field: BanquetField) -> Option<&'static FieldRule> {
    BANQUET_SCHEMA.iter().find(|r| r.field == field)
}

/// Validación por tecla: mensaje de error o cadena vacía
pub fn validate(field: BanquetField, raw: &str) -> String {
    rule_for(field)
        .and_then(|r| r.validator)
        .and_then(|v| v(raw))
        .map(str::to_string)
        .unwrap_or_default()
}

pub fn required_message(field: BanquetField) -> String {
    format!("Please fill in the {}.", field.readable_name())
}

/// Errores por campo; un campo ausente equivale a cadena vacía
#[derive(Clone, Default, PartialEq, Debug)]
pub struct FieldErrors {
    errors: BTreeMap<BanquetField, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: BanquetField) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: BanquetField, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, message);
        }
    }

    pub fn clear(&mut self, field: BanquetField) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BanquetField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Validación completa del borrador contra el esquema
pub fn validate_draft(draft: &BanquetDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for rule in BANQUET_SCHEMA.iter() {
        let field = rule.field;
        if rule.required && !draft.is_present(field) {
            errors.set(field, required_message(field));
            continue;
        }
        if let (Some(validator), Some(value)) = (rule.validator, draft.text(field)) {
            if let Some(message) = validator(value) {
                errors.set(field, message);
            }
        }
    }
    if draft.additional_photos.len() < MIN_ADDITIONAL_PHOTOS {
        errors.set(BanquetField::AdditionalPhotos, NOT_ENOUGH_PHOTOS);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attachment;

    const NUMERIC_FIELDS: [BanquetField; 7] = [
        BanquetField::ParkingCapacity,
        BanquetField::FixedCapacity,
        BanquetField::MaxCapacity,
        BanquetField::PricePerRoom,
        BanquetField::Space,
        BanquetField::VegPrice,
        BanquetField::NonvegPrice,
    ];

    #[test]
    fn test_numeric_fields_accept_only_digits() {
        for field in NUMERIC_FIELDS {
            assert_eq!(validate(field, ""), "");
            assert_eq!(validate(field, "0"), "");
            assert_eq!(validate(field, "120000"), "");
            for bad in ["12a", "1.5", "-3", " 4", "abc", "१२"] {
                assert_eq!(validate(field, bad), INVALID_NUMBER, "{:?} {:?}", field, bad);
            }
        }
    }

    #[test]
    fn test_pincode_requires_six_digits() {
        assert_eq!(validate(BanquetField::Pincode, "411001"), "");
        for bad in ["", "41100", "4110011", "41100a", "411 01"] {
            assert_eq!(validate(BanquetField::Pincode, bad), INVALID_PINCODE, "{:?}", bad);
        }
    }

    #[test]
    fn test_free_text_fields_never_fail_per_keystroke() {
        assert_eq!(validate(BanquetField::PropertyName, ""), "");
        assert_eq!(validate(BanquetField::Address, "12/B, MG Road!"), "");
        assert_eq!(validate(BanquetField::City, "@@"), "");
    }

    #[test]
    fn test_every_field_is_required() {
        assert_eq!(BANQUET_SCHEMA.len(), BanquetField::ALL.len());
        assert!(BANQUET_SCHEMA.iter().all(|r| r.required));
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let errors = validate_draft(&BanquetDraft::default());
        assert_eq!(errors.len(), 18);
        assert_eq!(errors.get(BanquetField::PricePerRoom), "Please fill in the price per room.");
        assert_eq!(errors.get(BanquetField::AdditionalPhotos), NOT_ENOUGH_PHOTOS);
    }

    #[test]
    fn test_one_additional_photo_is_not_enough() {
        let mut draft = BanquetDraft::default();
        draft.additional_photos.push(Attachment::new("a.jpg", "image/jpeg", vec![0]));
        let errors = validate_draft(&draft);
        assert_eq!(errors.get(BanquetField::AdditionalPhotos), NOT_ENOUGH_PHOTOS);
    }

    #[test]
    fn test_field_errors_treat_empty_message_as_clear() {
        let mut errors = FieldErrors::new();
        errors.set(BanquetField::City, "bad");
        assert_eq!(errors.get(BanquetField::City), "bad");
        errors.set(BanquetField::City, "");
        assert!(errors.is_empty());
        assert_eq!(errors.get(BanquetField::City), "");
    }
}
