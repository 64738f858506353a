//! Form state and validation helpers shared by every add/edit modal.

use crate::domain::common::{Entity, EntityId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::str::FromStr;

/// Date format of `<input type="date">` and of the backend
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Per-field validation messages, keyed by the JSON field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(value)` when no error was recorded
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(EntityId),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    /// Verb used in failure notifications ("Error creating order: ...")
    pub fn action_verb(&self) -> &'static str {
        match self {
            FormMode::Add => "creating",
            FormMode::Edit(_) => "updating",
        }
    }
}

/// Editable fields of an entity, all held as text until submit.
pub trait EntityForm: Clone + Debug + Default + Send + Sync + 'static {
    type Entity: Entity;

    /// Pre-populates the form from an existing record
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Initial values of an add form
    fn for_add(_today: NaiveDate) -> Self {
        Self::default()
    }

    /// Checks every field and builds the request body.
    ///
    /// Blank optional strings become `None`, numeric text becomes numbers.
    fn validate(&self) -> Result<<Self::Entity as Entity>::Payload, FieldErrors>;
}

/// Data, errors and mode of one open form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F> {
    pub data: F,
    pub errors: FieldErrors,
    pub mode: FormMode,
}

impl<F: EntityForm> FormState<F> {
    pub fn for_add(today: NaiveDate) -> Self {
        Self {
            data: F::for_add(today),
            errors: FieldErrors::new(),
            mode: FormMode::Add,
        }
    }

    pub fn for_edit(entity: &F::Entity) -> Self {
        Self {
            data: F::from_entity(entity),
            errors: FieldErrors::new(),
            mode: FormMode::Edit(entity.id()),
        }
    }

    /// Applies a change to one field and drops that field's previous error
    pub fn update_field(&mut self, field: &str, change: impl FnOnce(&mut F)) {
        change(&mut self.data);
        self.errors.clear(field);
    }

    /// Validates on submit. On failure the error set is stored and nothing
    /// is returned, so no request can be built from invalid data.
    pub fn submit(&mut self) -> Option<<F::Entity as Entity>::Payload> {
        match self.data.validate() {
            Ok(payload) => {
                self.errors = FieldErrors::new();
                Some(payload)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }
}

// ============================================================================
// Field helpers
// ============================================================================

/// Records `message` when the trimmed value is empty; returns the trimmed value
pub fn required(errors: &mut FieldErrors, field: &str, value: &str, message: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, message);
    }
    trimmed.to_string()
}

/// Blank → `None`, otherwise the trimmed value
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses a non-negative decimal. Blank input is reported as `required`
/// when `message_required` is given, otherwise it yields `None`.
pub fn non_negative_decimal(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    label: &str,
    message_required: Option<&str>,
) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        if let Some(message) = message_required {
            errors.add(field, message);
        }
        return None;
    }
    match Decimal::from_str(trimmed) {
        Ok(v) if v.is_sign_negative() && !v.is_zero() => {
            errors.add(field, format!("{} must be 0 or greater", label));
            None
        }
        Ok(v) => Some(v),
        Err(_) => {
            errors.add(field, format!("{} must be a number", label));
            None
        }
    }
}

/// Parses a required non-negative whole number
pub fn non_negative_integer(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    label: &str,
) -> Option<i32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, format!("{} is required", label));
        return None;
    }
    match trimmed.parse::<i32>() {
        Ok(v) if v < 0 => {
            errors.add(field, format!("{} must be 0 or greater", label));
            None
        }
        Ok(v) => Some(v),
        Err(_) => {
            errors.add(field, format!("{} must be a whole number", label));
            None
        }
    }
}

/// Parses an optional reference id; blank yields `None`
pub fn optional_id(errors: &mut FieldErrors, field: &str, value: &str, message: &str) -> Option<EntityId> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<EntityId>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.add(field, message);
            None
        }
    }
}

/// Parses a date in [`DATE_FORMAT`]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Formats an optional value for a text input
pub fn text_of<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        let mut errors = FieldErrors::new();
        assert_eq!(required(&mut errors, "name", "  Boats ", "Name is required"), "Boats");
        assert!(errors.is_empty());

        required(&mut errors, "name", "   ", "Name is required");
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn test_optional_blank_is_none() {
        assert_eq!(optional("   "), None);
        assert_eq!(optional(" Suite 5 "), Some("Suite 5".to_string()));
    }

    #[test]
    fn test_decimal_ranges() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            non_negative_decimal(&mut errors, "creditLimit", "21000.50", "Credit Limit", None),
            Some(Decimal::new(2100050, 2))
        );
        assert_eq!(non_negative_decimal(&mut errors, "creditLimit", "", "Credit Limit", None), None);
        assert_eq!(non_negative_decimal(&mut errors, "creditLimit", "0", "Credit Limit", None), Some(Decimal::ZERO));
        assert!(errors.is_empty());

        non_negative_decimal(&mut errors, "creditLimit", "-1", "Credit Limit", None);
        assert_eq!(errors.get("creditLimit"), Some("Credit Limit must be 0 or greater"));

        let mut errors = FieldErrors::new();
        non_negative_decimal(&mut errors, "msrp", "abc", "MSRP", None);
        assert_eq!(errors.get("msrp"), Some("MSRP must be a number"));

        let mut errors = FieldErrors::new();
        non_negative_decimal(&mut errors, "msrp", " ", "MSRP", Some("MSRP is required"));
        assert_eq!(errors.get("msrp"), Some("MSRP is required"));
    }

    #[test]
    fn test_integer_ranges() {
        let mut errors = FieldErrors::new();
        assert_eq!(non_negative_integer(&mut errors, "qty", "7305", "Quantity"), Some(7305));
        assert!(errors.is_empty());

        non_negative_integer(&mut errors, "qty", "1.5", "Quantity");
        assert_eq!(errors.get("qty"), Some("Quantity must be a whole number"));

        let mut errors = FieldErrors::new();
        non_negative_integer(&mut errors, "qty", "-3", "Quantity");
        assert_eq!(errors.get("qty"), Some("Quantity must be 0 or greater"));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-10"), NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(parse_date("10.01.2024"), None);
        assert_eq!(parse_date(""), None);
    }
}
