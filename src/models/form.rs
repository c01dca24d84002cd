//! Shared form state for multi-step wizards plus field metadata and errors.

use serde::Serialize;
use std::collections::BTreeMap;

/// Field values shared by every step of a wizard, keyed by field name.
///
/// Values are kept even when a field is hidden by a conditional rule, so
/// switching a controlling field back restores what the user typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: &[(&str, &str)]) -> Self {
        let mut form = Self::new();
        for (name, value) in defaults {
            form.set(name, *value);
        }
        form
    }

    /// Current value, or "" when the field was never set.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A field-level validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Static description of one input of a wizard step.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    /// Allowed values for choice fields; empty for free text.
    pub choices: &'static [&'static str],
    /// Only shown while `(field, value)` holds in the form.
    pub visible_when: Option<(&'static str, &'static str)>,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            choices: &[],
            visible_when: None,
        }
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        choices: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            choices,
            visible_when: None,
        }
    }

    pub const fn shown_when(mut self, field: &'static str, value: &'static str) -> Self {
        self.visible_when = Some((field, value));
        self
    }

    pub fn is_visible(&self, form: &FormState) -> bool {
        match self.visible_when {
            Some((field, value)) => form.get(field) == value,
            None => true,
        }
    }
}
