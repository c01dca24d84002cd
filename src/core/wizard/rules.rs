//! Field rules shared by the onboarding flows.

use crate::models::form::{FieldError, FieldSpec, FormState};
use crate::utils::date::parse_date;
use regex::Regex;
use std::sync::LazyLock;

/// Indian Permanent Account Number, e.g. ABCDE1234F.
pub static PAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern"));

/// Bank branch code, e.g. HDFC0001234.
pub static IFSC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("IFSC pattern"));

pub static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Collects at most one error per field, in the order rules are applied.
pub struct Checker<'a> {
    form: &'a FormState,
    fields: &'a [FieldSpec],
    errors: Vec<FieldError>,
}

impl<'a> Checker<'a> {
    pub fn new(form: &'a FormState, fields: &'a [FieldSpec]) -> Self {
        Self {
            form,
            fields,
            errors: Vec::new(),
        }
    }

    /// Hidden fields and fields that already failed are skipped.
    fn skips(&self, name: &str) -> bool {
        let hidden = self
            .fields
            .iter()
            .any(|f| f.name == name && !f.is_visible(self.form));
        hidden || self.errors.iter().any(|e| e.field == name)
    }

    /// Generic rule: `ok` receives the trimmed value.
    pub fn require(&mut self, name: &str, ok: impl FnOnce(&str) -> bool, message: &str) -> &mut Self {
        if !self.skips(name) && !ok(self.form.get(name).trim()) {
            self.errors.push(FieldError::new(name, message));
        }
        self
    }

    pub fn min_len(&mut self, name: &str, min: usize, message: &str) -> &mut Self {
        self.require(name, |v| v.chars().count() >= min, message)
    }

    /// Value must be one of the field's declared choices.
    pub fn one_of(&mut self, name: &str) -> &mut Self {
        let choices = self
            .fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.choices)
            .unwrap_or(&[]);
        let message = format!("Choose one of: {}", choices.join(", "));
        self.require(name, |v| choices.iter().any(|c| *c == v), &message)
    }

    pub fn pattern(&mut self, name: &str, pattern: &Regex, message: &str) -> &mut Self {
        self.require(name, |v| pattern.is_match(v), message)
    }

    /// Blank is accepted; anything else must match.
    pub fn optional_pattern(&mut self, name: &str, pattern: &Regex, message: &str) -> &mut Self {
        self.require(name, |v| v.is_empty() || pattern.is_match(v), message)
    }

    pub fn email(&mut self, name: &str, message: &str) -> &mut Self {
        self.pattern(name, &EMAIL, message)
    }

    pub fn date(&mut self, name: &str, message: &str) -> &mut Self {
        self.require(name, |v| parse_date(v).is_some(), message)
    }

    pub fn positive_number(&mut self, name: &str, message: &str) -> &mut Self {
        self.require(name, |v| parse_number(v).is_some_and(|n| n > 0.0), message)
    }

    /// Blank is accepted; anything else must be a number within `min..=max`.
    pub fn optional_number_between(&mut self, name: &str, min: f64, max: f64, message: &str) -> &mut Self {
        self.require(
            name,
            |v| v.is_empty() || parse_number(v).is_some_and(|n| (min..=max).contains(&n)),
            message,
        )
    }

    pub fn finish(&mut self) -> Vec<FieldError> {
        std::mem::take(&mut self.errors)
    }
}
