//! Rule-based checkout field validation.
//!
//! Every field is checked for presence first; fields with a format rule
//! (email, phone, postal code) are then matched against their pattern.
//! Whole-form validation collects every failure instead of stopping at the
//! first, so the renderer can mark all offending inputs at once.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Local part, domain, and a dotted top-level domain.
#[allow(clippy::unwrap_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Optional leading `+`, then 1-16 digits, no leading zero.
#[allow(clippy::unwrap_used)]
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").unwrap());

/// US ZIP: 5 digits, optionally dash plus 4 more.
#[allow(clippy::unwrap_used)]
static POSTAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").unwrap());

/// The validation rule applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Required, no format rule.
    Text,
    Email,
    Phone,
    PostalCode,
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    /// Empty after trimming.
    Missing,
    /// Non-empty but doesn't match the field's format rule.
    InvalidFormat,
    /// The terms checkbox was left unchecked.
    NotAccepted,
}

/// The checkout form fields, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    State,
    ZipCode,
    CardName,
    CardNumber,
    ExpiryDate,
    Cvv,
    Terms,
}

/// One field failure: which field and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: Field,
    pub error: FieldError,
}

/// Validate a single raw input against a field rule.
///
/// # Errors
///
/// [`FieldError::Missing`] when the trimmed value is empty;
/// [`FieldError::InvalidFormat`] when it fails the kind's pattern.
pub fn validate_field(kind: FieldKind, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::Missing);
    }

    let ok = match kind {
        FieldKind::Text => true,
        FieldKind::Email => EMAIL_RE.is_match(value),
        FieldKind::Phone => {
            // Separators are presentation; strip them before matching.
            let digits: String = value
                .chars()
                .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
                .collect();
            PHONE_RE.is_match(&digits)
        }
        FieldKind::PostalCode => POSTAL_RE.is_match(value),
    };

    if ok { Ok(()) } else { Err(FieldError::InvalidFormat) }
}

/// The raw checkout form as the renderer collected it.
///
/// Billing address plus payment fields; card fields are required but not
/// format-checked here (the renderer masks them as the user types, and no
/// real gateway sees them).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub card_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub terms_accepted: bool,
}

impl CheckoutForm {
    /// The form's fields with their rules, in display order.
    fn fields(&self) -> [(Field, FieldKind, &str); 12] {
        [
            (Field::FirstName, FieldKind::Text, &self.first_name),
            (Field::LastName, FieldKind::Text, &self.last_name),
            (Field::Email, FieldKind::Email, &self.email),
            (Field::Phone, FieldKind::Phone, &self.phone),
            (Field::Address, FieldKind::Text, &self.address),
            (Field::City, FieldKind::Text, &self.city),
            (Field::State, FieldKind::Text, &self.state),
            (Field::ZipCode, FieldKind::PostalCode, &self.zip_code),
            (Field::CardName, FieldKind::Text, &self.card_name),
            (Field::CardNumber, FieldKind::Text, &self.card_number),
            (Field::ExpiryDate, FieldKind::Text, &self.expiry_date),
            (Field::Cvv, FieldKind::Text, &self.cvv),
        ]
    }
}

/// Validate the whole form, collecting every failure.
///
/// Runs [`validate_field`] over every required field and additionally
/// requires the terms checkbox. An empty result means the form is valid.
#[must_use]
pub fn validate_form(form: &CheckoutForm) -> Vec<FieldIssue> {
    let mut issues: Vec<FieldIssue> = form
        .fields()
        .into_iter()
        .filter_map(|(field, kind, value)| {
            validate_field(kind, value)
                .err()
                .map(|error| FieldIssue { field, error })
        })
        .collect();

    if !form.terms_accepted {
        issues.push(FieldIssue {
            field: Field::Terms,
            error: FieldError::NotAccepted,
        });
    }

    issues
}
