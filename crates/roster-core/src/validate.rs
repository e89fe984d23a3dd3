//! Field-level validation run before any write reaches the store.

use std::{fmt, sync::OnceLock};

use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::contact::{NewContact, max_salary};

/// Form field names, shared by the validator and the HTML layer.
pub mod field {
  pub const NAME: &str = "name";
  pub const DATE_OF_BIRTH: &str = "date_of_birth";
  pub const MARRIED: &str = "married";
  pub const PHONE: &str = "phone";
  pub const SALARY: &str = "salary";
}

/// One broken rule, attributed to a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
  pub field:   &'static str,
  pub message: String,
}

/// Every violation found in one record, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
  pub fn new() -> Self { Self::default() }

  pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
    self.0.push(FieldViolation { field, message: message.into() });
  }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> { self.0.iter() }

  /// First message recorded against `field`, if any.
  pub fn message_for(&self, field: &str) -> Option<&str> {
    self
      .0
      .iter()
      .find(|v| v.field == field)
      .map(|v| v.message.as_str())
  }

  /// Append everything from `other`.
  pub fn extend(&mut self, other: Violations) { self.0.extend(other.0); }

  /// `Ok(())` when empty, otherwise `Err(self)`.
  pub fn into_result(self) -> Result<(), Violations> {
    if self.is_empty() { Ok(()) } else { Err(self) }
  }
}

impl fmt::Display for Violations {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, v) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str("; ")?;
      }
      write!(f, "{}: {}", v.field, v.message)?;
    }
    Ok(())
  }
}

impl std::error::Error for Violations {}

// ─── Rules ───────────────────────────────────────────────────────────────────

static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn phone_regex() -> &'static Regex {
  PHONE_RE.get_or_init(|| {
    // Optional leading +, digits with common separators, optional extension.
    Regex::new(r"(?i)^\+?[0-9 ().\-]*[0-9][0-9 ().\-]*(?:\s*(?:x|ext\.?)\s*[0-9]+)?$")
      .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
  })
}

/// Loose "looks like a phone number" check.
pub fn looks_like_phone(input: &str) -> bool { phone_regex().is_match(input.trim()) }

/// Check `contact` against the record invariants.
///
/// An empty phone is allowed; a non-empty one must look like a phone number.
pub fn validate(contact: &NewContact) -> Result<(), Violations> {
  let mut violations = Violations::new();

  if contact.name.trim().is_empty() {
    violations.push(field::NAME, "The Name field is required.");
  }

  if !contact.phone.trim().is_empty() && !looks_like_phone(&contact.phone) {
    violations.push(field::PHONE, "The Phone field is not a valid phone number.");
  }

  if contact.salary < Decimal::ZERO {
    violations.push(field::SALARY, "Salary must not be negative.");
  } else if contact.salary > max_salary() {
    violations.push(field::SALARY, "Salary is too large.");
  }

  violations.into_result()
}
