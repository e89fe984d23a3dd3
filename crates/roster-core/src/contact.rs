//! The contact record and its salary arithmetic.
//!
//! A [`NewContact`] is what the CSV parser and the edit form produce. The store
//! assigns it a [`ContactId`] and hands back a [`Contact`].

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Store-assigned identifier. Never reused once a contact is deleted.
pub type ContactId = i64;

/// Number of decimal places a salary is stored with.
pub const SALARY_SCALE: u32 = 2;

/// Largest salary that fits a `decimal(18,2)` column.
pub fn max_salary() -> Decimal {
  Decimal::from_i128_with_scale(999_999_999_999_999_999, SALARY_SCALE)
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A contact that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
  pub name:          String,
  pub date_of_birth: NaiveDate,
  pub married:       bool,
  pub phone:         String,
  pub salary:        Decimal,
}

impl NewContact {
  /// Attach a store-assigned id.
  pub fn with_id(self, id: ContactId) -> Contact {
    Contact {
      id,
      name: self.name,
      date_of_birth: self.date_of_birth,
      married: self.married,
      phone: self.phone,
      salary: self.salary,
    }
  }
}

/// A persisted contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:            ContactId,
  pub name:          String,
  pub date_of_birth: NaiveDate,
  pub married:       bool,
  pub phone:         String,
  pub salary:        Decimal,
}

impl Contact {
  /// Split into the immutable id and the mutable fields.
  pub fn into_parts(self) -> (ContactId, NewContact) {
    let fields = NewContact {
      name:          self.name,
      date_of_birth: self.date_of_birth,
      married:       self.married,
      phone:         self.phone,
      salary:        self.salary,
    };
    (self.id, fields)
  }
}

// ─── Salary ──────────────────────────────────────────────────────────────────

static DECIMAL_RE: OnceLock<Regex> = OnceLock::new();

fn decimal_regex() -> &'static Regex {
  DECIMAL_RE.get_or_init(|| {
    // Period separator only; no exponent, no digit grouping.
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$")
      .unwrap_or_else(|error| panic!("decimal regex failed to compile: {error}"))
  })
}

/// Round to [`SALARY_SCALE`] places (half away from zero) and pad to exactly
/// that scale, so `50000` and `50000.004` both become `50000.00`.
pub fn normalize_salary(value: Decimal) -> Decimal {
  let mut rounded =
    value.round_dp_with_strategy(SALARY_SCALE, RoundingStrategy::MidpointAwayFromZero);
  rounded.rescale(SALARY_SCALE);
  if rounded.is_zero() {
    rounded.set_sign_positive(true);
  }
  rounded
}

/// Turn `.5` into `0.5`, `5.` into `5.0` and drop a leading `+` before
/// handing off to `Decimal`.
fn pad_fraction(s: &str) -> String {
  let (negative, digits) = match s.strip_prefix(|c: char| c == '+' || c == '-') {
    Some(rest) => (s.starts_with('-'), rest),
    None => (false, s),
  };
  let mut out = String::with_capacity(s.len() + 2);
  if negative {
    out.push('-');
  }
  if digits.starts_with('.') {
    out.push('0');
  }
  out.push_str(digits);
  if digits.ends_with('.') {
    out.push('0');
  }
  out
}

/// Parse a salary written with invariant-culture rules.
///
/// The result is normalised and guaranteed to lie in `0..=max_salary()`.
pub fn parse_salary(input: &str) -> Result<Decimal> {
  let trimmed = input.trim();
  if !decimal_regex().is_match(trimmed) {
    return Err(Error::InvalidDecimal(trimmed.to_owned()));
  }
  let value: Decimal = pad_fraction(trimmed)
    .parse()
    .map_err(|_| Error::InvalidDecimal(trimmed.to_owned()))?;
  if value < Decimal::ZERO {
    return Err(Error::NegativeSalary(value));
  }
  let value = normalize_salary(value);
  if value > max_salary() {
    return Err(Error::SalaryOutOfRange(value));
  }
  Ok(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn dec(s: &str) -> Decimal { s.parse().unwrap() }

  #[test]
  fn parse_salary_pads_to_two_places() {
    let v = parse_salary("50000").unwrap();
    assert_eq!(v.to_string(), "50000.00");
  }

  #[test]
  fn parse_salary_rounds_half_away_from_zero() {
    assert_eq!(parse_salary("10.005").unwrap(), dec("10.01"));
    assert_eq!(parse_salary("10.004").unwrap(), dec("10.00"));
  }

  #[test]
  fn parse_salary_accepts_leading_dot_and_plus() {
    assert_eq!(parse_salary(".5").unwrap().to_string(), "0.50");
    assert_eq!(parse_salary("+12.3").unwrap().to_string(), "12.30");
  }

  #[test]
  fn parse_salary_rejects_comma_separator() {
    assert!(matches!(parse_salary("1,5"), Err(Error::InvalidDecimal(_))));
    assert!(matches!(parse_salary("1_000"), Err(Error::InvalidDecimal(_))));
    assert!(matches!(parse_salary("1e3"), Err(Error::InvalidDecimal(_))));
    assert!(matches!(parse_salary("abc"), Err(Error::InvalidDecimal(_))));
    assert!(matches!(parse_salary(""), Err(Error::InvalidDecimal(_))));
  }

  #[test]
  fn parse_salary_rejects_negative() {
    assert!(matches!(parse_salary("-1"), Err(Error::NegativeSalary(_))));
  }

  #[test]
  fn negative_below_a_cent_is_still_negative() {
    assert!(matches!(parse_salary("-0.004"), Err(Error::NegativeSalary(_))));
    assert!(matches!(parse_salary("-0.005"), Err(Error::NegativeSalary(v)) if v == dec("-0.005")));
  }

  #[test]
  fn negative_zero_is_zero() {
    let v = parse_salary("-0.00").unwrap();
    assert_eq!(v, Decimal::ZERO);
    assert_eq!(v.to_string(), "0.00");
  }

  #[test]
  fn parse_salary_rejects_out_of_range() {
    assert!(matches!(
      parse_salary("10000000000000000"),
      Err(Error::SalaryOutOfRange(_))
    ));
    assert!(parse_salary("9999999999999999.99").is_ok());
    assert!(matches!(
      parse_salary("9999999999999999.995"),
      Err(Error::SalaryOutOfRange(_))
    ));
  }

  #[test]
  fn into_parts_round_trips_with_id() {
    let contact = Contact {
      id:            7,
      name:          "Ada".into(),
      date_of_birth: NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
      married:       true,
      phone:         "+44 20".into(),
      salary:        dec("1.00"),
    };
    let (id, fields) = contact.clone().into_parts();
    assert_eq!(id, 7);
    assert_eq!(fields.with_id(id), contact);
  }
}
