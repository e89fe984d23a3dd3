//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Dates are stored as ISO 8601 `YYYY-MM-DD`. Salaries are stored as decimal
//! strings with exactly two fractional digits, never as floating point.

use chrono::NaiveDate;
use roster_core::{
  Contact, NewContact,
  contact::normalize_salary,
};
use rust_decimal::Decimal;

use crate::{Error, Result};

// ─── NaiveDate ───────────────────────────────────────────────────────────────

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Salary ──────────────────────────────────────────────────────────────────

/// Refuses negative amounts so the store can never hold one.
pub fn encode_salary(salary: Decimal) -> Result<String> {
  let salary = normalize_salary(salary);
  if salary < Decimal::ZERO {
    return Err(roster_core::Error::NegativeSalary(salary).into());
  }
  Ok(salary.to_string())
}

pub fn decode_salary(s: &str) -> Result<Decimal> {
  s.parse::<Decimal>()
    .map_err(|e| Error::DecimalParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column values ready to be bound into an INSERT or UPDATE.
pub struct EncodedContact {
  pub name:          String,
  pub date_of_birth: String,
  pub married:       bool,
  pub phone:         String,
  pub salary:        String,
}

impl EncodedContact {
  pub fn encode(contact: &NewContact) -> Result<Self> {
    Ok(Self {
      name:          contact.name.clone(),
      date_of_birth: encode_date(contact.date_of_birth),
      married:       contact.married,
      phone:         contact.phone.clone(),
      salary:        encode_salary(contact.salary)?,
    })
  }
}

/// Raw values read directly from a `contacts` row.
pub struct RawContact {
  pub id:            i64,
  pub name:          String,
  pub date_of_birth: String,
  pub married:       bool,
  pub phone:         String,
  pub salary:        String,
}

impl RawContact {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:            row.get(0)?,
      name:          row.get(1)?,
      date_of_birth: row.get(2)?,
      married:       row.get(3)?,
      phone:         row.get(4)?,
      salary:        row.get(5)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:            self.id,
      name:          self.name,
      date_of_birth: decode_date(&self.date_of_birth)?,
      married:       self.married,
      phone:         self.phone,
      salary:        decode_salary(&self.salary)?,
    })
  }
}
