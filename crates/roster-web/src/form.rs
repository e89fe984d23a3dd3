//! The edit form as posted by the browser, and its conversion to a contact.

use chrono::NaiveDate;
use roster_core::{
  Contact, ContactId, NewContact,
  contact::{max_salary, parse_salary},
  validate::{Violations, field, validate},
};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Layout posted by `<input type="date">`.
const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw form fields. Everything is kept as text so a rejected submission can
/// be re-rendered exactly as typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
  #[serde(default)]
  pub id:            String,
  #[serde(default)]
  pub name:          String,
  #[serde(default)]
  pub date_of_birth: String,
  /// Present only when the checkbox is ticked.
  #[serde(default)]
  pub married:       Option<String>,
  #[serde(default)]
  pub phone:         String,
  #[serde(default)]
  pub salary:        String,
}

impl ContactForm {
  pub fn from_contact(contact: &Contact) -> Self {
    Self {
      id:            contact.id.to_string(),
      name:          contact.name.clone(),
      date_of_birth: contact.date_of_birth.format(FORM_DATE_FORMAT).to_string(),
      married:       contact.married.then(|| "true".to_owned()),
      phone:         contact.phone.clone(),
      salary:        contact.salary.to_string(),
    }
  }

  pub fn is_married(&self) -> bool {
    self
      .married
      .as_deref()
      .is_some_and(|v| v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("on"))
  }

  /// The hidden `id` field, if it holds an integer.
  pub fn contact_id(&self) -> Option<ContactId> { self.id.trim().parse().ok() }

  /// Convert to a [`Contact`] with id `id`, collecting every problem at once.
  pub fn to_contact(&self, id: ContactId) -> Result<Contact, Violations> {
    let mut violations = Violations::new();

    let date_of_birth = match self.date_of_birth.trim() {
      "" => {
        violations.push(field::DATE_OF_BIRTH, "The Date of Birth field is required.");
        None
      }
      raw => match NaiveDate::parse_from_str(raw, FORM_DATE_FORMAT) {
        Ok(d) => Some(d),
        Err(_) => {
          violations.push(field::DATE_OF_BIRTH, "The Date of Birth field is not a valid date.");
          None
        }
      },
    };

    let salary = match self.salary.trim() {
      "" => {
        violations.push(field::SALARY, "The Salary field is required.");
        None
      }
      raw => match parse_salary(raw) {
        Ok(s) => Some(s),
        Err(roster_core::Error::NegativeSalary(_)) => {
          violations.push(field::SALARY, "Salary must not be negative.");
          None
        }
        Err(roster_core::Error::SalaryOutOfRange(_)) => {
          violations.push(field::SALARY, format!("Salary must be at most {}.", max_salary()));
          None
        }
        Err(_) => {
          violations.push(field::SALARY, "The Salary field must be a number.");
          None
        }
      },
    };

    let fields = NewContact {
      name:          self.name.trim().to_owned(),
      date_of_birth: date_of_birth.unwrap_or(NaiveDate::MIN),
      married:       self.is_married(),
      phone:         self.phone.trim().to_owned(),
      salary:        salary.unwrap_or(Decimal::ZERO),
    };

    // Placeholders above never trip a rule, so nothing is reported twice.
    if let Err(more) = validate(&fields) {
      violations.extend(more);
    }

    match violations.into_result() {
      Ok(()) => Ok(fields.with_id(id)),
      Err(v) => Err(v),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn form() -> ContactForm {
    ContactForm {
      id:            "4".into(),
      name:          " John Doe ".into(),
      date_of_birth: "1990-12-31".into(),
      married:       Some("true".into()),
      phone:         "+15551234".into(),
      salary:        "50000".into(),
    }
  }

  #[test]
  fn valid_form_converts() {
    let f = form();
    let c = f.to_contact(f.contact_id().unwrap()).unwrap();
    assert_eq!(c.id, 4);
    assert_eq!(c.name, "John Doe");
    assert_eq!(c.date_of_birth, NaiveDate::from_ymd_opt(1990, 12, 31).unwrap());
    assert!(c.married);
    assert_eq!(c.salary.to_string(), "50000.00");
  }

  #[test]
  fn unchecked_box_means_not_married() {
    let mut f = form();
    f.married = None;
    assert!(!f.to_contact(4).unwrap().married);
  }

  #[test]
  fn every_problem_is_reported() {
    let f = ContactForm {
      id:            "4".into(),
      name:          String::new(),
      date_of_birth: "31.12.1990".into(),
      married:       None,
      phone:         "not a phone".into(),
      salary:        "-3".into(),
    };
    let v = f.to_contact(4).unwrap_err();
    assert_eq!(v.len(), 4);
    for name in [field::NAME, field::DATE_OF_BIRTH, field::PHONE, field::SALARY] {
      assert!(v.message_for(name).is_some(), "no message for {name}");
    }
  }

  #[test]
  fn missing_date_and_salary_are_required() {
    let mut f = form();
    f.date_of_birth = " ".into();
    f.salary = String::new();
    let v = f.to_contact(4).unwrap_err();
    assert_eq!(v.message_for(field::DATE_OF_BIRTH), Some("The Date of Birth field is required."));
    assert_eq!(v.message_for(field::SALARY), Some("The Salary field is required."));
  }

  #[test]
  fn oversized_salary_gets_a_range_message() {
    let mut f = form();
    f.salary = "10000000000000000".into();
    let v = f.to_contact(4).unwrap_err();
    assert_eq!(
      v.message_for(field::SALARY),
      Some("Salary must be at most 9999999999999999.99.")
    );
  }

  #[test]
  fn round_trips_through_a_stored_contact() {
    let c = form().to_contact(4).unwrap();
    let again = ContactForm::from_contact(&c).to_contact(4).unwrap();
    assert_eq!(again, c);
  }

  #[test]
  fn non_numeric_id_is_none() {
    let mut f = form();
    f.id = "abc".into();
    assert_eq!(f.contact_id(), None);
  }
}
