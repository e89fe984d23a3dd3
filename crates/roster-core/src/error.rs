//! Error types for `roster-core`.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("not a decimal number: {0:?}")]
  InvalidDecimal(String),

  #[error("salary must not be negative: {0}")]
  NegativeSalary(Decimal),

  #[error("salary is out of range: {0}")]
  SalaryOutOfRange(Decimal),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
